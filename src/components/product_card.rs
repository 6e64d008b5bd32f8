//! Product Card Component
//!
//! One card in the deck. Only the front card binds the pointerdown
//! handler, which is what makes it the single draggable element; the
//! cards behind it are inert and slightly offset.

use leptos::prelude::*;
use leptos_swipe::{drag_transform, make_on_pointerdown, SwipeSignals};

use crate::components::{FavoriteButton, SwipeOverlay};
use crate::models::Product;

#[component]
pub fn ProductCard(product: Product, is_front: bool, depth: usize) -> impl IntoView {
    let swipe = expect_context::<SwipeSignals>();
    let on_pointerdown = make_on_pointerdown(swipe);

    let style = move || {
        if is_front {
            if swipe.dragging_read.get() {
                let dx = swipe.dx_read.get();
                let dy = swipe.dy_read.get();
                format!("transform: {}; transition: transform 0s;", drag_transform(dx, dy))
            } else {
                // spring back to rest after a cancelled drag
                "transform: translate(0px, 0px); transition: transform 200ms ease-out;".to_string()
            }
        } else {
            format!(
                "transform: translateY({}px) scale({});",
                depth * 8,
                1.0 - depth as f64 * 0.03
            )
        }
    };

    view! {
        <div
            class="card"
            class:front=is_front
            style=style
            on:pointerdown=move |ev| {
                if is_front {
                    on_pointerdown(ev);
                }
            }
        >
            {is_front.then(|| view! { <SwipeOverlay /> })}
            <img src=product.image.clone() alt=product.name.clone() draggable="false" />
            <div class="meta">
                <h3>{product.name.clone()}</h3>
                <p class="price">{product.price_label()}</p>
                <FavoriteButton id=product.id />
            </div>
        </div>
    }
}
