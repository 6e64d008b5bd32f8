//! Deck Component
//!
//! Renders the visible window of the stack (front three cards), the
//! empty-deck placeholder, and the ghost card flying off after a
//! committed decision. The ghost is pure presentation: by the time it
//! renders, the real card is already out of the stack and the decision
//! is already dispatched.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_swipe::{fling_transform, viewport_width, SwipeDirection};

use crate::components::ProductCard;
use crate::deck::VISIBLE_WINDOW;
use crate::models::Product;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DeckView(exiting: ReadSignal<Option<(Product, SwipeDirection)>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="deck">
            {move || {
                exiting
                    .get()
                    .map(|(product, direction)| view! { <ExitingCard product direction /> })
            }}
            {move || {
                let stack = store.stack().get();
                if stack.is_empty() {
                    view! { <p class="deck-empty">"Loading or no more items"</p> }.into_any()
                } else {
                    stack
                        .into_iter()
                        .take(VISIBLE_WINDOW)
                        .enumerate()
                        .map(|(depth, product)| {
                            let is_front = depth == 0;
                            view! { <ProductCard product is_front depth /> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// Ghost of a committed card, flung off-screen by viewport width in the
/// decided direction
#[component]
fn ExitingCard(product: Product, direction: SwipeDirection) -> impl IntoView {
    let (flung, set_flung) = signal(false);
    // give the transition a starting frame before the off-screen transform
    Timeout::new(20, move || set_flung.set(true)).forget();

    let style = move || {
        if flung.get() {
            format!(
                "transform: {}; transition: transform 300ms ease-out;",
                fling_transform(direction, 0.0, viewport_width())
            )
        } else {
            "transform: translate(0px, 0px);".to_string()
        }
    };

    view! {
        <div class="card exiting" style=style>
            <img src=product.image.clone() alt=product.name.clone() draggable="false" />
            <div class="meta">
                <h3>{product.name.clone()}</h3>
                <p class="price">{product.price_label()}</p>
            </div>
        </div>
    }
}
