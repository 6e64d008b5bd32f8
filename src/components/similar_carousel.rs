//! More-Recommendations Carousel
//!
//! Strip of similar items from the last jump-to-similar fetch.
//! Selecting one goes through the same handler as a search result, so
//! both call sites share a single stack operation.

use leptos::prelude::*;

use crate::models::Product;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SimilarCarousel(#[prop(into)] on_select: Callback<Product>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.similar_items().read().is_empty()>
            <div class="similar-carousel">
                <h2>"More like this"</h2>
                <div class="carousel-strip">
                    <For
                        each=move || store.similar_items().get()
                        key=|product| product.id
                        children=move |product| {
                            let item = product.clone();
                            view! {
                                <button
                                    class="carousel-item"
                                    on:click=move |_| on_select.run(item.clone())
                                >
                                    <img src=product.image.clone() alt=product.name.clone() />
                                    <span>{product.name.clone()}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
