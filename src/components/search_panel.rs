//! Search Panel Component
//!
//! Explicit search box with a side list of results, independent of the
//! swipe stack. Picking a result jumps the deck to that item via the
//! shared jump-to-similar handler.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::filters::FilterState;
use crate::models::Product;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchPanel(
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
    #[prop(into)] on_select: Callback<Product>,
) -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = filters.get_untracked();
        if current.search_query.is_empty() {
            return;
        }
        spawn_local(async move {
            let results = api::search_products(&current).await;
            store.search_results().set(results);
        });
    };

    view! {
        <div class="search-panel">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="search products"
                    prop:value=move || filters.with(|f| f.search_query.clone())
                    on:input=move |ev| {
                        set_filters.update(|f| f.search_query = event_target_value(&ev))
                    }
                />
                <button type="submit">"Search"</button>
            </form>
            <div class="search-results">
                <For
                    each=move || store.search_results().get()
                    key=|product| product.id
                    children=move |product| {
                        let item = product.clone();
                        view! {
                            <button class="search-result" on:click=move |_| on_select.run(item.clone())>
                                <img src=product.image.clone() alt=product.name.clone() />
                                <span>{product.name.clone()}</span>
                                <span class="price">{product.price_label()}</span>
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
