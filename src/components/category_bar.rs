//! Category Bar Component
//!
//! Button row for the backend's categories plus an "All" reset.
//! Selecting a category is a filter change like any other: the deck
//! clears immediately and the fetch re-keys.

use leptos::prelude::*;

use crate::filters::FilterState;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryBar(
    filters: ReadSignal<FilterState>,
    set_filters: WriteSignal<FilterState>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="category-bar">
            <button
                class=move || {
                    if filters.with(|f| f.category.is_empty()) { "cat active" } else { "cat" }
                }
                on:click=move |_| set_filters.update(|f| f.category.clear())
            >
                "All"
            </button>
            <For
                each=move || store.categories().get()
                key=|category| category.clone()
                children=move |category| {
                    let name = category.clone();
                    let selected = {
                        let name = name.clone();
                        move || filters.with(|f| f.category == name)
                    };
                    view! {
                        <button
                            class=move || if selected() { "cat active" } else { "cat" }
                            on:click=move |_| {
                                let name = name.clone();
                                set_filters.update(|f| f.category = name);
                            }
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}
