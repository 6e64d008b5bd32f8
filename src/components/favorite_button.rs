//! Favorite Toggle Button

use leptos::prelude::*;

use crate::store::{store_is_favorite, store_toggle_favorite, use_app_store};

/// Star button toggling an id in the persisted favorites set.
/// Independent of stack order; works on any rendered card.
#[component]
pub fn FavoriteButton(id: u32) -> impl IntoView {
    let store = use_app_store();
    let active = move || store_is_favorite(&store, id);

    view! {
        <button
            class=move || if active() { "favorite-btn active" } else { "favorite-btn" }
            aria-label="favorite"
            on:click=move |_| store_toggle_favorite(&store, id)
        >
            {move || if active() { "\u{2605}" } else { "\u{2606}" }}
        </button>
    }
}
