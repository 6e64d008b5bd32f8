//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The stack
//! helpers below are the only write paths into the deck, so every
//! mutation goes through the merge rules in `deck`.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::deck;
use crate::favorites;
use crate::models::Product;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The swipe deck, front card first
    pub stack: Vec<Product>,
    /// Category bar entries
    pub categories: Vec<String>,
    /// Side list filled by the explicit search action
    pub search_results: Vec<Product>,
    /// "More recommendations" carousel filled by similar-item fetches
    pub similar_items: Vec<Product>,
    /// Favorited product ids, persisted across sessions
    pub favorites: HashSet<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            favorites: favorites::load(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Stack Helper Functions
// ========================

/// Install a fresh stack (initial load, filter or category change)
pub fn store_replace_stack(store: &AppStore, items: Vec<Product>) {
    *store.stack().write() = items;
}

/// Clear the deck immediately so stale cards never linger while a new
/// fetch is in flight
pub fn store_clear_stack(store: &AppStore) {
    store.stack().write().clear();
}

/// Current front card, if any
pub fn store_front(store: &AppStore) -> Option<Product> {
    store.stack().read_untracked().first().cloned()
}

pub fn store_remove_top(store: &AppStore) {
    deck::remove_top(&mut store.stack().write());
}

/// Merge dispatcher follow-ons against the stack as it stands now
pub fn store_prepend_and_trim_top(store: &AppStore, new_items: Vec<Product>) {
    deck::prepend_and_trim_top(&mut store.stack().write(), new_items);
}

/// Jump-to-similar: put the selected item in front, no trim
pub fn store_push_front(store: &AppStore, item: Product) {
    deck::push_front(&mut store.stack().write(), item);
}

// ========================
// Favorites Helpers
// ========================

/// Toggle a favorite and persist the new set in the same step
pub fn store_toggle_favorite(store: &AppStore, id: u32) {
    let binding = store.favorites();
    let mut set = binding.write();
    favorites::toggle(&mut set, id);
    favorites::save(&set);
}

pub fn store_is_favorite(store: &AppStore, id: u32) -> bool {
    store.favorites().read().contains(&id)
}
