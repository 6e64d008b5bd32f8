//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

const USER_ID_KEY: &str = "swipe_deck_user_id";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Forces the recommendations fetch to re-run even when the filter
    /// key is unchanged (clear-filters path) - read
    pub refetch_trigger: ReadSignal<u32>,
    /// Forces the recommendations fetch to re-run - write
    set_refetch_trigger: WriteSignal<u32>,
    /// Identity sent with decisions and recommendation fetches
    user_id: StoredValue<String>,
}

impl AppContext {
    pub fn new(refetch_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            refetch_trigger: refetch_trigger.0,
            set_refetch_trigger: refetch_trigger.1,
            user_id: StoredValue::new(load_user_id()),
        }
    }

    /// Trigger a refetch of recommendations
    pub fn refetch(&self) {
        self.set_refetch_trigger.update(|v| *v += 1);
    }

    pub fn user_id(&self) -> String {
        self.user_id.get_value()
    }
}

/// Stored user id, falling back to "anonymous"
fn load_user_id() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(USER_ID_KEY).ok().flatten())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}
