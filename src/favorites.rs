//! Favorites Persistence
//!
//! A set of product ids kept independently of stack order, written to
//! localStorage on every mutation. Storage failures fall back to an
//! empty set and are never surfaced.

use std::collections::HashSet;

const STORAGE_KEY: &str = "swipe_deck_favorites";

/// Toggle membership; returns true when the id was added
pub fn toggle(favorites: &mut HashSet<u32>, id: u32) -> bool {
    if favorites.remove(&id) {
        false
    } else {
        favorites.insert(id);
        true
    }
}

/// Stable persisted form: sorted JSON array of ids
pub fn serialize(favorites: &HashSet<u32>) -> String {
    let mut ids: Vec<u32> = favorites.iter().copied().collect();
    ids.sort_unstable();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

/// Parse the persisted form; anything unreadable becomes the empty set
pub fn deserialize(json: &str) -> HashSet<u32> {
    serde_json::from_str::<Vec<u32>>(json)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted set at startup
pub fn load() -> HashSet<u32> {
    let Some(storage) = storage() else {
        return HashSet::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => deserialize(&json),
        _ => HashSet::new(),
    }
}

/// Persist after a mutation
pub fn save(favorites: &HashSet<u32>) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, &serialize(favorites));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        let mut favorites: HashSet<u32> = [1, 2].into_iter().collect();
        let before = favorites.clone();

        assert!(toggle(&mut favorites, 7));
        assert!(favorites.contains(&7));
        assert!(!toggle(&mut favorites, 7));
        assert_eq!(favorites, before);
    }

    #[test]
    fn persisted_form_round_trips() {
        let mut favorites = HashSet::new();
        toggle(&mut favorites, 3);
        toggle(&mut favorites, 1);
        let json = serialize(&favorites);
        assert_eq!(json, "[1,3]");
        assert_eq!(deserialize(&json), favorites);
    }

    #[test]
    fn corrupt_storage_becomes_empty_set() {
        assert!(deserialize("not json").is_empty());
        assert!(deserialize(r#"{"nope":1}"#).is_empty());
        assert!(deserialize("").is_empty());
    }
}
