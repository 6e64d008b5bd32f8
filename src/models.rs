//! Frontend Models
//!
//! Data structures matching the recommendation backend's payloads.

use serde::{Deserialize, Serialize};

/// Product card data (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// The backend sends either a number or a pre-formatted string
    #[serde(default)]
    pub price: serde_json::Value,
    pub image: String,
}

impl Product {
    /// Price as shown on the card, whichever form the backend sent
    pub fn price_label(&self) -> String {
        match &self.price {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// `{items: [...]}` envelope used by recommendations/search/similar.
/// A missing or malformed list coerces to empty rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Product>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Response to a posted swipe; follow-on recommendations are optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwipeResponse {
    #[serde(default)]
    pub recommendations: Vec<Product>,
}

/// Body of the swipe decision POST
#[derive(Debug, Serialize)]
pub struct SwipeBody<'a> {
    pub action: &'a str,
    pub user_id: &'a str,
    pub item_id: u32,
    pub image: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_handles_both_forms() {
        let with_string: Product =
            serde_json::from_str(r#"{"id":1,"name":"Boots","price":"$49.99","image":"http://x/1.jpg"}"#).unwrap();
        assert_eq!(with_string.price_label(), "$49.99");

        let with_number: Product =
            serde_json::from_str(r#"{"id":2,"name":"Hat","price":12.5,"image":"http://x/2.jpg"}"#).unwrap();
        assert_eq!(with_number.price_label(), "12.5");
    }

    #[test]
    fn missing_list_fields_coerce_to_empty() {
        let items: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(items.items.is_empty());

        let swipe: SwipeResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(swipe.recommendations.is_empty());

        let cats: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(cats.categories.is_empty());
    }
}
