//! Filter & Query State
//!
//! Holds the filter fields and serializes them into the query strings
//! that key the backend fetches. Only non-empty fields are included,
//! in a fixed order, so equal filter sets always produce equal keys.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside query-string values
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Current filter and search-query state, all fields optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub color: String,
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub search_query: String,
}

impl FilterState {
    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Key for the recommendations fetch. Field order:
    /// user_id, category, color, location, min_price, max_price.
    /// Empty when no field is set (beyond the user id).
    pub fn recommendations_query(&self, user_id: &str) -> String {
        build_query(&[
            ("user_id", user_id),
            ("category", &self.category),
            ("color", &self.color),
            ("location", &self.location),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ])
    }

    /// Key for the explicit search action: q, color, location
    pub fn search_query_string(&self) -> String {
        build_query(&[
            ("q", &self.search_query),
            ("color", &self.color),
            ("location", &self.location),
        ])
    }
}

/// Serialize `(key, value)` pairs into `?k=v&...`, skipping empty values.
/// Returns the empty string when nothing is set.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    let mut qs = String::new();
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        qs.push(if qs.is_empty() { '?' } else { '&' });
        qs.push_str(key);
        qs.push('=');
        qs.push_str(&utf8_percent_encode(value, QUERY_VALUE).to_string());
    }
    qs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_empty_key() {
        let filters = FilterState::default();
        assert_eq!(filters.recommendations_query(""), "");
    }

    #[test]
    fn only_non_empty_fields_in_order() {
        let filters = FilterState {
            color: "red".into(),
            max_price: "100".into(),
            ..Default::default()
        };
        assert_eq!(
            filters.recommendations_query("u1"),
            "?user_id=u1&color=red&max_price=100"
        );
    }

    #[test]
    fn full_filter_set_order() {
        let filters = FilterState {
            category: "shoes".into(),
            color: "blue".into(),
            location: "NYC".into(),
            min_price: "10".into(),
            max_price: "100".into(),
            search_query: String::new(),
        };
        assert_eq!(
            filters.recommendations_query("anonymous"),
            "?user_id=anonymous&category=shoes&color=blue&location=NYC&min_price=10&max_price=100"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let filters = FilterState {
            location: "new york".into(),
            ..Default::default()
        };
        assert_eq!(filters.recommendations_query(""), "?location=new%20york");
    }

    #[test]
    fn search_key_uses_q_color_location() {
        let filters = FilterState {
            category: "shoes".into(),
            color: "red".into(),
            search_query: "leather boots".into(),
            ..Default::default()
        };
        assert_eq!(filters.search_query_string(), "?q=leather%20boots&color=red");
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut filters = FilterState {
            category: "shoes".into(),
            search_query: "boots".into(),
            ..Default::default()
        };
        filters.clear();
        assert_eq!(filters, FilterState::default());
    }
}
