//! Relay Handlers
//!
//! Each handler rebuilds the backend query from the non-empty incoming
//! fields (order preserved), forwards the request, and relays the
//! backend's status and body untouched.

use std::sync::Arc;

use axum::{
    extract::{Query, State as AxumState},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{error::RelayError, state::State};

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsQuery {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimilarQuery {
    pub product_id: Option<String>,
    pub image_url: Option<String>,
    pub k: Option<String>,
}

/// Keep only the pairs that carry a value; field order is preserved
fn present_pairs<'a>(pairs: &[(&'a str, &'a Option<String>)]) -> Vec<(&'a str, &'a str)> {
    pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (*key, v))
        })
        .collect()
}

/// Relay the backend response as-is: same status, same JSON body
async fn relay_response(resp: reqwest::Response) -> Result<Response, RelayError> {
    let status =
        StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = resp.bytes().await?;
    Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
}

async fn proxy_get(
    state: &State,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Response, RelayError> {
    let url = format!("{}/{}", state.config.backend_url, path);
    let resp = state.client.get(&url).query(query).send().await?;
    relay_response(resp).await
}

pub async fn recommendations_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<RecommendationsQuery>,
) -> Result<Response, RelayError> {
    let query = present_pairs(&[
        ("user_id", &params.user_id),
        ("category", &params.category),
        ("color", &params.color),
        ("location", &params.location),
        ("min_price", &params.min_price),
        ("max_price", &params.max_price),
    ]);
    proxy_get(&state, "recommendations", &query).await
}

pub async fn categories_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Response, RelayError> {
    proxy_get(&state, "categories", &[]).await
}

pub async fn search_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, RelayError> {
    let query = present_pairs(&[
        ("q", &params.q),
        ("color", &params.color),
        ("location", &params.location),
        ("min_price", &params.min_price),
        ("max_price", &params.max_price),
    ]);
    proxy_get(&state, "search", &query).await
}

pub async fn similar_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<SimilarQuery>,
) -> Result<Response, RelayError> {
    let query = present_pairs(&[
        ("product_id", &params.product_id),
        ("image_url", &params.image_url),
        ("k", &params.k),
    ]);
    proxy_get(&state, "similar", &query).await
}

pub async fn swipe_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, RelayError> {
    let url = format!("{}/swipe", state.config.backend_url);
    let resp = state.client.post(&url).json(&body).send().await?;
    relay_response(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_pairs_skips_missing_and_empty() {
        let category = None;
        let color = Some("red".to_string());
        let location = Some(String::new());
        let pairs = present_pairs(&[
            ("category", &category),
            ("color", &color),
            ("location", &location),
        ]);
        assert_eq!(pairs, vec![("color", "red")]);
    }

    #[test]
    fn present_pairs_preserves_order() {
        let a = Some("1".to_string());
        let b = Some("2".to_string());
        let c = Some("3".to_string());
        let pairs = present_pairs(&[("min_price", &a), ("max_price", &b), ("user_id", &c)]);
        assert_eq!(
            pairs,
            vec![("min_price", "1"), ("max_price", "2"), ("user_id", "3")]
        );
    }

    #[test]
    fn all_empty_yields_no_pairs() {
        let none = None;
        let pairs = present_pairs(&[("q", &none), ("color", &none)]);
        assert!(pairs.is_empty());
    }
}
