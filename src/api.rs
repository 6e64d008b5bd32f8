//! Relay API Bindings
//!
//! Async wrappers over the relay endpoints. Every call degrades to an
//! empty result on transport failure, error status, or malformed JSON;
//! nothing in here raises into the gesture path.

use leptos_swipe::SwipeDirection;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::filters::{build_query, FilterState};
use crate::models::{CategoriesResponse, ItemsResponse, Product, SwipeBody, SwipeResponse};

/// How many similar items to ask for on a jump-to-similar
pub const SIMILAR_K: u32 = 8;

fn get_request(url: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    Request::new_with_str_and_init(url, &opts)
}

fn post_request(url: &str, json_body: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(json_body));
    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("content-type", "application/json")?;
    Ok(request)
}

async fn fetch_json<T>(request: Request) -> Result<T, JsValue>
where
    T: DeserializeOwned,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("status {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// GET returning the `{items}` envelope, coerced to empty on any failure
async fn get_items(url: &str) -> Vec<Product> {
    let result = match get_request(url) {
        Ok(request) => fetch_json::<ItemsResponse>(request).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(resp) => resp.items,
        Err(e) => {
            web_sys::console::warn_1(&format!("GET {} failed: {:?}", url, e).into());
            Vec::new()
        }
    }
}

/// Fetch the deck, keyed by the serialized filter set (see
/// `FilterState::recommendations_query`)
pub async fn fetch_recommendations(query: &str) -> Vec<Product> {
    let url = format!("/api/recommendations{query}");
    get_items(&url).await
}

pub async fn fetch_categories() -> Vec<String> {
    let result = match get_request("/api/categories") {
        Ok(request) => fetch_json::<CategoriesResponse>(request).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(resp) => resp.categories,
        Err(e) => {
            web_sys::console::warn_1(&format!("GET /api/categories failed: {:?}", e).into());
            Vec::new()
        }
    }
}

/// Explicit search action; results go to the side list, not the stack
pub async fn search_products(filters: &FilterState) -> Vec<Product> {
    let url = format!("/api/search{}", filters.search_query_string());
    get_items(&url).await
}

pub async fn fetch_similar(product_id: u32) -> Vec<Product> {
    let id = product_id.to_string();
    let k = SIMILAR_K.to_string();
    let url = format!("/api/similar{}", build_query(&[("product_id", &id), ("k", &k)]));
    get_items(&url).await
}

/// Notify the backend of a committed decision. Returns the follow-on
/// recommendations, or empty when there are none or the call failed -
/// the caller has already removed the card either way.
pub async fn send_swipe(direction: SwipeDirection, user_id: &str, item: &Product) -> Vec<Product> {
    let body = SwipeBody {
        action: direction.as_str(),
        user_id,
        item_id: item.id,
        image: &item.image,
    };
    let json = match serde_json::to_string(&body) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };

    let result = match post_request("/api/swipe", &json) {
        Ok(request) => fetch_json::<SwipeResponse>(request).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(resp) => resp.recommendations,
        Err(e) => {
            web_sys::console::warn_1(&format!("POST /api/swipe failed: {:?}", e).into());
            Vec::new()
        }
    }
}
