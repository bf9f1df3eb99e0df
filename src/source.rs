//! Item Source
//!
//! One-shot fetch of the item pool from the remote endpoint.

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{FetchError, ItemPool};

/// Endpoint returning a JSON array of food names
pub const ITEMS_URL: &str = "https://api.frontendeval.com/fake/food/mi";

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET the item pool. No retry, no timeout.
pub async fn fetch_items() -> Result<ItemPool, FetchError> {
    web_sys::console::log_1(&format!("[SOURCE] Fetching items from {}", ITEMS_URL).into());

    let payload = fetch_json(ITEMS_URL).await?;
    let pool = ItemPool::from_payload(payload)?;

    web_sys::console::log_1(&format!("[SOURCE] Loaded {} items", pool.len()).into());
    Ok(pool)
}

async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(js_error(e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(js_error(e)))?;

    let body = response.json().map_err(|e| FetchError::Decode(js_error(e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Decode(js_error(e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}
