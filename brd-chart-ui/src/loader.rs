//! Browser fetch of the two static documents.
//!
//! Both requests are issued together and joined with `Promise.all`; the
//! bodies are read the same way. Any failure aborts the whole load.

use crate::js_bridge::js_error_text;
use brd_data::{Dataset, Error, Result};
use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn fetch_error(url: &str, value: &JsValue) -> Error {
    Error::Fetch {
        url: url.to_string(),
        reason: js_error_text(value),
    }
}

/// Fetch and parse both documents; resolves only when both succeed.
pub async fn load_dataset(rainfall_url: &str, summary_url: &str) -> Result<Dataset> {
    let urls = [rainfall_url, summary_url];
    let window = web_sys::window().ok_or_else(|| Error::Fetch {
        url: rainfall_url.to_string(),
        reason: "no window".to_string(),
    })?;

    log::info!("Fetching {} and {}", rainfall_url, summary_url);
    let requests = Array::new();
    for url in urls {
        requests.push(&window.fetch_with_str(url));
    }
    let responses = JsFuture::from(Promise::all(&requests))
        .await
        .map_err(|e| fetch_error(&urls.join(", "), &e))?;

    let bodies = Array::new();
    for (value, url) in Array::from(&responses).iter().zip(urls) {
        let response: Response = value.dyn_into().map_err(|v| fetch_error(url, &v))?;
        if !response.ok() {
            return Err(Error::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        let body: Promise = response.text().map_err(|e| fetch_error(url, &e))?;
        bodies.push(&body);
    }
    let texts = JsFuture::from(Promise::all(&bodies))
        .await
        .map_err(|e| fetch_error(&urls.join(", "), &e))?;

    let texts = Array::from(&texts);
    let mut documents = Vec::with_capacity(urls.len());
    for (value, url) in texts.iter().zip(urls) {
        documents.push(value.as_string().ok_or_else(|| Error::Fetch {
            url: url.to_string(),
            reason: "response body is not text".to_string(),
        })?);
    }

    Dataset::from_documents(&documents[0], &documents[1])
}
