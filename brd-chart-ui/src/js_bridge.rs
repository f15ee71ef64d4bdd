//! Typed wrappers around the ECharts glue.
//!
//! ECharts itself is loaded by the host page (`Dioxus.toml` resource). The
//! glue in `assets/js/rainfall-charts.js` is embedded at compile time,
//! evaluated once at global scope, and reached through `window.brd*`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

static RAINFALL_CHARTS_JS: &str = include_str!("../assets/js/rainfall-charts.js");

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = brdSetOption)]
    fn brd_set_option(element: &web_sys::Element, option_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = brdResize)]
    fn brd_resize(element: &web_sys::Element) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = brdDispose)]
    fn brd_dispose(element: &web_sys::Element) -> Result<(), JsValue>;
}

/// Best-effort message for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn global_flag(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Whether the host page has loaded ECharts.
pub fn echarts_loaded() -> bool {
    global_flag("echarts")
}

/// Evaluate the chart glue once. Safe to call repeatedly.
pub fn init_charts() -> Result<(), String> {
    if global_flag("__brdChartsReady") {
        return Ok(());
    }
    if !echarts_loaded() {
        return Err("ECharts is not loaded on this page".to_string());
    }
    js_sys::eval(RAINFALL_CHARTS_JS)
        .map(|_| log::debug!("Rainfall chart glue initialized"))
        .map_err(|e| js_error_text(&e))
}

/// `setOption` on the chart bound to `element`, creating it on first use.
pub fn set_option(element: &web_sys::Element, option_json: &str) -> Result<(), String> {
    brd_set_option(element, option_json).map_err(|e| js_error_text(&e))
}

pub fn resize(element: &web_sys::Element) {
    if let Err(e) = brd_resize(element) {
        log::warn!("Chart resize failed: {}", js_error_text(&e));
    }
}

pub fn dispose(element: &web_sys::Element) {
    if let Err(e) = brd_dispose(element) {
        log::warn!("Chart dispose failed: {}", js_error_text(&e));
    }
}
