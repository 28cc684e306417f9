//! WASM bindings for browser-based font shorthand parsing.
//!
//! This module exposes the parser to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::to_css::ToCss;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Parse a `font` shorthand.
///
/// Returns the longhands as a JSON object keyed by CSS property name.
#[wasm_bindgen]
pub fn parse_font(input: &str) -> Result<String, JsValue> {
    let font = crate::parse(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&font).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rewrite a `font` shorthand in canonical order.
#[wasm_bindgen]
pub fn normalize_font(input: &str) -> Result<String, JsValue> {
    let font = crate::parse(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(font.to_css_string())
}
