//! Browser-side smoke tests for the wasm exports.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use formfield::{extract_value, format_value, version};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn format_value_commits_with_default_config() {
    let config = JsValue::from(js_sys::Object::new());
    let out = format_value("1234.5", config, true).unwrap();
    assert_eq!(out, "$1,234.50");
}

#[wasm_bindgen_test]
fn format_value_typing_keeps_partial_entry() {
    let config = JsValue::from(js_sys::Object::new());
    let out = format_value("12.", config, false).unwrap();
    assert_eq!(out, "12.");
}

#[wasm_bindgen_test]
fn extract_value_round_trips() {
    let config = JsValue::from(js_sys::Object::new());
    let out = extract_value("$1,234.50", config).unwrap();
    assert_eq!(out.as_f64(), Some(1234.5));
}

#[wasm_bindgen_test]
fn extract_value_empty_is_null() {
    let config = JsValue::from(js_sys::Object::new());
    let out = extract_value("", config).unwrap();
    assert!(out.is_null());
}

#[wasm_bindgen_test]
fn version_matches_manifest() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
