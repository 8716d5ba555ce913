//! formfield - form input widget for the web
//!
//! Renders an HTML `<input>` with editor-configurable behavior and performs
//! client-side value masking via WebAssembly:
//! - Currency/decimal display masking (symbol, thousands grouping, fixed
//!   decimal places)
//! - Caret preservation while typing through live re-formats
//! - Focus/blur commit lifecycle with host change events
//! - Content-configuration objects crossing the JS boundary as plain data
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { FormField } from 'formfield';
//! await init();
//! const field = new FormField(container, {
//!     type: 'currency',
//!     currency: { symbol: '$', decimalPlaces: 2 },
//! });
//! field.set_event_callback((name, value) => console.log(name, value));
//! ```

// Core logic modules (architecture-independent)
pub mod caret;
pub mod config;
pub mod decimal;
pub mod error;
pub mod mask;
pub mod provider;
pub mod value;

// Widget module (DOM wiring under wasm32)
pub mod field;

use wasm_bindgen::prelude::*;

// Re-export the main widget struct
pub use field::FormField;

pub use config::{ContentConfig, FormatConfig, InputType, Precision, SymbolPosition};
pub use error::{FieldError, Result};
pub use value::RawValue;

/// Format free-typed text with the given currency configuration.
///
/// `committed` selects blur-style formatting (zero-padded fraction, symbol
/// applied); otherwise live-typing formatting is used.
///
/// # Errors
/// Returns an error if the configuration object is malformed or its
/// separators clash.
#[wasm_bindgen]
pub fn format_value(input: &str, config: JsValue, committed: bool) -> std::result::Result<String, JsValue> {
    let config: FormatConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mode = if committed {
        mask::MaskMode::Committed
    } else {
        mask::MaskMode::Typing
    };
    Ok(mask::format_currency(input, &config, mode))
}

/// Extract the numeric value from a formatted display string.
///
/// Returns `null` (not NaN) for empty or digitless input.
///
/// # Errors
/// Returns an error if the configuration object is malformed or its
/// separators clash.
#[wasm_bindgen]
pub fn extract_value(display: &str, config: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config: FormatConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(match mask::extract_numeric_value(display, &config) {
        Some(n) => JsValue::from_f64(n),
        None => JsValue::NULL,
    })
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
