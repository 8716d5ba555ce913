//! Structured error types for formfield.
//!
//! The masking engine itself never fails — malformed input is normalized
//! away (see `mask`). Errors exist for the boundaries: content-configuration
//! validation, deserialization at the JS boundary, and DOM wiring.

/// All errors that can occur while configuring or mounting a field.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// Invalid content configuration (e.g. separator clash).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed content object received from the host.
    #[error("Content object: {0}")]
    Content(String),

    /// DOM element creation or attachment failure.
    #[error("DOM: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FieldError>;

impl From<String> for FieldError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for FieldError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FieldError> for wasm_bindgen::JsValue {
    fn from(e: FieldError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
