use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the helix into a page. Drawing itself cannot fail.
#[derive(Error, Debug)]
pub enum HelixError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("2d canvas context unavailable")]
    ContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for HelixError {
    fn from(value: JsValue) -> Self {
        HelixError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<HelixError> for JsValue {
    fn from(err: HelixError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
