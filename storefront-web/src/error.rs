use thiserror::Error;
use wasm_bindgen_x::JsValue;

/// Errors binding a component to the page
#[derive(Error, Debug)]
pub enum BindError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Required element not found: {0}")]
    MissingElement(&'static str),
    #[error("Element {selector} is not {expected}")]
    UnexpectedElement {
        selector: &'static str,
        expected: &'static str,
    },
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Dom(format!("{value:?}"))
    }
}
