//! Errors raised while reading or mutating the document.
//!
//! ERROR HANDLING
//! ==============
//! No `DomError` crosses an event-handler boundary. Handlers log it with
//! `log::warn!` and leave the page as it is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element is not a {0}")]
    UnexpectedElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort readable text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
