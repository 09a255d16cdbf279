//! Browser Command Wrappers
//!
//! Bindings to the browser APIs the site needs, organized by concern.

mod apply;
mod files;
mod window;

use wasm_bindgen::{JsCast, JsValue};

// Re-export all public items
pub use apply::*;
pub use files::*;
pub use window::*;

/// Readable text for a rejected JS call
pub(crate) fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
