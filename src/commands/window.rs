//! Window Commands
//!
//! Print dialog, current location and document metadata.

use super::js_error_text;

/// Open the browser's print/export dialog
pub fn print_page() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window.print().map_err(|e| js_error_text(&e))
}

/// `location.pathname`, "/" when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `content` of `<meta name="...">` in the page head
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
