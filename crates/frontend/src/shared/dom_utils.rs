//! Small helpers over the page document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .document()
        .ok_or_else(|| "no document".to_string())
}

/// Element by id, `None` when the page does not have it.
pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn into_html_element(element: Element) -> Result<HtmlElement, String> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|e| format!("not an html element: {e:?}"))
}

/// Write `text` into the element with `id`; missing elements are skipped.
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = element_by_id(id) {
        element.set_text_content(Some(text));
    }
}
