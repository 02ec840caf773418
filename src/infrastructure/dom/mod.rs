pub mod alerts;
pub mod forms;
pub mod scroll;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::domain::errors::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

/// Current value of a form field. Inputs, textareas and selects each
/// expose `value` through a different interface, so probe all three.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// Inline border-color override; non-HTML elements (SVG) are skipped
pub fn set_border_color(element: &Element, color: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("border-color", color);
    }
}
