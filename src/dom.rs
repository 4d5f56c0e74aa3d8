use folio_core::Rect;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, HtmlElement, Window};

use crate::error::SiteError;

pub(crate) fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingDocument)
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

pub(crate) fn viewport_width() -> Result<f64, SiteError> {
    let width = window()?.inner_width()?;
    width
        .as_f64()
        .ok_or_else(|| SiteError::Dom("innerWidth is not a number".to_string()))
}

pub(crate) fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

pub(crate) fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, SiteError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::Dom(format!("<{tag}> is not an HTML element")))
}

pub(crate) fn dom_rect(rect: &DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

pub(crate) fn clear_children(element: &Element) {
    while let Some(child) = element.first_child() {
        if element.remove_child(&child).is_err() {
            break;
        }
    }
}
