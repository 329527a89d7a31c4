use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{FrontendError, Result};

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FrontendError::Dom("no document".to_string()))
}

pub fn set_displayed(element: &Element, displayed: bool) -> Result<()> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| FrontendError::Dom(format!("#{} is not an HTML element", element.id())))?;
    if displayed {
        element.style().remove_property("display")?;
    } else {
        element.style().set_property("display", "none")?;
    }
    Ok(())
}

pub fn hide_by_id(id: &str) -> Result<()> {
    match document()?.get_element_by_id(id) {
        Some(element) => set_displayed(&element, false),
        None => Ok(()),
    }
}
