use crate::constants::{DIGITS_ID, HELP_OVERLAY_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_OVERLAY_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HELP_OVERLAY_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Replace the digit readout text; hidden when there is nothing to show.
pub fn set_digits(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(DIGITS_ID) {
        el.set_text_content(Some(text));
        let style = if text.is_empty() { "display:none" } else { "" };
        let _ = el.set_attribute("style", style);
    }
}
