//! Wasm entry point and the globals templates call from inline handlers.
//!
//! `copyToClipboard(text)` and `showAlert(message, severity?)` are exported
//! under their script names so existing `onclick` attributes keep working.

use std::cell::RefCell;
use std::rc::Rc;

use feedback::severity::Severity;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::error::DomError;
use crate::page::{self, PageServices};
use crate::{config, logging};

thread_local! {
    static PAGE: RefCell<Option<Rc<PageServices>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    if let Err(e) = boot() {
        log::error!("ui feedback failed to start: {e}");
    }
}

fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    if document.ready_state() != "loading" {
        return install(&window, &document);
    }
    let target = document.clone();
    let handler = Closure::once_into_js(move || {
        if let Err(e) = install(&window, &document) {
            log::error!("ui feedback failed to start: {e}");
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", handler.unchecked_ref())?;
    Ok(())
}

fn install(window: &Window, document: &Document) -> Result<(), DomError> {
    let config = config::read(document);
    logging::apply_level(logging::level_for(&config));
    let services = Rc::new(PageServices::new(window, document, &config));
    // The globals work even if some listener below fails to attach.
    PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&services)));
    page::install(window, document, &services)
}

fn with_page(name: &str, f: impl FnOnce(&PageServices)) {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match page {
        Some(page) => f(&page),
        None => log::warn!("{name} called before the page finished loading"),
    }
}

/// Copy `text` and report the outcome as a banner.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    with_page("copyToClipboard", |page| page.clipboard.copy(text));
}

/// Show a banner. Unknown or missing severities fall back to `info`.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: String, severity: Option<String>) {
    let severity = Severity::parse_lenient(severity.as_deref());
    with_page("showAlert", |page| {
        page.alerts.show(&message, severity);
    });
}
