//! Bootstrap tooltip activation.
//!
//! Templates mark tooltip triggers with `data-bs-toggle="tooltip"`. When the
//! page loaded Bootstrap, each trigger gets a `bootstrap.Tooltip`; without it
//! nothing happens.

use feedback::markup::TOOLTIP_SELECTOR;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::error::DomError;

/// Construct a tooltip for every trigger. Returns how many were activated.
///
/// # Errors
///
/// Returns `Err` if the trigger query or a tooltip constructor throws.
pub fn activate(window: &Window, document: &Document) -> Result<u32, DomError> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        log::debug!("bootstrap not loaded; skipping tooltips");
        return Ok(0);
    }
    let ctor = Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))?;
    let Some(ctor) = ctor.dyn_ref::<Function>() else {
        log::debug!("bootstrap.Tooltip missing; skipping tooltips");
        return Ok(0);
    };

    let triggers = document.query_selector_all(TOOLTIP_SELECTOR)?;
    let mut activated = 0;
    for i in 0..triggers.length() {
        if let Some(trigger) = triggers.item(i) {
            Reflect::construct(ctor, &Array::of1(&trigger))?;
            activated += 1;
        }
    }
    Ok(activated)
}
