//! Wires page elements to the feedback controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load. Every listener snapshots the elements it needs,
//! asks the controller what to do, and applies the answer through
//! [`crate::dom::apply_all`]. Listeners live as long as the page, so their
//! closures are intentionally leaked with `forget`.

use std::rc::Rc;

use feedback::config::FeedbackConfig;
use feedback::controller::FeedbackController;
use feedback::markup::{FILE_INPUT_SELECTOR, MESSAGE_TEXTAREA_SELECTOR, PASSWORD_INPUT_SELECTOR, STRENGTH_CLASS};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, PageTransitionEvent, Window};

use crate::dom::{self, CommandTarget, apply_all};
use crate::error::DomError;
use crate::services::alerts::AlertService;
use crate::services::clipboard::{BrowserClipboard, ClipboardService};
use crate::tooltips;

/// Everything the page handlers and markup globals share.
pub struct PageServices {
    pub controller: Rc<FeedbackController>,
    pub alerts: Rc<AlertService>,
    pub clipboard: ClipboardService,
}

impl PageServices {
    #[must_use]
    pub fn new(window: &Window, document: &Document, config: &FeedbackConfig) -> Self {
        let controller = Rc::new(FeedbackController::new(config));
        let alerts = Rc::new(AlertService::new(document.clone(), config.alert_lifetime_ms));
        let clipboard = ClipboardService::new(
            BrowserClipboard::new(window.clone(), document.clone()),
            Rc::clone(&controller),
            Rc::clone(&alerts),
        );
        Self { controller, alerts, clipboard }
    }
}

/// Attach every handler the page calls for.
///
/// # Errors
///
/// Returns `Err` if an element query or listener registration throws.
pub fn install(window: &Window, document: &Document, services: &Rc<PageServices>) -> Result<(), DomError> {
    let tooltips = tooltips::activate(window, document).unwrap_or_else(|e| {
        log::warn!("tooltip activation failed: {e}");
        0
    });
    let uploads = bind_file_inputs(document, services)?;
    let forms = bind_forms(document, services)?;
    let page_path = window.location().pathname()?;
    let counters = bind_counters(document, services, &page_path)?;
    let meter = bind_strength_meter(document, services)?;
    bind_bfcache_restore(window)?;
    log::info!(
        "ui feedback ready: tooltips={tooltips} uploads={uploads} forms={forms} counters={counters} strength_meter={meter}"
    );
    Ok(())
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

// --- File inputs ---

fn bind_file_inputs(document: &Document, services: &Rc<PageServices>) -> Result<usize, DomError> {
    let inputs: Vec<HtmlInputElement> = elements(document, FILE_INPUT_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    for input in &inputs {
        let services = Rc::clone(services);
        let handle = input.clone();
        listen(input, "change", move |_ev| {
            let file = dom::selected_file(&handle);
            let commands = services.controller.on_file_change(file.as_ref());
            let target = CommandTarget { file_input: Some(&handle), ..CommandTarget::default() };
            apply_all(&commands, &target, &services.alerts);
        })?;
    }
    Ok(inputs.len())
}

// --- Forms ---

fn bind_forms(document: &Document, services: &Rc<PageServices>) -> Result<usize, DomError> {
    let forms: Vec<HtmlFormElement> = elements(document, "form")?
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    for form in &forms {
        let services = Rc::clone(services);
        let handle = form.clone();
        listen(form, "submit", move |ev| {
            let (snapshot, fields) = match dom::snapshot_form(&handle) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("could not read form {}: {e}", handle.action());
                    return;
                }
            };
            let commands = services.controller.on_submit(&snapshot);
            let target = CommandTarget { event: Some(&ev), form: Some(&handle), fields: &fields, ..CommandTarget::default() };
            apply_all(&commands, &target, &services.alerts);
        })?;
    }
    Ok(forms.len())
}

/// Pages restored from the back/forward cache keep their busy submit buttons;
/// put them back.
fn bind_bfcache_restore(window: &Window) -> Result<(), DomError> {
    let handle = window.clone();
    listen(window, "pageshow", move |ev| {
        let persisted = ev.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            return;
        }
        let Some(document) = handle.document() else {
            return;
        };
        let forms = match elements(&document, "form") {
            Ok(forms) => forms,
            Err(e) => {
                log::warn!("could not list forms for restore: {e}");
                return;
            }
        };
        for form in forms.into_iter().filter_map(|el| el.dyn_into::<HtmlFormElement>().ok()) {
            if let Err(e) = dom::restore_submit(&form) {
                log::warn!("could not restore submit button: {e}");
            }
        }
    })
}

// --- Live annotators ---

fn bind_counters(document: &Document, services: &Rc<PageServices>, page_path: &str) -> Result<usize, DomError> {
    let mut attached = 0;
    for field in elements(document, MESSAGE_TEXTAREA_SELECTOR)? {
        let Some(snapshot) = dom::field_snapshot(&field) else {
            continue;
        };
        let Some(counter) = services.controller.counter_for(page_path, &snapshot) else {
            continue;
        };
        let Some(parent) = field.parent_node() else {
            continue;
        };
        let indicator = document.create_element("div")?;
        indicator.set_attribute("style", "text-align: right;")?;
        parent.append_child(&indicator)?;

        let first = services.controller.on_counted_input(&counter, &snapshot.value);
        let target = CommandTarget { indicator: Some(&indicator), ..CommandTarget::default() };
        apply_all(&[first], &target, &services.alerts);

        let services = Rc::clone(services);
        let handle = field.clone();
        listen(&field, "input", move |_ev| {
            let value = dom::field_snapshot(&handle).map(|f| f.value).unwrap_or_default();
            let command = services.controller.on_counted_input(&counter, &value);
            let target = CommandTarget { indicator: Some(&indicator), ..CommandTarget::default() };
            apply_all(&[command], &target, &services.alerts);
        })?;
        attached += 1;
    }
    Ok(attached)
}

fn bind_strength_meter(document: &Document, services: &Rc<PageServices>) -> Result<bool, DomError> {
    let Some(input) = document
        .query_selector(PASSWORD_INPUT_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(false);
    };
    let Some(form) = input.form() else {
        return Ok(false);
    };
    if !services.controller.wants_strength_meter(&form.action()) {
        return Ok(false);
    }
    let Some(parent) = input.parent_node() else {
        return Ok(false);
    };

    let indicator = document.create_element("div")?;
    indicator.set_class_name(STRENGTH_CLASS);
    parent.append_child(&indicator)?;

    let services = Rc::clone(services);
    let handle = input.clone();
    listen(&input, "input", move |_ev| {
        let command = services.controller.on_password_input(&handle.value());
        let target = CommandTarget { indicator: Some(&indicator), ..CommandTarget::default() };
        apply_all(&[command], &target, &services.alerts);
    })?;
    Ok(true)
}
