//! Clipboard access for the page.
//!
//! The primary path is `navigator.clipboard.writeText`. The fallback parks a
//! textarea off-screen, selects it and runs `execCommand('copy')`; the
//! textarea is removed before the call returns.

use std::rc::Rc;

use feedback::clipboard::{ClipboardBackend, ClipboardError, copy_text};
use feedback::command::Command;
use feedback::controller::FeedbackController;
use feedback::markup::OFFSCREEN_STYLE;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Window};

use crate::dom::{CommandTarget, apply_all};
use crate::error::{DomError, describe_js};
use crate::services::alerts::AlertService;

pub struct BrowserClipboard {
    window: Window,
    document: Document,
}

impl BrowserClipboard {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn copy_via_textarea(&self, text: &str) -> Result<bool, DomError> {
        let body = self.document.body().ok_or(DomError::NoBody)?;
        let area = self
            .document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| DomError::UnexpectedElement("textarea"))?;
        area.set_value(text);
        area.set_attribute("style", OFFSCREEN_STYLE)?;
        body.append_child(&area)?;
        if let Err(e) = area.focus() {
            log::debug!("could not focus clipboard textarea: {}", describe_js(&e));
        }
        area.select();

        let copied = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(DomError::UnexpectedElement("HTML document"))
            .and_then(|doc| doc.exec_command("copy").map_err(DomError::from));
        area.remove();
        copied
    }
}

impl ClipboardBackend for BrowserClipboard {
    async fn write_primary(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = self.window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
    }

    fn write_fallback(&self, text: &str) -> Result<(), ClipboardError> {
        match self.copy_via_textarea(text) {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandFailed("execCommand('copy') returned false".to_owned())),
            Err(e) => Err(ClipboardError::CommandFailed(e.to_string())),
        }
    }
}

/// Copies text and reports the result as a banner.
pub struct ClipboardService {
    backend: Rc<BrowserClipboard>,
    controller: Rc<FeedbackController>,
    alerts: Rc<AlertService>,
}

impl ClipboardService {
    #[must_use]
    pub fn new(backend: BrowserClipboard, controller: Rc<FeedbackController>, alerts: Rc<AlertService>) -> Self {
        Self { backend: Rc::new(backend), controller, alerts }
    }

    /// Start a copy. The banner appears once the platform has answered.
    pub fn copy(&self, text: String) {
        let backend = Rc::clone(&self.backend);
        let controller = Rc::clone(&self.controller);
        let alerts = Rc::clone(&self.alerts);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = copy_text(backend.as_ref(), &text).await;
            let command: Command = controller.on_copy_finished(&outcome);
            apply_all(&[command], &CommandTarget::default(), &alerts);
        });
    }
}
