//! Dismissible banners at the top of the page container.
//!
//! Each banner removes itself after the configured lifetime. Removal goes
//! through the shared [`AlertBoard`], so a timer that fires after the user
//! closed the banner does nothing. The board also owns each banner's close
//! listener, which is freed when the banner goes away.

use std::cell::RefCell;
use std::rc::Rc;

use feedback::alert::{AlertBoard, AlertId};
use feedback::markup::{ALERT_CLOSE_CLASS, ALERT_CONTAINER_SELECTOR};
use feedback::severity::Severity;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event};

use crate::dom::detach;
use crate::error::DomError;

type CloseListener = Closure<dyn FnMut(Event)>;

pub struct AlertService {
    document: Document,
    board: Rc<RefCell<AlertBoard<CloseListener>>>,
}

impl AlertService {
    #[must_use]
    pub fn new(document: Document, lifetime_ms: u32) -> Self {
        Self { document, board: Rc::new(RefCell::new(AlertBoard::new(lifetime_ms))) }
    }

    /// Show a banner. Returns `None` when the page has no container or the
    /// banner could not be built; neither is an error for the caller.
    pub fn show(&self, message: &str, severity: Severity) -> Option<AlertId> {
        match self.try_show(message, severity) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("failed to show alert: {e}");
                None
            }
        }
    }

    fn try_show(&self, message: &str, severity: Severity) -> Result<Option<AlertId>, DomError> {
        let Some(container) = self.document.query_selector(ALERT_CONTAINER_SELECTOR)? else {
            log::debug!("no {ALERT_CONTAINER_SELECTOR} on page; dropping alert {message:?}");
            return Ok(None);
        };

        let banner = self.board.borrow_mut().post(message, severity);
        let built = self.build(&container, &banner.class_name(), &banner.message, banner.id);
        match built {
            Ok(el) => {
                self.schedule_expiry(el, banner.id);
                Ok(Some(banner.id))
            }
            Err(e) => {
                drop(self.board.borrow_mut().dismiss(banner.id));
                Err(e)
            }
        }
    }

    fn build(&self, container: &Element, class_name: &str, message: &str, id: AlertId) -> Result<Element, DomError> {
        let el = self.document.create_element("div")?;
        el.set_class_name(class_name);
        el.set_attribute("role", "alert")?;
        el.append_child(&self.document.create_text_node(message))?;

        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name(ALERT_CLOSE_CLASS);
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        el.append_child(&close)?;

        self.watch_dismiss(&close, &el, id)?;
        container.insert_before(&el, container.first_child().as_ref())?;
        Ok(el)
    }

    fn watch_dismiss(&self, close: &Element, el: &Element, id: AlertId) -> Result<(), DomError> {
        let board = Rc::clone(&self.board);
        let el = el.clone();
        let cb: CloseListener = Closure::wrap(Box::new(move |_ev: Event| {
            let Some(removed) = board.borrow_mut().dismiss(id) else {
                return;
            };
            detach(&el);
            // The listener is running; free it on the next tick.
            Timeout::new(0, move || drop(removed)).forget();
        }) as Box<dyn FnMut(Event)>);
        close.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        self.board.borrow_mut().attach(id, cb);
        Ok(())
    }

    fn schedule_expiry(&self, el: Element, id: AlertId) {
        let board = Rc::clone(&self.board);
        let lifetime_ms = board.borrow().lifetime_ms();
        Timeout::new(lifetime_ms, move || {
            let removed = board.borrow_mut().expire(id);
            if removed.is_some() {
                detach(&el);
            }
        })
        .forget();
    }
}
