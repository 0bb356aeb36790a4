//! Banner bookkeeping.
//!
//! Banners are independent: each is inserted at the top, removed either by
//! the user or by its own timer, and never capped. The board records which
//! banners are still live so that whichever removal comes second is a no-op.

use std::fmt;

use uuid::Uuid;

use crate::markup::alert_class;
use crate::severity::Severity;

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(Uuid);

impl AlertId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertBanner {
    pub id: AlertId,
    pub message: String,
    pub severity: Severity,
}

impl AlertBanner {
    #[must_use]
    pub fn new(message: &str, severity: Severity) -> Self {
        Self { id: AlertId::new(), message: message.to_owned(), severity }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        alert_class(self.severity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Dismissed,
    Expired,
}

/// A banner taken off the board, with whatever the host attached to it.
#[derive(Debug)]
pub struct Removed<H> {
    pub banner: AlertBanner,
    pub how: Removal,
    pub handle: Option<H>,
}

/// Live banners, newest first.
///
/// `H` is a host resource tied to one banner (a listener, say). The board
/// owns it while the banner is live and hands it back on removal, so it
/// lives exactly as long as the banner.
#[derive(Debug)]
pub struct AlertBoard<H = ()> {
    live: Vec<(AlertBanner, Option<H>)>,
    lifetime_ms: u32,
}

impl<H> AlertBoard<H> {
    #[must_use]
    pub fn new(lifetime_ms: u32) -> Self {
        Self { live: Vec::new(), lifetime_ms }
    }

    /// How long a banner stays up unless dismissed.
    #[must_use]
    pub fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    /// Record a new banner at the top and return it.
    pub fn post(&mut self, message: &str, severity: Severity) -> AlertBanner {
        let banner = AlertBanner::new(message, severity);
        self.live.insert(0, (banner.clone(), None));
        banner
    }

    /// Tie `handle` to a live banner, replacing any earlier one. Returns
    /// `false` and drops the handle if the banner is already gone.
    pub fn attach(&mut self, id: AlertId, handle: H) -> bool {
        match self.live.iter_mut().find(|(b, _)| b.id == id) {
            Some((_, slot)) => {
                *slot = Some(handle);
                true
            }
            None => false,
        }
    }

    /// User closed the banner. `None` if it was already gone.
    pub fn dismiss(&mut self, id: AlertId) -> Option<Removed<H>> {
        self.remove(id, Removal::Dismissed)
    }

    /// Banner timer fired. `None` if it was already gone.
    pub fn expire(&mut self, id: AlertId) -> Option<Removed<H>> {
        self.remove(id, Removal::Expired)
    }

    #[must_use]
    pub fn is_live(&self, id: AlertId) -> bool {
        self.live.iter().any(|(b, _)| b.id == id)
    }

    /// Live banners, newest first.
    pub fn live(&self) -> impl Iterator<Item = &AlertBanner> {
        self.live.iter().map(|(b, _)| b)
    }

    fn remove(&mut self, id: AlertId, how: Removal) -> Option<Removed<H>> {
        let Some(pos) = self.live.iter().position(|(b, _)| b.id == id) else {
            log::debug!("alert {id} already removed; ignoring {how:?}");
            return None;
        };
        let (banner, handle) = self.live.remove(pos);
        Some(Removed { banner, how, handle })
    }
}
