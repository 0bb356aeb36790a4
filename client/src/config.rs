//! Page-supplied configuration.
//!
//! Templates may embed overrides as
//! `<script type="application/json" id="ui-feedback-config">{...}</script>`.
//! A missing or empty block means defaults; an invalid one is logged and
//! ignored so a template typo never disables validation.

use feedback::config::FeedbackConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_ELEMENT_ID: &str = "ui-feedback-config";

/// Resolve the config from the raw block text, if any.
#[must_use]
pub fn load(raw: Option<&str>) -> FeedbackConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return FeedbackConfig::default();
    };
    match FeedbackConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            FeedbackConfig::default()
        }
    }
}

/// Read the config block from the document.
#[cfg(feature = "hydrate")]
pub fn read(document: &web_sys::Document) -> FeedbackConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    load(raw.as_deref())
}
