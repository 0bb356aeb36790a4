//! Browser console logging.
//!
//! The logger is installed before the page config is read so config
//! problems are visible; the configured level is applied afterwards.

use feedback::config::FeedbackConfig;

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Level used until the page config has been read.
pub const BOOT_LEVEL: log::Level = log::Level::Info;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        // The logger itself accepts everything; `log::set_max_level` filters.
        if console_log::init_with_level(log::Level::Trace).is_err() {
            log::debug!("console logger already installed");
        }
    }
    log::set_max_level(BOOT_LEVEL.to_level_filter());
}

/// Effective level for a config, falling back to [`BOOT_LEVEL`].
#[must_use]
pub fn level_for(config: &FeedbackConfig) -> log::Level {
    config.log_level().unwrap_or(BOOT_LEVEL)
}

pub fn apply_level(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}
