//! Live "current/max characters" counter.

use crate::config::FeedbackConfig;
use crate::markup::COUNTER_CLASS;
use crate::severity::Severity;

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCounter {
    pub max_len: usize,
    /// Remaining count below which the counter is shown as a warning.
    pub warn_below: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub current: usize,
    pub max: usize,
    /// `None` renders in the default style.
    pub tone: Option<Severity>,
}

impl CounterView {
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}/{} characters", self.current, self.max)
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        match self.tone {
            Some(tone) => format!("{COUNTER_CLASS} {}", tone.text_class()),
            None => COUNTER_CLASS.to_owned(),
        }
    }
}

impl CharacterCounter {
    #[must_use]
    pub fn new(max_len: usize, warn_below: usize) -> Self {
        Self { max_len, warn_below }
    }

    /// Counter for the encrypted-message field.
    #[must_use]
    pub fn for_message(config: &FeedbackConfig) -> Self {
        Self::new(config.max_message_chars, config.counter_warning_chars)
    }

    #[must_use]
    pub fn render(&self, value: &str) -> CounterView {
        let current = value.chars().count();
        let tone = if current > self.max_len {
            Some(Severity::Danger)
        } else if self.max_len - current < self.warn_below {
            Some(Severity::Warning)
        } else {
            None
        };
        CounterView { current, max: self.max_len, tone }
    }
}
