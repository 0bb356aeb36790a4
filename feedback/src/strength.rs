//! Password strength scoring for the registration form.

use crate::severity::Severity;

#[cfg(test)]
#[path = "strength_test.rs"]
mod strength_test;

/// Length at which the length criterion is met.
pub const STRONG_LENGTH_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Level for a criteria count. Scores of four and five are both `Strong`.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::VeryWeak => Severity::Danger,
            Self::Weak => Severity::Warning,
            Self::Fair => Severity::Info,
            Self::Good | Self::Strong => Severity::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Number of criteria met, `0..=5`.
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Password strength: {}", self.level.label())
    }
}

/// Score a password from scratch.
///
/// One point each for: at least eight characters, an ASCII lowercase letter,
/// an ASCII uppercase letter, an ASCII digit, and any character outside
/// `[A-Za-z0-9]`.
#[must_use]
pub fn check_password_strength(password: &str) -> PasswordStrength {
    let criteria = [
        password.chars().count() >= STRONG_LENGTH_CHARS,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score: u8 = criteria.into_iter().map(u8::from).sum();
    PasswordStrength { score, level: StrengthLevel::from_score(score) }
}
