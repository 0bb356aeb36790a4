//! Page and form intent inferred from URL substrings.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Operation a page or form is for, as named in its path or action URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Message encryption (RSA length limits apply).
    Encrypt,
    /// Account registration (password strength meter applies).
    Register,
}

impl Intent {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Register => "register",
        }
    }

    /// Whether a path or URL denotes this intent. Plain substring match.
    #[must_use]
    pub fn matches(self, url: &str) -> bool {
        url.contains(self.keyword())
    }
}
