//! Instagram account name value object.

use std::fmt;

/// Instagram account identifier with format validation.
///
/// The name is spliced into the listing endpoint path, so anything that
/// would change the shape of the URL is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountName {
    value: String,
}

impl AccountName {
    /// Creates new account name with format validation.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for empty input or
    /// input containing URL metacharacters.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        if value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '&' | '#' | '%'))
        {
            return None;
        }

        Some(Self { value })
    }

    /// Returns the account name as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the name and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
