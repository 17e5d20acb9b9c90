//! Validated failure message for [`Outcome`](super::Outcome).

use std::fmt;

use crate::error::InvalidArgumentError;

/// A failure message that is guaranteed to be non-empty and not made up
/// solely of whitespace.
///
/// # Examples
///
/// ```rust
/// use lambdakit::control::ErrorMessage;
///
/// let message = ErrorMessage::new("disk full").unwrap();
/// assert_eq!(message.as_str(), "disk full");
///
/// assert!(ErrorMessage::new("").is_err());
/// assert!(ErrorMessage::new(" \t\n").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    /// Validates and wraps `message`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `message` is empty or whitespace.
    pub fn new(message: impl Into<String>) -> Result<Self, InvalidArgumentError> {
        let message = message.into();
        if message.trim().is_empty() {
            Err(InvalidArgumentError::blank("ErrorMessage", "message"))
        } else {
            Ok(Self(message))
        }
    }

    /// Returns the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the message, returning the text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ErrorMessage {
    type Error = InvalidArgumentError;

    fn try_from(message: String) -> Result<Self, Self::Error> {
        Self::new(message)
    }
}

impl TryFrom<&str> for ErrorMessage {
    type Error = InvalidArgumentError;

    fn try_from(message: &str) -> Result<Self, Self::Error> {
        Self::new(message)
    }
}

impl From<ErrorMessage> for String {
    fn from(message: ErrorMessage) -> Self {
        message.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("   ")]
    #[case("\t\r\n")]
    fn blank_messages_are_rejected(#[case] input: &str) {
        assert!(ErrorMessage::new(input).is_err());
    }

    #[rstest]
    #[case("boom")]
    #[case("  padded  ")]
    fn non_blank_messages_are_kept_verbatim(#[case] input: &str) {
        let message = ErrorMessage::new(input).unwrap();
        assert_eq!(message.as_str(), input);
        assert_eq!(message.to_string(), input);
    }
}
