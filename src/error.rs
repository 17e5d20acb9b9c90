//! Error types raised by constructors, unchecked accessors, and the cache.
//!
//! Combinators never produce these errors; they carry absence and failure
//! as data. Only three surfaces can fail:
//!
//! - Constructors given an absent input or a blank message
//!   ([`InvalidArgumentError`]).
//! - Unchecked accessors used against the wrong variant
//!   ([`IllegalStateError`]).
//! - A [`LifetimeManager`](crate::control::LifetimeManager) whose factory
//!   yields no instance ([`LifetimeManagerError`]).

use thiserror::Error;

/// Raised when a constructor receives an input it cannot accept.
///
/// # Examples
///
/// ```rust
/// use lambdakit::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     type_name: "Outcome",
///     parameter: "message",
///     reason: "must not be blank",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Outcome: invalid argument `message`: must not be blank"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: invalid argument `{parameter}`: {reason}")]
pub struct InvalidArgumentError {
    /// The type whose constructor rejected the input.
    pub type_name: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// Why the input was rejected.
    pub reason: &'static str,
}

impl InvalidArgumentError {
    pub(crate) const fn absent(type_name: &'static str, parameter: &'static str) -> Self {
        Self {
            type_name,
            parameter,
            reason: "must not be absent",
        }
    }

    pub(crate) const fn blank(type_name: &'static str, parameter: &'static str) -> Self {
        Self {
            type_name,
            parameter,
            reason: "must not be empty or whitespace",
        }
    }
}

/// Raised when an unchecked accessor is used against the wrong variant.
///
/// This signals a programming error: reading the value of a failure, or
/// the error of a success.
///
/// # Examples
///
/// ```rust
/// use lambdakit::control::Outcome;
///
/// let outcome = Outcome::<i32>::failure("boom").unwrap();
/// let error = outcome.get_value(|value| *value).unwrap_err();
/// assert_eq!(
///     format!("{error}"),
///     "Outcome::get_value: called on a Failure value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}::{operation}: called on a {found} value")]
pub struct IllegalStateError {
    /// The type the accessor belongs to.
    pub type_name: &'static str,
    /// The accessor that was called.
    pub operation: &'static str,
    /// The variant that was actually present.
    pub found: &'static str,
}

/// Errors produced by [`LifetimeManager`](crate::control::LifetimeManager).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifetimeManagerError {
    /// The factory completed without producing an instance.
    ///
    /// The previously cached instance, if any, is left untouched.
    #[error("LifetimeManager<{type_name}>: factory produced no instance")]
    NullInstance {
        /// The cached type.
        type_name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn invalid_argument_absent_display() {
        let error = InvalidArgumentError::absent("Maybe", "value");
        assert_eq!(
            format!("{error}"),
            "Maybe: invalid argument `value`: must not be absent"
        );
    }

    #[rstest]
    fn invalid_argument_blank_display() {
        let error = InvalidArgumentError::blank("ErrorMessage", "message");
        assert_eq!(
            format!("{error}"),
            "ErrorMessage: invalid argument `message`: must not be empty or whitespace"
        );
    }

    #[rstest]
    fn illegal_state_display() {
        let error = IllegalStateError {
            type_name: "Fallible",
            operation: "get_error",
            found: "Success",
        };
        assert_eq!(
            format!("{error}"),
            "Fallible::get_error: called on a Success value"
        );
    }

    #[rstest]
    fn lifetime_manager_error_display() {
        let error = LifetimeManagerError::NullInstance { type_name: "u32" };
        assert_eq!(
            format!("{error}"),
            "LifetimeManager<u32>: factory produced no instance"
        );
    }

    #[rstest]
    fn errors_have_no_source() {
        assert!(InvalidArgumentError::absent("Maybe", "value").source().is_none());
        assert!(
            LifetimeManagerError::NullInstance { type_name: "u32" }
                .source()
                .is_none()
        );
    }
}
