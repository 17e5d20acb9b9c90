//! Outcome type - success with a value, or failure with a message.
//!
//! [`Outcome<T>`] is the single error-kind result: every failure carries an
//! [`ErrorMessage`], which is validated to be non-blank at construction. For
//! an arbitrary error payload use [`Fallible`](super::Fallible).
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     match text.parse::<i32>() {
//!         Ok(value) => Outcome::success(value),
//!         Err(_) => Outcome::failure(format!("not a number: {text}"))
//!             .expect("message is never blank"),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.to_string(), "Success: 42");
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert_eq!(failed.to_string(), "Failure: not a number: x");
//! ```

use std::fmt;
use std::future::Future;

use super::maybe::Maybe;
use super::message::ErrorMessage;
use crate::error::{IllegalStateError, InvalidArgumentError};

/// Either a successful value or a failure message.
///
/// Only the payload of the active variant exists, so a value and an error
/// can never be observed together. Equality and hashing are structural over
/// (variant, payload).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// A successful value.
    Success(T),
    /// A failure with a non-blank message.
    Failure(ErrorMessage),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a successful outcome from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when `value` is `None`.
    #[inline]
    pub fn try_success(value: Option<T>) -> Result<Self, InvalidArgumentError> {
        value
            .map(Self::Success)
            .ok_or(InvalidArgumentError::absent("Outcome", "value"))
    }

    /// Creates a failed outcome carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `message` is empty or whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Outcome;
    ///
    /// let failed = Outcome::<()>::failure("boom").unwrap();
    /// assert_eq!(failed.get_error().unwrap().as_str(), "boom");
    ///
    /// assert!(Outcome::<()>::failure("").is_err());
    /// assert!(Outcome::<()>::failure("   ").is_err());
    /// ```
    #[inline]
    pub fn failure(message: impl Into<String>) -> Result<Self, InvalidArgumentError> {
        ErrorMessage::new(message).map(Self::Failure)
    }

    /// Creates a failed outcome from an already validated message.
    #[inline]
    pub const fn from_error(message: ErrorMessage) -> Self {
        Self::Failure(message)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolves both branches into a single value. Exactly one function runs.
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorMessage) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    /// Resolves both branches with asynchronous handlers.
    ///
    /// Only the future of the active branch is created and awaited.
    pub async fn fold_async<U, S, SF, F, FF>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SF,
        SF: Future<Output = U>,
        F: FnOnce(ErrorMessage) -> FF,
        FF: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(message) => on_failure(message).await,
        }
    }

    /// Applies `transform` to the value of a success.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError`] when called on a failure.
    #[inline]
    pub fn get_value<U, F>(&self, transform: F) -> Result<U, IllegalStateError>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            Self::Success(value) => Ok(transform(value)),
            Self::Failure(_) => Err(IllegalStateError {
                type_name: "Outcome",
                operation: "get_value",
                found: "Failure",
            }),
        }
    }

    /// Returns the message of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError`] when called on a success.
    #[inline]
    pub const fn get_error(&self) -> Result<&ErrorMessage, IllegalStateError> {
        match self {
            Self::Failure(message) => Ok(message),
            Self::Success(_) => Err(IllegalStateError {
                type_name: "Outcome",
                operation: "get_error",
                found: "Success",
            }),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the value of a success.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chains to another outcome; a failure short-circuits.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chains two sources and combines their values with `projection`.
    ///
    /// The first failure in source order propagates. `selector` is never
    /// called when `self` is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Outcome;
    ///
    /// let first = Outcome::success(1);
    /// let result = first.select_many(
    ///     |_| Outcome::<i32>::failure("second failed").unwrap(),
    ///     |a, b| a + b,
    /// );
    /// assert_eq!(result.to_string(), "Failure: second failed");
    /// ```
    #[inline]
    pub fn select_many<U, V, F, P>(self, selector: F, projection: P) -> Outcome<V>
    where
        F: FnOnce(&T) -> Outcome<U>,
        P: FnOnce(T, U) -> V,
    {
        self.bind(|first| {
            let second = selector(&first);
            second.map(|second| projection(first, second))
        })
    }

    /// Runs `action` on the value of a success and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the message of a failure and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&ErrorMessage),
    {
        if let Self::Failure(message) = &self {
            action(message);
        }
        self
    }

    /// Discards the failure message, keeping only a present value.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorMessage> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success: {value}"),
            Self::Failure(message) => write!(formatter, "Failure: {message}"),
        }
    }
}

impl<T> From<Result<T, ErrorMessage>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, ErrorMessage>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(message) => Self::Failure(message),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorMessage> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
