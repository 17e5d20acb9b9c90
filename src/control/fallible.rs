//! Fallible type - success or failure with caller-chosen payload types.
//!
//! [`Fallible<S, F>`] generalizes [`Outcome`](super::Outcome) over the error
//! payload. Both payloads are required to be present; constructors taking a
//! nullable source reject `None`.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Fallible;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum LoginError {
//!     UnknownUser,
//!     Locked { attempts: u32 },
//! }
//!
//! fn login(user: &str) -> Fallible<u64, LoginError> {
//!     match user {
//!         "alice" => Fallible::success(1),
//!         "bob" => Fallible::failure(LoginError::Locked { attempts: 3 }),
//!         _ => Fallible::failure(LoginError::UnknownUser),
//!     }
//! }
//!
//! assert_eq!(login("alice").map(|id| id + 100), Fallible::success(101));
//! assert_eq!(login("carol").get_error(), Ok(&LoginError::UnknownUser));
//! ```

use std::fmt;
use std::future::Future;

use super::maybe::Maybe;
use crate::error::{IllegalStateError, InvalidArgumentError};

/// Either a success carrying `S` or a failure carrying `F`.
///
/// Equality and hashing are structural over (variant, payload); a success
/// and a failure are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fallible<S, F> {
    /// A successful value.
    Success(S),
    /// A failure payload.
    Failure(F),
}

impl<S, F> Fallible<S, F> {
    /// Creates a success.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Creates a success from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when `value` is `None`.
    #[inline]
    pub fn try_success(value: Option<S>) -> Result<Self, InvalidArgumentError> {
        value
            .map(Self::Success)
            .ok_or(InvalidArgumentError::absent("Fallible", "value"))
    }

    /// Creates a failure from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when `error` is `None`.
    #[inline]
    pub fn try_failure(error: Option<F>) -> Result<Self, InvalidArgumentError> {
        error
            .map(Self::Failure)
            .ok_or(InvalidArgumentError::absent("Fallible", "error"))
    }

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

    /// Resolves both branches into a single value. Exactly one function runs.
    #[inline]
    pub fn fold<U, OnS, OnF>(self, on_success: OnS, on_failure: OnF) -> U
    where
        OnS: FnOnce(S) -> U,
        OnF: FnOnce(F) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Resolves both branches with asynchronous handlers.
    pub async fn fold_async<U, OnS, SF, OnF, FF>(self, on_success: OnS, on_failure: OnF) -> U
    where
        OnS: FnOnce(S) -> SF,
        SF: Future<Output = U>,
        OnF: FnOnce(F) -> FF,
        FF: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }

    /// Applies `transform` to the value of a success.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError`] when called on a failure.
    #[inline]
    pub fn get_value<U, T>(&self, transform: T) -> Result<U, IllegalStateError>
    where
        T: FnOnce(&S) -> U,
    {
        match self {
            Self::Success(value) => Ok(transform(value)),
            Self::Failure(_) => Err(IllegalStateError {
                type_name: "Fallible",
                operation: "get_value",
                found: "Failure",
            }),
        }
    }

    /// Returns the payload of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalStateError`] when called on a success.
    #[inline]
    pub const fn get_error(&self) -> Result<&F, IllegalStateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(IllegalStateError {
                type_name: "Fallible",
                operation: "get_error",
                found: "Success",
            }),
        }
    }

    /// Transforms the value of a success.
    #[inline]
    pub fn map<U, M>(self, function: M) -> Fallible<U, F>
    where
        M: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Fallible::Success(function(value)),
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Transforms the payload of a failure.
    #[inline]
    pub fn map_failure<G, M>(self, function: M) -> Fallible<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(error) => Fallible::Failure(function(error)),
        }
    }

    /// Chains to another fallible computation; a failure short-circuits.
    #[inline]
    pub fn bind<U, M>(self, function: M) -> Fallible<U, F>
    where
        M: FnOnce(S) -> Fallible<U, F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Chains two sources and combines their values with `projection`.
    ///
    /// The first failure in source order propagates and `selector` is never
    /// called once `self` has failed.
    #[inline]
    pub fn select_many<U, V, Sel, P>(self, selector: Sel, projection: P) -> Fallible<V, F>
    where
        Sel: FnOnce(&S) -> Fallible<U, F>,
        P: FnOnce(S, U) -> V,
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
        A: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the payload of a failure and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&F),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Discards the failure payload, keeping only a present value.
    #[inline]
    pub fn ok(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Fallible<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success: {value}"),
            Self::Failure(error) => write!(formatter, "Failure: {error}"),
        }
    }
}

impl<S, F> From<Result<S, F>> for Fallible<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Fallible<S, F>> for Result<S, F> {
    #[inline]
    fn from(fallible: Fallible<S, F>) -> Self {
        fallible.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn try_failure_rejects_absent() {
        let error = Fallible::<i32, String>::try_failure(None).unwrap_err();
        assert_eq!(error.parameter, "error");
        assert_eq!(
            Fallible::<i32, &str>::try_failure(Some("e")),
            Ok(Fallible::failure("e"))
        );
    }

    #[rstest]
    fn try_success_rejects_absent() {
        assert!(Fallible::<i32, String>::try_success(None).is_err());
    }

    #[rstest]
    fn unchecked_accessors_check_variant() {
        let success: Fallible<i32, &str> = Fallible::success(4);
        assert_eq!(success.get_value(|n| n + 1), Ok(5));
        assert_eq!(success.get_error().unwrap_err().found, "Success");

        let failure: Fallible<i32, &str> = Fallible::failure("e");
        assert_eq!(failure.get_error(), Ok(&"e"));
        assert_eq!(failure.get_value(|n| *n).unwrap_err().found, "Failure");
    }

    #[rstest]
    fn map_failure_leaves_success() {
        let success: Fallible<i32, i32> = Fallible::success(1);
        assert_eq!(success.map_failure(|e| e * 2), Fallible::success(1));

        let failure: Fallible<i32, i32> = Fallible::failure(3);
        assert_eq!(failure.map_failure(|e| e * 2), Fallible::failure(6));
    }

    #[rstest]
    fn select_many_propagates_first_failure() {
        let called = Cell::new(false);
        let first: Fallible<i32, &str> = Fallible::failure("first");
        let result = first.select_many(
            |_| {
                called.set(true);
                Fallible::<i32, &str>::failure("second")
            },
            |a, b| a + b,
        );
        assert_eq!(result, Fallible::failure("first"));
        assert!(!called.get());
    }

    #[rstest]
    fn success_and_failure_are_never_equal() {
        let success: Fallible<i32, i32> = Fallible::success(0);
        let failure: Fallible<i32, i32> = Fallible::failure(0);
        assert_ne!(success, failure);
    }

    #[rstest]
    fn display_renders_variant() {
        let failure: Fallible<i32, &str> = Fallible::failure("denied");
        assert_eq!(failure.to_string(), "Failure: denied");
        let success: Fallible<i32, &str> = Fallible::success(1);
        assert_eq!(success.to_string(), "Success: 1");
    }
}
