//! Maybe type - a value that may be absent.
//!
//! [`Maybe<T>`] holds zero or one value. It is classified from nullable
//! sources (`Option<T>`), threaded through combinators that short-circuit on
//! absence, and resolved with [`Maybe::fold`] or [`Maybe::fold_or`].
//!
//! A present `Maybe` can never wrap an absent value: classifying
//! `Option::None` always yields [`Maybe::None`].
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Maybe;
//!
//! fn find_port(name: &str) -> Maybe<u16> {
//!     match name {
//!         "http" => Maybe::some(80),
//!         "https" => Maybe::some(443),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let description = find_port("https")
//!     .filter(|port| *port > 100)
//!     .map(|port| format!("port {port}"))
//!     .fold(|| "unknown".to_string(), |text| text);
//! assert_eq!(description, "port 443");
//!
//! let missing = find_port("gopher").fold_or(0, |port| port);
//! assert_eq!(missing, 0);
//! ```

use crate::error::InvalidArgumentError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Equality and hashing are structural: two absent values are equal, and two
/// present values are equal when their payloads are.
///
/// # Examples
///
/// ```rust
/// use lambdakit::control::Maybe;
///
/// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::some(3));
/// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value. Orders below every present value, as with `Option`.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a present value from a nullable source, rejecting absence.
    ///
    /// This is the strict counterpart of [`Maybe::from_nullable`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_some(Some("x")), Ok(Maybe::some("x")));
    /// assert!(Maybe::<&str>::try_some(None).is_err());
    /// ```
    #[inline]
    pub fn try_some(value: Option<T>) -> Result<Self, InvalidArgumentError> {
        value
            .map(Self::Some)
            .ok_or(InvalidArgumentError::absent("Maybe", "value"))
    }

    /// Classifies a nullable source: `Some(v)` becomes present, `None`
    /// becomes absent.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Presence
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolves both branches into a single value.
    ///
    /// `on_absent` is only evaluated when no value is present. Exactly one of
    /// the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Maybe;
    ///
    /// let text = Maybe::some(2).fold(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(text, "2");
    /// ```
    #[inline]
    pub fn fold<U, N, P>(self, on_absent: N, on_present: P) -> U
    where
        N: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_present(value),
            Self::None => on_absent(),
        }
    }

    /// Resolves both branches, using a precomputed `fallback` when absent.
    #[inline]
    pub fn fold_or<U, P>(self, fallback: U, on_present: P) -> U
    where
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_present(value),
            Self::None => fallback,
        }
    }

    /// Applies `transform` to the contained value without checking presence.
    ///
    /// When absent, `transform` receives `T::default()` instead of a real
    /// value. The result is then whatever `transform` makes of that default;
    /// callers must check [`Maybe::is_some`] first if that matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).get_value_unchecked(|n| n * 10), 40);
    /// assert_eq!(Maybe::<i32>::none().get_value_unchecked(|n| n * 10), 0);
    /// ```
    #[inline]
    pub fn get_value_unchecked<U, F>(self, transform: F) -> U
    where
        T: Default,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => transform(value),
            Self::None => transform(T::default()),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains to another `Maybe`, short-circuiting on absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from_nullable(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::some("12").bind(parse), Maybe::some(12));
    /// assert_eq!(Maybe::some("x").bind(parse), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Chains two sources and combines them with `projection`.
    ///
    /// `selector` derives the second source from a borrow of the first value
    /// and is never called when `self` is absent. The result is absent if
    /// either source is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::control::Maybe;
    ///
    /// let sum = Maybe::some(2).select_many(|_| Maybe::some(3), |a, b| a + b);
    /// assert_eq!(sum, Maybe::some(5));
    ///
    /// let missing = Maybe::some(2).select_many(|_| Maybe::<i32>::none(), |a, b| a + b);
    /// assert_eq!(missing, Maybe::none());
    /// ```
    #[inline]
    pub fn select_many<U, V, F, P>(self, selector: F, projection: P) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> V,
    {
        self.bind(|first| {
            let second = selector(&first);
            second.map(|second| projection(first, second))
        })
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Runs `action` on the present value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<A>(self, alternative: A) -> Self
    where
        A: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => alternative(),
        }
    }

    /// Returns the present value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        self.fold_or(fallback, |value| value)
    }

    /// Returns the present value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(fallback, |value| value)
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(5), Maybe::some(5))]
    #[case(None, Maybe::none())]
    fn from_nullable_classifies(#[case] source: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from_nullable(source), expected);
        assert_eq!(Maybe::from(source), expected);
    }

    #[rstest]
    fn try_some_rejects_absent() {
        let error = Maybe::<i32>::try_some(None).unwrap_err();
        assert_eq!(error.parameter, "value");
        assert_eq!(error.type_name, "Maybe");
    }

    #[rstest]
    fn fold_lazy_branch_not_evaluated_when_present() {
        let called = Cell::new(false);
        let value = Maybe::some(1).fold(
            || {
                called.set(true);
                0
            },
            |n| n + 1,
        );
        assert_eq!(value, 2);
        assert!(!called.get());
    }

    #[rstest]
    fn filter_on_absent_is_noop() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::none().filter(|_| {
            called.set(true);
            true
        });
        assert!(result.is_none());
        assert!(!called.get());
    }

    #[rstest]
    #[case(4, Maybe::some(4))]
    #[case(3, Maybe::none())]
    fn filter_keeps_matching(#[case] input: i32, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::some(input).filter(|n| n % 2 == 0), expected);
    }

    #[rstest]
    fn tap_only_runs_when_present() {
        let seen = Cell::new(0);
        let present = Maybe::some(9).tap(|n| seen.set(*n));
        assert_eq!(present, Maybe::some(9));
        assert_eq!(seen.get(), 9);

        let absent = Maybe::<i32>::none().tap(|_| seen.set(-1));
        assert!(absent.is_none());
        assert_eq!(seen.get(), 9);
    }

    #[rstest]
    fn select_many_skips_selector_when_absent() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::none().select_many(
            |_| {
                called.set(true);
                Maybe::some(1)
            },
            |a, b| a + b,
        );
        assert!(result.is_none());
        assert!(!called.get());
    }

    #[rstest]
    fn default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::none());
    }

    #[rstest]
    fn or_else_and_unwrap() {
        assert_eq!(Maybe::none().or_else(|| Maybe::some(2)), Maybe::some(2));
        assert_eq!(Maybe::some(1).or_else(|| Maybe::some(2)), Maybe::some(1));
        assert_eq!(Maybe::none().unwrap_or(7), 7);
        assert_eq!(Maybe::some(3).unwrap_or_else(|| 7), 3);
        assert_eq!(Option::from(Maybe::some(3)), Some(3));
    }
}
