//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Maybe;
//! use lambdakit::typeclass::Monad;
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
//! }
//!
//! assert_eq!(Maybe::pure(8).flat_map(halve).flat_map(halve), Maybe::some(2));
//! assert_eq!(Maybe::pure(6).flat_map(halve).flat_map(halve), Maybe::none());
//! ```

use super::functor::Functor;
use crate::control::{Fallible, Maybe, Outcome};

/// A type class for containers that support dependent sequencing.
///
/// `flat_map` short-circuits: once a step is absent or failed, later
/// continuations are never invoked.
pub trait Monad: Functor {
    /// Lifts a plain value into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Applies `function` to the contained value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure(value: T) -> Self {
        Self::some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<T> Monad for Outcome<T> {
    #[inline]
    fn pure(value: T) -> Self {
        Self::success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> Outcome<B>,
    {
        self.bind(function)
    }
}

impl<S, E> Monad for Fallible<S, E> {
    #[inline]
    fn pure(value: S) -> Self {
        Self::success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Fallible<B, E>
    where
        F: FnOnce(S) -> Fallible<B, E>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_then_discards_first_value() {
        assert_eq!(Maybe::some(1).then(Maybe::some("b")), Maybe::some("b"));
        assert_eq!(Maybe::<i32>::none().then(Maybe::some("b")), Maybe::none());
    }

    #[rstest]
    fn outcome_flat_map_propagates_failure() {
        let failed = Outcome::<i32>::failure("first").unwrap();
        let result = failed.flat_map(|n| Outcome::success(n + 1));
        assert_eq!(result, Outcome::failure("first").unwrap());
    }

    #[rstest]
    fn fallible_pure_is_success() {
        let value: Fallible<i32, String> = Fallible::pure(7);
        assert!(value.is_success());
    }
}
