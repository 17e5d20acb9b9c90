//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::{Maybe, Outcome};
//! use lambdakit::typeclass::Functor;
//!
//! let length = Maybe::some("hello").fmap(str::len);
//! assert_eq!(length, Maybe::some(5));
//!
//! let failed = Outcome::<i32>::failure("boom").unwrap().fmap(|n| n + 1);
//! assert!(failed.is_failure());
//! ```

use super::higher::TypeConstructor;
use crate::control::{Fallible, Maybe, Outcome};

/// A type class for containers whose contents can be transformed while
/// the shape is preserved.
///
/// Absent and failed containers pass through untouched; the function is
/// never called for them.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Outcome<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<S, E> Functor for Fallible<S, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Fallible<B, E>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(3), Maybe::some(6))]
    #[case(Maybe::none(), Maybe::none())]
    fn maybe_fmap_doubles(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn outcome_replace_keeps_failure() {
        let failed = Outcome::<i32>::failure("nope").unwrap();
        assert_eq!(failed.replace("x"), Outcome::failure("nope").unwrap());
    }

    #[rstest]
    fn fallible_void_keeps_shape() {
        let success: Fallible<i32, String> = Fallible::success(1);
        assert_eq!(success.void(), Fallible::success(()));

        let failure: Fallible<i32, String> = Fallible::failure("e".to_string());
        assert_eq!(failure.void(), Fallible::failure("e".to_string()));
    }
}
