//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) can describe
//! "the same container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use lambdakit::control::Maybe;
//! use lambdakit::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = empty_like(Maybe::some(42));
//! assert!(none.is_none());
//! ```

use crate::control::{Fallible, Maybe, Outcome};

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For [`Fallible<S, F>`] the failure type `F` is preserved.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for Outcome<T> {
    type Inner = T;
    type WithType<B> = Outcome<B>;
}

impl<S, F> TypeConstructor for Fallible<S, F> {
    type Inner = S;
    type WithType<B> = Fallible<B, F>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn outcome_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Outcome<String>>();
    }

    #[test]
    fn fallible_with_type_preserves_failure_type() {
        fn assert_with_type<S, F, B>()
        where
            Fallible<S, F>: TypeConstructor<Inner = S, WithType<B> = Fallible<B, F>>,
        {
        }

        assert_with_type::<i32, String, bool>();
        assert_with_type::<String, std::io::ErrorKind, u8>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Maybe<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }
}
