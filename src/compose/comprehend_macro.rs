//! Comprehension syntax over [`Maybe`](crate::control::Maybe),
//! [`Outcome`](crate::control::Outcome) and
//! [`Fallible`](crate::control::Fallible).
//!
//! The [`comprehend!`] macro desugars a flat list of clauses into nested
//! [`Monad::flat_map`](crate::typeclass::Monad::flat_map) calls with a final
//! [`Functor::fmap`](crate::typeclass::Functor::fmap), the same shape a
//! multi-clause query over two sources plus a projection takes.
//!
//! # Syntax
//!
//! ```text
//! comprehend! {
//!     pattern <= source;         // Bind: continue with the contained value
//!     let pattern = expression;  // Pure let binding
//!     pattern <= source;
//!     yield expression           // Projection of the bound values
//! }
//! ```
//!
//! A comprehension may also end with a plain container expression instead
//! of `yield`, or with `yield` directly after a `let`, in which case the
//! projection is lifted with [`Monad::pure`](crate::typeclass::Monad::pure).
//!
//! # Evaluation Order
//!
//! Sources are evaluated strictly left to right, and each source after the
//! first is only evaluated once every earlier source succeeded. A failed or
//! absent source stops the chain; later source expressions never run.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::comprehend;
//! use lambdakit::control::{Maybe, Outcome};
//!
//! let total = comprehend! {
//!     a <= Maybe::some(2);
//!     b <= Maybe::some(3);
//!     yield a * b
//! };
//! assert_eq!(total, Maybe::some(6));
//!
//! let failed: Outcome<i32> = comprehend! {
//!     a <= Outcome::success(1);
//!     b <= Outcome::<i32>::failure("X").unwrap();
//!     c <= unreachable_source();
//!     yield a + b + c
//! };
//! assert_eq!(failed.to_string(), "Failure: X");
//!
//! fn unreachable_source() -> Outcome<i32> {
//!     panic!("never evaluated")
//! }
//! ```

#![forbid(unsafe_code)]

/// Flat comprehension syntax for the monadic containers of this crate.
///
/// See the [module documentation](crate::compose) for the
/// full syntax.
///
/// # Examples
///
/// ```rust
/// use lambdakit::comprehend;
/// use lambdakit::control::Fallible;
///
/// let pair: Fallible<(i32, String), String> = comprehend! {
///     (left, right) <= Fallible::success((1, "one".to_string()));
///     let label = format!("{left}:{right}");
///     _ <= Fallible::success(());
///     yield (left, label)
/// };
/// assert_eq!(pair, Fallible::success((1, "1:one".to_string())));
/// ```
#[macro_export]
macro_rules! comprehend {
    // ==========================================================================
    // Final bind followed by a projection: fmap
    // ==========================================================================

    ($pattern:ident <= $source:expr ; yield $result:expr) => {
        $crate::typeclass::Functor::fmap($source, move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $source:expr ; yield $result:expr) => {
        $crate::typeclass::Functor::fmap($source, move |($($pattern)*)| $result)
    };

    (_ <= $source:expr ; yield $result:expr) => {
        $crate::typeclass::Functor::fmap($source, move |_| $result)
    };

    // ==========================================================================
    // Bind: pattern <= source; rest
    // ==========================================================================

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($source, move |$pattern| {
            $crate::comprehend!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($source, move |($($pattern)*)| {
            $crate::comprehend!($($rest)+)
        })
    };

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($source, move |_| {
            $crate::comprehend!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::comprehend!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::comprehend!($($rest)+)
    }};

    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $result:expr) => {
        $crate::typeclass::Monad::pure($result)
    };

    ($result:expr) => {
        $result
    };
}
