//! Type class traits shared by the containers of this crate.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//!
//! [`Maybe`](crate::control::Maybe), [`Outcome`](crate::control::Outcome)
//! and [`Fallible`](crate::control::Fallible) implement all three, which is
//! what lets [`comprehend!`](crate::comprehend) treat them uniformly.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::{Fallible, Maybe, Outcome};
//! use lambdakit::typeclass::Functor;
//!
//! fn increment<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Maybe::some(1)), Maybe::some(2));
//! assert_eq!(increment(Outcome::success(1)), Outcome::success(2));
//! assert_eq!(increment(Fallible::<i32, ()>::success(1)), Fallible::success(2));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
