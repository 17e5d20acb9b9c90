//! # lambdakit
//!
//! A small functional programming toolkit: optional values, outcomes with a
//! message or a typed error, comprehension-style combinators, and a
//! concurrency-safe expiring single-value cache.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe), [`Outcome`](control::Outcome),
//!   [`Fallible`](control::Fallible)
//! - **Type Classes**: [`Functor`](typeclass::Functor) and
//!   [`Monad`](typeclass::Monad) over the containers
//! - **Comprehensions**: the [`comprehend!`] macro
//! - **Async Lifting**: combinators on futures yielding a container
//! - **Cache**: [`LifetimeManager`](control::LifetimeManager)
//!
//! ## Feature Flags
//!
//! - `async` (default): `LifetimeManager`, built on `tokio` and `tracing`
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdakit::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| ErrorMessage::new(error.to_string()).expect("parse errors are not blank"))
//!         .into()
//! }
//!
//! let sum = comprehend! {
//!     a <= parse("40");
//!     b <= parse("2");
//!     yield a + b
//! };
//! assert_eq!(sum.to_string(), "Success: 42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, type classes, lifting traits, and macros.
///
/// # Usage
///
/// ```rust
/// use lambdakit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::error::*;
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod control;
pub mod effect;
pub mod error;
pub mod typeclass;
