//! Comprehension-style composition of monadic pipelines.
//!
//! This module provides the [`comprehend!`] macro, which flattens chains of
//! `bind` calls over [`Maybe`](crate::control::Maybe),
//! [`Outcome`](crate::control::Outcome) and
//! [`Fallible`](crate::control::Fallible) into a list of clauses.
//!
//! # Syntax
//!
//! ```text
//! comprehend! {
//!     pattern <= source;         // Bind
//!     let pattern = expression;  // Pure let binding
//!     yield expression           // Projection
//! }
//! ```
//!
//! Supported patterns are identifiers, tuples (`(a, b) <= source;`) and the
//! wildcard (`_ <= source;`).
//!
//! # Desugaring
//!
//! ```text
//! comprehend! { a <= ma; b <= mb; yield f(a, b) }
//! ```
//!
//! expands to
//!
//! ```text
//! Monad::flat_map(ma, move |a| Functor::fmap(mb, move |b| f(a, b)))
//! ```
//!
//! so `mb` is only evaluated when `ma` is present or successful.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::comprehend;
//! use lambdakit::control::Maybe;
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     match key {
//!         "width" => Maybe::some(4),
//!         "height" => Maybe::some(5),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let area = comprehend! {
//!     width <= lookup("width");
//!     height <= lookup("height");
//!     yield width * height
//! };
//! assert_eq!(area, Maybe::some(20));
//!
//! let volume = comprehend! {
//!     width <= lookup("width");
//!     depth <= lookup("depth");
//!     yield width * depth
//! };
//! assert_eq!(volume, Maybe::none());
//! ```

mod comprehend_macro;

pub use crate::comprehend;
