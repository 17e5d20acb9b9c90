//! Containers for absent and fallible values, and the expiring cache.
//!
//! - [`Maybe`]: A value that may be absent
//! - [`Outcome`]: Success with a value, or failure with an [`ErrorMessage`]
//! - [`Fallible`]: Success or failure with caller-chosen payload types
//! - [`LifetimeManager`]: A lazily produced, refreshable single instance
//!   (requires the `async` feature)
//!
//! The three containers are immutable value types. They never fail while
//! being combined; only constructors and the unchecked accessors report
//! errors (see [`crate::error`]).
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::{Fallible, Maybe, Outcome};
//!
//! let present = Maybe::from_nullable(Some(3));
//! let outcome = present.fold(
//!     || Outcome::failure("missing"),
//!     |value| Ok(Outcome::success(value * 2)),
//! );
//! assert_eq!(outcome, Ok(Outcome::success(6)));
//!
//! let typed: Fallible<i32, u16> = Err(404).into();
//! assert_eq!(typed.get_error(), Ok(&404));
//! ```

mod fallible;
#[cfg(feature = "async")]
mod lifetime_manager;
mod maybe;
mod message;
mod outcome;

pub use fallible::Fallible;
#[cfg(feature = "async")]
pub use lifetime_manager::LifetimeManager;
pub use maybe::Maybe;
pub use message::ErrorMessage;
pub use outcome::Outcome;
