//! Asynchronous lifting of the container combinators.
//!
//! - [`MaybeFutureExt`]: combinators on `Future<Output = Maybe<T>>`
//! - [`OutcomeFutureExt`]: combinators on `Future<Output = Outcome<T>>`
//! - [`FallibleFutureExt`]: combinators on `Future<Output = Fallible<S, E>>`
//!
//! Suspension only happens where an inner future is awaited; no lock is
//! ever held by these combinators.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Maybe;
//! use lambdakit::effect::MaybeFutureExt;
//!
//! async fn fetch(id: u32) -> Maybe<u32> {
//!     if id < 10 { Maybe::some(id * 100) } else { Maybe::none() }
//! }
//!
//! # futures::executor::block_on(async {
//! let combined = fetch(1)
//!     .select_many_async(|first| fetch(*first / 50), |a, b| a + b)
//!     .await;
//! assert_eq!(combined, Maybe::some(300));
//!
//! let missing = fetch(11)
//!     .select_many_async(|_| async { Maybe::some(1) }, |a, b| a + b)
//!     .await;
//! assert_eq!(missing, Maybe::none());
//! # });
//! ```

mod async_lift;

pub use async_lift::{FallibleFutureExt, MaybeFutureExt, OutcomeFutureExt};
