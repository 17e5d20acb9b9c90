//! Combinators lifted over futures that yield a container.
//!
//! Each extension trait is implemented for every future whose output is the
//! corresponding container. A lifted combinator awaits the inner future,
//! applies the same rule as its synchronous counterpart, and returns a new
//! future of the result. Nothing runs until the returned future is awaited.
//!
//! Short-circuiting is strictly left to right: when the first source is
//! absent or failed, continuations are never called, so the futures they
//! would create are never constructed.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::Outcome;
//! use lambdakit::effect::OutcomeFutureExt;
//!
//! async fn load_user(id: u32) -> Outcome<String> {
//!     Outcome::success(format!("user-{id}"))
//! }
//!
//! async fn load_quota(user: String) -> Outcome<u64> {
//!     Outcome::success(user.len() as u64 * 10)
//! }
//!
//! # futures::executor::block_on(async {
//! let quota = load_user(7).bind_async(load_quota).map_async(|q| q + 1).await;
//! assert_eq!(quota, Outcome::success(61));
//! # });
//! ```

use std::future::Future;

use crate::control::{ErrorMessage, Fallible, Maybe, Outcome};

// =============================================================================
// Maybe
// =============================================================================

/// Combinators for futures yielding a [`Maybe`].
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Lifted [`Maybe::map`].
    fn map_async<U, F>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(function) }
    }

    /// Lifted [`Maybe::bind`] with an asynchronous continuation.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => function(value).await,
                Maybe::None => Maybe::None,
            }
        }
    }

    /// Lifted [`Maybe::select_many`]: the second future is only created and
    /// awaited when the first source is present.
    fn select_many_async<U, V, F, Fut, P>(
        self,
        selector: F,
        projection: P,
    ) -> impl Future<Output = Maybe<V>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
        P: FnOnce(T, U) -> V,
    {
        async move {
            let Maybe::Some(first) = self.await else {
                return Maybe::None;
            };
            let second = selector(&first).await;
            second.map(|second| projection(first, second))
        }
    }

    /// Lifted [`Maybe::filter`].
    fn filter_async<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    /// Lifted [`Maybe::tap`].
    fn tap_async<A>(self, action: A) -> impl Future<Output = Maybe<T>>
    where
        A: FnOnce(&T),
    {
        async move { self.await.tap(action) }
    }

    /// Lifted [`Maybe::fold`].
    fn fold_async<U, N, P>(self, on_absent: N, on_present: P) -> impl Future<Output = U>
    where
        N: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        async move { self.await.fold(on_absent, on_present) }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

// =============================================================================
// Outcome
// =============================================================================

/// Combinators for futures yielding an [`Outcome`].
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Lifted [`Outcome::map`].
    fn map_async<U, F>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(function) }
    }

    /// Lifted [`Outcome::bind`] with an asynchronous continuation.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => function(value).await,
                Outcome::Failure(message) => Outcome::Failure(message),
            }
        }
    }

    /// Lifted [`Outcome::select_many`]: a failed first source propagates
    /// without the second future being created.
    fn select_many_async<U, V, F, Fut, P>(
        self,
        selector: F,
        projection: P,
    ) -> impl Future<Output = Outcome<V>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
        P: FnOnce(T, U) -> V,
    {
        async move {
            let first = match self.await {
                Outcome::Success(first) => first,
                Outcome::Failure(message) => return Outcome::Failure(message),
            };
            let second = selector(&first).await;
            second.map(|second| projection(first, second))
        }
    }

    /// Lifted [`Outcome::tap`].
    fn tap_async<A>(self, action: A) -> impl Future<Output = Outcome<T>>
    where
        A: FnOnce(&T),
    {
        async move { self.await.tap(action) }
    }

    /// Lifted [`Outcome::fold`].
    fn fold_async<U, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorMessage) -> U,
    {
        async move { self.await.fold(on_success, on_failure) }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

// =============================================================================
// Fallible
// =============================================================================

/// Combinators for futures yielding a [`Fallible`].
pub trait FallibleFutureExt<S, E>: Future<Output = Fallible<S, E>> + Sized {
    /// Lifted [`Fallible::map`].
    fn map_async<U, F>(self, function: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(S) -> U,
    {
        async move { self.await.map(function) }
    }

    /// Lifted [`Fallible::map_failure`].
    fn map_failure_async<G, F>(self, function: F) -> impl Future<Output = Fallible<S, G>>
    where
        F: FnOnce(E) -> G,
    {
        async move { self.await.map_failure(function) }
    }

    /// Lifted [`Fallible::bind`] with an asynchronous continuation.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
    {
        async move {
            match self.await {
                Fallible::Success(value) => function(value).await,
                Fallible::Failure(error) => Fallible::Failure(error),
            }
        }
    }

    /// Lifted [`Fallible::select_many`].
    fn select_many_async<U, V, F, Fut, P>(
        self,
        selector: F,
        projection: P,
    ) -> impl Future<Output = Fallible<V, E>>
    where
        F: FnOnce(&S) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
        P: FnOnce(S, U) -> V,
    {
        async move {
            let first = match self.await {
                Fallible::Success(first) => first,
                Fallible::Failure(error) => return Fallible::Failure(error),
            };
            let second = selector(&first).await;
            second.map(|second| projection(first, second))
        }
    }

    /// Lifted [`Fallible::tap`].
    fn tap_async<A>(self, action: A) -> impl Future<Output = Fallible<S, E>>
    where
        A: FnOnce(&S),
    {
        async move { self.await.tap(action) }
    }

    /// Lifted [`Fallible::fold`].
    fn fold_async<U, OnS, OnF>(self, on_success: OnS, on_failure: OnF) -> impl Future<Output = U>
    where
        OnS: FnOnce(S) -> U,
        OnF: FnOnce(E) -> U,
    {
        async move { self.await.fold(on_success, on_failure) }
    }
}

impl<S, E, Fut> FallibleFutureExt<S, E> for Fut where Fut: Future<Output = Fallible<S, E>> {}
