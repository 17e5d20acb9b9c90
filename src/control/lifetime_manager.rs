//! Single-slot expiring cache.
//!
//! [`LifetimeManager<T>`] lazily produces one instance of `T` with an
//! asynchronous factory, hands out clones of it, and rebuilds it when an
//! expiration predicate says the cached instance is stale or when a caller
//! forces a refresh.
//!
//! # Concurrency
//!
//! The slot lives behind a [`tokio::sync::Mutex`] that stays locked while the
//! factory is awaited. At most one factory invocation is therefore in flight;
//! callers arriving during a refresh suspend on the lock and then observe the
//! freshly produced instance.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::control::LifetimeManager;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let generation = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&generation);
//! let manager: LifetimeManager<u32> = LifetimeManager::new(
//!     move || {
//!         let counter = Arc::clone(&counter);
//!         async move { counter.fetch_add(1, Ordering::SeqCst) + 1 }
//!     },
//!     |token| *token >= 2,
//! );
//!
//! assert_eq!(manager.receive(false).await, Ok(1));
//! assert_eq!(manager.receive(false).await, Ok(1));
//! assert_eq!(manager.receive(true).await, Ok(2));
//! // Token 2 is expired, so the next call rebuilds it.
//! assert_eq!(manager.receive(false).await, Ok(3));
//! # });
//! ```

use std::any::type_name;
use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use tokio::sync::Mutex;

use crate::error::LifetimeManagerError;

type Factory<T> = Box<dyn Fn() -> BoxFuture<'static, Option<T>> + Send + Sync>;
type Expiration<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A concurrency-guarded holder that lazily produces, caches, and refreshes
/// one instance of `T`.
///
/// The cached instance is never absent once initialized: a factory result of
/// `None` is rejected with [`LifetimeManagerError::NullInstance`] and the
/// previous instance stays in place.
pub struct LifetimeManager<T> {
    slot: Mutex<Option<T>>,
    factory: Factory<T>,
    expiration: Expiration<T>,
}

impl<T> LifetimeManager<T>
where
    T: Clone + Send + 'static,
{
    /// Creates an uninitialized manager.
    ///
    /// `factory` may resolve either to `T` or to `Option<T>`; a `None`
    /// result is treated as a failed refresh. `expiration` decides whether
    /// the cached instance must be rebuilt before it is handed out.
    ///
    /// Neither function is called until the first [`receive`](Self::receive).
    pub fn new<F, Fut, R, E>(factory: F, expiration: E) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Option<T>> + 'static,
        E: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            slot: Mutex::new(None),
            factory: Box::new(move || factory().map(Into::<Option<T>>::into).boxed()),
            expiration: Box::new(expiration),
        }
    }

    /// Returns the cached instance, producing a new one first if the slot is
    /// uninitialized, the expiration predicate reports the current instance
    /// as stale, or `force_refresh` is set.
    ///
    /// The conditions are checked in that order: once initialized, the
    /// predicate is consulted on every call, including forced ones.
    ///
    /// The call suspends while another caller holds the slot.
    ///
    /// # Errors
    ///
    /// Returns [`LifetimeManagerError::NullInstance`] if a refresh was needed
    /// and the factory produced no instance. The slot is left as it was.
    pub async fn receive(&self, force_refresh: bool) -> Result<T, LifetimeManagerError> {
        let mut slot = self.slot.lock().await;

        let reason = match slot.as_ref() {
            None => "uninitialized",
            // The predicate runs for every initialized receive, forced or not.
            Some(current) if (self.expiration)(current) => "expired",
            Some(_) if force_refresh => "forced",
            Some(current) => {
                tracing::trace!(cached_type = type_name::<T>(), "serving cached instance");
                return Ok(current.clone());
            }
        };

        tracing::debug!(cached_type = type_name::<T>(), reason, "refreshing cached instance");

        let Some(instance) = (self.factory)().await else {
            tracing::warn!(
                cached_type = type_name::<T>(),
                reason,
                "factory produced no instance; keeping previous state"
            );
            return Err(LifetimeManagerError::NullInstance {
                type_name: type_name::<T>(),
            });
        };

        *slot = Some(instance.clone());
        Ok(instance)
    }

    /// Equivalent to `receive(false)`.
    ///
    /// # Errors
    ///
    /// See [`receive`](Self::receive).
    pub async fn receive_cached(&self) -> Result<T, LifetimeManagerError> {
        self.receive(false).await
    }

    /// Returns `true` once an instance has been produced and not invalidated.
    pub async fn is_initialized(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Drops the cached instance so the next call rebuilds it.
    pub async fn invalidate(&self) {
        let previous = self.slot.lock().await.take();
        if previous.is_some() {
            tracing::debug!(cached_type = type_name::<T>(), "cached instance invalidated");
        }
    }
}

impl<T> fmt::Debug for LifetimeManager<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let initialized = self.slot.try_lock().map(|slot| slot.is_some()).ok();
        formatter
            .debug_struct("LifetimeManager")
            .field("type", &type_name::<T>())
            .field("initialized", &initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    assert_impl_all!(LifetimeManager<String>: Send, Sync);

    #[rstest]
    #[tokio::test]
    async fn factory_not_called_before_first_receive() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let manager: LifetimeManager<usize> = LifetimeManager::new(
            move || {
                let counter = Arc::clone(&counter);
                async move { counter.fetch_add(1, Ordering::SeqCst) }
            },
            |_| false,
        );

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!manager.is_initialized().await);
        assert_eq!(manager.receive(false).await, Ok(0));
        assert!(manager.is_initialized().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn invalidate_forces_rebuild() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let manager: LifetimeManager<usize> = LifetimeManager::new(
            move || {
                let counter = Arc::clone(&counter);
                async move { counter.fetch_add(1, Ordering::SeqCst) }
            },
            |_| false,
        );

        assert_eq!(manager.receive_cached().await, Ok(0));
        manager.invalidate().await;
        assert!(!manager.is_initialized().await);
        assert_eq!(manager.receive_cached().await, Ok(1));
    }

    #[rstest]
    fn debug_reports_initialization() {
        let manager: LifetimeManager<u8> = LifetimeManager::new(|| async { 1u8 }, |_| false);
        let rendered = format!("{manager:?}");
        assert!(rendered.contains("LifetimeManager"));
        assert!(rendered.contains("initialized: Some(false)"));
    }
}
