//! Observable values with change callbacks and async subscriptions.
//!
//! An [`Observable`] notifies only when a write actually changes the value.
//! Callbacks registered with [`Observable::on_change`] run synchronously on
//! the writing thread after the value is stored; [`Observable::subscribe`]
//! hands out async receivers for consumers that poll.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use {async_channel::Receiver, parking_lot::RwLock};

use crate::state::feed::ChangeFeed;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Shared, observable value.
///
/// Clones share the same value and observers.
pub struct Observable<T> {
    value: Arc<RwLock<T>>,
    listeners: Arc<RwLock<Vec<Listener<T>>>>,
    feed: ChangeFeed<T>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
            feed: self.feed.clone(),
        }
    }
}

impl<T: Debug> Debug for Observable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Observable")
            .field("value", &*self.value.read())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            listeners: Arc::new(RwLock::new(Vec::new())),
            feed: ChangeFeed::new(),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Replaces the value and notifies observers if it changed.
    ///
    /// # Returns
    ///
    /// `true` if the value changed and observers were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }

        // Snapshot so callbacks can register observers or write back.
        let listeners = self.listeners.read().clone();
        for listener in &listeners {
            listener(&value);
        }
        self.feed.broadcast(&value);
        true
    }

    /// Registers a callback run after every change.
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(callback));
    }

    /// Subscribes to future values.
    pub fn subscribe(&self) -> Receiver<T> {
        self.feed.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering::SeqCst},
    };

    use {parking_lot::Mutex, tokio::test as TokioTest};

    use crate::state::observable::Observable;

    #[test]
    fn test_set_notifies_callbacks() {
        let observable = Observable::new(50_i64);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        observable.on_change(move |value| sink.lock().push(*value));

        assert!(observable.set(10));
        assert!(observable.set(20));
        assert_eq!(observable.get(), 20);
        assert_eq!(*seen.lock(), vec![10, 20]);
    }

    #[test]
    fn test_unchanged_write_is_silent() {
        let observable = Observable::new("classic".to_string());
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        observable.on_change(move |_| {
            counter.fetch_add(1, SeqCst);
        });

        assert!(!observable.set("classic".to_string()));
        assert_eq!(calls.load(SeqCst), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let observable = Observable::new(false);
        let handle = observable.clone();

        handle.set(true);
        assert!(observable.get());
    }

    #[test]
    fn test_callback_may_write_back() {
        let observable = Observable::new(0_i64);
        let handle = observable.clone();
        observable.on_change(move |value| {
            if *value > 100 {
                handle.set(100);
            }
        });

        observable.set(250);
        assert_eq!(observable.get(), 100);
    }

    #[TokioTest]
    async fn test_subscribe_receives_changes() {
        let observable = Observable::new(false);
        let receiver = observable.subscribe();

        observable.set(true);
        observable.set(false);

        assert!(receiver.recv().await.unwrap());
        assert!(!receiver.recv().await.unwrap());
    }
}
