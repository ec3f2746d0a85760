//! Fan-out of change events to any number of async receivers.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
};

/// Broadcasts events to every live subscriber.
///
/// Each subscriber gets its own unbounded channel, so broadcasting never
/// blocks. Receivers that were dropped are pruned on the next broadcast.
#[derive(Debug)]
pub struct ChangeFeed<E> {
    subscribers: Arc<RwLock<Vec<Sender<E>>>>,
}

impl<E> Clone for ChangeFeed<E> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<E> Default for ChangeFeed<E> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Clone> ChangeFeed<E> {
    /// Creates a feed with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `event` to all subscribers.
    ///
    /// # Returns
    ///
    /// The number of subscribers the event was delivered to.
    pub fn broadcast(&self, event: &E) -> usize {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
        subscribers.len()
    }

    /// Registers a new subscriber.
    ///
    /// # Returns
    ///
    /// A receiver for all events broadcast from now on.
    pub fn subscribe(&self) -> Receiver<E> {
        let (tx, rx) = unbounded();
        self.subscribers.write().push(tx);
        rx
    }

    /// Number of subscribers still registered.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

#[cfg(test)]
mod tests {
    use crate::state::feed::ChangeFeed;

    #[test]
    fn test_broadcast_reaches_all_subscribers() {
        let feed = ChangeFeed::new();
        let first = feed.subscribe();
        let second = feed.subscribe();

        assert_eq!(feed.broadcast(&7), 2);
        assert_eq!(first.try_recv().unwrap(), 7);
        assert_eq!(second.try_recv().unwrap(), 7);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let feed = ChangeFeed::new();
        let kept = feed.subscribe();
        drop(feed.subscribe());
        assert_eq!(feed.subscriber_count(), 2);

        assert_eq!(feed.broadcast(&"night"), 1);
        assert_eq!(feed.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), "night");
    }
}
