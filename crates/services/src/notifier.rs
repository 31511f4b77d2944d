//! # ChangeNotifier
//!
//! Process-wide synchronous pub/sub keyed by collection. A `publish` runs
//! every registered handler to completion, in registration order, before
//! returning. There is no queuing or coalescing: two writes in a tick mean
//! two fan-outs, which is acceptable because downstream re-reads are cheap
//! in-memory JSON parses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use domains::Collection;

type Handler = Arc<dyn Fn(Collection) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<Collection, Vec<(u64, Handler)>>,
}

/// Cloning a notifier yields a handle onto the same registry.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for change events on `collection`. The handler
    /// stays registered until the returned `Subscription` is unsubscribed
    /// or dropped.
    pub fn subscribe<F>(&self, collection: Collection, handler: F) -> Subscription
    where
        F: Fn(Collection) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .handlers
            .entry(collection)
            .or_default()
            .push((id, Arc::new(handler)));

        Subscription {
            collection,
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Synchronously invokes every handler registered for `collection`.
    ///
    /// Handlers are cloned out of the registry before the lock is
    /// released, so a handler may subscribe, unsubscribe, or publish
    /// without deadlocking; registrations made during a fan-out take
    /// effect from the next publish.
    pub fn publish(&self, collection: Collection) {
        let handlers: Vec<Handler> = {
            let registry = self.lock();
            registry
                .handlers
                .get(&collection)
                .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };

        for handler in handlers {
            handler(collection);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        // Handlers run outside the lock, so a panicking handler cannot
        // poison the registry; recover rather than propagate.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle for a registered change handler. Unsubscribes on drop;
/// `unsubscribe` may also be called explicitly and is idempotent.
pub struct Subscription {
    collection: Collection,
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            // The notifier itself is gone; nothing left to remove.
            return;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = registry.handlers.get_mut(&self.collection) {
            list.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_each_subscriber_once() {
        let notifier = ChangeNotifier::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let a = {
            let hits = Arc::clone(&first);
            notifier.subscribe(Collection::Playlists, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let b = {
            let hits = Arc::clone(&second);
            notifier.subscribe(Collection::Playlists, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        notifier.publish(Collection::Playlists);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        drop((a, b));
    }

    #[test]
    fn test_publish_is_scoped_to_collection() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let hits = Arc::clone(&hits);
            notifier.subscribe(Collection::Reports, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        notifier.publish(Collection::Admins);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let sub = {
            let hits = Arc::clone(&hits);
            notifier.subscribe(Collection::History, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        sub.unsubscribe();
        sub.unsubscribe();
        notifier.publish(Collection::History);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        {
            let hits = Arc::clone(&hits);
            let _sub = notifier.subscribe(Collection::Liked, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        notifier.publish(Collection::Liked);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_may_publish_reentrantly() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let _chain = {
            let inner = notifier.clone();
            notifier.subscribe(Collection::Communities, move |_| {
                inner.publish(Collection::Subscriptions);
            })
        };
        let _leaf = {
            let hits = Arc::clone(&hits);
            notifier.subscribe(Collection::Subscriptions, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        notifier.publish(Collection::Communities);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
