//! Change feed and live task subscriptions.
//!
//! Every successful store write publishes a [`ChangeEvent`] on a broadcast
//! channel. A [`TaskSubscription`] listens for events touching its owner and
//! re-reads the owner's tasks, so each delivered list is a complete snapshot
//! rather than a delta. A lagging receiver just takes a fresh snapshot.

use super::messages::Message;
use super::store::{StoreResult, TaskStore};
use super::task::Task;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

const FEED_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Tasks { owner: String },
    Comments { task_id: String },
}

#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
    active: Arc<AtomicUsize>,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            tx,
            active: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ChangeFeed {
    pub fn publish(&self, event: ChangeEvent) {
        // No receivers is fine
        let _ = self.tx.send(event);
    }

    /// Number of live subscriptions currently held.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    fn acquire(&self, owner: &str) -> SubscriptionGuard {
        let count = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("{}", Message::SubscriptionAcquired(owner.to_string(), count));
        SubscriptionGuard {
            owner: owner.to_string(),
            active: Arc::clone(&self.active),
        }
    }
}

struct SubscriptionGuard {
    owner: String,
    active: Arc<AtomicUsize>,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        let count = self.active.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        tracing::debug!("{}", Message::SubscriptionReleased(self.owner.clone(), count));
    }
}

/// Live, newest-first view of one owner's tasks.
///
/// The first call to [`next`](Self::next) yields the current snapshot; every
/// later call waits for a write touching the owner and yields the new
/// snapshot. Dropping the subscription releases it.
pub struct TaskSubscription {
    owner: String,
    store: TaskStore,
    rx: broadcast::Receiver<ChangeEvent>,
    primed: bool,
    _guard: SubscriptionGuard,
}

impl TaskSubscription {
    pub(crate) fn new(store: TaskStore, feed: ChangeFeed, owner: &str) -> Self {
        // Receiver first, so no write between subscribe and the initial snapshot is missed
        let rx = feed.tx.subscribe();
        let guard = feed.acquire(owner);
        Self {
            owner: owner.to_string(),
            store,
            rx,
            primed: false,
            _guard: guard,
        }
    }

    /// `None` once the feed is closed.
    pub async fn next(&mut self) -> Option<StoreResult<Vec<Task>>> {
        if !self.primed {
            self.primed = true;
            return Some(self.snapshot().await);
        }

        loop {
            match self.rx.recv().await {
                Ok(ChangeEvent::Tasks { owner }) if owner == self.owner => {
                    return Some(self.snapshot().await);
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("{}", Message::SubscriptionLagged(self.owner.clone(), skipped));
                    return Some(self.snapshot().await);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// SQLite reads run on the blocking pool.
    async fn snapshot(&self) -> StoreResult<Vec<Task>> {
        let store = self.store.clone();
        let owner = self.owner.clone();
        tokio::task::spawn_blocking(move || store.own_tasks(&owner)).await?
    }
}
