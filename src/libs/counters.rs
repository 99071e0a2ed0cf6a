//! Home page counters with time-based revalidation.

use super::messages::Message;
use super::store::{StoreResult, TaskStore};
use parking_lot::RwLock;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Total documents across all owners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HomeCounters {
    pub tasks: usize,
    pub comments: usize,
}

/// Caches [`HomeCounters`] for `interval`.
///
/// A failed refresh keeps serving the previous value; only a cold cache
/// surfaces the store error.
pub struct CounterCache {
    store: TaskStore,
    interval: Duration,
    cached: RwLock<Option<(Instant, HomeCounters)>>,
}

impl CounterCache {
    pub fn new(store: TaskStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            cached: RwLock::new(None),
        }
    }

    pub fn get(&self) -> StoreResult<HomeCounters> {
        if let Some((at, counters)) = *self.cached.read() {
            if at.elapsed() < self.interval {
                return Ok(counters);
            }
        }

        match self.store.counts() {
            Ok(counters) => {
                tracing::debug!("{}", Message::CountersRefreshed(counters.tasks, counters.comments));
                *self.cached.write() = Some((Instant::now(), counters));
                Ok(counters)
            }
            Err(e) => {
                let stale = *self.cached.read();
                match stale.map(|(_, counters)| counters) {
                    Some(counters) => {
                        tracing::error!("{}", Message::CountersRefreshFailed(e.to_string()));
                        Ok(counters)
                    }
                    None => Err(e),
                }
            }
        }
    }

    /// Forces the next [`get`](Self::get) to hit the store.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}
