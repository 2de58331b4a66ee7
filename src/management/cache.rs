use std::{
    collections::{HashMap, VecDeque},
    future::Future,
    sync::Arc,
};

use tokio::sync::{Mutex, OnceCell};

use crate::types::Artist;

type CacheKey = (String, u32);
type Slot = Arc<OnceCell<Arc<Artist>>>;

/// Memoizes composite artist lookups by exact `(name, limit)`.
///
/// Keys are case-sensitive and not normalized; "beatles" and "The Beatles"
/// are different entries. Concurrent misses on the same key share one
/// computation: the first caller runs it, the others wait for its result.
pub struct LookupCache {
    capacity: Option<usize>,
    entries: Mutex<CacheEntries>,
}

#[derive(Default)]
struct CacheEntries {
    slots: HashMap<CacheKey, Slot>,
    order: VecDeque<CacheKey>,
}

impl LookupCache {
    /// Cache without a size bound, entries live as long as the process.
    pub fn unbounded() -> Self {
        Self {
            capacity: None,
            entries: Mutex::new(CacheEntries::default()),
        }
    }

    /// Cache holding at most `capacity` finished keys; the oldest finished
    /// key is evicted first. A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            entries: Mutex::new(CacheEntries::default()),
        }
    }

    pub fn new(capacity: Option<usize>) -> Self {
        match capacity {
            Some(c) => Self::with_capacity(c),
            None => Self::unbounded(),
        }
    }

    /// Returns the cached artist for `(name, limit)` or runs `compute`,
    /// stores its result and returns it.
    ///
    /// # Arguments
    ///
    /// * `name` - Artist name, compared exactly
    /// * `limit` - Album limit, part of the key
    /// * `compute` - Lookup to run on a miss; skipped on a hit and for
    ///   callers that arrive while another caller computes the same key
    ///
    /// # Returns
    ///
    /// The shared artist. Every caller for one key gets the same `Arc`.
    pub async fn get_or_compute<F, Fut>(&self, name: &str, limit: u32, compute: F) -> Arc<Artist>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Artist>,
    {
        let slot = self.slot((name.to_string(), limit)).await;

        slot.get_or_init(|| async {
            tracing::debug!("Artist cache miss for '{}' (limit {})", name, limit);
            Arc::new(compute().await)
        })
        .await
        .clone()
    }

    /// Cached artist for `(name, limit)`, if its computation has finished.
    pub async fn get(&self, name: &str, limit: u32) -> Option<Arc<Artist>> {
        let entries = self.entries.lock().await;
        entries
            .slots
            .get(&(name.to_string(), limit))
            .and_then(|slot| slot.get().cloned())
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.slots.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        entries.slots.clear();
        entries.order.clear();
    }

    async fn slot(&self, key: CacheKey) -> Slot {
        let mut entries = self.entries.lock().await;
        if let Some(slot) = entries.slots.get(&key) {
            return Arc::clone(slot);
        }

        let slot: Slot = Arc::new(OnceCell::new());
        entries.slots.insert(key.clone(), Arc::clone(&slot));
        entries.order.push_back(key);

        if let Some(capacity) = self.capacity {
            entries.evict_finished(capacity);
        }

        slot
    }
}

impl CacheEntries {
    /// Drops the oldest finished entries until at most `capacity` keys
    /// remain. Slots still being computed are moved to the back instead, so
    /// callers waiting on them keep sharing one computation; while every
    /// slot is in flight the cache may exceed `capacity`.
    fn evict_finished(&mut self, capacity: usize) {
        let mut remaining = self.order.len();
        while self.order.len() > capacity && remaining > 0 {
            remaining -= 1;
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            let in_flight = self
                .slots
                .get(&oldest)
                .is_some_and(|slot| !slot.initialized());
            if in_flight {
                self.order.push_back(oldest);
            } else {
                self.slots.remove(&oldest);
            }
        }
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
