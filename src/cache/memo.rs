// TTL memo cache shared by all data-fetching services.
// Returns a stored value while it is fresh, otherwise runs the caller's producer and stores the result.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::entry::CacheEntry;

/// Default TTL when the caller does not pick one: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Keyed memoization with lazy TTL expiry.
///
/// Expiry is evaluated only when a key is looked up, so stale entries stay in
/// the map (and count towards [`MemoCache::size`]) until the next `get` for
/// that key refreshes them.
///
/// The entries lock is held only for synchronous map access and never across
/// a producer await. Two concurrent misses on the same key therefore both run
/// their producers, and the later write wins.
pub struct MemoCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoCache {
    /// Create an empty cache using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty cache that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Get the value for `key`, producing it with [`DEFAULT_TTL`] on a miss.
    pub async fn get<T, E, F, Fut>(&self, key: &str, producer: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.get_with_ttl(key, producer, DEFAULT_TTL).await
    }

    /// Get the value for `key` if it was stored less than `ttl` ago.
    ///
    /// On a miss the producer runs once. A successful result replaces any
    /// previous entry; a failure is returned unchanged and leaves the entry
    /// exactly as it was.
    pub async fn get_with_ttl<T, E, F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Duration,
    ) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.lookup::<T>(key, ttl) {
            debug!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, ?ttl, "cache miss");
        let value = producer().await?;
        self.store(key, value.clone());

        Ok(value)
    }

    /// Delete the entry for `key`, if any.
    pub fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
        debug!(key, "cache entry removed");
    }

    /// Delete every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
        debug!("cache cleared");
    }

    /// Number of stored entries, including stale ones not yet revisited.
    pub fn size(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when no entries are stored, fresh or stale.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Return a clone of the stored value if it is fresh and of type `T`.
    fn lookup<T: Clone + 'static>(&self, key: &str, ttl: Duration) -> Option<T> {
        let now = self.clock.now();
        let entries = self.entries.lock();
        let entry = entries.get(key)?;

        if entry.is_expired(now, ttl) {
            return None;
        }

        match entry.downcast_ref::<T>() {
            Some(value) => Some(value.clone()),
            None => {
                warn!(
                    key,
                    expected = std::any::type_name::<T>(),
                    "cached value has a different type, refreshing"
                );
                None
            }
        }
    }

    fn store<T: Send + Sync + 'static>(&self, key: &str, value: T) {
        let entry = CacheEntry::new(value, self.clock.now());
        self.entries.lock().insert(key.to_string(), entry);
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}
