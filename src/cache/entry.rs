// Cache entry holding a type-erased value and its write timestamp.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// A stored value with the time it was written.
#[derive(Clone)]
pub struct CacheEntry {
    /// The cached value. Its concrete type is whatever the producer returned.
    value: Arc<dyn Any + Send + Sync>,
    /// When the value was stored.
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry stamped with the given instant.
    pub fn new<T: Send + Sync + 'static>(value: T, stored_at: DateTime<Utc>) -> Self {
        Self {
            value: Arc::new(value),
            stored_at,
        }
    }

    /// Time elapsed since the entry was stored.
    /// A clock that moved backwards yields `Duration::MAX`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.stored_at)
            .to_std()
            .unwrap_or(Duration::MAX)
    }

    /// Check if the entry is still within its TTL.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }

    /// Check if the entry has outlived its TTL.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        !self.is_fresh(now, ttl)
    }

    /// Borrow the value as `T`, if that is what was stored.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("stored_at", &self.stored_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_within_ttl() {
        let now = Utc::now();
        let entry = CacheEntry::new("test", now - chrono::Duration::seconds(60));

        assert!(entry.is_fresh(now, Duration::from_secs(300)));
        assert!(!entry.is_expired(now, Duration::from_secs(300)));
    }

    #[test]
    fn test_expires_at_ttl_boundary() {
        let now = Utc::now();
        let entry = CacheEntry::new("test", now - chrono::Duration::seconds(300));

        // Exactly ttl old is no longer fresh
        assert!(entry.is_expired(now, Duration::from_secs(300)));
    }

    #[test]
    fn test_zero_ttl_never_fresh() {
        let now = Utc::now();
        let entry = CacheEntry::new(1u32, now);

        assert!(entry.is_expired(now, Duration::ZERO));
    }

    #[test]
    fn test_future_timestamp_is_expired() {
        let now = Utc::now();
        let entry = CacheEntry::new(1u32, now + chrono::Duration::seconds(10));

        assert_eq!(entry.age(now), Duration::MAX);
        assert!(entry.is_expired(now, Duration::from_secs(3600)));
    }

    #[test]
    fn test_downcast() {
        let entry = CacheEntry::new(String::from("26.1.1"), Utc::now());

        assert_eq!(entry.downcast_ref::<String>().map(String::as_str), Some("26.1.1"));
        assert!(entry.downcast_ref::<u64>().is_none());
    }
}
