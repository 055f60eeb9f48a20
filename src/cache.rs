//! Cycle-scoped memoization with time-to-live.
//!
//! Values are keyed by an owner id (e.g. a room name) and a string key,
//! and stamped with the planning cycle that computed them. A value
//! computed at cycle `c` with TTL `t` is served for cycles `c..c+t` and
//! recomputed lazily on the first access after that. Nothing is
//! recomputed eagerly.
//!
//! The current cycle is always passed in by the caller; the cache keeps
//! no clock of its own.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_cycle: u64,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, ttl: u64, now: u64) -> bool {
        now >= self.created_cycle && now - self.created_cycle < ttl
    }
}

/// Memoized values keyed by `(owner, key)` with cycle-count expiry.
#[derive(Debug, Clone)]
pub struct CycleCache<V> {
    entries: HashMap<String, HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> CycleCache<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value if still fresh, otherwise computes,
    /// stores, and returns a new one.
    pub fn get_or_compute<F>(&mut self, owner: &str, key: &str, ttl: u64, now: u64, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(owner, key, ttl, now) {
            tracing::trace!(owner, key, now, "cache hit");
            return value.clone();
        }

        tracing::trace!(owner, key, now, "cache miss");
        let value = compute();
        self.insert(owner, key, now, value.clone());
        value
    }

    /// Stores `value` stamped with cycle `now`, replacing any previous entry.
    pub fn insert(&mut self, owner: &str, key: &str, now: u64, value: V) {
        self.entries.entry(owner.to_string()).or_default().insert(
            key.to_string(),
            CacheEntry {
                value,
                created_cycle: now,
            },
        );
    }

    /// Returns the cached value if present and fresh.
    pub fn get(&self, owner: &str, key: &str, ttl: u64, now: u64) -> Option<&V> {
        self.entries
            .get(owner)
            .and_then(|keys| keys.get(key))
            .filter(|entry| entry.is_fresh(ttl, now))
            .map(|entry| &entry.value)
    }

    /// Drops every entry for `owner`. Returns how many were removed.
    pub fn invalidate(&mut self, owner: &str) -> usize {
        self.entries.remove(owner).map_or(0, |keys| keys.len())
    }

    /// Drops entries that are no longer fresh at `now`. Returns how many
    /// were removed.
    pub fn purge_expired(&mut self, now: u64, ttl: u64) -> usize {
        let mut removed = 0;
        for keys in self.entries.values_mut() {
            let before = keys.len();
            keys.retain(|_, entry| entry.is_fresh(ttl, now));
            removed += before - keys.len();
        }
        self.entries.retain(|_, keys| !keys.is_empty());
        removed
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V: Clone> Default for CycleCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
