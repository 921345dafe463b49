//! TTL Result Cache
//!
//! Thread-safe mapping from query key to a cached payload with an expiry
//! timestamp. An entry is logically absent once its expiry passes; reads treat
//! expired entries as a miss and evict them lazily.

use super::types::now_ms;

use dashmap::DashMap;
use std::time::Duration;

/// A single cached lookup result.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: String,
    /// Timestamp (ms) after which the entry no longer exists logically.
    expires_at: u64,
}

/// Thread-safe TTL cache for finished lookups.
///
/// The map's shard lock is the only exclusive section and is held just across
/// the table operation itself, never across remote work.
pub struct ResultCache {
    entries: DashMap<String, CacheEntry>,
}

impl ResultCache {
    /// Creates a new, empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the payload if an entry exists and has not expired.
    ///
    /// An expired entry counts as a miss and is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) if now_ms() < entry.expires_at => return Some(entry.payload.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            // Re-check under the entry lock: a concurrent set may have
            // refreshed the entry since we looked.
            self.entries
                .remove_if(key, |_, entry| now_ms() >= entry.expires_at);
        }

        None
    }

    /// Stores a payload with `expires_at = now + ttl`, overwriting any
    /// existing entry for the key.
    pub fn set(&self, key: &str, payload: String, ttl: Duration) {
        let entry = CacheEntry {
            payload,
            expires_at: now_ms() + ttl.as_millis() as u64,
        };
        self.entries.insert(key.to_string(), entry);
    }

    /// Removes an entry unconditionally.
    pub fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Number of entries currently stored, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
