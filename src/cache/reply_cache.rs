//! Time-limited cache of chat replies keyed by normalized message.
//!
//! The cache is thread-safe and cheap to clone (shared state behind `Arc`).
//! It must be cleared whenever the corpus changes.

use crate::models::ChatReply;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Entries kept before expired ones are swept.
const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
struct CacheEntry {
    reply: ChatReply,
    inserted_at: Instant,
}

/// Reply cache with time-based expiration.
#[derive(Clone)]
pub struct ReplyCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
    capacity: usize,
}

impl ReplyCache {
    /// Create a cache with the given TTL in seconds. A TTL of 0 disables caching.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_capacity(ttl_seconds, DEFAULT_CAPACITY)
    }

    /// Create a cache with an explicit entry limit.
    pub fn with_capacity(ttl_seconds: u64, capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_secs(ttl_seconds),
            capacity: capacity.max(1),
        }
    }

    /// Whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Get a cached reply if present and not expired.
    pub fn get(&self, normalized: &str) -> Option<ChatReply> {
        if !self.is_enabled() {
            return None;
        }

        let now = Instant::now();
        let entries = self.entries.read().ok()?;
        entries
            .get(normalized)
            .filter(|entry| now.duration_since(entry.inserted_at) < self.ttl)
            .map(|entry| entry.reply.clone())
    }

    /// Cache a reply.
    ///
    /// When the cache is full, expired entries are swept first; if it is still
    /// full, everything is dropped.
    pub fn insert(&self, normalized: String, reply: ChatReply) {
        if !self.is_enabled() {
            return;
        }

        let now = Instant::now();
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.capacity && !entries.contains_key(&normalized) {
                entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
                if entries.len() >= self.capacity {
                    tracing::debug!(capacity = self.capacity, "Reply cache full, clearing");
                    entries.clear();
                }
            }
            entries.insert(
                normalized,
                CacheEntry {
                    reply,
                    inserted_at: now,
                },
            );
        }
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Drop expired entries.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
        }
    }

    /// Number of entries (including expired ones not yet swept).
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for ReplyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyCache")
            .field("ttl", &self.ttl)
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReplySource;
    use std::thread;

    fn reply(text: &str) -> ChatReply {
        ChatReply::certain(text, ReplySource::Rule)
    }

    #[test]
    fn test_insert_and_get() {
        let cache = ReplyCache::new(60);
        cache.insert("hostel fees".to_string(), reply("fees"));

        assert_eq!(cache.get("hostel fees").unwrap().reply, "fees");
        assert!(cache.get("library").is_none());
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let cache = ReplyCache::new(0);
        assert!(!cache.is_enabled());
        cache.insert("hostel".to_string(), reply("hostel"));

        assert!(cache.get("hostel").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = ReplyCache::new(1);
        cache.insert("canteen".to_string(), reply("canteen"));
        assert!(cache.get("canteen").is_some());

        thread::sleep(Duration::from_millis(1100));

        assert!(cache.get("canteen").is_none());
        assert_eq!(cache.len(), 1);
        cache.cleanup_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_limit() {
        let cache = ReplyCache::with_capacity(60, 2);
        cache.insert("a".to_string(), reply("a"));
        cache.insert("b".to_string(), reply("b"));
        cache.insert("c".to_string(), reply("c"));

        assert!(cache.len() <= 2);
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_clear_shared_between_clones() {
        let cache = ReplyCache::new(60);
        let other = cache.clone();
        cache.insert("wifi".to_string(), reply("wifi"));

        assert!(other.get("wifi").is_some());
        other.clear();
        assert!(cache.get("wifi").is_none());
    }
}
