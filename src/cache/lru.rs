//! LRU Cache Module
//!
//! Bounded string-keyed cache with least-recently-used eviction.

use std::collections::{HashMap, VecDeque};

use crate::cache::CacheStats;

// == LRU Cache ==
/// String-keyed cache that evicts the least recently used entry at capacity.
///
/// Access order lives in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// A capacity of zero disables the cache: every lookup misses and nothing
/// is ever stored.
#[derive(Debug)]
pub struct LruCache<V> {
    /// Key-value storage
    entries: HashMap<String, V>,
    /// Order of keys by access time
    order: VecDeque<String>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> LruCache<V> {
    // == Constructor ==
    /// Creates a new empty cache with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves a value by key, promoting the key to most recently used.
    ///
    /// Returns a clone of the stored value, or None on a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(value) = self.entries.get(key) {
            let value = value.clone();
            self.stats.record_hit();
            self.touch(key);
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Insert ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// If the key already exists, the value is overwritten and the key is
    /// promoted. If the cache is at capacity, the least recently used entry
    /// is evicted first.
    pub fn insert(&mut self, key: String, value: V) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.contains_key(&key) {
            self.entries.insert(key.clone(), value);
            self.touch(&key);
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_back() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), value);
        self.order.push_front(key);
    }

    // == Touch ==
    /// Marks a key as most recently used.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }

    // == Clear ==
    /// Drops all entries. Hit/miss/eviction counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without touching it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }
}
