//! Cache Tier Module
//!
//! Bundles the three independently bounded LRU caches used by the
//! expansion engine: top-level results, comma-split results, and
//! sub-expansion results.

use serde::Serialize;

use crate::cache::{CacheStats, LruCache};
use crate::config::CacheConfig;

// == Cache Tier ==
/// The engine's three memoization caches.
///
/// Each cache is keyed by the exact input string it memoizes. The same
/// string may appear in more than one cache with unrelated values and
/// independent eviction timing.
#[derive(Debug)]
pub struct CacheTier {
    /// Top-level expansion results, keyed by the original pattern
    pub(crate) expansion: LruCache<Vec<String>>,
    /// Comma-split parts, keyed by group body
    pub(crate) parse: LruCache<Vec<String>>,
    /// Sub-expansion results for recursive (non-top) calls
    pub(crate) recursion: LruCache<Vec<String>>,
}

impl CacheTier {
    // == Constructor ==
    /// Creates the tier with capacities taken from the given config.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            expansion: LruCache::new(config.expansion_capacity),
            parse: LruCache::new(config.parse_capacity),
            recursion: LruCache::new(config.recursion_capacity),
        }
    }

    // == Clear All ==
    /// Drops all entries from all three caches.
    pub fn clear_all(&mut self) {
        self.expansion.clear();
        self.parse.clear();
        self.recursion.clear();
    }

    // == Stats ==
    /// Returns a snapshot of all three caches' statistics.
    pub fn stats(&self) -> TierStats {
        TierStats {
            expansion: self.expansion.stats(),
            parse: self.parse.stats(),
            recursion: self.recursion.stats(),
        }
    }
}

impl Default for CacheTier {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

// == Tier Stats ==
/// Statistics snapshot across the three caches.
#[derive(Debug, Clone, Serialize)]
pub struct TierStats {
    pub expansion: CacheStats,
    pub parse: CacheStats,
    pub recursion: CacheStats,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_capacities_from_config() {
        let config = CacheConfig {
            expansion_capacity: 5,
            parse_capacity: 3,
            recursion_capacity: 7,
        };
        let tier = CacheTier::new(&config);

        assert_eq!(tier.expansion.capacity(), 5);
        assert_eq!(tier.parse.capacity(), 3);
        assert_eq!(tier.recursion.capacity(), 7);
    }

    #[test]
    fn test_tier_default_capacities() {
        let tier = CacheTier::default();

        assert_eq!(tier.expansion.capacity(), 500);
        assert_eq!(tier.parse.capacity(), 250);
        assert_eq!(tier.recursion.capacity(), 750);
    }

    #[test]
    fn test_tier_clear_all() {
        let mut tier = CacheTier::default();

        tier.expansion.insert("a".to_string(), vec!["a".to_string()]);
        tier.parse.insert("b".to_string(), vec!["b".to_string()]);
        tier.recursion.insert("c".to_string(), vec!["c".to_string()]);

        tier.clear_all();

        assert!(tier.expansion.is_empty());
        assert!(tier.parse.is_empty());
        assert!(tier.recursion.is_empty());
    }

    #[test]
    fn test_tier_caches_are_independent() {
        let mut tier = CacheTier::default();

        // The same key may live in several caches with unrelated values
        tier.expansion
            .insert("k".to_string(), vec!["expanded".to_string()]);
        tier.parse.insert("k".to_string(), vec!["split".to_string()]);

        assert_eq!(tier.expansion.get("k"), Some(vec!["expanded".to_string()]));
        assert_eq!(tier.parse.get("k"), Some(vec!["split".to_string()]));
        assert_eq!(tier.recursion.get("k"), None);
    }

    #[test]
    fn test_tier_stats_snapshot() {
        let mut tier = CacheTier::default();

        tier.expansion.insert("a".to_string(), vec![]);
        tier.expansion.get("a");
        tier.recursion.get("missing");

        let stats = tier.stats();
        assert_eq!(stats.expansion.hits, 1);
        assert_eq!(stats.expansion.entries, 1);
        assert_eq!(stats.recursion.misses, 1);
        assert_eq!(stats.parse.entries, 0);
    }
}
