//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the LRU invariants: bounded size, recency-driven
//! eviction, and statistics accuracy under arbitrary operation sequences.

use proptest::prelude::*;

use crate::cache::LruCache;

// == Test Configuration ==
const TEST_CAPACITY: usize = 8;

// == Strategies ==
/// Generates cache keys from a small alphabet so collisions are common
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,3}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: u32 },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>())
            .prop_map(|(key, value)| CacheOp::Insert { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // *For any* sequence of operations, the cache never holds more entries
    // than its configured capacity.
    #[test]
    fn prop_capacity_never_exceeded(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let mut cache = LruCache::new(TEST_CAPACITY);

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => cache.insert(key, value),
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Clear => cache.clear(),
            }
            prop_assert!(cache.len() <= TEST_CAPACITY, "capacity exceeded");
        }
    }

    // *For any* sequence of operations, hit and miss counters match the
    // lookups that actually occurred.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let mut cache = LruCache::new(TEST_CAPACITY);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => cache.insert(key, value),
                CacheOp::Get { key } => {
                    match cache.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Clear => cache.clear(),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(stats.entries, cache.len(), "entry count mismatch");
    }

    // *For any* key-value pair, an insert followed immediately by a get
    // returns the inserted value.
    #[test]
    fn prop_get_after_insert(key in key_strategy(), value in any::<u32>()) {
        let mut cache = LruCache::new(TEST_CAPACITY);
        cache.insert(key.clone(), value);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // *For any* overfilled cache, the most recently inserted key is always
    // retained: eviction only ever removes older entries.
    #[test]
    fn prop_newest_key_survives(keys in prop::collection::vec(key_strategy(), 1..50)) {
        let mut cache = LruCache::new(TEST_CAPACITY);

        for (i, key) in keys.iter().enumerate() {
            cache.insert(key.clone(), i as u32);
            prop_assert_eq!(cache.get(key), Some(i as u32), "newest key evicted");
        }
    }

    // *For any* state, clear empties the cache.
    #[test]
    fn prop_clear_empties(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut cache = LruCache::new(TEST_CAPACITY);

        for (i, key) in keys.into_iter().enumerate() {
            cache.insert(key, i as u32);
        }
        cache.clear();

        prop_assert!(cache.is_empty());
    }
}
