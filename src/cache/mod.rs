//! Cache Module
//!
//! Memoization layer for the expansion engine: a generic bounded LRU cache,
//! per-cache statistics, and the three-cache tier the engine owns.

mod lru;
mod stats;
mod tier;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use lru::LruCache;
pub use stats::CacheStats;
pub use tier::{CacheTier, TierStats};
