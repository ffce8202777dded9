//! Configuration Module
//!
//! Handles loading cache capacities from environment variables.

use std::env;

/// Cache capacity configuration.
///
/// All values can be configured via environment variables with sensible
/// defaults. A capacity of zero disables the corresponding cache without
/// affecting expansion output.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum entries in the top-level expansion cache
    pub expansion_capacity: usize,
    /// Maximum entries in the comma-split cache
    pub parse_capacity: usize,
    /// Maximum entries in the sub-expansion cache
    pub recursion_capacity: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPANSION_CACHE_CAPACITY` - Top-level result cache (default: 500)
    /// - `PARSE_CACHE_CAPACITY` - Comma-split cache (default: 250)
    /// - `RECURSION_CACHE_CAPACITY` - Sub-expansion cache (default: 750)
    pub fn from_env() -> Self {
        Self {
            expansion_capacity: env::var("EXPANSION_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            parse_capacity: env::var("PARSE_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            recursion_capacity: env::var("RECURSION_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(750),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expansion_capacity: 500,
            parse_capacity: 250,
            recursion_capacity: 750,
        }
    }
}
