//! Brace Expand - shell-style brace expansion
//!
//! Expands `{...}` patterns (comma alternatives and numeric or alphabetic
//! ranges) into the ordered list of strings they denote, matching bash
//! semantics including its documented quirks. Results are memoized through
//! three bounded LRU caches owned by each [`BraceExpander`] instance.
//!
//! ```
//! use brace_expand::BraceExpander;
//!
//! let mut expander = BraceExpander::new();
//! assert_eq!(expander.expand("a{d,c,b}e"), vec!["ade", "ace", "abe"]);
//! assert_eq!(expander.expand("{01..03}"), vec!["01", "02", "03"]);
//! ```

pub mod cache;
pub mod config;
pub mod expand;

pub use cache::{CacheStats, TierStats};
pub use config::CacheConfig;
pub use expand::BraceExpander;
