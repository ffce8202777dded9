//! Recursive Expansion Engine Module
//!
//! The public entry point for brace expansion. Orchestrates the locator,
//! escape transformer, comma splitter, and sequence generator, memoizing
//! through the three-cache tier it owns.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::cache::{CacheTier, TierStats};
use crate::config::CacheConfig;
use crate::expand::escape::{escape, sentinels, unescape};
use crate::expand::parts::split_comma_parts;
use crate::expand::{balanced, classify, BodyClass};

// == Brace Expander ==
/// Shell-style brace expansion engine.
///
/// Owns its caches, so independent instances never share state. Expansion
/// is a pure function of the pattern: the caches only affect latency, never
/// output.
#[derive(Debug)]
pub struct BraceExpander {
    caches: CacheTier,
}

impl BraceExpander {
    // == Constructors ==
    /// Creates an expander with default cache capacities.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an expander with the given cache capacities.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            caches: CacheTier::new(&config),
        }
    }

    // == Expand ==
    /// Expands a brace pattern into the ordered list of strings it denotes.
    ///
    /// Total over all inputs: malformed nesting and malformed ranges come
    /// back as literal text. An empty pattern yields an empty list; a
    /// pattern without any brace byte is returned verbatim as a single
    /// element.
    pub fn expand(&mut self, pattern: &str) -> Vec<String> {
        if pattern.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.caches.expansion.get(pattern) {
            trace!(pattern, "top-level cache hit");
            return cached;
        }

        // Fast path: no braces at all
        if !pattern.as_bytes().iter().any(|&b| b == b'{' || b == b'}') {
            let result = vec![pattern.to_string()];
            self.caches.expansion.insert(pattern.to_string(), result.clone());
            return result;
        }

        // Bash 4.3 keeps the first two bytes of a leading `{}` literal, but
        // only at the top level: `{},a}b` stays unexpanded while `a{},b}c`
        // expands. Escaping the pair reproduces that.
        let fixed: Cow<'_, str> = if pattern.starts_with("{}") {
            debug!(pattern, "leading {{}} kept literal");
            Cow::Owned(format!("\\{{\\}}{}", &pattern[2..]))
        } else {
            Cow::Borrowed(pattern)
        };

        let escaped = escape(&fixed);
        let result: Vec<String> = self
            .expand_inner(&escaped, true)
            .iter()
            .map(|s| unescape(s))
            .collect();

        self.caches.expansion.insert(pattern.to_string(), result.clone());
        result
    }

    // == Clear Cache ==
    /// Drops all memoized state. Subsequent calls recompute from scratch;
    /// output is unaffected.
    pub fn clear_cache(&mut self) {
        self.caches.clear_all();
    }

    // == Cache Stats ==
    /// Returns a statistics snapshot for the three caches.
    pub fn cache_stats(&self) -> TierStats {
        self.caches.stats()
    }

    // == Recursive Expansion ==
    /// Expands one (already escaped) string. Non-top calls memoize through
    /// the sub-expansion cache; the top-level call uses the separate
    /// top-level cache in `expand` so the two lifecycles stay distinct.
    fn expand_inner(&mut self, s: &str, is_top: bool) -> Vec<String> {
        if !is_top {
            if let Some(cached) = self.caches.recursion.get(s) {
                trace!(input = s, "sub-expansion cache hit");
                return cached;
            }
        }

        let Some(m) = balanced(s) else {
            // No expandable group: the string is its own expansion
            return self.finish(s, is_top, vec![s.to_string()]);
        };

        let pre = m.pre;
        let post = if m.post.is_empty() {
            vec![String::new()]
        } else {
            self.expand_inner(m.post, false)
        };

        // `${...}` looks like shell parameter expansion; pass the group
        // through untouched, expanding only the remainder.
        if pre.ends_with('$') {
            debug!(input = s, "dollar-prefixed group kept literal");
            let expansions = post
                .iter()
                .map(|p| format!("{pre}{{{}}}{p}", m.body))
                .collect();
            return self.finish(s, is_top, expansions);
        }

        let class = classify(m.body);
        let is_sequence = matches!(class, BodyClass::Numeric(_) | BodyClass::Alpha(_));

        let members = match class {
            BodyClass::Numeric(spec) | BodyClass::Alpha(spec) => spec.members(),
            BodyClass::CommaList => {
                let parts = split_comma_parts(m.body, &mut self.caches.parse);
                if parts.len() == 1 {
                    // The only comma sat inside a nested group, as in
                    // x{{a,b}}y: expand the inner group and re-wrap each
                    // alternative in braces.
                    let rewrapped: Vec<String> = self
                        .expand_inner(&parts[0], false)
                        .into_iter()
                        .map(embrace)
                        .collect();
                    if rewrapped.len() == 1 {
                        // Still a single alternative; skip the product step
                        let result = post
                            .iter()
                            .map(|p| format!("{pre}{}{p}", rewrapped[0]))
                            .collect();
                        return self.finish(s, is_top, result);
                    }
                    self.expand_parts(&rewrapped)
                } else {
                    self.expand_parts(&parts)
                }
            }
            BodyClass::Literal => {
                // `{a},b}` style input: when the remainder carries a comma
                // and a closing brace, bash reads the current `}` as
                // literal. Retry with it escaped to a sentinel.
                if has_dangling_comma(m.post) {
                    debug!(input = s, "dangling comma repair");
                    let retry =
                        format!("{pre}{{{}{}{}", m.body, sentinels().close, m.post);
                    return self.expand_inner(&retry, false);
                }
                return self.finish(s, is_top, vec![s.to_string()]);
            }
        };

        // Cross product: members vary slowest, post alternatives fastest.
        // At top level an all-empty concatenation from a comma group is
        // dropped, matching bash; sequence members always survive.
        let mut expansions = Vec::with_capacity(members.len().saturating_mul(post.len()));
        for member in &members {
            for p in &post {
                let expansion = format!("{pre}{member}{p}");
                if !is_top || is_sequence || !expansion.is_empty() {
                    expansions.push(expansion);
                }
            }
        }

        self.finish(s, is_top, expansions)
    }

    /// Expands every comma part independently and concatenates the
    /// alternatives in part order.
    fn expand_parts(&mut self, parts: &[String]) -> Vec<String> {
        let mut members = Vec::new();
        for part in parts {
            members.extend(self.expand_inner(part, false));
        }
        members
    }

    /// Memoizes and returns a finished sub-expansion.
    fn finish(&mut self, s: &str, is_top: bool, result: Vec<String>) -> Vec<String> {
        if !is_top {
            self.caches.recursion.insert(s.to_string(), result.clone());
        }
        result
    }
}

impl Default for BraceExpander {
    fn default() -> Self {
        Self::new()
    }
}

// == Helpers ==
/// Wraps a string back into a brace pair.
fn embrace(s: String) -> String {
    format!("{{{s}}}")
}

/// True if `post` contains a comma (not directly followed by another
/// comma) with a closing brace somewhere after it.
fn has_dangling_comma(post: &str) -> bool {
    let bytes = post.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b',' && bytes.get(i + 1) != Some(&b',') {
            return bytes[i + 1..].contains(&b'}');
        }
    }
    false
}
