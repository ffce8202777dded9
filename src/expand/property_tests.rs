//! Property-Based Tests for Expansion Module
//!
//! Uses proptest to verify the engine's observable contract: determinism,
//! cache transparency, totality, and cross-product structure.

use proptest::prelude::*;

use crate::config::CacheConfig;
use crate::expand::BraceExpander;

// == Strategies ==
/// Plain literal text: no braces, no backslash, no comma
fn literal_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9./_-]{0,8}".prop_map(|s| s)
}

/// A comma group with 1..4 non-empty alternatives
fn group_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,4}".prop_map(|s| s), 1..4)
}

/// Arbitrary pattern text drawn from the metacharacter-heavy alphabet
fn hostile_strategy() -> impl Strategy<Value = String> {
    "[a-c0-2{},.\\\\$-]{0,10}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* pattern, two calls in a row return value-equal sequences.
    #[test]
    fn prop_determinism(pattern in hostile_strategy()) {
        let mut expander = BraceExpander::new();
        let first = expander.expand(&pattern);
        let second = expander.expand(&pattern);
        prop_assert_eq!(first, second);
    }

    // *For any* pattern, output is identical on a cold cache, a warm cache,
    // and after clear_cache: caching only affects latency.
    #[test]
    fn prop_cache_transparency(pattern in hostile_strategy()) {
        let mut expander = BraceExpander::new();
        let cold = expander.expand(&pattern);
        let warm = expander.expand(&pattern);
        expander.clear_cache();
        let fresh = expander.expand(&pattern);

        prop_assert_eq!(&cold, &warm);
        prop_assert_eq!(&cold, &fresh);
    }

    // *For any* pattern, a cacheless engine agrees with a caching one.
    #[test]
    fn prop_disabled_caches_agree(pattern in hostile_strategy()) {
        let mut cached = BraceExpander::new();
        let mut uncached = BraceExpander::with_config(CacheConfig {
            expansion_capacity: 0,
            parse_capacity: 0,
            recursion_capacity: 0,
        });
        prop_assert_eq!(cached.expand(&pattern), uncached.expand(&pattern));
    }

    // *For any* brace-free non-empty string, expansion is the identity
    // singleton.
    #[test]
    fn prop_braceless_identity(text in "[a-z0-9./_ -]{1,20}") {
        let mut expander = BraceExpander::new();
        prop_assert_eq!(expander.expand(&text), vec![text]);
    }

    // *For any* chain of comma groups, the result is the ordered cross
    // product of the groups' alternatives.
    #[test]
    fn prop_cross_product(groups in prop::collection::vec(group_strategy(), 1..4),
                          tail in literal_strategy()) {
        let mut pattern = String::new();
        for group in &groups {
            pattern.push('{');
            pattern.push_str(&group.join(","));
            pattern.push(',');
            // Force at least two alternatives so single-part groups do not
            // collapse to a literal brace pair
            pattern.push_str("zz");
            pattern.push('}');
        }
        pattern.push_str(&tail);

        let mut expected = vec![String::new()];
        for group in &groups {
            let mut alternatives = group.clone();
            alternatives.push("zz".to_string());
            let mut next = Vec::new();
            for prefix in &expected {
                for alt in &alternatives {
                    next.push(format!("{prefix}{alt}"));
                }
            }
            expected = next;
        }
        for e in &mut expected {
            e.push_str(&tail);
        }

        let mut expander = BraceExpander::new();
        prop_assert_eq!(expander.expand(&pattern), expected);
    }

    // *For any* small numeric range, the member count is |end - start| + 1.
    #[test]
    fn prop_sequence_length(start in -50i64..50, end in -50i64..50) {
        let mut expander = BraceExpander::new();
        let out = expander.expand(&format!("{{{start}..{end}}}"));
        prop_assert_eq!(out.len() as i64, (end - start).abs() + 1);
        prop_assert_eq!(&out[0], &start.to_string());
        prop_assert_eq!(&out[out.len() - 1], &end.to_string());
    }
}
