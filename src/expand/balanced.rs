//! Balanced-Pair Locator Module
//!
//! Finds the first top-level `{`/`}` pair in a string, respecting nesting.

// == Balanced Match ==
/// The three pieces around the first top-level brace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedMatch<'a> {
    /// Text before the opening brace
    pub pre: &'a str,
    /// Text strictly between the matched pair (may contain nested groups)
    pub body: &'a str,
    /// Text after the matching closing brace
    pub post: &'a str,
}

// == Locator ==
/// Locates the earliest `{` and its matching `}`, tracking nesting depth.
///
/// When the earliest `{` is never closed, the search falls back to the
/// next `{` and tries again, so `{a{b,c}` matches the inner pair with
/// `pre` = `{a`. The engine's dangling-comma repair builds exactly such
/// strings (it swallows a group's `}` into a sentinel), so the fallback is
/// reachable from ordinary input, not just malformed patterns.
///
/// Returns None only when no `{` at all is followed by a matching `}`.
/// Escaped braces have already been replaced by sentinels when this runs,
/// so every `{` seen here is structural.
pub fn balanced(s: &str) -> Option<BalancedMatch<'_>> {
    let bytes = s.as_bytes();
    let mut open = s.find('{')?;

    loop {
        match matching_close(bytes, open) {
            Some(close) => {
                return Some(BalancedMatch {
                    pre: &s[..open],
                    body: &s[open + 1..close],
                    post: &s[close + 1..],
                });
            }
            None => {
                // This { never closes; retry from the next one
                open = open + 1 + s[open + 1..].find('{')?;
            }
        }
    }
}

/// Scans from an opening brace for the `}` that returns its nesting depth
/// to zero. Braces are ASCII, so byte positions are char boundaries.
fn matching_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
