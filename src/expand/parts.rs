//! Comma-Part Splitter Module
//!
//! Splits a group body on top-level commas, treating nested `{...}`
//! subsequences as atomic, so `a,{b,c},d` yields three parts.

use crate::cache::LruCache;
use crate::expand::balanced;

// == Split ==
/// Splits `body` on commas outside nested brace groups, memoized by the
/// exact body string.
///
/// An empty body yields a single empty part. With no nested group the
/// split is a plain comma split. With a nested group, the prefix is split,
/// the literal `{nested}` text is reattached to the last prefix part, and
/// the remainder after the group is split recursively and merged.
pub(crate) fn split_comma_parts(body: &str, cache: &mut LruCache<Vec<String>>) -> Vec<String> {
    if body.is_empty() {
        return vec![String::new()];
    }

    if let Some(parts) = cache.get(body) {
        return parts;
    }

    let parts = match balanced(body) {
        None => body.split(',').map(str::to_string).collect(),
        Some(m) => {
            let mut parts: Vec<String> = m.pre.split(',').map(str::to_string).collect();

            // The nested group stays atomic: glue it onto the last part
            if let Some(last) = parts.last_mut() {
                last.push('{');
                last.push_str(m.body);
                last.push('}');
            }

            if !m.post.is_empty() {
                let mut rest = split_comma_parts(m.post, cache).into_iter();
                if let Some(head) = rest.next() {
                    if let Some(last) = parts.last_mut() {
                        last.push_str(&head);
                    }
                }
                parts.extend(rest);
            }

            parts
        }
    };

    cache.insert(body.to_string(), parts.clone());
    parts
}
