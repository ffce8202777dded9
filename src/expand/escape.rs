//! Escape Transformer Module
//!
//! Replaces backslash-escaped metacharacters with per-process sentinel
//! strings before expansion, and reverses the substitution on results.
//! Sentinels are built around NUL bytes plus a random tag picked once per
//! process, so they cannot collide with legitimate pattern text.

use std::borrow::Cow;
use std::sync::OnceLock;

// == Sentinels ==
/// The five placeholder strings, one per escapable metacharacter.
#[derive(Debug)]
pub(crate) struct Sentinels {
    pub slash: String,
    pub open: String,
    pub close: String,
    pub comma: String,
    pub period: String,
}

/// Returns the process-wide sentinel set, constructing it on first use.
pub(crate) fn sentinels() -> &'static Sentinels {
    static SENTINELS: OnceLock<Sentinels> = OnceLock::new();
    SENTINELS.get_or_init(|| {
        let tag: u64 = rand::random();
        Sentinels {
            slash: format!("\0SLASH{tag:016x}\0"),
            open: format!("\0OPEN{tag:016x}\0"),
            close: format!("\0CLOSE{tag:016x}\0"),
            comma: format!("\0COMMA{tag:016x}\0"),
            period: format!("\0PERIOD{tag:016x}\0"),
        }
    })
}

// == Escape ==
/// Substitutes sentinels for `\\`, `\{`, `\}`, `\,` and `\.`, in that order.
///
/// Fast path: when the input contains no backslash-escaped metacharacter
/// the input is returned borrowed, unmodified. The substitution order
/// matters (`\\` first) and must only run once per input, which the fast
/// path check guarantees for sentinel-free strings.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !has_escaped_meta(s) {
        return Cow::Borrowed(s);
    }
    let t = sentinels();
    Cow::Owned(
        s.replace("\\\\", &t.slash)
            .replace("\\{", &t.open)
            .replace("\\}", &t.close)
            .replace("\\,", &t.comma)
            .replace("\\.", &t.period),
    )
}

// == Unescape ==
/// Restores every sentinel to its literal metacharacter.
///
/// Always run on results, unconditionally: sequence generation may emit
/// fresh literal text with nothing to restore, and sentinels never occur
/// in ordinary output, so the extra passes are harmless.
pub(crate) fn unescape(s: &str) -> String {
    let t = sentinels();
    s.replace(&t.slash, "\\")
        .replace(&t.open, "{")
        .replace(&t.close, "}")
        .replace(&t.comma, ",")
        .replace(&t.period, ".")
}

/// True if the string contains a backslash followed by an escapable
/// metacharacter.
fn has_escaped_meta(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\\' && matches!(w[1], b'\\' | b'{' | b'}' | b',' | b'.'))
}
