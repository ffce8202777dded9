//! Sequence Generator Module
//!
//! Classifies a group body as a numeric range, alphabetic range, comma
//! list, or literal, and materializes range members with bash-compatible
//! padding, direction, and quirks.

// == Body Classification ==
/// What a group body turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyClass {
    /// `N..M` or `N..M..STEP` with decimal endpoints
    Numeric(SequenceSpec),
    /// `a..z` or `a..z..STEP` with single-letter endpoints
    Alpha(SequenceSpec),
    /// Contains a comma, to be split into alternatives
    CommaList,
    /// Anything else: reassembled verbatim
    Literal,
}

// == Sequence Spec ==
/// A parsed range body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSpec {
    /// First member (char code for alphabetic ranges)
    start: i64,
    /// Last member, inclusive (char code for alphabetic ranges)
    end: i64,
    /// Step magnitude, always >= 1; direction comes from start vs end
    step: i64,
    /// Width of the wider endpoint token, for zero-padding
    width: usize,
    /// True if any token has a leading zero, forcing zero-padding
    padded: bool,
    /// True for alphabetic ranges
    alpha: bool,
}

// == Classify ==
/// Parses a group body into its tagged classification.
///
/// Ranges that fail to parse (including numeric endpoints that overflow
/// `i64`) fall through to `CommaList` or `Literal`, never to an error:
/// expansion is total over all inputs.
pub fn classify(body: &str) -> BodyClass {
    if let Some(spec) = parse_sequence(body) {
        return if spec.alpha {
            BodyClass::Alpha(spec)
        } else {
            BodyClass::Numeric(spec)
        };
    }
    if body.contains(',') {
        BodyClass::CommaList
    } else {
        BodyClass::Literal
    }
}

/// Attempts to parse `start..end` or `start..end..step`.
fn parse_sequence(body: &str) -> Option<SequenceSpec> {
    let tokens: Vec<&str> = body.split("..").collect();
    if tokens.len() != 2 && tokens.len() != 3 {
        return None;
    }

    let step = match tokens.get(2) {
        Some(tok) => {
            if !is_numeric_token(tok) {
                return None;
            }
            // Magnitude only; a zero step behaves as 1, matching bash
            let magnitude = tok.parse::<i64>().ok()?.checked_abs()?;
            if magnitude == 0 {
                1
            } else {
                magnitude
            }
        }
        None => 1,
    };

    let numeric = is_numeric_token(tokens[0]) && is_numeric_token(tokens[1]);
    let alpha = is_alpha_token(tokens[0]) && is_alpha_token(tokens[1]);

    let (start, end) = if numeric {
        (
            tokens[0].parse::<i64>().ok()?,
            tokens[1].parse::<i64>().ok()?,
        )
    } else if alpha {
        (
            i64::from(tokens[0].as_bytes()[0]),
            i64::from(tokens[1].as_bytes()[0]),
        )
    } else {
        return None;
    };

    Some(SequenceSpec {
        start,
        end,
        step,
        width: tokens[0].len().max(tokens[1].len()),
        padded: !alpha && tokens.iter().any(|t| is_padded_token(t)),
        alpha,
    })
}

/// Optional `-` followed by one or more ASCII digits.
fn is_numeric_token(tok: &str) -> bool {
    let digits = tok.strip_prefix('-').unwrap_or(tok);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly one ASCII letter.
fn is_alpha_token(tok: &str) -> bool {
    tok.len() == 1 && tok.as_bytes()[0].is_ascii_alphabetic()
}

/// Leading zero before another digit, e.g. `01` or `-007`.
fn is_padded_token(tok: &str) -> bool {
    let digits = tok.strip_prefix('-').unwrap_or(tok);
    digits.len() > 1 && digits.as_bytes()[0] == b'0'
}

impl SequenceSpec {
    // == Members ==
    /// Materializes the ordered, inclusive member list.
    pub fn members(&self) -> Vec<String> {
        let incr = if self.end < self.start {
            -self.step
        } else {
            self.step
        };

        // Preallocation hint only; capped so an absurd range cannot demand
        // the whole allocation up front
        let count = (self.end as i128 - self.start as i128).unsigned_abs() / self.step as u128 + 1;
        let mut members = Vec::with_capacity(usize::try_from(count).unwrap_or(usize::MAX).min(65_536));

        let mut i = self.start;
        loop {
            let in_range = if incr > 0 { i <= self.end } else { i >= self.end };
            if !in_range {
                break;
            }
            members.push(self.render(i));
            i = match i.checked_add(incr) {
                Some(next) => next,
                None => break,
            };
        }

        members
    }

    /// Renders one member.
    fn render(&self, i: i64) -> String {
        if self.alpha {
            // Bash renders the backslash code point as an empty string
            return match u32::try_from(i).ok().and_then(char::from_u32) {
                Some('\\') | None => String::new(),
                Some(c) => c.to_string(),
            };
        }

        let mut out = i.to_string();
        if self.padded {
            let need = self.width.saturating_sub(out.len());
            if need > 0 {
                let zeros = "0".repeat(need);
                out = if i < 0 {
                    format!("-{}{}", zeros, &out[1..])
                } else {
                    format!("{}{}", zeros, out)
                };
            }
        }
        out
    }
}
