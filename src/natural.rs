//! Natural ordering for file paths.
//!
//! Embedded digit runs compare as integers, so `img2.png` sorts before
//! `img10.png`. Everything else compares case-insensitively.
//!
//! ## Sort Keys
//!
//! A path is split on maximal runs of ASCII digits, keeping the runs:
//!
//! ```text
//! "img10a.png" → [Text("img"), Number(10), Text("a.png")]
//! "2.jpg"      → [Text(""),    Number(2),  Text(".jpg")]
//! ```
//!
//! Keys always start with a text segment and alternate from there, so two
//! keys are compared position by position with matching segment kinds. A key
//! that is a strict prefix of another sorts first.

use std::cmp::Ordering;

/// One segment of a [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// Non-digit text, lowercased.
    Text(String),
    /// A digit run, compared by integer value.
    Number(Digits),
}

/// A digit run of arbitrary length.
///
/// Leading zeros are dropped so `007` and `7` compare equal. Comparison is by
/// length first, then digit by digit, so the value never overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        let trimmed = run.trim_start_matches('0');
        Digits(trimmed.to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparison key derived from a string.
pub type SortKey = Vec<Segment>;

/// Split `text` into alternating text and number segments.
pub fn sort_key(text: &str) -> SortKey {
    let mut key = Vec::new();
    let mut rest = text;

    loop {
        let digit_start = rest.find(|c: char| c.is_ascii_digit());
        let Some(start) = digit_start else {
            key.push(Segment::Text(rest.to_lowercase()));
            break;
        };
        key.push(Segment::Text(rest[..start].to_lowercase()));

        let after = &rest[start..];
        let len = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        key.push(Segment::Number(Digits::new(&after[..len])));
        rest = &after[len..];
    }

    key
}

/// Natural comparison with a raw lexical tiebreak.
///
/// Strings that only differ in case or zero-padding (`A.png` / `a.png`,
/// `07.png` / `7.png`) have equal keys; the byte-wise comparison keeps their
/// relative order deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Sort strings in natural order.
pub fn sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}
