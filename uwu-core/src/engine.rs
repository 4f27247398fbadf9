//! Case-preserving substitution engine
//!
//! [`replace`] scans a text left to right for case-insensitive occurrences of a
//! literal pattern. Every candidate is handed to a [`Predicate`] together with
//! its surroundings ([`MatchContext`]); approved candidates are replaced by a
//! replacement that carries the capitalization of the matched text (see
//! [`crate::casing`]).
//!
//! # Scanning
//!
//! - The cursor starts at 0. On an approved match it jumps past the matched span,
//!   so inserted text is never scanned again within the same pass.
//! - A rejected candidate emits its first character and the cursor moves on by
//!   one character, so overlapping candidates are still considered.
//! - Matching folds ASCII case only. Non-ASCII characters are copied through
//!   untouched and the cursor always sits on a char boundary.
//!
//! The engine never fails: an empty text gives an empty result and an empty
//! pattern leaves the text unchanged.

use crate::casing::synthesize_case;

/// Decides whether a candidate match gets replaced.
///
/// Predicates must be pure functions of the context they receive.
pub type Predicate = fn(&MatchContext<'_>) -> bool;

/// Everything a predicate may inspect about a candidate match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext<'a> {
    /// The full text being scanned.
    pub text: &'a str,
    /// The matched span, in its original capitalization.
    pub matched: &'a str,
    /// Byte index of the first matched character.
    pub index: usize,
}

impl<'a> MatchContext<'a> {
    pub fn new(text: &'a str, matched: &'a str, index: usize) -> Self {
        Self {
            text,
            matched,
            index,
        }
    }

    /// Byte index right after the matched span.
    pub fn end(&self) -> usize {
        self.index + self.matched.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.end() >= self.text.len()
    }

    /// The character right before the match.
    pub fn previous(&self) -> Option<char> {
        self.text.get(..self.index)?.chars().next_back()
    }

    /// The character right after the match.
    pub fn next(&self) -> Option<char> {
        self.text.get(self.end()..)?.chars().next()
    }

    /// The character following [`next`](Self::next).
    pub fn after_next(&self) -> Option<char> {
        let mut rest = self.text.get(self.end()..)?.chars();
        rest.next()?;
        rest.next()
    }
}

/// Predicate that accepts every candidate.
pub fn always(_: &MatchContext<'_>) -> bool {
    true
}

/// Replace every approved occurrence of `pattern` in `text`.
pub fn replace(text: &str, pattern: &str, replacement: &str, predicate: Predicate) -> String {
    if text.is_empty() {
        return String::new();
    }
    if pattern.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(current) = text[cursor..].chars().next() {
        if let Some(matched) = text.get(cursor..cursor + pattern.len()) {
            if matched.eq_ignore_ascii_case(pattern) {
                let context = MatchContext::new(text, matched, cursor);
                if predicate(&context) {
                    output.push_str(&synthesize_case(matched, replacement, context.next()));
                    cursor = context.end();
                    continue;
                }
            }
        }

        output.push(current);
        cursor += current.len_utf8();
    }

    output
}

/// Unconditional shorthand for [`replace`].
pub fn replace_all(text: &str, pattern: &str, replacement: &str) -> String {
    replace(text, pattern, replacement, always)
}
