//! Match predicates used by the rule tables
//!
//! Each predicate looks only at the [`MatchContext`] it is given: the scanned
//! text, the matched span and where it starts. Comparisons fold ASCII case.

use crate::engine::MatchContext;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Vowel check over `a e i o u y`, ignoring case.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Letters are the ASCII alphabet only.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_vowel_at(c: Option<char>) -> bool {
    c.is_some_and(is_vowel)
}

/// A missing neighbour breaks a word just like a non-letter does.
fn breaks_word(c: Option<char>) -> bool {
    !c.is_some_and(is_letter)
}

fn is_char(c: Option<char>, expected: char) -> bool {
    c.is_some_and(|c| c.eq_ignore_ascii_case(&expected))
}

/// Accept only matches that form a whole word.
pub fn is_complete_word(context: &MatchContext<'_>) -> bool {
    if context.matched.len() == context.text.len() {
        return true;
    }
    breaks_word(context.previous()) && breaks_word(context.next())
}

/// `n` -> `ny` before a vowel, except for the `one` at the end of a word.
pub fn softens_n(context: &MatchContext<'_>) -> bool {
    let next = context.next();

    let is_one = is_char(context.previous(), 'o')
        && is_char(next, 'e')
        && breaks_word(context.after_next());
    if is_one {
        return false;
    }

    is_vowel_at(next)
}

/// `r` -> `w` before a vowel, but never at the start of the text or after a
/// non-letter.
pub fn softens_r(context: &MatchContext<'_>) -> bool {
    if context.is_at_start() {
        return false;
    }
    is_vowel_at(context.next()) && context.previous().is_some_and(is_letter)
}

/// `l` -> `w` inside a word, unless a neighbour is another `l`.
pub fn softens_l(context: &MatchContext<'_>) -> bool {
    if context.text.len() < context.matched.len() + 2 || context.is_at_start() {
        return false;
    }

    let previous = context.previous();
    if !previous.is_some_and(is_letter) {
        return false;
    }
    !is_char(previous, 'l') && !is_char(context.next(), 'l')
}

/// `ll` -> `ww` before a vowel.
pub fn softens_ll(context: &MatchContext<'_>) -> bool {
    is_vowel_at(context.next())
}

/// Accept only matches at the end of a word.
pub fn ends_word(context: &MatchContext<'_>) -> bool {
    breaks_word(context.next())
}
