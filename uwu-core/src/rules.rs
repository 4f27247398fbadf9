//! The fixed rule tables
//!
//! Tables are applied in order, and so are the rules within each table: a rule
//! sees the output of every rule before it. Several phrases below are spelled
//! the way earlier rules leave them (`twank you` is what `thank you` looks like
//! once `th` became `tw`).

use crate::engine::{always, replace, Predicate};
use crate::predicates::{
    ends_word, is_complete_word, softens_l, softens_ll, softens_n, softens_r,
};
use std::fmt;

/// A single conditional, case-preserving substitution.
#[derive(Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub predicate: Predicate,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self::when(pattern, replacement, always)
    }

    pub const fn when(
        pattern: &'static str,
        replacement: &'static str,
        predicate: Predicate,
    ) -> Self {
        Rule {
            pattern,
            replacement,
            predicate,
        }
    }

    /// Run this rule once over `text`.
    pub fn apply(&self, text: &str) -> String {
        replace(text, self.pattern, self.replacement, self.predicate)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("replacement", &self.replacement)
            .finish_non_exhaustive()
    }
}

/// Phonetic style changes, unconditional.
pub static PHONEMES: &[Rule] = &[
    Rule::new("th", "tw"),
    Rule::new("ove", "uv"),
    Rule::new("have", "haf"),
    Rule::new("tr", "tw"),
    Rule::new("up", "uwp"),
];

/// Whole-word phrase swaps.
pub static PHRASES: &[Rule] = &[
    Rule::when("twank you", "you're twe best <3333 xoxo", is_complete_word),
    Rule::when("good", "sooper dooper", is_complete_word),
    Rule::when("suwper", "sooper dooper", is_complete_word),
    Rule::when("well", "sooper dooper", is_complete_word),
    Rule::when("emacs", "vim", is_complete_word),
    Rule::when("twanks", "you're twe best :33 xoxo", is_complete_word),
    Rule::when("hello", "hiiiiiii", is_complete_word),
    Rule::when("dear", "hiiiiiii", is_complete_word),
];

/// Drawn-out vowels.
pub static LENGTHENING: &[Rule] = &[
    Rule::new("hi", "hiiiiiii"),
    Rule::new("ay", "aaay"),
    Rule::new("ey", "eeey"),
];

/// Consonant softening. Order matters: `l` runs before `ll` so that double
/// letters are left for the `ll` rule.
pub static SOFTENING: &[Rule] = &[
    Rule::when("n", "ny", softens_n),
    Rule::when("r", "w", softens_r),
    Rule::when("l", "w", softens_l),
    Rule::when("ll", "ww", softens_ll),
    Rule::when("er", "a", ends_word),
];

/// Decorations for punctuation marks, used by the embellishment pass.
pub static DECORATIONS: &[(char, &str)] = &[
    ('.', " <3333 ^.^ "),
    ('!', "!! Thadws impowtant! <3 "),
    (',', " <3 aaaaaand "),
    ('?', "?? now tell me! >:( "),
];

/// Exact, case-sensitive swaps applied last.
pub static EMOTICONS: &[(&str, &str)] = &[
    (":)", "UwU :D"),
    (":D", ":3"),
    (":-)", "UwwwU :3"),
    ("^^", "^.^ UwU"),
    ("c++", "c++ (rust is hella cutewr btw ^^)"),
    ("C++", "C++ (rust is hella cutewr btw ^^)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(rules: &[Rule], text: &str) -> String {
        rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text))
    }

    #[test]
    fn test_patterns_are_non_empty() {
        for rule in PHONEMES
            .iter()
            .chain(PHRASES)
            .chain(LENGTHENING)
            .chain(SOFTENING)
        {
            assert!(!rule.pattern.is_empty());
        }
        assert!(EMOTICONS.iter().all(|(from, _)| !from.is_empty()));
    }

    #[test]
    fn test_phonemes() {
        assert_eq!(apply_all(PHONEMES, "trust"), "twust");
        assert_eq!(apply_all(PHONEMES, "I have love"), "I haf luv");
        assert_eq!(apply_all(PHONEMES, "The cup"), "Twe cuwp");
    }

    #[test]
    fn test_phrases_follow_phonemes() {
        let text = apply_all(PHONEMES, "thank you");
        assert_eq!(apply_all(PHRASES, &text), "you're twe best <3333 xoxo");
    }

    #[test]
    fn test_phrases_are_whole_words() {
        assert_eq!(apply_all(PHRASES, "good goodness"), "sooper dooper goodness");
        assert_eq!(apply_all(PHRASES, "Emacs"), "Vim");
    }

    #[test]
    fn test_lengthening() {
        assert_eq!(apply_all(LENGTHENING, "hi"), "hiiiiiii");
        assert_eq!(apply_all(LENGTHENING, "hey"), "heeey");
        assert_eq!(apply_all(LENGTHENING, "day"), "daaay");
    }

    #[test]
    fn test_softening() {
        assert_eq!(apply_all(SOFTENING, "roar"), "roar");
        assert_eq!(apply_all(SOFTENING, "one"), "one");
        assert_eq!(apply_all(SOFTENING, "no"), "nyo");
        assert_eq!(apply_all(SOFTENING, "yellow"), "yewwow");
        assert_eq!(apply_all(SOFTENING, "water"), "wata");
        assert_eq!(apply_all(SOFTENING, "Play"), "Pway");
    }
}
