//! Capitalization synthesis
//!
//! When a replacement is spliced into the text it inherits the capitalization of
//! the text it replaces. Characters are paired up by position:
//!
//! ```text
//! matched:      H e L L o
//! replacement:  h i i i i i i i
//! result:       H i I I i . . .
//! ```
//!
//! Replacement characters beyond the end of the match ("overflow") all share one
//! reference case, taken once per match: the character right after the match if
//! it is a letter, otherwise the last matched character.
//!
//! Only the ASCII alphabet carries case here. Anything else is treated as
//! lowercase when read and left untouched when written.

/// Capitalization of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    /// Read the case of `c`. Only ASCII uppercase letters are `Upper`.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Case::Upper
        } else {
            Case::Lower
        }
    }

    /// Force `c` into this case. Non-letters come back unchanged.
    pub fn apply(self, c: char) -> char {
        match self {
            Case::Upper => c.to_ascii_uppercase(),
            Case::Lower => c.to_ascii_lowercase(),
        }
    }
}

/// Return `target` with the same capitalization as `source`.
pub fn copy_case(source: char, target: char) -> char {
    Case::of(source).apply(target)
}

/// Build the capitalized replacement for a single match.
///
/// `following` is the character immediately after the match in the scanned
/// text, or `None` at the end of the text.
pub fn synthesize_case(matched: &str, replacement: &str, following: Option<char>) -> String {
    let matched_chars: Vec<char> = matched.chars().collect();
    let overflow_case = overflow_case(&matched_chars, following);

    replacement
        .chars()
        .enumerate()
        .map(|(j, c)| match matched_chars.get(j) {
            Some(&source) => copy_case(source, c),
            None => overflow_case.apply(c),
        })
        .collect()
}

/// Reference case for replacement characters past the end of the match.
fn overflow_case(matched: &[char], following: Option<char>) -> Case {
    match following {
        Some(c) if c.is_ascii_alphabetic() => Case::of(c),
        _ => matched.last().map_or(Case::Lower, |&c| Case::of(c)),
    }
}
