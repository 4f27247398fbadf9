//! Individual pipeline stages
//!
//! - [`Substitution`]: a rule table run through the substitution engine
//! - [`Embellishment`]: seeded punctuation decoration
//! - [`Literal`]: exact, case-sensitive swaps

use crate::embellish::Embellisher;
use crate::rules::Rule;
use crate::transforms::Stage;

/// Applies each rule of a table once, in order.
#[derive(Debug, Clone, Copy)]
pub struct Substitution {
    name: &'static str,
    rules: &'static [Rule],
}

impl Substitution {
    pub fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

impl Stage for Substitution {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text))
    }
}

/// Decorates punctuation, seeded from this stage's input.
#[derive(Debug, Clone, Copy)]
pub struct Embellishment {
    embellisher: Embellisher,
}

impl Embellishment {
    pub fn new(embellisher: Embellisher) -> Self {
        Self { embellisher }
    }
}

impl Stage for Embellishment {
    fn name(&self) -> &str {
        "embellishment"
    }

    fn apply(&self, text: &str) -> String {
        self.embellisher.embellish(text)
    }
}

/// Plain `str::replace` swaps, no case folding.
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    name: &'static str,
    swaps: &'static [(&'static str, &'static str)],
}

impl Literal {
    pub fn new(name: &'static str, swaps: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, swaps }
    }
}

impl Stage for Literal {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, text: &str) -> String {
        self.swaps
            .iter()
            .filter(|(from, _)| !from.is_empty())
            .fold(text.to_string(), |text, (from, to)| text.replace(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DECORATIONS, EMOTICONS, PHONEMES};

    #[test]
    fn test_substitution_stage() {
        let stage = Substitution::new("phonemes", PHONEMES);
        assert_eq!(stage.name(), "phonemes");
        assert_eq!(stage.rules().len(), 5);
        assert_eq!(stage.apply("Trust the cup"), "Twust twe cuwp");
    }

    #[test]
    fn test_literal_stage_is_case_sensitive() {
        let stage = Literal::new("emoticons", EMOTICONS);
        assert_eq!(stage.apply("hi :)"), "hi UwU :3");
        assert_eq!(stage.apply(":-)"), "UwwwU :3");
        assert_eq!(stage.apply(":d"), ":d");
        assert_eq!(stage.apply("^^"), "^.^ UwU");
    }

    #[test]
    fn test_literal_stage_comments_on_cpp() {
        let stage = Literal::new("emoticons", EMOTICONS);
        assert_eq!(
            stage.apply("I write C++"),
            "I write C++ (rust is hella cutewr btw ^^)"
        );
        assert_eq!(stage.apply("Cpp"), "Cpp");
    }

    #[test]
    fn test_literal_stage_skips_empty_patterns() {
        static SWAPS: &[(&str, &str)] = &[("", "x"), ("a", "b")];
        assert_eq!(Literal::new("swaps", SWAPS).apply("aa"), "bb");
    }

    #[test]
    fn test_embellishment_stage_without_punctuation() {
        let stage = Embellishment::new(Embellisher::new(DECORATIONS));
        assert_eq!(stage.name(), "embellishment");
        assert_eq!(stage.apply("nyo mawks"), "nyo mawks");
    }
}
