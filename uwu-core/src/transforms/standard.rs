//! The standard uwu pipeline
//!
//! Stages, in order:
//!
//! 1. `phonemes`: literal phonetic swaps
//! 2. `phrases`: whole-word phrase swaps
//! 3. `lengthening`: drawn-out vowels
//! 4. `softening`: conditional consonant softening
//! 5. `embellishment`: seeded punctuation decoration
//! 6. `emoticons`: exact emoticon and commentary swaps

use crate::embellish::Embellisher;
use crate::rules::{DECORATIONS, EMOTICONS, LENGTHENING, PHONEMES, PHRASES, SOFTENING};
use crate::transforms::stages::{Embellishment, Literal, Substitution};
use crate::transforms::Pipeline;
use once_cell::sync::Lazy;

/// Build a fresh copy of the standard pipeline.
pub fn uwu_pipeline() -> Pipeline {
    Pipeline::new()
        .then(Substitution::new("phonemes", PHONEMES))
        .then(Substitution::new("phrases", PHRASES))
        .then(Substitution::new("lengthening", LENGTHENING))
        .then(Substitution::new("softening", SOFTENING))
        .then(Embellishment::new(Embellisher::new(DECORATIONS)))
        .then(Literal::new("emoticons", EMOTICONS))
}

/// The standard pipeline, built on first use.
pub static UWU: Lazy<Pipeline> = Lazy::new(uwu_pipeline);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let names: Vec<&str> = UWU.stage_names().collect();
        assert_eq!(
            names,
            vec![
                "phonemes",
                "phrases",
                "lengthening",
                "softening",
                "embellishment",
                "emoticons"
            ]
        );
    }

    #[test]
    fn test_fresh_pipeline_matches_static() {
        let text = "Well, hello there! Thank you, C++ is good :)";
        assert_eq!(uwu_pipeline().run(text), UWU.run(text));
    }
}
