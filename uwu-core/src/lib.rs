//! # uwu-core
//!
//! Turns boring text into sooper dooper cute text.
//!
//! The crate has two layers:
//!
//! - the case-preserving substitution [`engine`]: finds a literal pattern
//!   regardless of case, asks a predicate whether to replace it, and carries the
//!   original capitalization over to the replacement ([`casing`]);
//! - the rule pipeline ([`transforms`]): fixed rule tables ([`rules`]) run
//!   through the engine, followed by punctuation decoration ([`embellish`]) and
//!   exact emoticon swaps.
//!
//! Everything is a pure function of its input. The only entry point most
//! callers need is [`transform`]:
//!
//! ```rust
//! assert_eq!(uwu_core::transform("trust"), "twust");
//! ```

pub mod casing;
pub mod embellish;
pub mod engine;
pub mod predicates;
pub mod rules;
pub mod transforms;

pub use engine::{replace, replace_all, MatchContext, Predicate};
pub use transforms::standard::UWU;

/// Run the standard uwu pipeline over `text`.
pub fn transform(text: &str) -> String {
    UWU.run(text)
}
