//! Punctuation embellishment
//!
//! Every listed punctuation mark draws one number from a generator; roughly one
//! in `odds` draws swaps the mark for its decoration. The generator is seeded
//! from the text itself, so the same input always gets the same decorations.
//!
//! Seeds drive `rand_chacha::ChaCha8Rng`, whose output stream is fixed across
//! `rand` releases.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Content-derived seed: 64-bit FNV-1a over the UTF-8 bytes of `text`.
pub fn seed_for(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Embellisher {
    decorations: &'static [(char, &'static str)],
    odds: u32,
}

impl Embellisher {
    pub const DEFAULT_ODDS: u32 = 15;

    pub fn new(decorations: &'static [(char, &'static str)]) -> Self {
        Self::with_odds(decorations, Self::DEFAULT_ODDS)
    }

    /// `odds` of zero is treated as one (decorate every mark).
    pub fn with_odds(decorations: &'static [(char, &'static str)], odds: u32) -> Self {
        Self {
            decorations,
            odds: odds.max(1),
        }
    }

    fn decoration(&self, c: char) -> Option<&'static str> {
        self.decorations
            .iter()
            .find(|(mark, _)| *mark == c)
            .map(|(_, decoration)| *decoration)
    }

    /// Decorate `text` with a generator seeded by [`seed_for`].
    pub fn embellish(&self, text: &str) -> String {
        let seed = seed_for(text);
        tracing::debug!(seed, "seeding punctuation generator");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.embellish_with(text, &mut rng)
    }

    /// Decorate `text` drawing from `rng`. Only listed marks consume draws.
    pub fn embellish_with<R: RngCore + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            match self.decoration(c) {
                Some(decoration) if rng.next_u32() % self.odds == 0 => {
                    output.push_str(decoration)
                }
                _ => output.push(c),
            }
        }
        output
    }
}
