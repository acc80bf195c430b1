//! Deterministic, injectable randomness.
//!
//! The engine only needs randomness in two places: shuffling decks at match
//! start and picking a random creature for Meteorus. Both go through the
//! `RandomSource` trait so a match can run on a seeded `GameRng` or on a
//! scripted source in tests.
//!
//! ```
//! use wizard_duel::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(10), b.pick(10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Source of randomness consumed by the engine.
///
/// Failed operations roll the source back along with the board, so it must
/// be `Clone`.
pub trait RandomSource: Clone {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// Shuffle a deck in place.
    fn shuffle_cards(&mut self, cards: &mut [CardId]);
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent, deterministic stream.
    ///
    /// Used to explore a what-if branch of a match without disturbing the
    /// main sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the generator position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Rebuild a generator at a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle_cards(&mut self, cards: &mut [CardId]) {
        cards.shuffle(&mut self.inner);
    }
}

/// Serializable generator position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
