//! Deterministic shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore, so the RNG position
//!   travels inside the game snapshot
//! - **Substitutable**: the engine only talks to the `Shuffler` trait
//!
//! ```
//! use market_duel::core::{GameRng, Shuffler};
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut cards);
//!
//! // Restoring a saved state replays the same sequence
//! let saved = rng.state();
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! rng.shuffle(&mut a);
//! GameRng::from_state(&saved).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The single randomness primitive the engine depends on.
///
/// Implementations must produce a permutation of the slice. `GameRng`
/// produces a uniform one; tests may substitute a fixed ordering.
pub trait Shuffler {
    /// Permute a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Seedable RNG used for every deck shuffle.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Shuffler for GameRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state carried in every game snapshot.
///
/// Uses the ChaCha8 word position so the snapshot size does not depend on
/// how many shuffles have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
