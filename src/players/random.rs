//! Uniformly random player.

use crate::actions::ActionBox;
use crate::core::GameRng;
use crate::players::Player;
use crate::state::Observation;

/// Picks uniformly at random among the available actions.
///
/// The baseline automated opponent: deterministic for a given seed, which
/// keeps whole matches reproducible.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_action(&mut self, _observation: &Observation, actions: &[ActionBox]) -> usize {
        self.rng.gen_range_usize(0..actions.len())
    }
}
