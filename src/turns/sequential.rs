//! Round-robin turn order.

use smallvec::SmallVec;

use super::TurnOrder;
use crate::core::PlayerId;

/// Sequential (round-robin) turn order.
///
/// Players act one at a time in seat order. The round counter increments
/// each time the rotation wraps back to the starting player. Reactions
/// pre-empt the rotation and do not move it.
#[derive(Clone, Debug)]
pub struct SequentialTurns {
    player_count: usize,
    starting_player: PlayerId,
    current: PlayerId,
    round: u32,
    reactions: SmallVec<[PlayerId; 4]>,
}

impl SequentialTurns {
    /// Create a round-robin order starting at player 0.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            starting_player: PlayerId::new(0),
            current: PlayerId::new(0),
            round: 0,
            reactions: SmallVec::new(),
        }
    }

    /// Start the rotation at a different seat (e.g. a rolled-off first
    /// player).
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        assert!(player.in_range(self.player_count), "starting player out of range");
        self.starting_player = player;
        self.current = player;
        self
    }
}

impl TurnOrder for SequentialTurns {
    fn current_player(&self) -> PlayerId {
        self.reactions.first().copied().unwrap_or(self.current)
    }

    fn player_count(&self) -> usize {
        self.player_count
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn advance(&mut self) {
        if !self.reactions.is_empty() {
            self.reactions.remove(0);
            return;
        }

        let next = (self.current.index() + 1) % self.player_count;
        self.current = PlayerId::new(next as u8);
        if self.current == self.starting_player {
            self.round += 1;
        }
    }

    fn queue_reaction(&mut self, player: PlayerId) {
        self.reactions.push(player);
    }

    fn has_reactions(&self) -> bool {
        !self.reactions.is_empty()
    }
}
