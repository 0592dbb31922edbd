//! Simultaneous turn order.

use smallvec::SmallVec;

use super::TurnOrder;
use crate::core::PlayerId;

/// Simultaneous turn order.
///
/// Every player makes one decision per round. Decisions are collected in
/// seat order within the round (the engine loop is single-threaded), but all
/// of them belong to the same round: the counter only advances once the last
/// player has decided. Reactions pre-empt the collection without consuming
/// the reacting player's own decision for the round.
#[derive(Clone, Debug)]
pub struct SimultaneousTurns {
    player_count: usize,
    /// Players still to decide this round, in seat order.
    pending: SmallVec<[PlayerId; 8]>,
    round: u32,
    reactions: SmallVec<[PlayerId; 4]>,
}

impl SimultaneousTurns {
    /// Create a simultaneous order for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            pending: PlayerId::all(player_count).collect(),
            round: 0,
            reactions: SmallVec::new(),
        }
    }

    /// Players that have not yet decided this round.
    #[must_use]
    pub fn pending(&self) -> &[PlayerId] {
        &self.pending
    }
}

impl TurnOrder for SimultaneousTurns {
    fn current_player(&self) -> PlayerId {
        self.reactions
            .first()
            .or_else(|| self.pending.first())
            .copied()
            // pending refills on every advance, so it is only empty if the
            // constructor was bypassed; index 0 is always valid.
            .unwrap_or(PlayerId::new(0))
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

        if !self.pending.is_empty() {
            self.pending.remove(0);
        }
        if self.pending.is_empty() {
            self.pending = PlayerId::all(self.player_count).collect();
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
