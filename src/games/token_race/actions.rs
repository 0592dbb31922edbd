//! Track race actions.

use crate::actions::Action;
use crate::core::{ComponentId, PlayerId};
use crate::state::GameState;

use super::components::TrackNode;
use super::{BOOST_SPENT, POSITION, TRACK_LENGTH};

/// Spaces granted by a spent boost.
pub const BOOST_STEPS: i64 = 2;

fn move_token(state: &mut GameState, player: PlayerId, steps: i64) -> bool {
    let last = state.params().value(TRACK_LENGTH, 0) - 1;
    let target = (state.player_value(player, POSITION, 0) + steps).min(last);

    // The destination must be a registered board node; a miss means the
    // action was computed against a different state and is a no-op.
    if state.component(TrackNode::id_at(target)).is_err() {
        return false;
    }

    state.set_player_value(player, POSITION, target);
    true
}

/// Move the player's token forward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advance {
    player: PlayerId,
    steps: i64,
    name: String,
}

impl Advance {
    /// Advance `steps` spaces.
    #[must_use]
    pub fn new(player: PlayerId, steps: i64) -> Self {
        Self {
            player,
            steps,
            name: format!("advance {steps}"),
        }
    }

    /// Spaces this action moves.
    #[must_use]
    pub fn steps(&self) -> i64 {
        self.steps
    }
}

impl Action for Advance {
    fn execute(&self, state: &mut GameState) -> bool {
        self.steps >= 1 && move_token(state, self.player, self.steps)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Spend the one-shot boost for a bigger move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseBoost {
    player: PlayerId,
    token: ComponentId,
}

impl UseBoost {
    /// Spend the boost registered under `token`.
    #[must_use]
    pub fn new(player: PlayerId, token: ComponentId) -> Self {
        Self { player, token }
    }
}

impl Action for UseBoost {
    fn execute(&self, state: &mut GameState) -> bool {
        if state.component(self.token).is_err() {
            return false;
        }
        if state.player_value(self.player, BOOST_SPENT, 0) != 0 {
            return false;
        }
        if !move_token(state, self.player, BOOST_STEPS) {
            return false;
        }
        state.set_player_value(self.player, BOOST_SPENT, 1);
        true
    }

    fn name(&self) -> &str {
        "use boost"
    }
}
