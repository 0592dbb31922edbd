//! Track race forward model and builder.

use std::sync::Arc;

use tracing::warn;

use crate::actions::ActionBox;
use crate::core::{GameParams, GameRng, GameStatus, PlayerId};
use crate::model::ForwardModel;
use crate::state::GameState;
use crate::turns::SequentialTurns;

use super::actions::{Advance, UseBoost};
use super::components::{BoostToken, TrackNode};
use super::{BOOST_SPENT, MAX_STEP, POSITION, TRACK_LENGTH};

/// Rules engine for the track race.
///
/// Holds nothing but its RNG; all match data lives in the game state, so a
/// second instance constructed with a different seed serves as a player's
/// private model copy.
#[derive(Clone, Debug)]
pub struct TokenRace {
    rng: GameRng,
}

impl TokenRace {
    /// Create a model with its own random stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    fn track_last(state: &GameState) -> i64 {
        state.params().value(TRACK_LENGTH, 0) - 1
    }
}

impl ForwardModel for TokenRace {
    fn setup(&mut self, state: &mut GameState) {
        for player in PlayerId::all(state.player_count()) {
            state.set_player_value(player, POSITION, 0);
            state.set_player_value(player, BOOST_SPENT, 0);
        }
        // Everyone sees where the tokens stand; whether a boost has been
        // spent stays between a player and their own token.
        state.mark_player_value_public(POSITION);
        state.set_main_phase();

        // Roll off for the first seat.
        let first = self.rng.gen_range_usize(0..state.player_count());
        state.set_turn_order(Box::new(
            SequentialTurns::new(state.player_count())
                .with_starting_player(PlayerId::new(first as u8)),
        ));
    }

    fn register_components(&self, state: &mut GameState) {
        let track_length = state.params().value(TRACK_LENGTH, 0);

        let mut components: Vec<Box<dyn crate::core::Component>> =
            (0..track_length).map(|i| Box::new(TrackNode::new(i)) as _).collect();
        for player in PlayerId::all(state.player_count()) {
            components.push(Box::new(BoostToken::new(player, track_length)));
        }
        state.put_components(components);
    }

    fn compute_available_actions(&mut self, state: &GameState) -> Vec<ActionBox> {
        if !state.is_not_terminal() {
            return Vec::new();
        }

        let player = state.current_player();
        let remaining = Self::track_last(state) - state.player_value(player, POSITION, 0);
        if remaining <= 0 {
            // Already home: nothing to decide (the model ends the game in
            // `next` before this can repeat).
            return Vec::new();
        }

        let max_step = state.params().value(MAX_STEP, 1).min(remaining).max(1);
        let mut actions: Vec<ActionBox> = (1..=max_step)
            .map(|steps| Arc::new(Advance::new(player, steps)) as ActionBox)
            .collect();

        if state.player_value(player, BOOST_SPENT, 0) == 0 {
            let track_length = state.params().value(TRACK_LENGTH, 0);
            actions.push(Arc::new(UseBoost::new(
                player,
                BoostToken::id_for(player, track_length),
            )));
        }

        actions
    }

    fn next(&mut self, state: &mut GameState, action: &ActionBox) -> bool {
        if !action.execute(state) {
            warn!(action = action.name(), "race action could not execute");
            return false;
        }

        let actor = state.current_player();
        if state.player_value(actor, POSITION, 0) >= Self::track_last(state) {
            for player in PlayerId::all(state.player_count()) {
                let result = if player == actor {
                    GameStatus::Win
                } else {
                    GameStatus::Lose
                };
                state.set_player_result(player, result);
            }
            state.set_status(GameStatus::Win);
        } else {
            state.turn_order_mut().advance();
        }
        true
    }

    fn end_game(&mut self, state: &mut GameState) {
        // Natural wins resolved in `next`; whatever is left (abandoned or
        // drawn matches) settles as a draw.
        for player in PlayerId::all(state.player_count()) {
            if state.player_result(player).is_ongoing() {
                state.set_player_result(player, GameStatus::Draw);
            }
        }
    }
}

/// Builder for a race match.
pub struct TokenRaceBuilder {
    player_count: usize,
    track_length: i64,
    max_step: i64,
}

impl Default for TokenRaceBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            track_length: 12,
            max_step: 3,
        }
    }
}

impl TokenRaceBuilder {
    /// Start from the default configuration (2 players, 12 nodes, step 3).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of racers.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=8).contains(&count), "Player count must be 1-8");
        self.player_count = count;
        self
    }

    /// Track length in nodes (minimum 2).
    #[must_use]
    pub fn track_length(mut self, length: i64) -> Self {
        assert!(length >= 2, "Track needs at least 2 nodes");
        self.track_length = length;
        self
    }

    /// Maximum spaces per ordinary advance (1-3).
    #[must_use]
    pub fn max_step(mut self, step: i64) -> Self {
        assert!((1..=3).contains(&step), "Step must be 1-3");
        self.max_step = step;
        self
    }

    /// Build the authoritative model and a fresh state.
    #[must_use]
    pub fn build(self, seed: u64) -> (TokenRace, GameState) {
        let params = GameParams::new(self.player_count, seed)
            .with_value(TRACK_LENGTH, self.track_length)
            .with_value(MAX_STEP, self.max_step);
        let state = GameState::new(params, Box::new(SequentialTurns::new(self.player_count)));

        (TokenRace::new(seed), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(seed: u64) -> (TokenRace, GameState) {
        let (mut race, mut state) = TokenRaceBuilder::new().build(seed);
        race.setup(&mut state);
        race.register_components(&mut state);
        (race, state)
    }

    #[test]
    fn test_setup_initializes_players() {
        let (_, state) = ready(42);

        for player in PlayerId::all(2) {
            assert_eq!(state.player_value(player, POSITION, -1), 0);
            assert_eq!(state.player_value(player, BOOST_SPENT, -1), 0);
        }
        assert!(state.is_not_terminal());
    }

    #[test]
    fn test_registration_covers_track_and_boosts() {
        let (_, state) = ready(42);

        // 12 nodes + 2 boosts.
        assert_eq!(state.component_count(), 14);
        assert!(state.component(TrackNode::id_at(0)).is_ok());
        assert!(state.component(TrackNode::id_at(11)).is_ok());
        assert!(state.component(BoostToken::id_for(PlayerId::new(1), 12)).is_ok());
    }

    #[test]
    fn test_registration_twice_does_not_duplicate() {
        let (race, mut state) = ready(42);

        let before = state.component_count();
        race.register_components(&mut state);
        assert_eq!(state.component_count(), before);
    }

    #[test]
    fn test_action_menu_shrinks_near_the_finish() {
        let (mut race, mut state) = ready(42);
        let actor = state.current_player();

        // Fresh token far from home: three step sizes plus the boost.
        assert_eq!(race.compute_available_actions(&state).len(), 4);

        // One node from home with the boost spent: a single forced move.
        state.set_player_value(actor, POSITION, 10);
        state.set_player_value(actor, BOOST_SPENT, 1);
        assert_eq!(race.compute_available_actions(&state).len(), 1);
    }

    #[test]
    fn test_no_actions_once_terminal() {
        let (mut race, mut state) = ready(42);
        state.set_status(GameStatus::Win);

        assert!(race.compute_available_actions(&state).is_empty());
    }

    #[test]
    fn test_winning_move_ends_the_match() {
        let (mut race, mut state) = ready(42);
        let actor = state.current_player();
        state.set_player_value(actor, POSITION, 10);

        let actions = race.compute_available_actions(&state);
        let winning = actions
            .iter()
            .find(|a| a.name() == "advance 1")
            .expect("single-step advance available")
            .clone();

        assert!(race.next(&mut state, &winning));
        assert_eq!(state.status(), GameStatus::Win);
        assert_eq!(state.player_result(actor), GameStatus::Win);

        let other = PlayerId::new(1 - actor.0);
        assert_eq!(state.player_result(other), GameStatus::Lose);
    }

    #[test]
    fn test_ordinary_move_advances_turn_order() {
        let (mut race, mut state) = ready(42);
        let actor = state.current_player();

        let actions = race.compute_available_actions(&state);
        assert!(race.next(&mut state, &actions[0]));

        assert!(state.is_not_terminal());
        assert_ne!(state.current_player(), actor);
    }

    #[test]
    fn test_end_game_settles_unresolved_results_as_draw() {
        let (mut race, mut state) = ready(42);
        state.set_status(GameStatus::Abandoned);

        race.end_game(&mut state);

        for player in PlayerId::all(2) {
            assert_eq!(state.player_result(player), GameStatus::Draw);
        }
    }
}
