//! Match orchestration: the game loop.
//!
//! `Game` wires players, per-player forward-model copies, the authoritative
//! model, and the state, then drives the per-turn protocol until the state
//! turns terminal:
//!
//! 1. ask the turn order for the active player,
//! 2. ask the forward model for the legal actions and publish them,
//! 3. hand the player a fresh observation and (if there is a real choice)
//!    block for their decision,
//! 4. apply the chosen action through the authoritative model.
//!
//! Exactly one action is in flight at a time; the whole loop is
//! single-threaded and synchronous. Running a match consumes the `Game`,
//! which is what guarantees `end_game` and every `finalize` run exactly
//! once.

use tracing::{debug, trace, warn};

use crate::actions::ActionRecord;
use crate::core::{GameStatus, PlayerId, PresentationError, StateError};
use crate::model::ForwardModel;
use crate::players::Player;
use crate::state::GameState;

/// Optional presentation surface the loop reports to.
///
/// Invoked unconditionally before every real decision query; the default
/// wiring uses [`NoPresentation`]. A surface may block briefly inside
/// `update` (e.g. a fixed visualization delay) - the delay is advisory only
/// and must not affect game logic ordering. Faults are logged and swallowed,
/// never aborting the match.
pub trait PresentationHook: Send {
    /// Refresh the surface for the player about to decide.
    fn update(&mut self, player: PlayerId, state: &GameState) -> Result<(), PresentationError>;
}

/// The no-op presentation surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPresentation;

impl PresentationHook for NoPresentation {
    fn update(&mut self, _player: PlayerId, _state: &GameState) -> Result<(), PresentationError> {
        Ok(())
    }
}

/// Builder wiring players and models into a runnable match.
pub struct GameBuilder {
    players: Vec<Box<dyn Player>>,
    player_models: Vec<Box<dyn ForwardModel>>,
    presentation: Box<dyn PresentationHook>,
    max_ticks: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            player_models: Vec::new(),
            presentation: Box::new(NoPresentation),
            max_ticks: None,
        }
    }
}

impl GameBuilder {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player together with their private forward-model copy.
    ///
    /// Players receive ids in the order they are added. The model copy must
    /// be a distinct instance from the authoritative model (and from every
    /// other player's copy) so each player gets independent randomness for
    /// hidden-information reasoning.
    #[must_use]
    pub fn add_player(mut self, player: Box<dyn Player>, model: Box<dyn ForwardModel>) -> Self {
        self.players.push(player);
        self.player_models.push(model);
        self
    }

    /// Attach a presentation surface.
    #[must_use]
    pub fn with_presentation(mut self, hook: Box<dyn PresentationHook>) -> Self {
        self.presentation = hook;
        self
    }

    /// Hard upper bound on loop cycles.
    ///
    /// A guard against non-conformant forward models that never reach a
    /// terminal state: when exceeded, the match is marked
    /// [`GameStatus::Abandoned`] instead of spinning forever.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Wire everything into a runnable match.
    ///
    /// Runs `setup` on the authoritative model, then registers all
    /// components (setup first, so setup-created components register in the
    /// same pass), then initializes every player with their id and first
    /// observation.
    pub fn build(
        self,
        mut model: Box<dyn ForwardModel>,
        mut state: GameState,
    ) -> Result<Game, StateError> {
        assert_eq!(
            self.players.len(),
            state.player_count(),
            "player list sized for a different player count"
        );

        model.setup(&mut state);
        model.register_components(&mut state);

        let mut players = self.players;
        for ((idx, player), player_model) in
            players.iter_mut().enumerate().zip(self.player_models)
        {
            let id = PlayerId::new(idx as u8);
            player.set_forward_model(player_model);
            let observation = model.observe(&state, id)?;
            player.initialize(id, &observation);
        }

        Ok(Game {
            players,
            model,
            state,
            presentation: self.presentation,
            max_ticks: self.max_ticks,
        })
    }
}

/// A fully wired match, ready to run.
pub struct Game {
    players: Vec<Box<dyn Player>>,
    model: Box<dyn ForwardModel>,
    state: GameState,
    presentation: Box<dyn PresentationHook>,
    max_ticks: Option<u64>,
}

impl Game {
    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the match to completion and return the final state.
    ///
    /// Consumes the match: the terminal state is absorbing, `end_game` runs
    /// exactly once, and every player's `finalize` runs exactly once, after
    /// the loop has exited.
    pub fn run(mut self) -> Result<GameState, StateError> {
        let mut ticks: u64 = 0;

        while self.state.is_not_terminal() {
            if let Some(max) = self.max_ticks {
                if ticks >= max {
                    warn!(ticks, "tick guard exceeded, abandoning match");
                    self.state.set_status(GameStatus::Abandoned);
                    break;
                }
            }
            ticks += 1;

            let active = self.state.current_player();
            debug!(round = self.state.round(), player = %active, phase = %self.state.phase(), "turn start");

            // Derive the legal actions fresh and publish them; the snapshot
            // handed to the player is immutable.
            let actions = self.model.compute_available_actions(&self.state);
            self.state.set_available_actions(actions);
            let actions = self.state.actions_snapshot();

            let observation = self.model.observe(&self.state, active)?;
            let player = &mut self.players[active.index()];

            let chosen = match actions.len() {
                // No decision needed this cycle: deliver the observation and
                // re-check for terminal at the top of the loop. Progress is
                // the forward model's obligation (see ForwardModel docs).
                0 => {
                    player.register_updated_observation(&observation);
                    None
                }
                // A single legal action applies without consulting the
                // player, who still sees the observation.
                1 => {
                    player.register_updated_observation(&observation);
                    Some(0)
                }
                _ => {
                    if let Err(err) = self.presentation.update(active, &self.state) {
                        warn!(%err, "presentation fault ignored");
                    }
                    Some(player.get_action(&observation, &actions))
                }
            };

            if let Some(index) = chosen {
                let action = actions[index].clone();
                let round = self.state.round();
                trace!(player = %active, action = action.name(), "applying action");

                if self.model.next(&mut self.state, &action) {
                    let sequence = self.state.history().len() as u32;
                    self.state
                        .record_action(ActionRecord::new(active, action.name(), round, sequence));
                } else {
                    warn!(player = %active, action = action.name(), "action application failed, continuing");
                }
            }
        }

        debug!(status = %self.state.status(), rounds = self.state.round(), "match over");
        self.model.end_game(&mut self.state);

        for (idx, player) in self.players.iter_mut().enumerate() {
            let observation = self.model.observe(&self.state, PlayerId::new(idx as u8))?;
            player.finalize(&observation);
        }

        Ok(self.state)
    }
}
