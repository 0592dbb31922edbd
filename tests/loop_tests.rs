//! Match loop protocol tests.
//!
//! Scripted models and players verify the per-turn protocol: action lists
//! are always fresh, a single legal action auto-applies without a player
//! query, a zero-action cycle applies nothing, and end-of-match hooks run
//! exactly once each, in order, after the loop exits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tabletop_engine::{
    Action, ActionBox, ForwardModel, GameBuilder, GameParams, GameState, GameStatus, Observation,
    Player, PlayerId, PresentationError, PresentationHook, SequentialTurns, StateError,
};

/// Shared event log and counters observed by scripted collaborators.
#[derive(Default)]
struct Probe {
    next_calls: AtomicUsize,
    compute_calls: AtomicUsize,
    events: Mutex<Vec<String>>,
}

impl Probe {
    fn push(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Debug)]
struct Step;

impl Action for Step {
    fn execute(&self, _state: &mut GameState) -> bool {
        true
    }

    fn name(&self) -> &str {
        "step"
    }
}

/// An action whose name carries the cycle it was computed in.
#[derive(Debug)]
struct Tagged {
    label: String,
}

impl Action for Tagged {
    fn execute(&self, _state: &mut GameState) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// One forced action per turn until the round counter hits `last_round`,
/// then no actions at all; the terminal status is set by `next` the moment
/// the final round is reached.
struct ForcedMarch {
    probe: Arc<Probe>,
    last_round: u32,
}

impl ForwardModel for ForcedMarch {
    fn setup(&mut self, _state: &mut GameState) {}

    fn register_components(&self, _state: &mut GameState) {}

    fn compute_available_actions(&mut self, state: &GameState) -> Vec<ActionBox> {
        self.probe.compute_calls.fetch_add(1, Ordering::SeqCst);
        if state.round() >= self.last_round {
            Vec::new()
        } else {
            vec![Arc::new(Step)]
        }
    }

    fn next(&mut self, state: &mut GameState, action: &ActionBox) -> bool {
        self.probe.next_calls.fetch_add(1, Ordering::SeqCst);
        if !action.execute(state) {
            return false;
        }
        state.turn_order_mut().advance();
        if state.round() >= self.last_round {
            state.set_status(GameStatus::Win);
        }
        true
    }

    fn end_game(&mut self, state: &mut GameState) {
        self.probe.push("end_game");
        for player in PlayerId::all(state.player_count()) {
            state.set_player_result(player, GameStatus::Draw);
        }
    }
}

/// Never offers an action; only a tick guard can end the match.
struct Stalled {
    probe: Arc<Probe>,
}

impl ForwardModel for Stalled {
    fn setup(&mut self, _state: &mut GameState) {}

    fn register_components(&self, _state: &mut GameState) {}

    fn compute_available_actions(&mut self, _state: &GameState) -> Vec<ActionBox> {
        self.probe.compute_calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }

    fn next(&mut self, _state: &mut GameState, _action: &ActionBox) -> bool {
        self.probe.next_calls.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn end_game(&mut self, _state: &mut GameState) {
        self.probe.push("end_game");
    }
}

/// Two choices per cycle, labelled with the cycle number; the match ends
/// after `last_round` rounds.
struct MenuModel {
    probe: Arc<Probe>,
    cycle: u32,
    last_round: u32,
}

impl ForwardModel for MenuModel {
    fn setup(&mut self, _state: &mut GameState) {}

    fn register_components(&self, _state: &mut GameState) {}

    fn compute_available_actions(&mut self, _state: &GameState) -> Vec<ActionBox> {
        let cycle = self.cycle;
        self.cycle += 1;
        vec![
            Arc::new(Tagged {
                label: format!("c{cycle}-a"),
            }),
            Arc::new(Tagged {
                label: format!("c{cycle}-b"),
            }),
        ]
    }

    fn next(&mut self, state: &mut GameState, action: &ActionBox) -> bool {
        if !action.execute(state) {
            return false;
        }
        state.turn_order_mut().advance();
        if state.round() >= self.last_round {
            state.set_status(GameStatus::Draw);
        }
        true
    }

    fn end_game(&mut self, _state: &mut GameState) {
        self.probe.push("end_game");
    }
}

/// Player that records every hook invocation in the shared probe.
struct Recorder {
    probe: Arc<Probe>,
    tag: &'static str,
    /// Observed first-action labels, for staleness checks.
    seen_menus: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new(probe: Arc<Probe>, tag: &'static str) -> Self {
        Self {
            probe,
            tag,
            seen_menus: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Player for Recorder {
    fn initialize(&mut self, player_id: PlayerId, _observation: &Observation) {
        self.probe.push(format!("init:{}:{}", self.tag, player_id.0));
    }

    fn get_action(&mut self, _observation: &Observation, actions: &[ActionBox]) -> usize {
        self.probe.push(format!("decide:{}", self.tag));
        self.seen_menus
            .lock()
            .unwrap()
            .push(actions[0].name().to_string());
        0
    }

    fn register_updated_observation(&mut self, _observation: &Observation) {
        self.probe.push(format!("update:{}", self.tag));
    }

    fn finalize(&mut self, observation: &Observation) {
        self.probe
            .push(format!("finalize:{}:{}", self.tag, observation.status));
    }
}

struct FailingHook {
    calls: Arc<AtomicUsize>,
}

impl PresentationHook for FailingHook {
    fn update(&mut self, _player: PlayerId, _state: &GameState) -> Result<(), PresentationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PresentationError("surface gone".into()))
    }
}

fn two_player_state(seed: u64) -> GameState {
    GameState::new(GameParams::new(2, seed), Box::new(SequentialTurns::new(2)))
}

/// A model copy for a player; the scripted players never use it.
fn dummy_model(probe: &Arc<Probe>) -> Box<dyn ForwardModel> {
    Box::new(Stalled {
        probe: Arc::clone(probe),
    })
}

#[test]
fn forced_march_runs_five_rounds_and_stops_at_top_of_loop() -> Result<(), StateError> {
    let probe = Arc::new(Probe::default());

    let game = GameBuilder::new()
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p0")),
            dummy_model(&probe),
        )
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p1")),
            dummy_model(&probe),
        )
        .build(
            Box::new(ForcedMarch {
                probe: Arc::clone(&probe),
                last_round: 5,
            }),
            two_player_state(0),
        )?;

    let state = game.run()?;

    // Terminal exactly when `next` set it; the loop exited at the next
    // top-of-loop check rather than mid-turn.
    assert_eq!(state.status(), GameStatus::Win);
    assert_eq!(state.round(), 5);

    // Two players times five rounds, one forced action each.
    assert_eq!(probe.next_calls.load(Ordering::SeqCst), 10);
    assert_eq!(state.history().len(), 10);

    let events = probe.events();

    // Forced single actions never query the player...
    assert!(!events.iter().any(|e| e.starts_with("decide")));
    // ...but the observation still reaches them every cycle.
    assert_eq!(events.iter().filter(|e| e.starts_with("update")).count(), 10);

    // end_game once, then each finalize exactly once, after the loop.
    let end_pos = events.iter().position(|e| e == "end_game").unwrap();
    assert_eq!(events.iter().filter(|e| *e == "end_game").count(), 1);
    for tag in ["p0", "p1"] {
        let finals: Vec<_> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.starts_with(&format!("finalize:{tag}")))
            .collect();
        assert_eq!(finals.len(), 1);
        assert!(finals[0].0 > end_pos);
    }

    Ok(())
}

#[test]
fn zero_action_cycles_apply_nothing_until_tick_guard() -> Result<(), StateError> {
    let probe = Arc::new(Probe::default());

    let game = GameBuilder::new()
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p0")),
            dummy_model(&probe),
        )
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p1")),
            dummy_model(&probe),
        )
        .with_max_ticks(4)
        .build(
            Box::new(Stalled {
                probe: Arc::clone(&probe),
            }),
            two_player_state(0),
        )?;

    let state = game.run()?;

    assert_eq!(state.status(), GameStatus::Abandoned);
    // Four zero-action cycles: no decision, no application, no history.
    assert_eq!(probe.next_calls.load(Ordering::SeqCst), 0);
    assert!(state.history().is_empty());

    let events = probe.events();
    assert!(!events.iter().any(|e| e.starts_with("decide")));
    assert_eq!(events.iter().filter(|e| e.starts_with("update")).count(), 4);
    assert_eq!(events.iter().filter(|e| *e == "end_game").count(), 1);

    Ok(())
}

#[test]
fn published_menu_is_never_stale() -> Result<(), StateError> {
    let probe = Arc::new(Probe::default());
    let p0 = Recorder::new(Arc::clone(&probe), "p0");
    let p1 = Recorder::new(Arc::clone(&probe), "p1");
    let menus0 = Arc::clone(&p0.seen_menus);
    let menus1 = Arc::clone(&p1.seen_menus);

    let game = GameBuilder::new()
        .add_player(Box::new(p0), dummy_model(&probe))
        .add_player(Box::new(p1), dummy_model(&probe))
        .build(
            Box::new(MenuModel {
                probe: Arc::clone(&probe),
                cycle: 0,
                last_round: 2,
            }),
            two_player_state(0),
        )?;

    let state = game.run()?;
    assert_eq!(state.status(), GameStatus::Draw);

    // Each decision saw the menu computed for exactly that cycle, in order:
    // player 0 acts on even cycles, player 1 on odd ones.
    assert_eq!(menus0.lock().unwrap().clone(), vec!["c0-a", "c2-a"]);
    assert_eq!(menus1.lock().unwrap().clone(), vec!["c1-a", "c3-a"]);

    // And the applied actions match what the players chose.
    let applied: Vec<_> = state.history().iter().map(|r| r.action.clone()).collect();
    assert_eq!(applied, vec!["c0-a", "c1-a", "c2-a", "c3-a"]);

    Ok(())
}

#[test]
fn presentation_faults_never_abort_the_match() -> Result<(), StateError> {
    let probe = Arc::new(Probe::default());
    let hook_calls = Arc::new(AtomicUsize::new(0));

    let game = GameBuilder::new()
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p0")),
            dummy_model(&probe),
        )
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "p1")),
            dummy_model(&probe),
        )
        .with_presentation(Box::new(FailingHook {
            calls: Arc::clone(&hook_calls),
        }))
        .build(
            Box::new(MenuModel {
                probe: Arc::clone(&probe),
                cycle: 0,
                last_round: 1,
            }),
            two_player_state(0),
        )?;

    let state = game.run()?;

    assert_eq!(state.status(), GameStatus::Draw);
    // The hook fired before every real decision and its failures were
    // swallowed.
    assert_eq!(hook_calls.load(Ordering::SeqCst), 2);

    Ok(())
}

#[test]
fn players_initialize_with_their_construction_order_ids() -> Result<(), StateError> {
    let probe = Arc::new(Probe::default());

    let game = GameBuilder::new()
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "first")),
            dummy_model(&probe),
        )
        .add_player(
            Box::new(Recorder::new(Arc::clone(&probe), "second")),
            dummy_model(&probe),
        )
        .with_max_ticks(1)
        .build(
            Box::new(Stalled {
                probe: Arc::clone(&probe),
            }),
            two_player_state(0),
        )?;

    let _ = game.run()?;

    let events = probe.events();
    assert!(events.contains(&"init:first:0".to_string()));
    assert!(events.contains(&"init:second:1".to_string()));

    Ok(())
}
