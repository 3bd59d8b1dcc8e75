//! Frame scheduling and session lifecycle
//!
//! Bridges a repeating display-refresh callback to whole simulation
//! ticks and owns everything around one run of the game: the world,
//! the latched input, the best-score store, and start/stop semantics.

use crate::consts::*;
use crate::persistence::BestScoreStore;
use crate::sim::{GamePhase, GameState, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Wall-clock to fixed-step accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTimestep {
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's delta, get the number of whole ticks now due.
    /// The delta is clamped and catch-up is capped so a long hitch
    /// cannot spiral.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}

/// Discrete input events delivered by the platform layer. Anything the
/// platform cannot map to one of these is dropped before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Tap/click/space: flap, or arm the run from Idle
    Flap,
    /// Game-over gesture: new run in the same session
    Restart,
}

/// One playable session: game state, latched input, the score store,
/// and the repeating-callback lifecycle around them.
pub struct Session<S: BestScoreStore> {
    state: GameState,
    input: TickInput,
    clock: FixedTimestep,
    store: S,
    /// Best value the store is known to hold; persists happen only when
    /// a run beats it.
    persisted_best: u32,
    active: bool,
}

impl<S: BestScoreStore> Session<S> {
    /// New session; the stored best (absent reads as 0) seeds the
    /// in-memory best.
    pub fn new(seed: u64, store: S) -> Self {
        Self::build(GameState::new(seed), store)
    }

    /// New session with custom, validated balance constants.
    pub fn with_tuning(seed: u64, tuning: Tuning, store: S) -> Result<Self, TuningError> {
        Ok(Self::build(GameState::with_tuning(seed, tuning)?, store))
    }

    fn build(mut state: GameState, store: S) -> Self {
        let persisted_best = store.load().unwrap_or(0);
        state.best = persisted_best;
        Self {
            state,
            input: TickInput::default(),
            clock: FixedTimestep::new(),
            store,
            persisted_best,
            active: false,
        }
    }

    /// Begin consuming frame callbacks. Idempotent.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            log::info!("Session started");
        }
    }

    /// Stop ticking; the world keeps its state and `frame` keeps
    /// drawing it. Idempotent, nothing stays scheduled.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            log::info!("Session stopped");
        }
    }

    /// Continue after `stop` without losing the run.
    pub fn resume(&mut self) {
        self.start();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Latch a discrete event for the next tick. Events arriving in a
    /// phase with no matching transition fall through as no-ops inside
    /// the tick.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Flap => self.input.flap = true,
            InputEvent::Restart => self.input.restart = true,
        }
    }

    /// Toggle the demo autopilot.
    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// One display-refresh callback: run the ticks now due (while
    /// started), then hand the renderer a read-only snapshot. Drawing
    /// happens in every phase, paused and game-over included.
    pub fn frame<F: FnMut(&GameState)>(&mut self, dt: f32, mut draw: F) {
        if self.active {
            let was_over = self.state.phase == GamePhase::GameOver;
            for _ in 0..self.clock.advance(dt) {
                tick(&mut self.state, &self.input);
                // One-shot inputs are consumed by the first tick they see.
                self.input.clear();
            }
            if self.state.phase == GamePhase::GameOver && !was_over {
                self.persist_best();
            }
        }
        draw(&self.state);
    }

    /// Current run score, for the score display.
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Best score across runs, for the score display.
    pub fn best(&self) -> u32 {
        self.state.best
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Read-only world snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Best-effort persist on entering game over, attempted once.
    /// Failures are logged and swallowed so the loop never stalls.
    fn persist_best(&mut self) {
        if self.state.best <= self.persisted_best {
            return;
        }
        match self.store.store(self.state.best) {
            Ok(()) => {
                self.persisted_best = self.state.best;
                log::info!("Best score saved ({})", self.state.best);
            }
            Err(err) => log::warn!("Failed to persist best score: {err}"),
        }
    }
}
