//! Per-tick simulation step
//!
//! Advances one `GameState` by exactly one tick. Pure in-memory
//! arithmetic; callable from the frame scheduler, a test harness, or a
//! headless run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision;
use super::state::{GamePhase, GameState, Pipe};
use crate::consts::*;

/// Input latched for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse (tap/click/space)
    pub flap: bool,
    /// Restart gesture; only honored in `GameOver`
    pub restart: bool,
    /// Demo mode: synthesize flaps to keep the bird flying
    pub autopilot: bool,
}

impl TickInput {
    /// Drop one-shot inputs once a tick has consumed them.
    pub fn clear(&mut self) {
        self.flap = false;
        self.restart = false;
    }
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut flap = input.flap;
    if input.autopilot && state.phase != GamePhase::GameOver {
        flap = flap || autopilot_wants_flap(state);
    }

    // A restart re-arms through Idle; the flap carried by the same
    // gesture (if any) then starts the new run below.
    if input.restart && state.phase == GamePhase::GameOver {
        state.reset();
    }

    if flap {
        state.apply_flap();
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.ticks += 1;

    // Bird physics: explicit Euler in per-tick units, fall speed uncapped.
    state.bird.vel_y += state.tuning.gravity;
    state.bird.pos.y += state.bird.vel_y;

    if state.ticks % state.tuning.pipe_interval == 0 {
        spawn_pipe(state);
    }

    for pipe in state.pipes.iter_mut() {
        pipe.x -= state.tuning.pipe_speed;
    }

    // Pipes share one speed and a fixed spawn spacing, so the front one
    // is always first out; one pop per tick suffices.
    let front_gone = state
        .pipes
        .front()
        .is_some_and(|pipe| pipe.right() < -DESPAWN_MARGIN);
    if front_gone {
        state.pipes.pop_front();
    }

    // Scoring before any terminal check, so a pass and a crash on the
    // same tick still count the pass.
    for pipe in state.pipes.iter_mut() {
        if !pipe.passed && collision::cleared_pipe(&state.bird, pipe) {
            pipe.passed = true;
            state.score += 1;
        }
    }

    // Ceiling is a soft stop, never terminal.
    if collision::hits_ceiling(&state.bird) {
        state.bird.pos.y = state.bird.radius;
        state.bird.vel_y = 0.0;
    }

    // Ground always ends the run, and is checked before pipes so a
    // same-tick ground and pipe hit reads as a ground death.
    let ground_y = state.ground_y();
    if collision::hits_ground(&state.bird, ground_y) {
        state.bird.pos.y = ground_y - state.bird.radius;
        end_run(state);
        return;
    }

    for pipe in &state.pipes {
        if collision::spans_overlap(&state.bird, pipe)
            && collision::breaches_gap(&state.bird, pipe)
        {
            end_run(state);
            return;
        }
    }
}

/// Terminal transition: freeze physics and record the run's best.
fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    if state.score > state.best {
        state.best = state.score;
    }
}

/// Append one pipe at the right edge with a randomized gap placement.
///
/// The draw is seeded from the run seed mixed with the spawn tick, so a
/// run replays identically for the same seed and inputs.
fn spawn_pipe(state: &mut GameState) {
    let t = &state.tuning;
    let max_top = PLAYFIELD_HEIGHT - t.ground_height - t.gap - t.spawn_margin;

    let mut rng =
        Pcg32::seed_from_u64(state.seed ^ state.ticks.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let top = rng.random_range(0.0..max_top).floor().max(t.min_pipe_top);

    let pipe = Pipe::new(PLAYFIELD_WIDTH + t.spawn_margin, top, t.gap, t.pipe_width);
    state.pipes.push_back(pipe);
}

/// Demo-mode pilot: flap whenever the short-term predicted position sinks
/// below the target line, aiming for the center of the next gap ahead.
fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird = &state.bird;
    let target = state
        .pipes
        .iter()
        .find(|pipe| !pipe.passed && pipe.right() >= bird.left())
        .map(|pipe| (pipe.top + pipe.bottom) * 0.5)
        .unwrap_or(PLAYFIELD_HEIGHT * 0.5);
    bird.pos.y + bird.vel_y * 4.0 >= target
}
