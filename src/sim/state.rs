//! Game state and core simulation types
//!
//! Everything needed to replay or snapshot a run lives here.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Awaiting the first flap, physics idle
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, awaiting restart input
    GameOver,
}

/// The player bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Position; `x` is fixed at spawn, only `y` ever moves
    pub pos: Vec2,
    /// Vertical velocity, positive downward (screen coordinates)
    pub vel_y: f32,
    pub radius: f32,
}

impl Bird {
    /// Bird centered vertically at its fixed horizontal station
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                PLAYFIELD_WIDTH * BIRD_X_FRACTION,
                PLAYFIELD_HEIGHT * 0.5,
            ),
            vel_y: 0.0,
            radius: BIRD_RADIUS,
        }
    }

    /// Left edge of the bird's horizontal span
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    /// Right edge of the bird's horizontal span
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// One pipe pair: solid above `top` and below `bottom`, passable between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Gap's upper boundary
    pub top: f32,
    /// Gap's lower boundary, always `top + gap`
    pub bottom: f32,
    pub width: f32,
    /// Set once when the bird clears the pipe, so it scores exactly once
    pub passed: bool,
}

impl Pipe {
    /// Sole constructor; keeps `bottom - top == gap` for the pipe's lifetime
    pub fn new(x: f32, top: f32, gap: f32, width: f32) -> Self {
        Self {
            x,
            top,
            bottom: top + gap,
            width,
            passed: false,
        }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducible pipe placement
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter, reset to 0 on every new run
    pub ticks: u64,
    /// Pipes cleared this run
    pub score: u32,
    /// Best score seen since the session loaded
    pub best: u32,
    /// The player bird
    pub bird: Bird,
    /// Live pipes, oldest (leftmost) first; spawned at the back,
    /// retired from the front only
    pub pipes: VecDeque<Pipe>,
    /// Balance constants, fixed for the session
    pub tuning: Tuning,
}

impl GameState {
    /// New session with the default (known-good) balance constants
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            ticks: 0,
            score: 0,
            best: 0,
            bird: Bird::new(),
            pipes: VecDeque::new(),
            tuning: Tuning::default(),
        }
    }

    /// New session with custom balance constants, validated up front so
    /// the tick path stays infallible
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut state = Self::new(seed);
        state.tuning = tuning;
        Ok(state)
    }

    /// Discard the current run and rearm in `Idle`. Best score, seed and
    /// tuning survive; everything else starts over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.ticks = 0;
        self.score = 0;
        self.bird = Bird::new();
        self.pipes.clear();
    }

    /// Apply one flap according to the phase transition table.
    pub fn apply_flap(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                // The starting tap is not lost: it both arms the run and
                // lifts the bird.
                self.phase = GamePhase::Running;
                self.bird.vel_y = self.tuning.lift;
            }
            // An impulse, not a boost: velocity is overwritten outright.
            GamePhase::Running => self.bird.vel_y = self.tuning.lift,
            // Terminal state ignores flaps until an explicit restart.
            GamePhase::GameOver => {}
        }
    }

    /// Ground line y coordinate
    pub fn ground_y(&self) -> f32 {
        PLAYFIELD_HEIGHT - self.tuning.ground_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_gap_invariant() {
        let pipe = Pipe::new(520.0, 100.0, 150.0, 64.0);
        assert_eq!(pipe.bottom - pipe.top, 150.0);
        assert_eq!(pipe.right(), 584.0);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos.y, PLAYFIELD_HEIGHT * 0.5);
        assert_eq!(state.bird.vel_y, 0.0);
    }

    #[test]
    fn test_flap_from_idle_starts_run_with_impulse() {
        let mut state = GameState::new(1);
        state.apply_flap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bird.vel_y, state.tuning.lift);
    }

    #[test]
    fn test_flap_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.bird.vel_y = 3.0;
        state.apply_flap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bird.vel_y, 3.0);
    }

    #[test]
    fn test_reset_keeps_best_and_seed() {
        let mut state = GameState::new(77);
        state.phase = GamePhase::GameOver;
        state.ticks = 400;
        state.score = 9;
        state.best = 9;
        state.bird.pos.y = 12.0;
        state.pipes.push_back(Pipe::new(100.0, 50.0, 150.0, 64.0));

        state.reset();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird, Bird::new());
        assert_eq!(state.best, 9);
        assert_eq!(state.seed, 77);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(5);
        state.apply_flap();
        state.pipes.push_back(Pipe::new(300.0, 120.0, 150.0, 64.0));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
