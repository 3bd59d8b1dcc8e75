//! Skyflap - a side-scrolling flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `scheduler`: Fixed-timestep frame driver and session lifecycle
//! - `persistence`: Best-score storage boundary
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod scheduler;
pub mod sim;
pub mod tuning;

pub use scheduler::{InputEvent, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep; one tick per 60 Hz display refresh
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas are clamped to this before accumulation (tab-switch hitches)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Bird's fixed horizontal station as a fraction of playfield width
    pub const BIRD_X_FRACTION: f32 = 0.28;
    /// Bird collision radius
    pub const BIRD_RADIUS: f32 = 14.0;

    /// Retired pipes sit this far past the left edge before removal
    pub const DESPAWN_MARGIN: f32 = 10.0;
}
