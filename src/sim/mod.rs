//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick units only
//! - Seeded RNG only
//! - Pipes kept oldest-first, retired only from the front
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
