//! Gameplay balance constants
//!
//! Data-driven equivalent of the hard-coded world table: everything that
//! shapes the feel of a run in one serializable struct, validated once at
//! construction so the tick path never has to check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PLAYFIELD_HEIGHT;

/// Rejected balance constant.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{name} must be finite and positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("lift must be a finite upward (negative) velocity, got {0}")]
    LiftNotUpward(f32),
    #[error("pipe_interval must be at least 1 tick")]
    ZeroInterval,
    #[error("gap ({gap}) plus ground and margins does not fit the playfield")]
    GapTooTall { gap: f32 },
}

/// Balance constants, in per-tick units. Defaults give the classic feel:
/// one lift impulse cancels roughly a dozen ticks of freefall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity assigned by a flap (negative = up)
    pub lift: f32,
    /// Horizontal pipe speed per tick
    pub pipe_speed: f32,
    /// Ticks between pipe spawns
    pub pipe_interval: u64,
    /// Vertical gap height
    pub gap: f32,
    /// Pipe body width
    pub pipe_width: f32,
    /// Ground strip height at the bottom of the playfield
    pub ground_height: f32,
    /// Off-screen margin for spawning, also the headroom excluded when
    /// placing a gap
    pub spawn_margin: f32,
    /// Lowest allowed gap top, keeps gaps off the ceiling
    pub min_pipe_top: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.45,
            lift: -7.8,
            pipe_speed: 2.2,
            pipe_interval: 90,
            gap: 150.0,
            pipe_width: 64.0,
            ground_height: 80.0,
            spawn_margin: 40.0,
            min_pipe_top: 20.0,
        }
    }
}

impl Tuning {
    /// Check every constant once. A `Tuning` that passes here cannot make
    /// the simulation fail mid-run.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("pipe_speed", self.pipe_speed),
            ("gap", self.gap),
            ("pipe_width", self.pipe_width),
            ("ground_height", self.ground_height),
            ("spawn_margin", self.spawn_margin),
            ("min_pipe_top", self.min_pipe_top),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if !self.lift.is_finite() || self.lift >= 0.0 {
            return Err(TuningError::LiftNotUpward(self.lift));
        }
        if self.pipe_interval == 0 {
            return Err(TuningError::ZeroInterval);
        }
        // A gap must leave room between the minimum top and the ground.
        if self.min_pipe_top + self.gap + self.ground_height + self.spawn_margin
            >= PLAYFIELD_HEIGHT
        {
            return Err(TuningError::GapTooTall { gap: self.gap });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonPositive {
                name: "gravity",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_downward_lift() {
        let tuning = Tuning {
            lift: 7.8,
            ..Tuning::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::LiftNotUpward(7.8)));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let tuning = Tuning {
            pipe_interval: 0,
            ..Tuning::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::ZeroInterval));
    }

    #[test]
    fn test_rejects_oversized_gap() {
        let tuning = Tuning {
            gap: 520.0,
            ..Tuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::GapTooTall { gap: 520.0 })
        );
    }

    #[test]
    fn test_tuning_serde_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
