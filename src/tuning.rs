//! Simulation tuning
//!
//! Every physics and viewport constant the simulation reads lives here. A
//! `Tuning` is handed to levels at construction and never mutated, so several
//! simulations can run side by side with different values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Tuning validation failures
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("camera_smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),

    #[error("jump_speed must be negative (upward), got {0}")]
    JumpDirection(f32),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable physics and viewport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_speed: f32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub enemy_size: f32,
    pub enemy_default_speed: f32,
    pub fall_margin: f32,
    pub camera_smoothing: f32,
    pub transition_frames: u32,
    pub ground_height: f32,
    pub ground_padding: f32,
    pub goal_default_width: f32,
    pub goal_default_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_speed: JUMP_SPEED,
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            enemy_size: ENEMY_SIZE,
            enemy_default_speed: ENEMY_DEFAULT_SPEED,
            fall_margin: FALL_MARGIN,
            camera_smoothing: CAMERA_SMOOTHING,
            transition_frames: TRANSITION_FRAMES,
            ground_height: GROUND_HEIGHT,
            ground_padding: GROUND_PADDING,
            goal_default_width: GOAL_DEFAULT_WIDTH,
            goal_default_height: GOAL_DEFAULT_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let sizes = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_size", self.enemy_size),
            ("enemy_default_speed", self.enemy_default_speed),
            ("player_speed", self.player_speed),
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("ground_height", self.ground_height),
            ("goal_default_width", self.goal_default_width),
            ("goal_default_height", self.goal_default_height),
        ];
        for (field, value) in sizes {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let margins = [
            ("fall_margin", self.fall_margin),
            ("ground_padding", self.ground_padding),
        ];
        for (field, value) in margins {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.camera_smoothing) || self.camera_smoothing == 0.0 {
            return Err(TuningError::Smoothing(self.camera_smoothing));
        }
        if self.jump_speed >= 0.0 {
            return Err(TuningError::JumpDirection(self.jump_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "viewport_width": 1024 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.viewport_width, 1024.0);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.transition_frames, TRANSITION_FRAMES);
    }

    #[test]
    fn test_rejects_bad_values() {
        let tuning = Tuning {
            player_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "player_width", .. })
        ));

        let tuning = Tuning {
            camera_smoothing: 1.5,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Smoothing(_))));

        let tuning = Tuning {
            jump_speed: 16.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::JumpDirection(_))));
    }

    #[test]
    fn test_rejects_stalled_or_reversed_motion() {
        let tuning = Tuning {
            enemy_default_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "enemy_default_speed", .. })
        ));

        let tuning = Tuning {
            player_speed: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "player_speed", .. })
        ));

        let tuning = Tuning {
            gravity: -0.8,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "gravity", .. })
        ));

        let tuning = Tuning {
            fall_margin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative { field: "fall_margin", .. })
        ));

        // A zero margin is allowed
        let tuning = Tuning {
            fall_margin: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
