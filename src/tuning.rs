//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning table
#[derive(Error, Debug)]
pub enum TuningError {
    /// Tuning file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    /// JSON was malformed or had wrong field types
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field had a value the simulation cannot run with
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f64,
    pub board_height: f64,

    pub bird_width: f64,
    pub bird_height: f64,
    /// Bird x as a fraction of board width
    pub bird_x_fraction: f64,

    pub gravity: f64,
    pub gravity_scale: f64,
    pub motion_scale: f64,
    pub jump_force: f64,
    pub jump_scale: f64,

    pub pipe_width: f64,
    pub pipe_height: f64,
    pub pipe_base_speed: f64,
    pub pipe_speed_unit: f64,
    pub pipe_speed_step: f64,
    pub speed_milestone: u32,

    /// Nanoseconds of frame clock between pipe pairs
    pub spawn_interval_ns: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_x_fraction: BIRD_X_FRACTION,

            gravity: GRAVITY,
            gravity_scale: GRAVITY_SCALE,
            motion_scale: MOTION_SCALE,
            jump_force: JUMP_FORCE,
            jump_scale: JUMP_SCALE,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_base_speed: PIPE_BASE_SPEED,
            pipe_speed_unit: PIPE_SPEED_UNIT,
            pipe_speed_step: PIPE_SPEED_STEP,
            speed_milestone: SPEED_MILESTONE,

            spawn_interval_ns: SPAWN_INTERVAL_NS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override table and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.board_width <= 0.0 || self.board_height <= 0.0 {
            return Err(TuningError::Invalid("board dimensions must be positive"));
        }
        if self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return Err(TuningError::Invalid("bird dimensions must be positive"));
        }
        if !(0.0..1.0).contains(&self.bird_x_fraction) {
            return Err(TuningError::Invalid("bird_x_fraction must be in [0, 1)"));
        }
        if self.pipe_width <= 0.0 || self.pipe_height <= 0.0 {
            return Err(TuningError::Invalid("pipe dimensions must be positive"));
        }
        if self.pipe_base_speed <= 0.0 || self.pipe_speed_unit <= 0.0 {
            return Err(TuningError::Invalid("pipe speed must be positive"));
        }
        if self.speed_milestone == 0 {
            return Err(TuningError::Invalid("speed_milestone must be at least 1"));
        }
        if self.spawn_interval_ns == 0 {
            return Err(TuningError::Invalid("spawn_interval_ns must be non-zero"));
        }
        if self.opening() <= self.bird_height {
            return Err(TuningError::Invalid("opening gap is smaller than the bird"));
        }
        Ok(())
    }

    /// Vertical gap between the pipes of a pair
    #[inline]
    pub fn opening(&self) -> f64 {
        self.board_height / 3.0
    }

    /// Where the bird sits at start and after reset
    #[inline]
    pub fn bird_start(&self) -> DVec2 {
        DVec2::new(
            self.board_width * self.bird_x_fraction,
            self.board_height / 2.0,
        )
    }

    #[inline]
    pub fn bird_size(&self) -> DVec2 {
        DVec2::new(self.bird_width, self.bird_height)
    }

    #[inline]
    pub fn pipe_size(&self) -> DVec2 {
        DVec2::new(self.pipe_width, self.pipe_height)
    }

    /// Velocity applied by a jump
    #[inline]
    pub fn jump_velocity(&self) -> f64 {
        self.jump_force * self.jump_scale
    }
}
