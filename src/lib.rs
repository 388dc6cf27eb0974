//! Flappy Gate - A single-screen gate runner
//!
//! Core modules:
//! - `sim`: Simulation (physics, pipe spawning, collisions, scoring)
//! - `game`: Frame driver that hosts call once per animation frame
//! - `renderer`: Draw-call replay onto a target (Canvas 2D on the web)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host preferences (key bindings)

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Visible board dimensions (logical pixels)
    pub const BOARD_WIDTH: f64 = 360.0;
    pub const BOARD_HEIGHT: f64 = 640.0;

    /// Bird sprite size
    pub const BIRD_WIDTH: f64 = 34.0;
    pub const BIRD_HEIGHT: f64 = 24.0;
    /// Bird x as a fraction of board width
    pub const BIRD_X_FRACTION: f64 = 1.0 / 8.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f64 = 1000.0;
    /// Multiplier on gravity when integrating velocity (faster fall)
    pub const GRAVITY_SCALE: f64 = 1.2;
    /// Multiplier on velocity when integrating position
    pub const MOTION_SCALE: f64 = 1.1;
    /// Jump impulse (pixels/s, negative is up)
    pub const JUMP_FORCE: f64 = -400.0;
    pub const JUMP_SCALE: f64 = 1.1;

    /// Pipe sprite size
    pub const PIPE_WIDTH: f64 = 64.0;
    pub const PIPE_HEIGHT: f64 = 512.0;

    /// Starting pipe speed factor
    pub const PIPE_BASE_SPEED: f64 = 1.5;
    /// Pixels per second per unit of speed factor
    pub const PIPE_SPEED_UNIT: f64 = 80.0;
    /// Speed factor added at each score milestone
    pub const PIPE_SPEED_STEP: f64 = 0.5;
    /// Score milestone interval for speed-ups
    pub const SPEED_MILESTONE: u32 = 5;

    /// Score awarded per pipe (a pair is worth 1)
    pub const SCORE_PER_PIPE: f64 = 0.5;

    /// Time between pipe pairs (2.1 seconds of frame clock)
    pub const SPAWN_INTERVAL_NS: u64 = 2_100_000_000;

    pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;
}
