//! Game state and core simulation types
//!
//! All mutable session data lives in [`GameState`]. Reset swaps in a fresh
//! instance, so no field can be left behind by a partial reset.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// The player's bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner. `x` never changes after construction.
    pub pos: DVec2,
    pub size: DVec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vel_y: f64,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.bird_start(),
            size: tuning.bird_size(),
            vel_y: 0.0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Which half of a pair a pipe is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeRole {
    /// Hangs from above the board
    Top,
    /// Rises from below the opening
    Bottom,
}

/// A single pipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub pos: DVec2,
    pub size: DVec2,
    pub role: PipeRole,
    /// Set once the bird has cleared this pipe and it has been scored
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f64, y: f64, size: DVec2, role: PipeRole) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size,
            role,
            passed: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    /// Fully left of the visible board
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Bird overlapped a pipe
    Pipe,
    /// Bird fell below the board
    Floor,
    /// Bird rose above the board
    Ceiling,
}

/// Things that happened during a frame, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A pipe pair entered at the right edge
    PairSpawned { top_y: f64 },
    /// Bird cleared a pipe
    PipePassed { score: f64 },
    /// Pipe speed factor went up
    SpeedUp { speed: f64 },
    /// Bird jumped
    Flap,
    /// Run ended
    Crashed { cause: CrashCause },
    /// Session was reset
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance table this session was built from
    pub tuning: Tuning,
    pub bird: Bird,
    /// Pipes in spawn order (also ascending x)
    pub pipes: Vec<Pipe>,
    /// Half a point per pipe passed
    pub score: f64,
    /// Pipe speed factor (multiplied by `pipe_speed_unit` for px/s)
    pub pipe_speed: f64,
    pub game_over: bool,
    /// Timestamp of the previous update (ns); `None` right after start/reset
    pub last_update_ns: Option<u64>,
    /// Source for pipe placement
    pub rng: Pcg32,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given tuning and RNG seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Create a new session around an existing RNG stream
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Self {
        Self {
            bird: Bird::new(&tuning),
            pipes: Vec::new(),
            score: 0.0,
            pipe_speed: tuning.pipe_base_speed,
            game_over: false,
            last_update_ns: None,
            rng,
            events: Vec::new(),
            tuning,
        }
    }

    /// Restore the initial playable state. The RNG keeps its stream so
    /// consecutive runs see different pipes.
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        let rng = self.rng.clone();
        *self = Self::with_rng(tuning, rng);
        self.events.push(GameEvent::Reset);
    }

    /// Handle the single jump/reset action
    pub fn jump(&mut self) {
        if self.game_over {
            self.reset();
        } else {
            self.bird.vel_y = self.tuning.jump_velocity();
            self.events.push(GameEvent::Flap);
        }
    }

    /// End the run (idempotent within a frame, first cause wins)
    pub fn crash(&mut self, cause: CrashCause) {
        if !self.game_over {
            self.game_over = true;
            self.events.push(GameEvent::Crashed { cause });
        }
    }

    /// Score as shown on screen
    #[inline]
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Drain events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
