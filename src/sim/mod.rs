//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time enters only as frame timestamps passed to [`update`]
//! - Randomness comes from the session's seeded RNG (or an explicit roll)
//! - Pipes keep spawn order, which is also x order

pub mod collision;
pub mod draw;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use draw::{DrawCommand, DrawRequest, Sprite};
pub use spawn::{SpawnClock, place_pair, spawn_pair};
pub use state::{Bird, CrashCause, GameEvent, GameState, Pipe, PipeRole};
pub use tick::{step, update};
