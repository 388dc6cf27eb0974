//! Pipe pair spawning

use rand::Rng;

use super::state::{GameEvent, GameState, Pipe, PipeRole};

/// Spawn a pipe pair at the right edge, drawing the vertical offset from
/// the session RNG
pub fn spawn_pair(state: &mut GameState) {
    let roll: f64 = state.rng.random();
    place_pair(state, roll);
}

/// Spawn a pipe pair for a given roll in `[0, 1)`.
///
/// The top pipe's bottom edge lands somewhere in the upper two thirds of a
/// pipe height above the board; the bottom pipe follows after the opening.
/// Does not look at `game_over`: callers decide when spawning stops.
pub fn place_pair(state: &mut GameState, roll: f64) {
    let t = &state.tuning;
    let third = t.pipe_height / 3.0;
    let top_y = -third - roll * third;
    let bottom_y = top_y + t.pipe_height + t.opening();
    let x = t.board_width;
    let size = t.pipe_size();

    state.pipes.push(Pipe::new(x, top_y, size, PipeRole::Top));
    state.pipes.push(Pipe::new(x, bottom_y, size, PipeRole::Bottom));
    state.events.push(GameEvent::PairSpawned { top_y });
}

/// Wall-clock cadence for pipe pairs
#[derive(Debug, Clone, Default)]
pub struct SpawnClock {
    /// Frame timestamp of the last spawn; `None` until the first frame
    last_spawn_ns: Option<u64>,
}

impl SpawnClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true (and restarts the interval) when a pair is due at `now_ns`.
    /// The very first frame is always due.
    pub fn poll(&mut self, now_ns: u64, interval_ns: u64) -> bool {
        let due = match self.last_spawn_ns {
            None => true,
            Some(last) => now_ns.saturating_sub(last) >= interval_ns,
        };
        if due {
            self.last_spawn_ns = Some(now_ns);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_first_spawn_geometry() {
        let mut state = GameState::new(Tuning::default(), 42);
        spawn_pair(&mut state);

        assert_eq!(state.pipes.len(), 2);
        let top = &state.pipes[0];
        let bottom = &state.pipes[1];
        assert_eq!(top.role, PipeRole::Top);
        assert_eq!(bottom.role, PipeRole::Bottom);
        assert!((top.pos.y + 512.0 + 640.0 / 3.0 - bottom.pos.y).abs() < 1e-9);
        assert!(top.pos.y >= -512.0 / 3.0 * 2.0 && top.pos.y <= -512.0 / 3.0);
        assert_eq!(top.pos.x, 360.0);
        assert_eq!(bottom.pos.x, 360.0);
        assert!(!top.passed && !bottom.passed);
    }

    #[test]
    fn test_roll_extremes() {
        let mut state = GameState::new(Tuning::default(), 0);
        place_pair(&mut state, 0.0);
        assert!((state.pipes[0].pos.y - (-512.0 / 3.0)).abs() < 1e-9);

        state.pipes.clear();
        place_pair(&mut state, 1.0);
        assert!((state.pipes[0].pos.y - (-1024.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_spawn_ignores_game_over() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.game_over = true;
        place_pair(&mut state, 0.5);
        assert_eq!(state.pipes.len(), 2);
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut a = GameState::new(Tuning::default(), 99);
        let mut b = GameState::new(Tuning::default(), 99);
        for _ in 0..5 {
            spawn_pair(&mut a);
            spawn_pair(&mut b);
        }
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_clock_cadence() {
        let mut clock = SpawnClock::new();
        let interval = 2_100_000_000;
        assert!(clock.poll(5_000, interval));
        assert!(!clock.poll(5_000 + interval - 1, interval));
        assert!(clock.poll(5_000 + interval, interval));
        assert!(!clock.poll(5_000 + interval + 16_000_000, interval));
    }
}
