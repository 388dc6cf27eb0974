//! Frame driver
//!
//! Hosts call [`Game::frame`] once per animation frame and [`Game::jump`]
//! on the jump key. The driver owns the spawn cadence and halts the loop
//! when a run ends, the same way a platform animation timer would be
//! stopped.

use crate::sim::{
    DrawRequest, GameEvent, GameState, PipeRole, SpawnClock, spawn_pair, update,
};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    spawn_clock: SpawnClock,
    /// False once the run has ended, until the next reset
    running: bool,
    /// Demo mode - the autopilot presses jump
    pub autopilot: bool,
    /// Events from the most recent frame and any input since
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, seed),
            spawn_clock: SpawnClock::new(),
            running: true,
            autopilot: false,
            events: Vec::new(),
        }
    }

    /// Whether frames currently advance the simulation
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Events produced by the last frame (and input handled after it)
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Advance one animation frame at `now_ns` and return what to draw.
    /// Once halted this only re-reports the final state.
    pub fn frame(&mut self, now_ns: u64) -> DrawRequest {
        self.events.clear();

        if self.running {
            if self
                .spawn_clock
                .poll(now_ns, self.state.tuning.spawn_interval_ns)
            {
                spawn_pair(&mut self.state);
            }

            if self.autopilot && autopilot_wants_jump(&self.state) {
                self.state.jump();
            }

            update(&mut self.state, now_ns);

            if self.state.game_over {
                self.running = false;
            }
        }

        self.collect_events();
        DrawRequest::from_state(&self.state)
    }

    /// The single input action: jump while playing, reset after a crash
    pub fn jump(&mut self) {
        let was_over = self.state.game_over;
        self.state.jump();
        if was_over {
            self.running = true;
        }
        self.collect_events();
    }

    fn collect_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::PairSpawned { top_y } => {
                    log::debug!("Pipe pair spawned (top y {:.1})", top_y)
                }
                GameEvent::PipePassed { score } => log::debug!("Pipe passed, score {}", score),
                GameEvent::SpeedUp { speed } => log::info!("Speed up! factor {}", speed),
                GameEvent::Flap => log::trace!("Flap"),
                GameEvent::Crashed { cause } => {
                    log::info!(
                        "Game over ({:?}) with score {}",
                        cause,
                        self.state.display_score()
                    )
                }
                GameEvent::Reset => log::info!("Game reset"),
            }
            self.events.push(event);
        }
    }
}

/// Demo-mode decision: flap when falling below the lower part of the next gap
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.game_over || state.bird.vel_y < 0.0 {
        return false;
    }
    let t = &state.tuning;
    let bird_bottom = state.bird.rect().bottom();

    let gap_bottom = state
        .pipes
        .iter()
        .find(|p| p.role == PipeRole::Top && p.right() >= state.bird.pos.x)
        .map(|p| p.rect().bottom() + t.opening())
        .unwrap_or(t.board_height * 0.7);

    bird_bottom > gap_bottom - t.opening() * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CrashCause, place_pair};

    const SEC: u64 = 1_000_000_000;

    #[test]
    fn test_first_frame_spawns_pair() {
        let mut game = Game::new(Tuning::default(), 1);
        let req = game.frame(SEC);
        assert_eq!(req.pipes.len(), 2);
        assert!(
            game.last_events()
                .iter()
                .any(|e| matches!(e, GameEvent::PairSpawned { .. }))
        );
    }

    #[test]
    fn test_halts_after_crash_and_resumes_on_jump() {
        let mut game = Game::new(Tuning::default(), 1);
        game.frame(SEC);
        game.state.bird.pos.y = 700.0;
        let req = game.frame(SEC + SEC / 60);
        assert!(req.game_over);
        assert!(!game.is_running());

        // Halted: no spawning or motion even long after
        let pipes = game.state.pipes.clone();
        let req = game.frame(10 * SEC);
        assert_eq!(game.state.pipes, pipes);
        assert_eq!(req.score_text(), "Game Over: 0");

        game.jump();
        assert!(game.is_running());
        assert!(!game.state.game_over);
        assert!(game.state.pipes.is_empty());
        assert_eq!(game.last_events(), &[GameEvent::Reset]);
    }

    #[test]
    fn test_jump_while_playing() {
        let mut game = Game::new(Tuning::default(), 1);
        game.frame(SEC);
        game.jump();
        assert!(game.state.bird.vel_y < 0.0);
        assert!(game.is_running());
    }

    #[test]
    fn test_autopilot_decision() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.bird.vel_y = 50.0;
        // No pipes: aim for the lower board
        state.bird.pos.y = 300.0;
        assert!(!autopilot_wants_jump(&state));
        state.bird.pos.y = 500.0;
        assert!(autopilot_wants_jump(&state));

        // Rising birds never flap
        state.bird.vel_y = -10.0;
        assert!(!autopilot_wants_jump(&state));

        state.crash(CrashCause::Floor);
        state.bird.vel_y = 10.0;
        assert!(!autopilot_wants_jump(&state));
    }

    #[test]
    fn test_autopilot_tracks_gap() {
        let mut state = GameState::new(Tuning::default(), 1);
        place_pair(&mut state, 0.0);
        // Top pipe bottom edge at 512 - 512/3, gap ends 640/3 lower
        let gap_bottom = 512.0 - 512.0 / 3.0 + 640.0 / 3.0;
        state.bird.vel_y = 1.0;
        state.bird.pos.y = gap_bottom - 24.0 - 100.0;
        assert!(!autopilot_wants_jump(&state));
        state.bird.pos.y = gap_bottom - 24.0;
        assert!(autopilot_wants_jump(&state));
    }
}
