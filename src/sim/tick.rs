//! Frame update
//!
//! Advances the simulation by the wall-clock time elapsed since the
//! previous call. Variable timestep: the physics multipliers are tuned for
//! this exact integration order.

use super::state::{CrashCause, GameEvent, GameState};
use crate::consts::{NANOS_PER_SEC, SCORE_PER_PIPE};

/// Advance the game to frame timestamp `now_ns`
pub fn update(state: &mut GameState, now_ns: u64) {
    if state.game_over {
        return;
    }

    let dt = match state.last_update_ns {
        Some(last) => now_ns.saturating_sub(last) as f64 / NANOS_PER_SEC,
        None => 0.0,
    };
    state.last_update_ns = Some(now_ns);

    if dt == 0.0 {
        return;
    }

    step(state, dt);
}

/// Apply `dt` seconds of physics, pipe motion, collision and scoring
pub fn step(state: &mut GameState, dt: f64) {
    let t = &state.tuning;

    // Bird
    state.bird.vel_y += t.gravity * dt * t.gravity_scale;
    state.bird.pos.y += state.bird.vel_y * dt * t.motion_scale;

    let shift = state.pipe_speed * t.pipe_speed_unit * dt;
    let speed_step = t.pipe_speed_step;
    let milestone = t.speed_milestone;
    let bird_rect = state.bird.rect();

    // Reverse order so removal does not skip anything
    for i in (0..state.pipes.len()).rev() {
        let pipe = &mut state.pipes[i];
        pipe.pos.x -= shift;

        let hit = bird_rect.overlaps(&pipe.rect());
        let off_screen = pipe.is_off_screen();

        let mut passed_now = false;
        if !pipe.passed && bird_rect.left() > pipe.right() {
            pipe.passed = true;
            passed_now = true;
        }

        if off_screen {
            state.pipes.remove(i);
        }

        if hit {
            state.crash(CrashCause::Pipe);
        }

        if passed_now {
            state.score += SCORE_PER_PIPE;
            state.events.push(GameEvent::PipePassed { score: state.score });

            // Evaluated per crossing, so both halves of a pair can trigger it
            let whole = state.score as u32;
            if whole > 0 && whole % milestone == 0 {
                state.pipe_speed += speed_step;
                state.events.push(GameEvent::SpeedUp {
                    speed: state.pipe_speed,
                });
            }
        }
    }

    let y = state.bird.pos.y;
    if y > state.tuning.board_height {
        state.crash(CrashCause::Floor);
    }
    if y < 0.0 {
        state.crash(CrashCause::Ceiling);
    }
}
