//! Property tests for the simulation

use flappy_gate::Game;
use flappy_gate::Tuning;
use flappy_gate::sim::{GameEvent, GameState, PipeRole, Rect, place_pair, step};
use proptest::prelude::*;

fn state() -> GameState {
    GameState::new(Tuning::default(), 2024)
}

proptest! {
    #[test]
    fn bird_integrates_gravity(
        dt in 0.0f64..0.1,
        vel in -500.0f64..500.0,
        y in 200.0f64..400.0,
    ) {
        let mut s = state();
        s.bird.pos.y = y;
        s.bird.vel_y = vel;
        step(&mut s, dt);

        let vel2 = vel + 1000.0 * dt * 1.2;
        let y2 = y + vel2 * dt * 1.1;
        prop_assert!((s.bird.vel_y - vel2).abs() < 1e-9);
        prop_assert!((s.bird.pos.y - y2).abs() < 1e-9);
    }

    #[test]
    fn pipes_move_left_by_speed(dt in 0.0f64..0.05, speed in 1.5f64..6.0) {
        let mut s = state();
        s.pipe_speed = speed;
        place_pair(&mut s, 0.5);
        step(&mut s, dt);
        for pipe in &s.pipes {
            prop_assert!((pipe.pos.x - (360.0 - speed * 80.0 * dt)).abs() < 1e-9);
        }
    }

    #[test]
    fn touching_boxes_do_not_collide(
        x in -100.0f64..400.0,
        y in -100.0f64..600.0,
        w in 1.0f64..100.0,
        h in 1.0f64..100.0,
        eps in 0.01f64..0.5,
    ) {
        let a = Rect::new(x, y, w, h);
        let right = Rect::new(x + w, y, 64.0, 512.0);
        let below = Rect::new(x, y + h, 64.0, 512.0);
        prop_assert!(!a.overlaps(&right));
        prop_assert!(!a.overlaps(&below));

        let into = Rect::new(x + w - eps, y, 64.0, 512.0);
        prop_assert!(a.overlaps(&into));
    }

    #[test]
    fn pair_geometry_for_any_roll(roll in 0.0f64..1.0) {
        let mut s = state();
        place_pair(&mut s, roll);
        let top = &s.pipes[0];
        let bottom = &s.pipes[1];
        prop_assert_eq!(top.role, PipeRole::Top);
        prop_assert_eq!(bottom.role, PipeRole::Bottom);
        prop_assert!(top.pos.y <= -512.0 / 3.0);
        prop_assert!(top.pos.y >= -512.0 / 3.0 * 2.0);
        prop_assert!((bottom.pos.y - (top.pos.y + 512.0 + 640.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn score_moves_in_half_points(seed in any::<u64>(), frames in 60usize..900) {
        let mut game = Game::new(Tuning::default(), seed);
        game.autopilot = true;
        let mut now = 1_000_000_000u64;
        let mut prev_score = 0.0;

        for _ in 0..frames {
            now += 16_666_667;
            game.frame(now);

            let passed = game
                .last_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::PipePassed { .. }))
                .count();
            let score = game.state.score;
            prop_assert!((score - prev_score - 0.5 * passed as f64).abs() < 1e-12);
            prev_score = score;

            let xs: Vec<f64> = game.state.pipes.iter().map(|p| p.pos.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] <= w[1]));

            if !game.is_running() {
                break;
            }
        }
    }
}
