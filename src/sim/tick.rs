//! Fixed timestep simulation tick
//!
//! One `step` call advances the game by a single tick. The shell invokes it
//! on the fixed cadence while the game is Running; rendering happens
//! separately from the same state.

use super::collision;
use super::state::{GamePhase, GameState, Outcome};
use crate::consts::*;

/// Advance the game state by one tick. No-op unless Running.
///
/// Per-tick order: brick pass, win check, side walls, ceiling, floor
/// (paddle bounce or loss), position advance. A terminal transition
/// returns before the position advance.
pub fn step(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Brick pass over the whole grid, no early exit: simultaneous hits
    // each flip the vertical velocity and score independently.
    let center = state.ball.pos;
    for brick in &mut state.bricks {
        if brick.alive && brick.contains(center) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.alive = false;
            state.score += 1;
        }
    }

    if state.score >= WIN_SCORE {
        state.phase = GamePhase::Over(Outcome::Win);
        log::info!("board cleared at tick {}", state.time_ticks);
        return;
    }

    if collision::hits_side_wall(&state.ball) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if collision::hits_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if collision::hits_floor(&state.ball) {
        if collision::over_paddle(&state.ball, &state.paddle) {
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            state.phase = GamePhase::Over(Outcome::Loss);
            log::info!(
                "ball past the paddle at tick {} (score {})",
                state.time_ticks,
                state.score
            );
            return;
        }
    }

    let vel = state.ball.vel;
    state.ball.pos += vel;
    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn running() -> GameState {
        let mut state = GameState::new(0xb12c);
        state.start().unwrap();
        state
    }

    /// Park the ball mid-field so no collision fires unless a test sets one up
    fn park_ball(state: &mut GameState, x: f32, y: f32, dx: f32, dy: f32) {
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(dx, dy);
    }

    #[test]
    fn step_is_a_noop_outside_running() {
        let mut state = GameState::new(1);
        step(&mut state);
        assert_eq!(state.phase, GamePhase::NotStarted);

        state.start().unwrap();
        state.pause().unwrap();
        let before = state.clone();
        step(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn free_flight_advances_by_velocity() {
        let mut state = running();
        park_ball(&mut state, 300.0, 300.0, 2.0, -2.0);
        step(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(302.0, 298.0));
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn side_wall_bounce_negates_dx_only() {
        let mut state = running();
        park_ball(&mut state, 640.0, 200.0, 2.0, -2.0);
        step(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(-2.0, -2.0));
        assert_eq!(state.ball.pos, Vec2::new(638.0, 198.0));
    }

    #[test]
    fn ceiling_bounce_negates_dy_only() {
        let mut state = running();
        park_ball(&mut state, 300.0, 10.0, 2.0, -2.0);
        step(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.ball.pos, Vec2::new(302.0, 12.0));
    }

    #[test]
    fn paddle_bounce_when_ball_is_over_the_paddle() {
        let mut state = running();
        // Paddle spans [289, 361], ball about to cross the floor band
        state.paddle.x = 289.0;
        park_ball(&mut state, 325.0, 440.0, 2.0, 2.0);

        step(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.ball.pos, Vec2::new(327.0, 438.0));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn loss_when_paddle_is_elsewhere() {
        let mut state = running();
        // Paddle parked at the left edge, span [0, 72]
        state.paddle.x = 0.0;
        park_ball(&mut state, 325.0, 440.0, 2.0, 2.0);

        step(&mut state);
        assert_eq!(state.phase, GamePhase::Over(Outcome::Loss));
        if let GamePhase::Over(outcome) = state.phase {
            assert_eq!(outcome.message(), "Game Over!");
        }
        // Terminal transition happens before the position advance
        assert_eq!(state.ball.pos, Vec2::new(325.0, 440.0));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn brick_hit_destroys_scores_and_flips_dy() {
        let mut state = running();
        let brick_pos = state.bricks[0].pos;
        park_ball(
            &mut state,
            brick_pos.x + 10.0,
            brick_pos.y + 10.0,
            2.0,
            -2.0,
        );

        step(&mut state);
        assert!(!state.bricks[0].alive);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.bricks_remaining(), 44);
    }

    #[test]
    fn destroyed_brick_never_scores_again() {
        let mut state = running();
        let brick_pos = state.bricks[0].pos;

        park_ball(
            &mut state,
            brick_pos.x + 10.0,
            brick_pos.y + 10.0,
            2.0,
            -2.0,
        );
        step(&mut state);
        assert_eq!(state.score, 1);

        // Put the ball back inside the same (now destroyed) rectangle
        park_ball(
            &mut state,
            brick_pos.x + 10.0,
            brick_pos.y + 10.0,
            2.0,
            -2.0,
        );
        step(&mut state);
        assert_eq!(state.score, 1);
        assert!(!state.bricks[0].alive);
    }

    #[test]
    fn simultaneous_hits_each_flip_dy() {
        let mut state = running();
        // Stack two bricks on the same rectangle so one tick hits both
        let target = state.bricks[0].pos;
        state.bricks[1].pos = target;
        park_ball(&mut state, target.x + 5.0, target.y + 5.0, 2.0, -2.0);

        step(&mut state);
        assert_eq!(state.score, 2);
        assert!(!state.bricks[0].alive);
        assert!(!state.bricks[1].alive);
        // Two flips cancel out
        assert_eq!(state.ball.vel.y, -2.0);
    }

    #[test]
    fn win_on_the_45th_brick() {
        let mut state = running();
        // Clear everything except the first brick
        for brick in state.bricks.iter_mut().skip(1) {
            brick.alive = false;
        }
        state.score = WIN_SCORE - 1;

        let last = state.bricks[0].pos;
        park_ball(&mut state, last.x + 10.0, last.y + 10.0, 2.0, -2.0);
        let pos_before = state.ball.pos;

        step(&mut state);
        assert_eq!(state.score, WIN_SCORE);
        assert_eq!(state.phase, GamePhase::Over(Outcome::Win));
        if let GamePhase::Over(outcome) = state.phase {
            assert_eq!(outcome.message(), "You Win!");
        }
        // Win stops the tick before walls and the advance
        assert_eq!(state.ball.pos, pos_before);
    }

    #[test]
    fn no_mutation_after_game_over_until_reset() {
        let mut state = running();
        state.paddle.x = 0.0;
        park_ball(&mut state, 325.0, 440.0, 2.0, 2.0);
        step(&mut state);
        assert_eq!(state.phase, GamePhase::Over(Outcome::Loss));

        let frozen = state.clone();
        for _ in 0..10 {
            step(&mut state);
        }
        assert_eq!(state, frozen);

        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bricks_remaining(), 45);
    }

    #[test]
    fn pause_preserves_everything_exactly() {
        let mut state = running();
        for _ in 0..25 {
            step(&mut state);
        }
        state.pause().unwrap();

        let snapshot = state.clone();
        for _ in 0..5 {
            step(&mut state);
        }
        state.resume().unwrap();

        assert_eq!(state.ball, snapshot.ball);
        assert_eq!(state.paddle, snapshot.paddle);
        assert_eq!(state.bricks, snapshot.bricks);
        assert_eq!(state.score, snapshot.score);
        assert_eq!(state.time_ticks, snapshot.time_ticks);
    }

    proptest! {
        #[test]
        fn score_is_monotone_and_bounded(
            seed in any::<u64>(),
            pointer_xs in proptest::collection::vec(0.0f32..PLAYFIELD_WIDTH, 1..400),
        ) {
            let mut state = GameState::new(seed);
            state.start().unwrap();

            let mut last_score = 0;
            for x in pointer_xs {
                state.on_paddle_input(x);
                step(&mut state);
                prop_assert!(state.score >= last_score);
                prop_assert!(state.score <= WIN_SCORE);
                last_score = state.score;
            }
        }

        #[test]
        fn bounces_preserve_velocity_magnitude(seed in any::<u64>(), ticks in 1usize..3000) {
            let mut state = GameState::new(seed);
            state.start().unwrap();
            let speed = state.ball.vel.abs();

            for _ in 0..ticks {
                // Shadow the ball so the session never ends in a loss
                state.on_paddle_input(state.ball.pos.x);
                step(&mut state);
                prop_assert_eq!(state.ball.vel.abs(), speed);
                prop_assert!(state.ball.pos.x > 0.0 && state.ball.pos.x < PLAYFIELD_WIDTH);
                prop_assert!(state.ball.pos.y > 0.0 && state.ball.pos.y < PLAYFIELD_HEIGHT);
            }
        }
    }
}
