//! Per-frame simulation step
//!
//! Advances paddle, ball, bricks, score and lives by one variable timestep.
//! The caller skips this entirely while paused.

use super::state::{GameEvent, WorldState};
use crate::consts::*;
use crate::sanitize_dt;

/// Input for a single step, already reduced from device state
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// D-pad left held
    pub left: bool,
    /// D-pad right held
    pub right: bool,
    /// Paddle follows the ball
    pub auto_play: bool,
}

/// Advance the world by `dt` seconds and report what happened.
///
/// Order matters and is fixed: auto-play snap, manual movement, bottom exit,
/// side walls, paddle/top, bricks, then integration with the resulting
/// velocity.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = sanitize_dt(dt);
    let mut events = Vec::new();

    apply_auto_play(state, input);
    apply_manual_movement(state, input, dt);
    check_bottom_exit(state, &mut events);
    bounce_side_walls(state, &mut events);
    bounce_paddle_and_top(state, &mut events);
    sweep_bricks(state, &mut events);
    integrate(state, dt);

    log::trace!(
        "tick dt={dt:.4} ball=({:.1}, {:.1}) paddle_x={:.1}",
        state.ball.bounds.x,
        state.ball.bounds.y,
        state.paddle.bounds.x
    );

    events
}

/// Snap the paddle under the ball. No smoothing, no clamping.
pub(crate) fn apply_auto_play(state: &mut WorldState, input: &TickInput) {
    if input.auto_play && state.ball.bounds.x < state.paddle.max_x() {
        state.paddle.bounds.x = state.ball.bounds.x;
    }
}

/// Bounds are checked against the position before the move, so one large
/// step can carry the paddle past the edge.
pub(crate) fn apply_manual_movement(state: &mut WorldState, input: &TickInput, dt: f32) {
    let paddle = &mut state.paddle;
    let step = paddle.speed * dt;

    if input.left && paddle.bounds.x > 0.0 {
        paddle.bounds.x -= step;
    } else if input.right && paddle.bounds.x < paddle.max_x() {
        paddle.bounds.x += step;
    }
}

fn check_bottom_exit(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    if ball.bounds.y <= SCREEN_HEIGHT + ball.bounds.h {
        return;
    }

    let reset = ball.reset_position();
    ball.bounds.set_position(reset);
    ball.vel.x = -ball.vel.x;
    events.push(GameEvent::BallReset);

    if state.lives > 0 {
        state.lives -= 1;
        log::debug!("Ball lost, {} lives left", state.lives);
        events.push(GameEvent::LivesChanged { lives: state.lives });
    }
}

fn bounce_side_walls(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    if ball.bounds.x < 0.0 || ball.bounds.x > SCREEN_WIDTH - ball.bounds.w {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
}

/// Approach direction is ignored: a ball that stays inside the paddle for
/// several frames flips every frame.
fn bounce_paddle_and_top(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    if state.paddle.bounds.intersects(&ball.bounds) || ball.bounds.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::PaddleBounce);
    }
}

/// Mark first, remove after. Every brick hit this frame flips vy once.
fn sweep_bricks(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;

    for brick in state.bricks.iter_mut() {
        if brick.destroyed || !brick.bounds.intersects(&ball.bounds) {
            continue;
        }
        ball.vel.y = -ball.vel.y;
        brick.destroyed = true;
        state.score += u64::from(brick.points);
        log::debug!("Brick destroyed (+{}), score {}", brick.points, state.score);
        events.push(GameEvent::BrickDestroyed {
            points: brick.points,
            score: state.score,
        });
    }

    state.bricks.retain(|b| !b.destroyed);
}

fn integrate(state: &mut WorldState, dt: f32) {
    let ball = &mut state.ball;
    let pos = ball.bounds.position() + ball.vel * dt;
    ball.bounds.set_position(pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Brick;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// World with no bricks, manual control, ball parked mid-screen
    fn open_world() -> WorldState {
        let mut state = WorldState::new();
        state.bricks.clear();
        state.auto_play = false;
        state.ball.bounds = Rect::new(600.0, 400.0, 20.0, 20.0);
        state
    }

    fn manual() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_free_flight_integrates() {
        let mut state = open_world();
        let events = tick(&mut state, &manual(), 0.1);
        assert!(events.is_empty());
        assert_eq!(state.ball.bounds.position(), Vec2::new(642.5, 442.5));
        assert_eq!(state.ball.vel, Vec2::new(425.0, 425.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = open_world();
        state.ball.bounds.x = -1.0;
        state.ball.vel = Vec2::new(-425.0, 425.0);

        let events = tick(&mut state, &manual(), DT);
        assert_eq!(state.ball.vel, Vec2::new(425.0, 425.0));
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut state = open_world();
        state.ball.bounds.x = SCREEN_WIDTH - 19.0;

        let events = tick(&mut state, &manual(), DT);
        assert_eq!(state.ball.vel, Vec2::new(-425.0, 425.0));
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_top_bounce() {
        let mut state = open_world();
        state.ball.bounds.y = -0.5;
        state.ball.vel = Vec2::new(425.0, -425.0);

        let events = tick(&mut state, &manual(), DT);
        assert_eq!(state.ball.vel, Vec2::new(425.0, 425.0));
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = open_world();
        state.paddle.bounds.x = 600.0;
        state.ball.bounds = Rect::new(610.0, PADDLE_Y - 10.0, 20.0, 20.0);

        let events = tick(&mut state, &manual(), DT);
        assert_eq!(state.ball.vel.y, -425.0);
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
    }

    #[test]
    fn test_sustained_paddle_overlap_flips_every_frame() {
        let mut state = open_world();
        state.paddle.bounds.x = 600.0;
        state.ball.bounds = Rect::new(610.0, PADDLE_Y + 2.0, 20.0, 20.0);

        tick(&mut state, &manual(), 0.0);
        assert_eq!(state.ball.vel.y, -425.0);
        tick(&mut state, &manual(), 0.0);
        assert_eq!(state.ball.vel.y, 425.0);
    }

    #[test]
    fn test_bottom_exit_resets_and_costs_life() {
        let mut state = open_world();
        state.ball.bounds.y = SCREEN_HEIGHT + 21.0;

        let events = tick(&mut state, &manual(), 0.0);
        assert_eq!(state.ball.bounds.position(), Vec2::new(620.0, 340.0));
        assert_eq!(state.ball.vel, Vec2::new(-425.0, 425.0));
        assert_eq!(state.lives, 1);
        assert_eq!(
            events,
            vec![GameEvent::BallReset, GameEvent::LivesChanged { lives: 1 }]
        );
    }

    #[test]
    fn test_bottom_exit_at_zero_lives_still_resets() {
        let mut state = open_world();
        state.lives = 0;
        state.ball.bounds.y = SCREEN_HEIGHT + 100.0;

        let events = tick(&mut state, &manual(), 0.0);
        assert_eq!(state.lives, 0);
        assert_eq!(state.ball.bounds.position(), Vec2::new(620.0, 340.0));
        assert_eq!(state.ball.vel.x, -425.0);
        assert_eq!(events, vec![GameEvent::BallReset]);
    }

    #[test]
    fn test_bottom_exit_threshold_is_exclusive() {
        let mut state = open_world();
        state.ball.bounds.y = SCREEN_HEIGHT + 20.0;

        tick(&mut state, &manual(), 0.0);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_brick_hit_scores_and_removes() {
        let mut state = open_world();
        state.bricks.push(Brick {
            bounds: Rect::new(600.0, 400.0, 60.0, 20.0),
            destroyed: false,
            points: 7,
        });

        let events = tick(&mut state, &manual(), 0.0);
        assert_eq!(state.score, 7);
        assert!(state.bricks.is_empty());
        assert_eq!(state.ball.vel.y, -425.0);
        assert_eq!(events, vec![GameEvent::BrickDestroyed { points: 7, score: 7 }]);

        // Same position again: nothing left to hit
        let events = tick(&mut state, &manual(), 0.0);
        assert_eq!(state.score, 7);
        assert!(events.is_empty());
    }

    #[test]
    fn test_two_bricks_in_one_frame_restore_velocity() {
        let mut state = open_world();
        for (x, points) in [(560.0, 4), (615.0, 5)] {
            state.bricks.push(Brick {
                bounds: Rect::new(x, 400.0, 50.0, 20.0),
                destroyed: false,
                points,
            });
        }

        let events = tick(&mut state, &manual(), 0.0);
        assert_eq!(state.score, 9);
        assert_eq!(state.ball.vel.y, 425.0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], GameEvent::BrickDestroyed { points: 5, score: 9 });
    }

    #[test]
    fn test_destroyed_brick_is_ignored() {
        let mut state = open_world();
        state.bricks.push(Brick {
            bounds: Rect::new(600.0, 400.0, 60.0, 20.0),
            destroyed: true,
            points: 10,
        });

        tick(&mut state, &manual(), 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.vel.y, 425.0);
        assert!(state.bricks.is_empty());
    }

    #[test]
    fn test_auto_play_snaps_before_manual_move() {
        let mut state = open_world();
        state.ball.bounds.x = 300.0;
        let input = TickInput {
            auto_play: true,
            right: true,
            ..Default::default()
        };

        apply_auto_play(&mut state, &input);
        assert_eq!(state.paddle.bounds.x, 300.0);

        apply_manual_movement(&mut state, &input, 0.1);
        assert_eq!(state.paddle.bounds.x, 380.0);
    }

    #[test]
    fn test_auto_play_and_manual_in_one_tick() {
        let mut state = open_world();
        state.ball.bounds.x = 300.0;
        let input = TickInput {
            auto_play: true,
            left: true,
            ..Default::default()
        };

        tick(&mut state, &input, 0.1);
        assert_eq!(state.paddle.bounds.x, 220.0);
    }

    #[test]
    fn test_auto_play_ignored_near_right_edge() {
        let mut state = open_world();
        state.paddle.bounds.x = 100.0;
        state.ball.bounds.x = SCREEN_WIDTH - PADDLE_WIDTH;
        let input = TickInput {
            auto_play: true,
            ..Default::default()
        };

        apply_auto_play(&mut state, &input);
        assert_eq!(state.paddle.bounds.x, 100.0);
    }

    #[test]
    fn test_manual_left_blocked_at_edge() {
        let mut state = open_world();
        state.paddle.bounds.x = 0.0;
        let input = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &input, DT);
        assert_eq!(state.paddle.bounds.x, 0.0);
    }

    #[test]
    fn test_manual_guard_uses_pre_move_position() {
        let mut state = open_world();
        state.paddle.bounds.x = 1.0;
        let input = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &input, 0.1);
        assert_eq!(state.paddle.bounds.x, -79.0);
    }

    #[test]
    fn test_left_takes_precedence_over_right() {
        let mut state = open_world();
        let start = state.paddle.bounds.x;
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };

        tick(&mut state, &input, 0.1);
        assert_eq!(state.paddle.bounds.x, start - 80.0);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut state = open_world();
        let before = state.ball.bounds.position();
        tick(&mut state, &manual(), -0.5);
        assert_eq!(state.ball.bounds.position(), before);
    }

    #[test]
    fn test_nan_dt_keeps_positions_finite() {
        let mut state = open_world();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, f32::NAN);
        assert!(state.ball.bounds.x.is_finite());
        assert!(state.paddle.bounds.x.is_finite());
    }

    #[test]
    fn test_large_dt_stall() {
        let mut state = WorldState::new();
        tick(&mut state, &manual(), 30.0);
        // Capped to one second of travel
        assert_eq!(state.ball.bounds.position(), Vec2::new(1045.0, 765.0));
        // Ball flew off the bottom; next step resets it
        tick(&mut state, &manual(), 0.0);
        assert_eq!(state.lives, 1);
    }

    #[test]
    fn test_repeated_huge_dt_stays_finite() {
        let mut state = open_world();
        state.ball.vel = Vec2::new(425.0, -425.0);
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let left = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &right, 1.0e37);
        tick(&mut state, &left, 1.0e37);
        tick(&mut state, &right, f32::MAX);

        assert!(state.ball.bounds.x.is_finite());
        assert!(state.ball.bounds.y.is_finite());
        assert!(state.paddle.bounds.x.is_finite());
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(
            dts in proptest::collection::vec(0.0f32..0.1, 1..200),
            moves in proptest::collection::vec(0u8..3, 1..200),
        ) {
            let mut state = WorldState::new();
            for (i, dt) in dts.iter().enumerate() {
                let m = moves[i % moves.len()];
                let input = TickInput { left: m == 1, right: m == 2, auto_play: i % 7 == 0 };
                let before = state.score;
                let events = tick(&mut state, &input, *dt);
                let gained: u64 = events
                    .iter()
                    .filter_map(|e| match e {
                        GameEvent::BrickDestroyed { points, .. } => Some(u64::from(*points)),
                        _ => None,
                    })
                    .sum();
                prop_assert_eq!(state.score, before + gained);
                prop_assert!(state.bricks.iter().all(|b| !b.destroyed));
            }
        }

        #[test]
        fn prop_velocity_magnitude_is_fixed(dts in proptest::collection::vec(0.0f32..0.5, 1..300)) {
            let mut state = WorldState::new();
            for dt in dts {
                tick(&mut state, &TickInput { auto_play: true, ..Default::default() }, dt);
                prop_assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
                prop_assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
            }
        }

        #[test]
        fn prop_positions_stay_finite(
            steps in proptest::collection::vec(
                (
                    prop_oneof![
                        Just(f32::NAN),
                        Just(f32::INFINITY),
                        Just(f32::NEG_INFINITY),
                        Just(f32::MAX),
                        Just(1.0e37f32),
                        -1.0e6f32..1.0e4f32,
                        proptest::num::f32::ANY,
                    ],
                    0u8..3,
                ),
                1..50,
            ),
        ) {
            let mut state = WorldState::new();
            for (dt, m) in steps {
                let input = TickInput { left: m == 1, right: m == 2, auto_play: false };
                tick(&mut state, &input, dt);
                prop_assert!(state.ball.bounds.x.is_finite());
                prop_assert!(state.ball.bounds.y.is_finite());
                prop_assert!(state.paddle.bounds.x.is_finite());
            }
        }

        #[test]
        fn prop_lives_never_increase(dts in proptest::collection::vec(0.0f32..1.0, 1..100)) {
            let mut state = WorldState::new();
            let mut lives = state.lives;
            for dt in dts {
                tick(&mut state, &TickInput::default(), dt);
                prop_assert!(state.lives <= lives);
                lives = state.lives;
            }
        }
    }
}
