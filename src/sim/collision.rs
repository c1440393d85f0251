//! Collision predicates for the rectangular playfield
//!
//! The ball is a point for brick hits and a circle for wall and paddle
//! checks, matching the original game's comparisons exactly. Wall and
//! floor tests look at the projected position one tick ahead.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Point strictly inside an axis-aligned rectangle
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, width: f32, height: f32) -> bool {
    point.x > origin.x
        && point.x < origin.x + width
        && point.y > origin.y
        && point.y < origin.y + height
}

/// Projected x leaves the [radius, width - radius] band next tick
#[inline]
pub fn hits_side_wall(ball: &Ball) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > PLAYFIELD_WIDTH - ball.radius || next_x < ball.radius
}

/// Projected y rises above the ceiling band next tick
#[inline]
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Projected y drops below the floor band next tick
#[inline]
pub fn hits_floor(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y > PLAYFIELD_HEIGHT - ball.radius
}

/// Ball center strictly within the paddle's horizontal span. Uses the
/// current x, not the projected one, as the original does.
#[inline]
pub fn over_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x > paddle.x && ball.pos.x < paddle.right()
}
