//! Rendering, decoupled from the simulation
//!
//! `draw_frame` replays a `GameState` onto any `DrawSurface`: clear, score
//! text, active bricks, ball, paddle, in that order. The browser
//! implementation over the canvas 2D context lives in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::*;
use crate::sim::GameState;

/// Minimal 2D draw contract: a clear plus filled shapes and text
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, corner: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Draw one frame of the given state
pub fn draw_frame<S: DrawSurface>(surface: &mut S, state: &GameState) {
    surface.clear();
    surface.fill_text(&format!("Score : {}", state.score), 8.0, 24.0);

    for brick in state.bricks.iter().filter(|b| b.alive) {
        surface.fill_rounded_rect(
            brick.pos.x,
            brick.pos.y,
            BRICK_WIDTH,
            BRICK_HEIGHT,
            SHAPE_CORNER_RADIUS,
        );
    }

    surface.fill_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius);
    surface.fill_rounded_rect(
        state.paddle.x,
        PLAYFIELD_HEIGHT - PADDLE_HEIGHT,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        SHAPE_CORNER_RADIUS,
    );
}
