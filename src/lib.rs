//! Brick Break - a mouse-controlled Breakout game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, game state)
//! - `renderer`: 2D canvas drawing, decoupled from the simulation
//! - `platform`: Browser glue (interval timer, LocalStorage snapshots)

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed tick cadence while the game is running (milliseconds)
    pub const TICK_INTERVAL_MS: i32 = 10;

    /// Playfield dimensions (logical pixels)
    pub const PLAYFIELD_WIDTH: f32 = 650.0;
    pub const PLAYFIELD_HEIGHT: f32 = 450.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 9.0;
    /// Vertical distance above the floor where the ball spawns
    pub const BALL_SPAWN_OFFSET: f32 = 40.0;
    /// Starting velocity in pixels per tick
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Paddle defaults - paddle rides the bottom edge of the playfield
    pub const PADDLE_WIDTH: f32 = 72.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_WIDTH: f32 = 54.0;
    pub const BRICK_HEIGHT: f32 = 18.0;
    pub const BRICK_PADDING: f32 = 12.0;
    pub const BRICK_TOP_OFFSET: f32 = 40.0;
    pub const BRICK_LEFT_OFFSET: f32 = 33.0;

    /// Score that clears the board
    pub const WIN_SCORE: u32 = (BRICK_ROWS * BRICK_COLUMNS) as u32;

    /// Corner radius for the paddle and brick rounded rects
    pub const SHAPE_CORNER_RADIUS: f32 = 30.0;
}
