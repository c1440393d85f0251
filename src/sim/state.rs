//! Game state and core simulation types
//!
//! One `GameState` owns everything for a play session: ball, paddle, brick
//! grid, score, and the lifecycle state machine
//! `NotStarted → Running ⇄ Paused → Over`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet; waiting for Start
    NotStarted,
    /// Active gameplay, ticking on the fixed cadence
    Running,
    /// Session frozen mid-flight; Resume continues it untouched
    Paused,
    /// Session ended
    Over(Outcome),
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All bricks cleared
    Win,
    /// Ball got past the paddle
    Loss,
}

impl Outcome {
    /// Player-facing terminal message
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Loss => "Game Over!",
        }
    }
}

/// A lifecycle call arrived in a phase where it is not valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("start is not valid while {phase:?}")]
    Start { phase: GamePhase },
    #[error("pause is only valid while running (was {phase:?})")]
    Pause { phase: GamePhase },
    #[error("resume is only valid while paused (was {phase:?})")]
    Resume { phase: GamePhase },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position (pixels)
    pub pos: Vec2,
    /// Velocity (pixels per tick)
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle, riding the bottom edge of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge x. Not clamped to the playfield; only the raw pointer
    /// position is bounds-checked before it lands here.
    pub x: f32,
}

impl Paddle {
    pub fn centered() -> Self {
        Self {
            x: (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH
    }
}

/// One destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, fixed at session start from the grid indices
    pub pos: Vec2,
    /// False once destroyed; never reverts within a session
    pub alive: bool,
}

impl Brick {
    /// Ball center strictly inside this brick's rectangle
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        collision::point_in_rect(point, self.pos, BRICK_WIDTH, BRICK_HEIGHT)
    }

    /// Build the full 9×5 grid, all bricks alive, column-major
    pub fn grid() -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(BRICK_COLUMNS * BRICK_ROWS);
        for col in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                let x = col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_LEFT_OFFSET;
                let y = row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_TOP_OFFSET;
                bricks.push(Brick {
                    pos: Vec2::new(x, y),
                    alive: true,
                });
            }
        }
        bricks
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Step to a fresh stream so each new session draws new randoms
    pub fn advance(&mut self) {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
    }
}

/// Complete game state for one session (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// 45 bricks, column-major
    pub bricks: Vec<Brick>,
    pub score: u32,
    /// Completed simulation ticks this session
    pub time_ticks: u64,
    rng_state: RngState,
}

impl GameState {
    /// Create an idle state with the given seed; `start` begins a session.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: BALL_RADIUS,
            },
            paddle: Paddle::centered(),
            bricks: Vec::new(),
            score: 0,
            time_ticks: 0,
            rng_state: RngState::new(seed),
        }
    }

    /// Begin a fresh session. Valid from NotStarted or Over.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            GamePhase::NotStarted | GamePhase::Over(_) => {
                self.begin_session();
                Ok(())
            }
            phase => Err(LifecycleError::Start { phase }),
        }
    }

    /// Freeze the running session in place.
    pub fn pause(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("paused at tick {}", self.time_ticks);
                Ok(())
            }
            phase => Err(LifecycleError::Pause { phase }),
        }
    }

    /// Continue a paused session with state exactly as it was left.
    pub fn resume(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("resumed at tick {}", self.time_ticks);
                Ok(())
            }
            phase => Err(LifecycleError::Resume { phase }),
        }
    }

    /// Hard reset: discard the session (from any phase) and start a new one.
    pub fn reset(&mut self) {
        log::info!("reset from {:?}", self.phase);
        self.begin_session();
    }

    /// Pointer input hook, accepted in every phase. The raw pointer x must
    /// lie strictly inside the playfield or the event is ignored; the
    /// resulting paddle x is deliberately left unclamped.
    pub fn on_paddle_input(&mut self, pointer_x: f32) {
        if pointer_x > 0.0 && pointer_x < PLAYFIELD_WIDTH {
            self.paddle.x = pointer_x - PADDLE_WIDTH / 2.0;
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    fn begin_session(&mut self) {
        self.rng_state.advance();
        let mut rng = self.rng_state.to_rng();
        let r1: f32 = rng.random();
        let r2: f32 = rng.random();
        // Serve column formula from the original tuning: multiplying two
        // uniform draws skews toward large divisors, so serves favor the
        // board's left-center.
        let divisor = (r1 * r2 * 10.0).floor() + 3.0;

        self.ball = Ball {
            pos: Vec2::new(
                PLAYFIELD_WIDTH / divisor,
                PLAYFIELD_HEIGHT - BALL_SPAWN_OFFSET,
            ),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        };
        self.paddle = Paddle::centered();
        self.bricks = Brick::grid();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::info!("session started, serve at x={:.1}", self.ball.pos.x);
    }
}
