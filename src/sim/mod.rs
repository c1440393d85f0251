//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, Brick, GamePhase, GameState, LifecycleError, Outcome, Paddle};
pub use tick::step;
