//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical frame per `tick` call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_horizontal, bounce_vertical, deflection};
pub use state::{Ball, Difficulty, MatchEvent, MatchOutcome, MatchState, Paddle, Side};
pub use tick::{TickInput, tick};
