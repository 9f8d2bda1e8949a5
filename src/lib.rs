//! Pong Duel - classic two-paddle pong against an AI opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `renderer`: Canvas 2D drawing (wasm only)
//! - `audio`: Procedural Web Audio sound effects (wasm only)
//! - `settings`: User preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (logical pixels, match the canvas)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle dimensions - shared by both paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve speed on each axis (units per frame)
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    /// Spin accumulated per frame while the match runs (radians)
    pub const BALL_SPIN_RATE: f32 = 0.1;

    /// Vertical deflection per unit of offset from the paddle center
    pub const DEFLECT_FACTOR: f32 = 0.35;

    /// AI tolerance band around its paddle center (prevents jitter)
    pub const AI_DEAD_ZONE: f32 = 35.0;

    /// Match ends at this score with a two point lead
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_MARGIN: u32 = 2;
    /// Both sides at or past this score with a narrow gap extends play
    pub const DEUCE_SCORE: u32 = 10;
}

/// Clamp a paddle offset into the play field
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, consts::FIELD_HEIGHT - consts::PADDLE_HEIGHT)
}

/// Paddle offset that centers it vertically in the field
#[inline]
pub fn centered_paddle_y() -> f32 {
    consts::FIELD_HEIGHT / 2.0 - consts::PADDLE_HEIGHT / 2.0
}
