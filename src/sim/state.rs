//! Match state and core simulation types
//!
//! One owned struct holds everything the tick mutates - no module globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{centered_paddle_y, clamp_paddle_y};

/// AI opponent difficulty - governs how fast its paddle chases the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// AI paddle speed in units per frame
    pub fn ai_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 4.0,
            Difficulty::Hard => 6.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "normal" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Which side of the field an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle (human)
    Player,
    /// Right paddle (computer)
    Ai,
}

/// How the match ended, from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
}

impl MatchOutcome {
    /// Text for the result panel
    pub fn message(self) -> &'static str {
        match self {
            MatchOutcome::Win => "You win!",
            MatchOutcome::Loss => "You lose.",
        }
    }
}

/// Side-effect signals emitted during a tick
///
/// The simulation never touches audio or the DOM; the host drains these
/// each frame and forwards them to the collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleBounce { side: Side },
    /// A point was scored for the given side
    PointScored { side: Side },
    /// Match ended; `running` is now false
    MatchOver(MatchOutcome),
}

/// A paddle, described only by its vertical offset
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Top edge offset, always within [0, FIELD_HEIGHT - PADDLE_HEIGHT]
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            y: centered_paddle_y(),
        }
    }
}

impl Paddle {
    /// Vertical midpoint of the paddle
    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Move back to the field center
    pub fn recenter(&mut self) {
        self.y = centered_paddle_y();
    }

    /// Set the offset, clamped into the field
    pub fn set_y(&mut self, y: f32) {
        self.y = clamp_paddle_y(y);
    }

    /// Shift by a delta, clamped into the field
    pub fn shift(&mut self, dy: f32) {
        self.y = clamp_paddle_y(self.y + dy);
    }

    /// Whether a vertical coordinate falls within the paddle span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + PADDLE_HEIGHT
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement applied each frame
    pub vel: Vec2,
    /// Accumulated spin in radians; grows without bound, wraps via float drift
    pub rotation: f32,
}

impl Ball {
    fn centered(vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel,
            rotation: 0.0,
        }
    }
}

/// Complete match state, exclusively owned by the host and mutated only
/// through `reset` / `set_difficulty` / `tick`
#[derive(Debug, Clone)]
pub struct MatchState {
    pub difficulty: Difficulty,
    /// Left paddle (human)
    pub player: Paddle,
    /// Right paddle (computer)
    pub ai: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub ai_score: u32,
    /// Physics updates apply only while true
    pub running: bool,
    /// Set once when the match ends; the result panel polls this
    pub outcome: Option<MatchOutcome>,
    /// Seeded RNG for serve directions
    rng: Pcg32,
    /// Pending side-effect signals, drained by the host each frame
    events: Vec<MatchEvent>,
}

impl MatchState {
    /// Create a fresh match with the given seed and difficulty
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        let mut state = Self {
            difficulty,
            player: Paddle::default(),
            ai: Paddle::default(),
            ball: Ball::centered(Vec2::ZERO),
            player_score: 0,
            ai_score: 0,
            running: false,
            outcome: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Re-initialize for a new match: paddles and ball centered, random
    /// serve direction, scores zeroed, result panel cleared.
    ///
    /// Ball rotation is deliberately left alone - spin carries across
    /// matches.
    pub fn reset(&mut self) {
        self.player.recenter();
        self.ai.recenter();
        let rotation = self.ball.rotation;
        self.ball = Ball::centered(self.random_serve_velocity());
        self.ball.rotation = rotation;
        self.player_score = 0;
        self.ai_score = 0;
        self.outcome = None;
        self.running = true;
        self.events.clear();
        log::info!("match reset (difficulty: {})", self.difficulty.as_str());
    }

    /// Change the AI difficulty; always restarts the match
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Put the ball back at field center with fresh random direction signs
    pub(crate) fn serve(&mut self) {
        let vel = self.random_serve_velocity();
        let rotation = self.ball.rotation;
        self.ball = Ball::centered(vel);
        self.ball.rotation = rotation;
    }

    fn random_serve_velocity(&mut self) -> Vec2 {
        Vec2::new(
            BALL_SERVE_SPEED * self.random_sign(),
            BALL_SERVE_SPEED * self.random_sign(),
        )
    }

    /// Uniformly random +1 or -1
    pub(crate) fn random_sign(&mut self) -> f32 {
        if self.rng.random::<bool>() { 1.0 } else { -1.0 }
    }

    /// End the match and freeze physics
    pub(crate) fn finish(&mut self, outcome: MatchOutcome) {
        self.outcome = Some(outcome);
        self.running = false;
        self.push_event(MatchEvent::MatchOver(outcome));
        log::info!(
            "match over: {} ({}-{})",
            outcome.message(),
            self.player_score,
            self.ai_score
        );
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    /// Drain pending side-effect signals
    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centered_paddle_y;

    #[test]
    fn test_reset_yields_fresh_match() {
        let mut state = MatchState::new(7, Difficulty::Hard);
        state.player_score = 5;
        state.ai_score = 9;
        state.running = false;
        state.outcome = Some(MatchOutcome::Loss);
        state.player.set_y(0.0);

        state.reset();

        assert!(state.running);
        assert_eq!(state.outcome, None);
        assert_eq!((state.player_score, state.ai_score), (0, 0));
        assert_eq!(state.player.y, centered_paddle_y());
        assert_eq!(state.ai.y, centered_paddle_y());
        assert_eq!(state.ball.pos.x, FIELD_WIDTH / 2.0);
        assert_eq!(state.ball.pos.y, FIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_serve_speed_is_fixed_per_axis() {
        let mut state = MatchState::new(42, Difficulty::Medium);
        for _ in 0..20 {
            state.serve();
            assert_eq!(state.ball.vel.x.abs(), BALL_SERVE_SPEED);
            assert_eq!(state.ball.vel.y.abs(), BALL_SERVE_SPEED);
        }
    }

    #[test]
    fn test_set_difficulty_restarts() {
        let mut state = MatchState::new(1, Difficulty::Easy);
        state.player_score = 3;
        state.set_difficulty(Difficulty::Hard);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.player_score, 0);
        assert!(state.running);
    }

    #[test]
    fn test_paddle_clamping() {
        let mut paddle = Paddle::default();
        paddle.set_y(-50.0);
        assert_eq!(paddle.y, 0.0);
        paddle.set_y(FIELD_HEIGHT * 2.0);
        assert_eq!(paddle.y, FIELD_HEIGHT - PADDLE_HEIGHT);
        paddle.shift(-1.0e6);
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_difficulty_parse_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("normal"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("impossible"), None);
    }
}
