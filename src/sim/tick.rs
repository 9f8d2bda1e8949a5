//! Per-frame simulation tick
//!
//! Advances the match by exactly one display frame. The host calls this
//! from its requestAnimationFrame loop; it never blocks and performs no I/O.

use glam::Vec2;

use super::collision;
use super::state::{MatchEvent, MatchOutcome, MatchState, Side};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer vertical position, already mapped to the paddle's top edge.
    /// The sim clamps it into the field.
    pub pointer_y: Option<f32>,
}

/// Advance the match by one frame. No-op unless the match is running.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if !state.running {
        return;
    }

    if let Some(y) = input.pointer_y {
        state.player.set_y(y);
    }

    move_ai(state);
    update_ball(state);
}

/// Chase the ball's vertical position at the difficulty speed, with a
/// tolerance band around the paddle center so the AI doesn't oscillate
fn move_ai(state: &mut MatchState) {
    let speed = state.difficulty.ai_speed();
    let center = state.ai.center();
    let ball_y = state.ball.pos.y;

    if center < ball_y - AI_DEAD_ZONE {
        state.ai.shift(speed);
    } else if center > ball_y + AI_DEAD_ZONE {
        state.ai.shift(-speed);
    }
}

fn update_ball(state: &mut MatchState) {
    state.ball.pos += state.ball.vel;
    state.ball.rotation += BALL_SPIN_RATE;

    // Top and bottom walls
    if collision::hits_wall(&state.ball) {
        state.ball.vel = collision::bounce_vertical(state.ball.vel);
        state.push_event(MatchEvent::WallBounce);
    }

    // Paddles: invert horizontal travel, deflect by hit offset
    if collision::hits_left_paddle(&state.ball, &state.player) {
        state.ball.vel = collision::bounce_horizontal(state.ball.vel);
        state.ball.vel.y = collision::deflection(state.ball.pos.y, &state.player);
        state.push_event(MatchEvent::PaddleBounce { side: Side::Player });
    }
    if collision::hits_right_paddle(&state.ball, &state.ai) {
        state.ball.vel = collision::bounce_horizontal(state.ball.vel);
        state.ball.vel.y = collision::deflection(state.ball.pos.y, &state.ai);
        state.push_event(MatchEvent::PaddleBounce { side: Side::Ai });
    }

    // Scoring
    let mut scored = false;
    if state.ball.pos.x < 0.0 {
        state.ai_score += 1;
        state.push_event(MatchEvent::PointScored { side: Side::Ai });
        check_win(state);
        scored = true;
    } else if state.ball.pos.x > FIELD_WIDTH {
        state.player_score += 1;
        state.push_event(MatchEvent::PointScored { side: Side::Player });
        check_win(state);
        scored = true;
    }

    // Re-serve after a point while the match is still live: recenter,
    // send the ball back the other way, fresh random vertical sign.
    // This also covers the deuce branch, which re-serves nothing itself.
    if scored && state.running {
        state.ball.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y = BALL_SERVE_SPEED * state.random_sign();
    }
}

/// Win-condition state machine: race to 11, win by 2.
///
/// Past 10-10 with a gap under 2 the match extends (deuce) until someone
/// leads by 2. Any other point just re-serves the ball.
fn check_win(state: &mut MatchState) {
    let (p, a) = (state.player_score, state.ai_score);

    if p >= WIN_SCORE && p.saturating_sub(a) >= WIN_MARGIN {
        state.finish(MatchOutcome::Win);
    } else if a >= WIN_SCORE && a.saturating_sub(p) >= WIN_MARGIN {
        state.finish(MatchOutcome::Loss);
    } else if p >= DEUCE_SCORE && a >= DEUCE_SCORE && p.abs_diff(a) < WIN_MARGIN {
        // Deuce extension: keep playing
    } else {
        state.serve();
    }
}
