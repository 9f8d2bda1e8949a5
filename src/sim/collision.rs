//! Collision tests for the flat play field
//!
//! Everything here is pure: the tick decides what to do with a hit.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Does the ball cross the top or bottom wall this frame?
pub fn hits_wall(ball: &Ball) -> bool {
    ball.pos.y - BALL_RADIUS < 0.0 || ball.pos.y + BALL_RADIUS > FIELD_HEIGHT
}

/// Ball overlaps the left (player) paddle: within paddle depth from the
/// left edge and inside the paddle's vertical span
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - BALL_RADIUS < PADDLE_WIDTH && paddle.spans(ball.pos.y)
}

/// Ball overlaps the right (AI) paddle
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x + BALL_RADIUS > FIELD_WIDTH - PADDLE_WIDTH && paddle.spans(ball.pos.y)
}

/// Deflected vertical velocity after a paddle hit
///
/// Proportional to the offset between ball and paddle center, so edge
/// hits send the ball away at a steeper angle.
pub fn deflection(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center()) * DEFLECT_FACTOR
}

/// Invert the vertical component (wall bounce)
#[inline]
pub fn bounce_vertical(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}

/// Invert the horizontal component (paddle bounce, before deflection)
#[inline]
pub fn bounce_horizontal(vel: Vec2) -> Vec2 {
    Vec2::new(-vel.x, vel.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(-BALL_SERVE_SPEED, 0.0),
            rotation: 0.0,
        }
    }

    #[test]
    fn test_wall_hit_top_and_bottom() {
        assert!(hits_wall(&ball_at(100.0, BALL_RADIUS - 1.0)));
        assert!(hits_wall(&ball_at(100.0, FIELD_HEIGHT - BALL_RADIUS + 1.0)));
        assert!(!hits_wall(&ball_at(100.0, FIELD_HEIGHT / 2.0)));
    }

    #[test]
    fn test_left_paddle_overlap() {
        let paddle = Paddle { y: 200.0 };
        // Inside depth and span
        assert!(hits_left_paddle(&ball_at(PADDLE_WIDTH + 5.0, 250.0), &paddle));
        // Right depth, wrong span
        assert!(!hits_left_paddle(&ball_at(PADDLE_WIDTH + 5.0, 350.0), &paddle));
        // Right span, too far out
        assert!(!hits_left_paddle(&ball_at(100.0, 250.0), &paddle));
    }

    #[test]
    fn test_right_paddle_overlap() {
        let paddle = Paddle { y: 200.0 };
        let x = FIELD_WIDTH - PADDLE_WIDTH - 5.0;
        assert!(hits_right_paddle(&ball_at(x, 250.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(x, 150.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(FIELD_WIDTH / 2.0, 250.0), &paddle));
    }

    #[test]
    fn test_deflection_scales_with_offset() {
        let paddle = Paddle { y: 200.0 };
        // Dead center hit goes flat
        assert_eq!(deflection(paddle.center(), &paddle), 0.0);
        // Hit below center deflects downward, scaled by 0.35
        let dy = deflection(paddle.center() + 40.0, &paddle);
        assert!((dy - 40.0 * DEFLECT_FACTOR).abs() < f32::EPSILON);
        // Hit above center deflects upward
        assert!(deflection(paddle.center() - 40.0, &paddle) < 0.0);
    }

    #[test]
    fn test_bounce_helpers_flip_one_axis() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(bounce_vertical(v), Vec2::new(3.0, 4.0));
        assert_eq!(bounce_horizontal(v), Vec2::new(-3.0, -4.0));
    }
}
