//! Canvas 2D rendering
//!
//! Draws the whole frame from a `&MatchState`: field, both paddles, the
//! spinning ball, and the dashed center line. Pure output - never mutates
//! the simulation.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::MatchState;

const FIELD_COLOR: &str = "black";
const PADDLE_COLOR: &str = "white";
const BALL_COLOR: &str = "white";
const SPIN_MARK_COLOR: &str = "red";

/// Dashed center line geometry
const DASH_STEP: f64 = 40.0;
const DASH_LENGTH: f64 = 20.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one full frame
    pub fn render(&self, state: &MatchState) -> Result<(), JsValue> {
        self.clear();
        self.draw_center_line();

        // Player left, AI right
        self.draw_rect(
            0.0,
            state.player.y as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
            PADDLE_COLOR,
        );
        self.draw_rect(
            (FIELD_WIDTH - PADDLE_WIDTH) as f64,
            state.ai.y as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
            PADDLE_COLOR,
        );

        self.draw_rotated_ball(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            BALL_RADIUS as f64,
            state.ball.rotation as f64,
        )
    }

    fn clear(&self) {
        self.draw_rect(
            0.0,
            0.0,
            FIELD_WIDTH as f64,
            FIELD_HEIGHT as f64,
            FIELD_COLOR,
        );
    }

    fn draw_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    /// Ball with a diameter line so the spin reads on screen
    fn draw_rotated_ball(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        rotation: f64,
    ) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.translate(x, y)?;
        self.ctx.rotate(rotation)?;

        self.ctx.begin_path();
        self.ctx.arc(0.0, 0.0, radius, 0.0, PI * 2.0)?;
        self.ctx.set_fill_style_str(BALL_COLOR);
        self.ctx.fill();

        self.ctx.begin_path();
        self.ctx.move_to(-radius, 0.0);
        self.ctx.line_to(radius, 0.0);
        self.ctx.set_stroke_style_str(SPIN_MARK_COLOR);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();

        self.ctx.restore();
        Ok(())
    }

    fn draw_center_line(&self) {
        let x = (FIELD_WIDTH / 2.0) as f64 - 1.0;
        let mut y = 0.0;
        while y < FIELD_HEIGHT as f64 {
            self.draw_rect(x, y, 2.0, DASH_LENGTH, PADDLE_COLOR);
            y += DASH_STEP;
        }
    }
}
