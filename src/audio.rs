//! Audio system using Web Audio API
//!
//! Procedurally generated bounce sounds - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallHit,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect, fire-and-forget
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require a user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
            SoundEffect::WallHit => self.play_wall_hit(ctx, vol),
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Paddle hit - springy "boing" with a falling pitch
    fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.5, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(220.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(90.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Wall hit - shorter, higher ping
    fn play_wall_hit(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }
}
