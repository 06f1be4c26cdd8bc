use crate::constants::{
    CLICK_ATTACK_SEC, CLICK_DECAY_SEC, CLICK_FLOOR_GAIN, CLICK_FREQ_HZ, CLICK_PEAK_GAIN,
    MASTER_GAIN,
};
use web_sys as web;

/// Audio context plus a master gain that every click is routed through.
pub struct ClickBus {
    ctx: web::AudioContext,
    master: web::GainNode,
    enabled: bool,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!(format!("{} GainNode error: {:?}", label, e)))?;
    g.gain().set_value(value);
    Ok(g)
}

impl ClickBus {
    pub fn new(enabled: bool) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new()
            .map_err(|e| anyhow::anyhow!(format!("AudioContext error: {:?}", e)))?;
        let master = create_gain(&ctx, if enabled { MASTER_GAIN } else { 0.0 }, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!(format!("connect error: {:?}", e)))?;
        Ok(Self {
            ctx,
            master,
            enabled,
        })
    }

    /// Browsers start the context suspended until a user gesture.
    #[inline]
    pub fn resume(&self) {
        let _ = self.ctx.resume();
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.ctx.current_time()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.master
            .gain()
            .set_value(if enabled { MASTER_GAIN } else { 0.0 });
    }

    /// Flip mute; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Fire one click. Throttling is the caller's job.
    pub fn trigger_click(&self) {
        if !self.enabled {
            return;
        }
        let Ok(src) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(CLICK_FREQ_HZ);
        let Ok(g) = web::GainNode::new(&self.ctx) else {
            return;
        };
        let t0 = self.ctx.current_time() + 0.005;
        g.gain().set_value(0.0);
        let _ = g.gain().set_value_at_time(0.0, t0);
        let _ = g
            .gain()
            .linear_ramp_to_value_at_time(CLICK_PEAK_GAIN, t0 + CLICK_ATTACK_SEC);
        let end = t0 + CLICK_ATTACK_SEC + CLICK_DECAY_SEC;
        let _ = g
            .gain()
            .exponential_ramp_to_value_at_time(CLICK_FLOOR_GAIN, end);
        let _ = src.connect_with_audio_node(&g);
        let _ = g.connect_with_audio_node(&self.master);
        let _ = src.start_with_when(t0);
        let _ = src.stop_with_when(end + 0.02);
    }
}
