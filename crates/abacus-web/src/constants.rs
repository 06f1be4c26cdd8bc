// Page wiring and click-sound tuning for the web frontend

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const HELP_OVERLAY_ID: &str = "help-overlay";
pub const DIGITS_ID: &str = "digits";

// Canvas cursors
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_HOVER: &str = "pointer";
pub const CURSOR_ACTIVE: &str = "grabbing";

// Click: a short sine blip with a fast attack and exponential decay
pub const CLICK_FREQ_HZ: f32 = 1800.0;
pub const CLICK_PEAK_GAIN: f32 = 0.35;
pub const CLICK_ATTACK_SEC: f64 = 0.002;
pub const CLICK_DECAY_SEC: f64 = 0.05;
pub const CLICK_FLOOR_GAIN: f32 = 0.0001; // exponential ramps cannot reach zero
pub const MASTER_GAIN: f32 = 0.8;

// Renderer
pub const INITIAL_INSTANCE_CAPACITY: usize = 128;
