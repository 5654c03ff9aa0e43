// Simulation timing
pub const TICK_MS: u64 = 16; // ~60 FPS, one tick per display frame
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after pause/lag

// Terminal loop
pub const INPUT_POLL_MS: u64 = 8;

// Game flow
pub const WIN_DELAY_MS: u64 = 1000;
pub const COUNTDOWN_START: u32 = 3;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub const COUNTDOWN_REVEAL_MS: u64 = 1000;
pub const WISH_CHAR_INTERVAL_MS: u64 = 50;
pub const CURSOR_BLINK_MS: u64 = 500;

// Fireworks units. The surface is two pixels per terminal cell, about a tenth
// of a browser canvas per axis, so speeds and gravity shrink by that factor.
// Sparks shrink less so the smallest still covers a surface pixel.
pub const FIREWORKS_MOTION_SCALE: f64 = 0.1;
pub const FIREWORKS_SIZE_SCALE: f64 = 0.375;

// Files under ~/.newyear/
pub const APP_DIR_NAME: &str = ".newyear";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "newyear.log";
