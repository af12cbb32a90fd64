//! Compile-time configuration
//!
//! Ring geometry, input timing and the default controller settings live here
//! so they can be tuned in one place.

use embassy_time::Duration;

/// Number of LEDs on each ring in the reference build
pub const RING_LEDS: usize = 16;

/// Time a raw button level must stay constant before it is accepted (ms)
pub const DEBOUNCE_MS: u64 = 50;

/// Hold time after which the encoder button fires its long-press action (ms)
pub const LONG_PRESS_MS: u64 = 1_000;

/// Catalog distance jumped by a short encoder-button press
pub const SHORT_PRESS_JUMP: u8 = 5;

/// Seed for the animation random source
pub const DEFAULT_SEED: u64 = 0x5eed_1ed5;

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(DEBOUNCE_MS);
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(LONG_PRESS_MS);

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Debounce settle interval shared by both buttons
    pub debounce: Duration,
    /// Encoder-button hold time for the long-press reset
    pub long_press: Duration,
    /// Selection distance of an encoder-button short press
    pub short_press_jump: u8,
    /// Seed for the animation random source
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE_INTERVAL,
            long_press: LONG_PRESS_THRESHOLD,
            short_press_jump: SHORT_PRESS_JUMP,
            seed: DEFAULT_SEED,
        }
    }
}
