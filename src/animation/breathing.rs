//! Breathing glow
//!
//! Brightness follows `(e^sin(t) - 1/e) * 108`, which swings between 0 and
//! roughly 254 with a slow rise and a soft fall.

use core::f32::consts::{E, PI};

use super::StepContext;
use crate::{
    color::BREATH_BLUE,
    surface::{Ring, fill},
};

const BREATH_PERIOD_MS: u64 = 4_000;
const BREATH_SCALE: f32 = 108.0;

/// Brightness at `elapsed_ms` into the breathing cycle
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn breath_level(elapsed_ms: u64) -> u8 {
    let t = (elapsed_ms % BREATH_PERIOD_MS) as f32;
    let phase = t / (BREATH_PERIOD_MS as f32 / 2.0) * PI;
    let level = (libm::expf(libm::sinf(phase)) - 1.0 / E) * BREATH_SCALE;
    level.clamp(0.0, 255.0) as u8
}

/// Fixed color with a smoothly oscillating global brightness
///
/// Runs on every call; the envelope is a function of time since the
/// animation became active.
pub(super) fn breathing(ctx: &mut StepContext<'_>) {
    let elapsed = ctx.now.saturating_duration_since(ctx.state.last_update);
    let level = breath_level(elapsed.as_millis());

    fill(ctx.surface, Ring::Both, BREATH_BLUE);
    ctx.surface.set_brightness(Ring::Both, level);
    ctx.present();
}
