//! Whole-ring fills

use embassy_time::Duration;
use rand::Rng;

use super::StepContext;
use crate::{
    color::{RED, WARM_WHITE, gray},
    surface::{Ring, fill},
};

const FLICKER_MIN_WAIT_MS: u16 = 50;
const FLICKER_MAX_WAIT_MS: u16 = 150;

/// Solid warm white, redrawn every call
pub(super) fn solid(ctx: &mut StepContext<'_>) {
    fill(ctx.surface, Ring::Both, WARM_WHITE);
    ctx.present();
}

/// Solid red, redrawn every call
pub(super) fn alert(ctx: &mut StepContext<'_>) {
    fill(ctx.surface, Ring::Both, RED);
    ctx.present();
}

/// Random gray level at a random cadence
///
/// `counter` holds the wait drawn for the next step; it starts at zero so the
/// first call draws immediately.
pub(super) fn flicker(ctx: &mut StepContext<'_>) {
    let wait = Duration::from_millis(u64::from(ctx.state.counter));
    if !ctx.due(wait) {
        return;
    }

    let level: u8 = ctx.rng.r#gen();
    fill(ctx.surface, Ring::Both, gray(level));
    ctx.present();

    ctx.state.counter = ctx.rng.gen_range(FLICKER_MIN_WAIT_MS..FLICKER_MAX_WAIT_MS);
}
