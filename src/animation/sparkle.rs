//! Sparse random ignition
//!
//! On each cadence tick an armed animation rolls 0..10 and lights one random
//! pixel when the roll beats its threshold. The next tick turns that pixel
//! off again and re-arms. `sub_counter` is the armed/lit flag and `counter`
//! remembers the lit pixel. Thresholds are tuning values.

use embassy_time::Duration;
use rand::Rng;

use super::StepContext;
use crate::{
    color::{BLACK, Rgb, SPARK, WHITE, gray, wheel},
    surface::Ring,
};

const ARMED: u16 = 0;
const LIT: u16 = 1;

const GLITCH_WAIT: Duration = Duration::from_millis(50);
const GLITCH_THRESHOLD: u8 = 7;

const SPARKS_WAIT: Duration = Duration::from_millis(30);
const SPARKS_THRESHOLD: u8 = 7;

const STATIC_WAIT: Duration = Duration::from_millis(40);
const STATIC_THRESHOLD: u8 = 3;

const TWINKLE_WAIT: Duration = Duration::from_millis(80);
const TWINKLE_THRESHOLD: u8 = 2;

fn ignite(
    ctx: &mut StepContext<'_>,
    wait: Duration,
    threshold: u8,
    color: impl FnOnce(&mut StepContext<'_>) -> Rgb,
) {
    if !ctx.due(wait) {
        return;
    }

    if ctx.state.sub_counter == LIT {
        ctx.surface
            .set_pixel(Ring::Both, usize::from(ctx.state.counter), BLACK);
        ctx.present();
        ctx.state.sub_counter = ARMED;
        return;
    }

    if !ctx.roll_above(threshold) {
        return;
    }
    let Some(index) = ctx.random_index() else {
        return;
    };
    let color = color(ctx);
    ctx.surface.set_pixel(Ring::Both, index, color);
    ctx.present();

    ctx.state.counter = u16::try_from(index).unwrap_or(0);
    ctx.state.sub_counter = LIT;
}

/// Random pixel in a random hue
pub(super) fn glitch(ctx: &mut StepContext<'_>) {
    ignite(ctx, GLITCH_WAIT, GLITCH_THRESHOLD, |ctx| wheel(ctx.rng.r#gen()));
}

/// Random pixel in a hot spark color
pub(super) fn sparks(ctx: &mut StepContext<'_>) {
    ignite(ctx, SPARKS_WAIT, SPARKS_THRESHOLD, |_| SPARK);
}

/// Random pixel in a random gray, like analog noise
pub(super) fn static_noise(ctx: &mut StepContext<'_>) {
    ignite(ctx, STATIC_WAIT, STATIC_THRESHOLD, |ctx| gray(ctx.rng.r#gen()));
}

/// Random pixel in white
pub(super) fn twinkle(ctx: &mut StepContext<'_>) {
    ignite(ctx, TWINKLE_WAIT, TWINKLE_THRESHOLD, |_| WHITE);
}
