//! Bouncing scanners
//!
//! A single lit pixel runs to the last LED, turns around, runs back to the
//! first LED and turns again. `counter` is the position, `sub_counter` the
//! direction.

use embassy_time::Duration;

use super::{AnimationState, StepContext};
use crate::{
    color::RED,
    surface::{Ring, fade_all},
};

const SCANNER_WAIT: Duration = Duration::from_millis(60);
const LARSON_FADE_STEP: u8 = 2;

const FORWARD: u16 = 0;
const BACKWARD: u16 = 1;

fn advance(state: &mut AnimationState, leds: usize) {
    let last = u16::try_from(leds.saturating_sub(1)).unwrap_or(u16::MAX);
    if last == 0 {
        state.counter = 0;
        return;
    }

    if state.sub_counter == FORWARD {
        if state.counter >= last {
            state.sub_counter = BACKWARD;
            state.counter = last - 1;
        } else {
            state.counter += 1;
        }
    } else if state.counter == 0 {
        state.sub_counter = FORWARD;
        state.counter = 1;
    } else {
        state.counter -= 1;
    }
}

/// Plain scanner, one pixel lit at a time
pub(super) fn cylon(ctx: &mut StepContext<'_>) {
    if !ctx.due(SCANNER_WAIT) {
        return;
    }

    ctx.surface.clear(Ring::Both);
    ctx.surface
        .set_pixel(Ring::Both, usize::from(ctx.state.counter), RED);
    ctx.present();

    let leds = ctx.led_count();
    advance(ctx.state, leds);
}

/// Scanner leaving a fading trail
///
/// The trail fades on every call; the head moves on the cadence.
pub(super) fn larson(ctx: &mut StepContext<'_>) {
    fade_all(ctx.surface, LARSON_FADE_STEP);

    if ctx.due(SCANNER_WAIT) {
        ctx.surface
            .set_pixel(Ring::Both, usize::from(ctx.state.counter), RED);
        let leds = ctx.led_count();
        advance(ctx.state, leds);
    }
    ctx.present();
}
