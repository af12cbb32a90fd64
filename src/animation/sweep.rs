//! Pixel-by-pixel sweeps

use embassy_time::Duration;

use super::StepContext;
use crate::{
    color::{AMBER, BLACK, GREEN},
    surface::Ring,
};

const WIPE_WAIT: Duration = Duration::from_millis(50);

const POWER_STEP_WAIT: Duration = Duration::from_millis(80);
const POWER_HOLD: Duration = Duration::from_millis(1_000);

const STAGE_FILL: u16 = 0;
const STAGE_HOLD: u16 = 1;
const STAGE_DRAIN: u16 = 2;

/// Light one more pixel per step
///
/// The sweep runs over `0..=LEDS`. The final step lands one past the last LED,
/// which the surface ignores, so the fully lit ring is held for one extra
/// step before the ring is cleared and the sweep restarts.
pub(super) fn color_wipe(ctx: &mut StepContext<'_>) {
    if !ctx.due(WIPE_WAIT) {
        return;
    }

    let leds = ctx.led_count();
    let index = usize::from(ctx.state.counter);
    if index < leds {
        ctx.surface.set_pixel(Ring::Both, index, GREEN);
    }
    ctx.present();

    if index >= leds {
        ctx.surface.clear(Ring::Both);
        ctx.state.counter = 0;
    } else {
        ctx.state.counter += 1;
    }
}

/// Fill pixel by pixel, hold fully lit, then drain pixel by pixel
///
/// `sub_counter` is the stage, `counter` the pixel within the stage.
pub(super) fn power_cycle(ctx: &mut StepContext<'_>) {
    let leds = ctx.led_count();
    match ctx.state.sub_counter {
        STAGE_FILL | STAGE_DRAIN => {
            if !ctx.due(POWER_STEP_WAIT) {
                return;
            }
            let filling = ctx.state.sub_counter == STAGE_FILL;
            let color = if filling { AMBER } else { BLACK };
            ctx.surface
                .set_pixel(Ring::Both, usize::from(ctx.state.counter), color);
            ctx.present();

            ctx.state.counter += 1;
            if usize::from(ctx.state.counter) >= leds {
                ctx.state.counter = 0;
                ctx.state.sub_counter = if filling { STAGE_HOLD } else { STAGE_FILL };
            }
        }
        STAGE_HOLD => {
            if ctx.due(POWER_HOLD) {
                ctx.state.sub_counter = STAGE_DRAIN;
            }
        }
        _ => ctx.state.sub_counter = STAGE_FILL,
    }
}
