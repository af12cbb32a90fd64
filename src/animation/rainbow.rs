//! Rotating rainbow

use embassy_time::Duration;

use super::StepContext;
use crate::{color::wheel, surface::Ring};

const RAINBOW_WAIT: Duration = Duration::from_millis(20);

/// Spread the color wheel over the ring and rotate it one position per step
pub(super) fn rainbow(ctx: &mut StepContext<'_>) {
    let leds = ctx.led_count();
    if leds == 0 || !ctx.due(RAINBOW_WAIT) {
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let phase = ctx.state.counter as u8;
    for index in 0..leds {
        #[allow(clippy::cast_possible_truncation)]
        let offset = (index * 256 / leds) as u8;
        ctx.surface
            .set_pixel(Ring::Both, index, wheel(offset.wrapping_add(phase)));
    }
    ctx.present();

    ctx.state.counter = (ctx.state.counter + 1) % 256;
}
