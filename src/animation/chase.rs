//! Marquee style chases

use embassy_time::Duration;

use super::StepContext;
use crate::{
    color::{BLUE, RED, WHITE},
    surface::Ring,
};

const THEATER_WAIT: Duration = Duration::from_millis(100);
const THEATER_SPACING: u16 = 3;

const TWO_COLOR_WAIT: Duration = Duration::from_millis(150);
const TWO_COLOR_BAND: usize = 2;
const TWO_COLOR_PERIOD: u16 = 4;

/// Every third pixel lit, shifting by one each step
pub(super) fn theater_chase(ctx: &mut StepContext<'_>) {
    if !ctx.due(THEATER_WAIT) {
        return;
    }

    let phase = usize::from(ctx.state.counter);
    ctx.surface.clear(Ring::Both);
    for index in (phase..ctx.led_count()).step_by(usize::from(THEATER_SPACING)) {
        ctx.surface.set_pixel(Ring::Both, index, WHITE);
    }
    ctx.present();

    ctx.state.counter = (ctx.state.counter + 1) % THEATER_SPACING;
}

/// Alternating bands of two red and two blue pixels, shifting each step
pub(super) fn two_color_chase(ctx: &mut StepContext<'_>) {
    if !ctx.due(TWO_COLOR_WAIT) {
        return;
    }

    let phase = usize::from(ctx.state.counter);
    for index in 0..ctx.led_count() {
        let color = if ((index + phase) / TWO_COLOR_BAND) % 2 == 0 {
            RED
        } else {
            BLUE
        };
        ctx.surface.set_pixel(Ring::Both, index, color);
    }
    ctx.present();

    ctx.state.counter = (ctx.state.counter + 1) % TWO_COLOR_PERIOD;
}
