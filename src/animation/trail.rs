//! Decaying trails
//!
//! Every call fades the whole ring a little; on the cadence a new pixel is
//! ignited at full color.

use embassy_time::Duration;

use super::StepContext;
use crate::{
    color::{ICE, MATRIX_GREEN},
    surface::{Ring, fade_all},
};

const METEOR_WAIT: Duration = Duration::from_millis(40);
const METEOR_DECAY: u8 = 2;

const MATRIX_WAIT: Duration = Duration::from_millis(60);
const MATRIX_DECAY: u8 = 1;

/// Head runs around the ring leaving a tail
pub(super) fn meteor(ctx: &mut StepContext<'_>) {
    let leds = ctx.led_count();
    if leds == 0 {
        return;
    }
    fade_all(ctx.surface, METEOR_DECAY);

    if ctx.due(METEOR_WAIT) {
        let index = usize::from(ctx.state.counter) % leds;
        ctx.surface.set_pixel(Ring::Both, index, ICE);
        ctx.state.counter = u16::try_from((index + 1) % leds).unwrap_or(0);
    }
    ctx.present();
}

/// Green drops at random positions
pub(super) fn matrix(ctx: &mut StepContext<'_>) {
    fade_all(ctx.surface, MATRIX_DECAY);

    if ctx.due(MATRIX_WAIT) {
        if let Some(index) = ctx.random_index() {
            ctx.surface.set_pixel(Ring::Both, index, MATRIX_GREEN);
        }
    }
    ctx.present();
}
