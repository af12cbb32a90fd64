//! Two-pattern flashes and the heartbeat pulse

use embassy_time::Duration;

use super::StepContext;
use crate::{
    color::{BLUE, RED, WHITE},
    surface::{Ring, fill},
};

const STROBE_WAIT: Duration = Duration::from_millis(50);
const POLICE_WAIT: Duration = Duration::from_millis(150);
const HEARTBEAT_WAIT: Duration = Duration::from_millis(150);

/// Full white on even steps, dark on odd steps
pub(super) fn strobe(ctx: &mut StepContext<'_>) {
    if !ctx.due(STROBE_WAIT) {
        return;
    }

    if ctx.state.counter % 2 == 0 {
        fill(ctx.surface, Ring::Both, WHITE);
    } else {
        ctx.surface.clear(Ring::Both);
    }
    ctx.present();

    ctx.state.counter = ctx.state.counter.wrapping_add(1);
}

/// Left ring red and right ring blue, alternating
pub(super) fn police(ctx: &mut StepContext<'_>) {
    if !ctx.due(POLICE_WAIT) {
        return;
    }

    ctx.surface.clear(Ring::Both);
    if ctx.state.counter % 2 == 0 {
        fill(ctx.surface, Ring::Left, RED);
    } else {
        fill(ctx.surface, Ring::Right, BLUE);
    }
    ctx.present();

    ctx.state.counter = ctx.state.counter.wrapping_add(1);
}

/// Double beat followed by a three step pause
///
/// Steps 1 and 3 fill, steps 2 and 4 go dark, steps 5 to 7 hold, step 8
/// restarts the sequence.
pub(super) fn heartbeat(ctx: &mut StepContext<'_>) {
    if !ctx.due(HEARTBEAT_WAIT) {
        return;
    }

    ctx.state.counter += 1;
    match ctx.state.counter {
        1 | 3 => {
            fill(ctx.surface, Ring::Both, RED);
            ctx.present();
        }
        2 | 4 => {
            ctx.surface.clear(Ring::Both);
            ctx.present();
        }
        5..=7 => {}
        _ => ctx.state.counter = 0,
    }
}
