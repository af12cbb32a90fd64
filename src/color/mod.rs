mod utils;
mod wheel;

use smart_leds::RGB8;

pub use utils::{fade_toward_black, gray, rgb_from_u32};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_colors {
    ($($name:ident = $color:expr),* $(,)?) => {
        $(pub const $name: Rgb = rgb_from_u32($color);)*
    };
}

#[allow(clippy::unreadable_literal)]
mod named {
    use super::{Rgb, rgb_from_u32};

    hex_colors! {
        BLACK = 0x000000,
        WHITE = 0xFFFFFF,
        WARM_WHITE = 0xFF9329,
        RED = 0xFF0000,
        GREEN = 0x00FF00,
        BLUE = 0x0000FF,
        AMBER = 0xFF6A00,
        SPARK = 0xFFB450,
        ICE = 0x64C8FF,
        MATRIX_GREEN = 0x00DC28,
        BREATH_BLUE = 0x0050FF,
    }
}

pub use named::*;
