use crate::{color::Rgb, math8::qsub8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Gray level with equal channels
#[inline]
pub const fn gray(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: level,
    }
}

/// Decrement every channel by `step`, flooring at zero
#[inline]
pub const fn fade_toward_black(color: Rgb, step: u8) -> Rgb {
    Rgb {
        r: qsub8(color.r, step),
        g: qsub8(color.g, step),
        b: qsub8(color.b, step),
    }
}
