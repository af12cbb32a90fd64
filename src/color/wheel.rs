//! Three-band color wheel
//!
//! Maps a position on a 0-255 circle to a fully saturated color. The circle is
//! split into three 85-wide bands: red fading into blue, blue into green and
//! green back into red. Both ends of the input range land on pure red.

use crate::color::Rgb;

const BAND: u8 = 85;

/// Color at `pos` on the wheel
pub const fn wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < BAND {
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else if pos < BAND * 2 {
        let pos = pos - BAND;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    } else {
        let pos = pos - BAND * 2;
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    }
}
