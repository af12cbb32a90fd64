//! Pixel surface over the two LED rings
//!
//! Animations never talk to a strip driver directly. They draw into a
//! [`PixelSurface`], which buffers both rings and flushes them on
//! [`PixelSurface::present`].

use crate::{OutputDriver, color::Rgb, math8::scale8};

/// Ring selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Left,
    Right,
    /// Both rings receive the same write
    Both,
}

impl Ring {
    const fn left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    const fn right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}

/// Buffered access to the LED rings
///
/// Writes are not visible until [`present`](Self::present) is called for the
/// affected ring.
pub trait PixelSurface {
    /// Number of LEDs on each ring
    fn led_count(&self) -> usize;

    /// Set one pixel. Out-of-range indices are ignored.
    fn set_pixel(&mut self, ring: Ring, index: usize, color: Rgb);

    /// Read back a buffered pixel. `Ring::Both` reads the left ring.
    fn pixel(&self, ring: Ring, index: usize) -> Rgb;

    /// Turn every pixel of the ring off
    fn clear(&mut self, ring: Ring);

    /// Set the global brightness applied at present time
    fn set_brightness(&mut self, ring: Ring, level: u8);

    /// Flush buffered state to the hardware
    fn present(&mut self, ring: Ring);
}

/// Fill the whole ring with one color
pub fn fill(surface: &mut dyn PixelSurface, ring: Ring, color: Rgb) {
    for index in 0..surface.led_count() {
        surface.set_pixel(ring, index, color);
    }
}

/// Decrement every channel of every pixel by `step`, flooring at zero
pub fn fade_all(surface: &mut dyn PixelSurface, step: u8) {
    for ring in [Ring::Left, Ring::Right] {
        for index in 0..surface.led_count() {
            let faded = crate::color::fade_toward_black(surface.pixel(ring, index), step);
            surface.set_pixel(ring, index, faded);
        }
    }
}

#[derive(Debug, Clone)]
struct RingBuffer<const LEDS: usize> {
    pixels: [Rgb; LEDS],
    brightness: u8,
}

impl<const LEDS: usize> RingBuffer<LEDS> {
    const fn new() -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; LEDS],
            brightness: 255,
        }
    }

    fn write_to(&self, scratch: &mut [Rgb; LEDS], driver: &mut impl OutputDriver) {
        let level = self.brightness;
        for (out, pixel) in scratch.iter_mut().zip(self.pixels.iter()) {
            *out = match level {
                255 => *pixel,
                0 => Rgb::default(),
                _ => Rgb {
                    r: scale8(pixel.r, level),
                    g: scale8(pixel.g, level),
                    b: scale8(pixel.b, level),
                },
            };
        }
        driver.write(&scratch[..]);
    }
}

/// Double ring surface backed by one [`OutputDriver`] per ring
///
/// Brightness is kept per ring and applied to a scratch copy of the frame on
/// present, so read-back through [`PixelSurface::pixel`] always returns the
/// unscaled color.
pub struct FrameSurface<L: OutputDriver, R: OutputDriver, const LEDS: usize> {
    left: RingBuffer<LEDS>,
    right: RingBuffer<LEDS>,
    left_driver: L,
    right_driver: R,
    scratch: [Rgb; LEDS],
}

impl<L: OutputDriver, R: OutputDriver, const LEDS: usize> FrameSurface<L, R, LEDS> {
    pub const fn new(left_driver: L, right_driver: R) -> Self {
        Self {
            left: RingBuffer::new(),
            right: RingBuffer::new(),
            left_driver,
            right_driver,
            scratch: [Rgb { r: 0, g: 0, b: 0 }; LEDS],
        }
    }

    /// Buffered (unscaled) pixels of one ring. `Ring::Both` returns the left ring.
    pub fn frame(&self, ring: Ring) -> &[Rgb; LEDS] {
        match ring {
            Ring::Right => &self.right.pixels,
            Ring::Left | Ring::Both => &self.left.pixels,
        }
    }

    /// Current brightness of one ring. `Ring::Both` returns the left ring.
    pub fn brightness(&self, ring: Ring) -> u8 {
        match ring {
            Ring::Right => self.right.brightness,
            Ring::Left | Ring::Both => self.left.brightness,
        }
    }

    pub fn drivers(&self) -> (&L, &R) {
        (&self.left_driver, &self.right_driver)
    }
}

impl<L: OutputDriver, R: OutputDriver, const LEDS: usize> PixelSurface
    for FrameSurface<L, R, LEDS>
{
    fn led_count(&self) -> usize {
        LEDS
    }

    fn set_pixel(&mut self, ring: Ring, index: usize, color: Rgb) {
        if index >= LEDS {
            return;
        }
        if ring.left() {
            self.left.pixels[index] = color;
        }
        if ring.right() {
            self.right.pixels[index] = color;
        }
    }

    fn pixel(&self, ring: Ring, index: usize) -> Rgb {
        self.frame(ring).get(index).copied().unwrap_or_default()
    }

    fn clear(&mut self, ring: Ring) {
        if ring.left() {
            self.left.pixels.fill(Rgb::default());
        }
        if ring.right() {
            self.right.pixels.fill(Rgb::default());
        }
    }

    fn set_brightness(&mut self, ring: Ring, level: u8) {
        if ring.left() {
            self.left.brightness = level;
        }
        if ring.right() {
            self.right.brightness = level;
        }
    }

    fn present(&mut self, ring: Ring) {
        if ring.left() {
            self.left.write_to(&mut self.scratch, &mut self.left_driver);
        }
        if ring.right() {
            self.right.write_to(&mut self.scratch, &mut self.right_driver);
        }
    }
}
