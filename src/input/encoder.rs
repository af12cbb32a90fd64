//! Rotary encoder decoding
//!
//! The edge handler fires on every transition of encoder pin A and samples
//! both pins on the spot. Differing levels mean the dial moved forward, equal
//! levels mean it moved back. Bounce on pin B therefore cannot produce a
//! step on its own, so no extra debounce stage is applied.

use embedded_hal::digital::{ErrorType, InputPin};

use crate::selection::Selection;

/// One detent of the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Pin-level quadrature decoder
pub struct QuadratureDecoder;

impl QuadratureDecoder {
    /// Decode the pin levels sampled when pin A changed
    pub const fn decode(a: bool, b: bool) -> Step {
        if a == b { Step::Backward } else { Step::Forward }
    }
}

/// Encoder pins read from the edge handler
///
/// Both pins must share an error type; on most HALs it is `Infallible`.
pub struct RotaryEncoder<A, B> {
    a: A,
    b: B,
}

impl<A, B, E> RotaryEncoder<A, B>
where
    A: InputPin + ErrorType<Error = E>,
    B: InputPin + ErrorType<Error = E>,
{
    pub const fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Handle one edge on pin A and apply the step to `selection`
    ///
    /// Call this from the pin A interrupt (both edges).
    pub fn on_edge(&mut self, selection: &Selection) -> Result<Step, E> {
        let a = self.a.is_high()?;
        let b = self.b.is_high()?;
        let step = QuadratureDecoder::decode(a, b);
        selection.apply_step(step);
        Ok(step)
    }

    pub fn release(self) -> (A, B) {
        (self.a, self.b)
    }
}
