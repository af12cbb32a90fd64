//! Input handling
//!
//! Two polled buttons and one interrupt-driven rotary dial feed the shared
//! [`Selection`](crate::selection::Selection). The buttons are debounced in
//! software; the dial relies on sampling both encoder pins at edge time.

mod button;
mod debounce;
mod encoder;

pub use button::{ButtonAction, EncoderButton, InputLevels, PressState};
pub use debounce::{Debouncer, Edge};
pub use encoder::{QuadratureDecoder, RotaryEncoder, Step};
