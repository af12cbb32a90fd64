#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod controller;
pub mod input;
pub mod math8;
pub mod selection;
pub mod surface;

pub use animation::{ANIMATION_COUNT, AnimationId, AnimationState};
pub use config::ControllerConfig;
pub use controller::Controller;
pub use input::{InputLevels, RotaryEncoder, Step};
pub use selection::Selection;
pub use surface::{FrameSurface, PixelSurface, Ring};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame surface is generic over this trait, one driver per ring.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
