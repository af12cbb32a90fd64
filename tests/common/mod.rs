#![allow(dead_code, unreachable_pub)]

use rand::{SeedableRng, rngs::SmallRng};
use ring_animator::{
    AnimationState, FrameSurface, Instant, OutputDriver, PixelSurface, Rgb, Ring,
    animation::StepContext,
};

pub const LEDS: usize = 16;

pub const fn ms(value: u64) -> Instant {
    Instant::from_millis(value)
}

/// Driver that keeps every frame written to it
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub type TestSurface = FrameSurface<RecordingDriver, RecordingDriver, LEDS>;

pub fn surface() -> TestSurface {
    FrameSurface::new(RecordingDriver::default(), RecordingDriver::default())
}

/// Surface wrapper counting every mutating call
pub struct CountingSurface {
    pub inner: TestSurface,
    pub mutations: usize,
    pub presents: usize,
}

impl CountingSurface {
    pub fn new() -> Self {
        Self {
            inner: surface(),
            mutations: 0,
            presents: 0,
        }
    }

    pub fn lit(&self, ring: Ring) -> usize {
        self.inner
            .frame(ring)
            .iter()
            .filter(|pixel| **pixel != Rgb::default())
            .count()
    }
}

impl PixelSurface for CountingSurface {
    fn led_count(&self) -> usize {
        self.inner.led_count()
    }

    fn set_pixel(&mut self, ring: Ring, index: usize, color: Rgb) {
        self.mutations += 1;
        self.inner.set_pixel(ring, index, color);
    }

    fn pixel(&self, ring: Ring, index: usize) -> Rgb {
        self.inner.pixel(ring, index)
    }

    fn clear(&mut self, ring: Ring) {
        self.mutations += 1;
        self.inner.clear(ring);
    }

    fn set_brightness(&mut self, ring: Ring, level: u8) {
        self.mutations += 1;
        self.inner.set_brightness(ring, level);
    }

    fn present(&mut self, ring: Ring) {
        self.presents += 1;
        self.inner.present(ring);
    }
}

/// Drives a single step function against a counting surface
pub struct Harness {
    pub state: AnimationState,
    pub surface: CountingSurface,
    pub rng: SmallRng,
}

impl Harness {
    pub fn new(start: Instant) -> Self {
        Self {
            state: AnimationState::new(start),
            surface: CountingSurface::new(),
            rng: SmallRng::seed_from_u64(7),
        }
    }

    pub fn step(&mut self, step: fn(&mut StepContext<'_>), now: Instant) {
        let mut ctx = StepContext {
            now,
            state: &mut self.state,
            surface: &mut self.surface,
            rng: &mut self.rng,
        };
        step(&mut ctx);
    }

    pub fn frame(&self, ring: Ring) -> [Rgb; LEDS] {
        *self.surface.inner.frame(ring)
    }
}
