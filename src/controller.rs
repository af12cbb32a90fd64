use embassy_time::Instant;
use rand::{SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{self, AnimationId, AnimationState, StepContext};
use crate::config::ControllerConfig;
use crate::input::{ButtonAction, Debouncer, EncoderButton, Edge, InputLevels, PressState};
use crate::selection::Selection;
use crate::surface::{PixelSurface, Ring};

/// Controller - the main cooperative loop step
///
/// Owns the pixel surface, both button state machines and the animation
/// scratch state. The selection is borrowed so the encoder edge handler can
/// share it.
pub struct Controller<'a, S: PixelSurface> {
    // External dependencies and configuration
    selection: &'a Selection,
    surface: S,
    short_press_jump: u8,

    // Input state
    button: Debouncer,
    encoder_button: EncoderButton,

    // Animation state
    state: AnimationState,
    rng: SmallRng,
    dispatched: Option<u8>,
}

impl<'a, S: PixelSurface> Controller<'a, S> {
    pub fn new(selection: &'a Selection, surface: S, config: &ControllerConfig) -> Self {
        Self {
            selection,
            surface,
            short_press_jump: config.short_press_jump,
            button: Debouncer::new(config.debounce),
            encoder_button: EncoderButton::new(config.debounce, config.long_press),
            state: AnimationState::new(Instant::from_ticks(0)),
            rng: SmallRng::seed_from_u64(config.seed),
            dispatched: None,
        }
    }

    /// Run one loop iteration
    ///
    /// Polls both buttons, switches animation if the selection moved since
    /// the previous iteration, then steps the active animation once. Returns
    /// the animation that was stepped. Call this continuously; it never
    /// blocks.
    pub fn tick(&mut self, now: Instant, levels: InputLevels) -> Option<AnimationId> {
        self.poll_inputs(levels, now);

        let index = self.selection.get();
        if self.dispatched != Some(index) {
            self.switch_to(index, now);
        }

        let mut ctx = StepContext {
            now,
            state: &mut self.state,
            surface: &mut self.surface,
            rng: &mut self.rng,
        };
        animation::dispatch(index, &mut ctx)
    }

    /// Animation dispatched by the last iteration
    pub fn active(&self) -> Option<AnimationId> {
        self.dispatched.and_then(AnimationId::from_raw)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn animation_state(&self) -> &AnimationState {
        &self.state
    }

    pub fn encoder_button_state(&self) -> PressState {
        self.encoder_button.state()
    }

    fn poll_inputs(&mut self, levels: InputLevels, now: Instant) {
        if self.button.update(levels.button, now) == Some(Edge::Pressed) {
            self.selection.advance(1);
        }

        match self.encoder_button.update(levels.encoder_button, now) {
            Some(ButtonAction::ShortPress) => {
                self.selection.advance(self.short_press_jump);
            }
            Some(ButtonAction::LongPress) => {
                self.selection.reset();
            }
            None => {}
        }
    }

    /// Start a fresh animation: scratch state, dark rings, full brightness
    fn switch_to(&mut self, index: u8, now: Instant) {
        self.state.reset(now);
        self.surface.clear(Ring::Both);
        self.surface.set_brightness(Ring::Both, 255);
        self.surface.present(Ring::Both);

        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller] animation {:?} -> {} ({})",
            self.dispatched,
            index,
            AnimationId::from_raw(index).map_or("off", AnimationId::as_str)
        );

        self.dispatched = Some(index);
    }
}
