//! Button handling
//!
//! The encoder button distinguishes a short press from a long hold. Exactly
//! one action is produced per physical press: the long-press action fires
//! once while the button is still held and then suppresses the short-press
//! action on release.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{ErrorType, InputPin};

use super::{Debouncer, Edge};

/// Action requested by the encoder button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Released before the long-press threshold
    ShortPress,
    /// Held past the long-press threshold
    LongPress,
}

/// Press tracking state of the encoder button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed { since: Instant, long_fired: bool },
}

/// Debounced encoder button with long-press detection
#[derive(Debug, Clone, Copy)]
pub struct EncoderButton {
    debouncer: Debouncer,
    state: PressState,
    long_press: Duration,
}

impl EncoderButton {
    pub const fn new(debounce: Duration, long_press: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            state: PressState::Idle,
            long_press,
        }
    }

    /// Poll with a raw level (true = pressed)
    pub fn update(&mut self, level: bool, now: Instant) -> Option<ButtonAction> {
        match self.debouncer.update(level, now) {
            Some(Edge::Pressed) => {
                self.state = PressState::Pressed {
                    since: now,
                    long_fired: false,
                };
                None
            }
            Some(Edge::Released) => {
                let previous = self.state;
                self.state = PressState::Idle;
                match previous {
                    PressState::Pressed {
                        long_fired: false, ..
                    } => Some(ButtonAction::ShortPress),
                    _ => None,
                }
            }
            None => self.poll_hold(now),
        }
    }

    pub const fn state(&self) -> PressState {
        self.state
    }

    fn poll_hold(&mut self, now: Instant) -> Option<ButtonAction> {
        let PressState::Pressed { since, long_fired } = &mut self.state else {
            return None;
        };
        if *long_fired || now.saturating_duration_since(*since) < self.long_press {
            return None;
        }
        *long_fired = true;
        Some(ButtonAction::LongPress)
    }
}

/// Raw button levels sampled once per loop iteration (true = pressed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLevels {
    /// External push button
    pub button: bool,
    /// Push switch built into the rotary encoder
    pub encoder_button: bool,
}

impl InputLevels {
    /// Sample both buttons from their pins
    ///
    /// With `active_low` set, a low pin reads as pressed (pull-up wiring).
    pub fn read<B, P, Err>(
        button: &mut B,
        encoder_button: &mut P,
        active_low: bool,
    ) -> Result<Self, Err>
    where
        B: InputPin + ErrorType<Error = Err>,
        P: InputPin + ErrorType<Error = Err>,
    {
        Ok(Self {
            button: button.is_high()? != active_low,
            encoder_button: encoder_button.is_high()? != active_low,
        })
    }
}
