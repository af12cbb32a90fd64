//! Animation catalog
//!
//! Every animation is a plain step function. The controller calls the step
//! function of the active animation once per loop iteration; the function
//! checks its own cadence against [`AnimationState::last_update`] and returns
//! immediately when no visible step is due. Nothing here blocks or sleeps.
//!
//! The catalog is an indexed table, so the selection index maps directly to
//! a step function without a branch chain.

mod breathing;
mod chase;
mod fill;
mod flash;
mod rainbow;
mod scanner;
mod sparkle;
mod sweep;
mod trail;

pub use breathing::breath_level;

use embassy_time::{Duration, Instant};
use rand::{Rng, rngs::SmallRng};

use crate::surface::{PixelSurface, Ring};

/// Timing scratch state shared by whichever animation is active
///
/// Reset to `{now, 0, 0}` on every selection change. Animations must not
/// expect any value to survive a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    /// When the active animation last advanced
    pub last_update: Instant,
    /// Primary step counter
    pub counter: u16,
    /// Secondary counter, used as a stage or direction flag
    pub sub_counter: u16,
}

impl AnimationState {
    pub const fn new(now: Instant) -> Self {
        Self {
            last_update: now,
            counter: 0,
            sub_counter: 0,
        }
    }

    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Returns true and restarts the cadence timer once `wait` has elapsed
    pub fn due(&mut self, now: Instant, wait: Duration) -> bool {
        if now.saturating_duration_since(self.last_update) < wait {
            return false;
        }
        self.last_update = now;
        true
    }
}

/// Everything a step function may touch
pub struct StepContext<'a> {
    pub now: Instant,
    pub state: &'a mut AnimationState,
    pub surface: &'a mut dyn PixelSurface,
    pub rng: &'a mut SmallRng,
}

impl StepContext<'_> {
    fn due(&mut self, wait: Duration) -> bool {
        self.state.due(self.now, wait)
    }

    fn led_count(&self) -> usize {
        self.surface.led_count()
    }

    fn present(&mut self) {
        self.surface.present(Ring::Both);
    }

    /// Random LED index, `None` on an empty ring
    fn random_index(&mut self) -> Option<usize> {
        let leds = self.led_count();
        (leds > 0).then(|| self.rng.gen_range(0..leds))
    }

    /// Draw from 0..10 and compare against `threshold`
    fn roll_above(&mut self, threshold: u8) -> bool {
        self.rng.gen_range(0..10u8) > threshold
    }
}

/// Step function signature shared by the whole catalog
pub type StepFn = fn(&mut StepContext<'_>);

const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_ALERT: &str = "alert";
const ANIMATION_NAME_FLICKER: &str = "flicker";
const ANIMATION_NAME_COLOR_WIPE: &str = "color_wipe";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_THEATER_CHASE: &str = "theater_chase";
const ANIMATION_NAME_TWO_COLOR_CHASE: &str = "two_color_chase";
const ANIMATION_NAME_CYLON: &str = "cylon";
const ANIMATION_NAME_LARSON: &str = "larson";
const ANIMATION_NAME_STROBE: &str = "strobe";
const ANIMATION_NAME_POLICE: &str = "police";
const ANIMATION_NAME_BREATHING: &str = "breathing";
const ANIMATION_NAME_GLITCH: &str = "glitch";
const ANIMATION_NAME_SPARKS: &str = "sparks";
const ANIMATION_NAME_STATIC: &str = "static";
const ANIMATION_NAME_TWINKLE: &str = "twinkle";
const ANIMATION_NAME_HEARTBEAT: &str = "heartbeat";
const ANIMATION_NAME_POWER_CYCLE: &str = "power_cycle";
const ANIMATION_NAME_METEOR: &str = "meteor";
const ANIMATION_NAME_MATRIX: &str = "matrix";

/// Number of animations in the catalog
pub const ANIMATION_COUNT: usize = 20;

/// Known animations, numbered by catalog position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Solid = 0,
    Alert = 1,
    Flicker = 2,
    ColorWipe = 3,
    Rainbow = 4,
    TheaterChase = 5,
    TwoColorChase = 6,
    Cylon = 7,
    Larson = 8,
    Strobe = 9,
    Police = 10,
    Breathing = 11,
    Glitch = 12,
    Sparks = 13,
    Static = 14,
    Twinkle = 15,
    Heartbeat = 16,
    PowerCycle = 17,
    Meteor = 18,
    Matrix = 19,
}

/// One catalog entry
#[derive(Clone, Copy)]
pub struct Animation {
    pub id: AnimationId,
    pub step: StepFn,
}

/// The animation table, indexed by selection
pub const CATALOG: [Animation; ANIMATION_COUNT] = [
    Animation {
        id: AnimationId::Solid,
        step: fill::solid,
    },
    Animation {
        id: AnimationId::Alert,
        step: fill::alert,
    },
    Animation {
        id: AnimationId::Flicker,
        step: fill::flicker,
    },
    Animation {
        id: AnimationId::ColorWipe,
        step: sweep::color_wipe,
    },
    Animation {
        id: AnimationId::Rainbow,
        step: rainbow::rainbow,
    },
    Animation {
        id: AnimationId::TheaterChase,
        step: chase::theater_chase,
    },
    Animation {
        id: AnimationId::TwoColorChase,
        step: chase::two_color_chase,
    },
    Animation {
        id: AnimationId::Cylon,
        step: scanner::cylon,
    },
    Animation {
        id: AnimationId::Larson,
        step: scanner::larson,
    },
    Animation {
        id: AnimationId::Strobe,
        step: flash::strobe,
    },
    Animation {
        id: AnimationId::Police,
        step: flash::police,
    },
    Animation {
        id: AnimationId::Breathing,
        step: breathing::breathing,
    },
    Animation {
        id: AnimationId::Glitch,
        step: sparkle::glitch,
    },
    Animation {
        id: AnimationId::Sparks,
        step: sparkle::sparks,
    },
    Animation {
        id: AnimationId::Static,
        step: sparkle::static_noise,
    },
    Animation {
        id: AnimationId::Twinkle,
        step: sparkle::twinkle,
    },
    Animation {
        id: AnimationId::Heartbeat,
        step: flash::heartbeat,
    },
    Animation {
        id: AnimationId::PowerCycle,
        step: sweep::power_cycle,
    },
    Animation {
        id: AnimationId::Meteor,
        step: trail::meteor,
    },
    Animation {
        id: AnimationId::Matrix,
        step: trail::matrix,
    },
];

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        CATALOG.get(usize::from(value)).map(|entry| entry.id)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn step_fn(self) -> StepFn {
        CATALOG[self as usize].step
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Alert => ANIMATION_NAME_ALERT,
            Self::Flicker => ANIMATION_NAME_FLICKER,
            Self::ColorWipe => ANIMATION_NAME_COLOR_WIPE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::TheaterChase => ANIMATION_NAME_THEATER_CHASE,
            Self::TwoColorChase => ANIMATION_NAME_TWO_COLOR_CHASE,
            Self::Cylon => ANIMATION_NAME_CYLON,
            Self::Larson => ANIMATION_NAME_LARSON,
            Self::Strobe => ANIMATION_NAME_STROBE,
            Self::Police => ANIMATION_NAME_POLICE,
            Self::Breathing => ANIMATION_NAME_BREATHING,
            Self::Glitch => ANIMATION_NAME_GLITCH,
            Self::Sparks => ANIMATION_NAME_SPARKS,
            Self::Static => ANIMATION_NAME_STATIC,
            Self::Twinkle => ANIMATION_NAME_TWINKLE,
            Self::Heartbeat => ANIMATION_NAME_HEARTBEAT,
            Self::PowerCycle => ANIMATION_NAME_POWER_CYCLE,
            Self::Meteor => ANIMATION_NAME_METEOR,
            Self::Matrix => ANIMATION_NAME_MATRIX,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        CATALOG
            .iter()
            .map(|entry| entry.id)
            .find(|id| id.as_str() == s)
    }
}

/// Run one step of the animation at `index`
///
/// An index outside the catalog turns both rings off.
pub fn dispatch(index: u8, ctx: &mut StepContext<'_>) -> Option<AnimationId> {
    let Some(entry) = CATALOG.get(usize::from(index)) else {
        ctx.surface.clear(Ring::Both);
        ctx.present();
        return None;
    };
    (entry.step)(ctx);
    Some(entry.id)
}
