//! Visual effects of an event state
//!
//! An effect turns a point in time into a scale factor in `[0, 1]` that the
//! compositor multiplies into the event color.

mod blink;

pub use blink::BlinkClock;

const EFFECT_NAME_NONE: &str = "none";
const EFFECT_NAME_BLINK: &str = "blink";
const EFFECT_NAME_PULSE: &str = "pulse";

/// Effect applied to an event color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Solid color
    #[default]
    None,
    /// Square wave: on for the first half of each period, off for the second
    Blink,
    /// Sine breathing between off and full
    Pulse,
}

impl Effect {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => EFFECT_NAME_NONE,
            Self::Blink => EFFECT_NAME_BLINK,
            Self::Pulse => EFFECT_NAME_PULSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_NONE => Some(Self::None),
            EFFECT_NAME_BLINK => Some(Self::Blink),
            EFFECT_NAME_PULSE => Some(Self::Pulse),
            _ => None,
        }
    }

    /// Returns true if the effect output depends on time
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Severity class sharing one blink speed and one phase anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkClass {
    Error,
    Warning,
    /// Every other event kind
    Default,
}

impl BlinkClass {
    pub const COUNT: usize = 3;

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Default => 2,
        }
    }
}
