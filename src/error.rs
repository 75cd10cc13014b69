//! Configuration errors
//!
//! Everything here is detected once, when the engine is built. The tick path
//! never fails.

use core::fmt;

use crate::event::EventKind;

/// Error returned when a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A color channel of the event is outside `[0, 1]`
    ColorOutOfRange(EventKind),
    /// Brightness outside `[0, 1]`; `None` refers to the global brightness
    BrightnessOutOfRange(Option<EventKind>),
    /// Zero blink or pulse period; `None` refers to the global speeds
    InvalidBlinkPeriod(Option<EventKind>),
    /// The catalog already holds an entry for this kind
    DuplicateEvent(EventKind),
    /// The kind appears more than once in the priority order
    DuplicatePriority(EventKind),
    /// The kind is configured but has no place in the priority order
    MissingPriority(EventKind),
    /// The priority order names a kind that is not configured
    UnconfiguredPriority(EventKind),
    /// The status fallback is `ok` or is not configured
    InvalidFallback(EventKind),
    /// Manual color or brightness outside `[0, 1]`
    ManualOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorOutOfRange(kind) => write!(f, "{kind}: color channel out of range"),
            Self::BrightnessOutOfRange(Some(kind)) => {
                write!(f, "{kind}: brightness out of range")
            }
            Self::BrightnessOutOfRange(None) => f.write_str("global brightness out of range"),
            Self::InvalidBlinkPeriod(Some(kind)) => write!(f, "{kind}: blink period must be positive"),
            Self::InvalidBlinkPeriod(None) => f.write_str("blink speeds must be positive"),
            Self::DuplicateEvent(kind) => write!(f, "{kind}: configured twice"),
            Self::DuplicatePriority(kind) => write!(f, "{kind}: listed twice in priority order"),
            Self::MissingPriority(kind) => write!(f, "{kind}: missing from priority order"),
            Self::UnconfiguredPriority(kind) => {
                write!(f, "{kind}: in priority order but not configured")
            }
            Self::InvalidFallback(kind) => write!(f, "{kind}: cannot be the status fallback"),
            Self::ManualOutOfRange => f.write_str("manual color out of range"),
        }
    }
}

impl core::error::Error for ConfigError {}
