//! Event kinds and their per-event configuration
//!
//! The set of kinds is closed. Each kind has a stable numeric id (used as a
//! bit index by the signal bus) and a configuration name.

use core::fmt;

use embassy_time::Duration;

use crate::color::{RgbColor, is_fraction};
use crate::effect::{BlinkClass, Effect};
use crate::error::ConfigError;

const EVENT_NAME_ERROR: &str = "error";
const EVENT_NAME_WARNING: &str = "warning";
const EVENT_NAME_OK: &str = "ok";
const EVENT_NAME_BOOT: &str = "boot";
const EVENT_NAME_WIFI_CONNECTED: &str = "wifi_connected";
const EVENT_NAME_API_CONNECTED: &str = "api_connected";
const EVENT_NAME_API_DISCONNECTED: &str = "api_disconnected";
const EVENT_NAME_OTA_BEGIN: &str = "ota_begin";
const EVENT_NAME_OTA_PROGRESS: &str = "ota_progress";
const EVENT_NAME_OTA_END: &str = "ota_end";
const EVENT_NAME_OTA_ERROR: &str = "ota_error";

const EVENT_ID_ERROR: u8 = 0;
const EVENT_ID_WARNING: u8 = 1;
const EVENT_ID_OK: u8 = 2;
const EVENT_ID_BOOT: u8 = 3;
const EVENT_ID_WIFI_CONNECTED: u8 = 4;
const EVENT_ID_API_CONNECTED: u8 = 5;
const EVENT_ID_API_DISCONNECTED: u8 = 6;
const EVENT_ID_OTA_BEGIN: u8 = 7;
const EVENT_ID_OTA_PROGRESS: u8 = 8;
const EVENT_ID_OTA_END: u8 = 9;
const EVENT_ID_OTA_ERROR: u8 = 10;

/// Known event kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EventKind {
    Error = EVENT_ID_ERROR,
    Warning = EVENT_ID_WARNING,
    Ok = EVENT_ID_OK,
    Boot = EVENT_ID_BOOT,
    WifiConnected = EVENT_ID_WIFI_CONNECTED,
    ApiConnected = EVENT_ID_API_CONNECTED,
    ApiDisconnected = EVENT_ID_API_DISCONNECTED,
    OtaBegin = EVENT_ID_OTA_BEGIN,
    OtaProgress = EVENT_ID_OTA_PROGRESS,
    OtaEnd = EVENT_ID_OTA_END,
    OtaError = EVENT_ID_OTA_ERROR,
}

impl EventKind {
    /// Number of event kinds
    pub const COUNT: usize = 11;

    /// All kinds, ordered by id
    pub const ALL: [Self; Self::COUNT] = [
        Self::Error,
        Self::Warning,
        Self::Ok,
        Self::Boot,
        Self::WifiConnected,
        Self::ApiConnected,
        Self::ApiDisconnected,
        Self::OtaBegin,
        Self::OtaProgress,
        Self::OtaEnd,
        Self::OtaError,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EVENT_ID_ERROR => Self::Error,
            EVENT_ID_WARNING => Self::Warning,
            EVENT_ID_OK => Self::Ok,
            EVENT_ID_BOOT => Self::Boot,
            EVENT_ID_WIFI_CONNECTED => Self::WifiConnected,
            EVENT_ID_API_CONNECTED => Self::ApiConnected,
            EVENT_ID_API_DISCONNECTED => Self::ApiDisconnected,
            EVENT_ID_OTA_BEGIN => Self::OtaBegin,
            EVENT_ID_OTA_PROGRESS => Self::OtaProgress,
            EVENT_ID_OTA_END => Self::OtaEnd,
            EVENT_ID_OTA_ERROR => Self::OtaError,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => EVENT_NAME_ERROR,
            Self::Warning => EVENT_NAME_WARNING,
            Self::Ok => EVENT_NAME_OK,
            Self::Boot => EVENT_NAME_BOOT,
            Self::WifiConnected => EVENT_NAME_WIFI_CONNECTED,
            Self::ApiConnected => EVENT_NAME_API_CONNECTED,
            Self::ApiDisconnected => EVENT_NAME_API_DISCONNECTED,
            Self::OtaBegin => EVENT_NAME_OTA_BEGIN,
            Self::OtaProgress => EVENT_NAME_OTA_PROGRESS,
            Self::OtaEnd => EVENT_NAME_OTA_END,
            Self::OtaError => EVENT_NAME_OTA_ERROR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EVENT_NAME_ERROR => Some(Self::Error),
            EVENT_NAME_WARNING => Some(Self::Warning),
            EVENT_NAME_OK => Some(Self::Ok),
            EVENT_NAME_BOOT => Some(Self::Boot),
            EVENT_NAME_WIFI_CONNECTED => Some(Self::WifiConnected),
            EVENT_NAME_API_CONNECTED => Some(Self::ApiConnected),
            EVENT_NAME_API_DISCONNECTED => Some(Self::ApiDisconnected),
            EVENT_NAME_OTA_BEGIN => Some(Self::OtaBegin),
            EVENT_NAME_OTA_PROGRESS => Some(Self::OtaProgress),
            EVENT_NAME_OTA_END => Some(Self::OtaEnd),
            EVENT_NAME_OTA_ERROR => Some(Self::OtaError),
            _ => None,
        }
    }

    /// Severity class whose blink speed this kind uses
    pub const fn blink_class(self) -> BlinkClass {
        match self {
            Self::Error => BlinkClass::Error,
            Self::Warning => BlinkClass::Warning,
            _ => BlinkClass::Default,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of a single event state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventConfig {
    /// Disabled events never win resolution
    pub enabled: bool,
    pub color: RgbColor,
    /// Per-event brightness, multiplied with the global brightness
    pub brightness: f32,
    pub effect: Effect,
    /// Overrides the severity class period for blink and pulse effects
    pub blink_period: Option<Duration>,
}

impl EventConfig {
    /// Placeholder for kinds missing from a catalog
    pub const ABSENT: Self = Self::solid(RgbColor::BLACK).disabled();

    pub const fn solid(color: RgbColor) -> Self {
        Self {
            enabled: true,
            color,
            brightness: 1.0,
            effect: Effect::None,
            blink_period: None,
        }
    }

    pub const fn blinking(color: RgbColor) -> Self {
        Self::solid(color).with_effect(Effect::Blink)
    }

    pub const fn pulsing(color: RgbColor) -> Self {
        Self::solid(color).with_effect(Effect::Pulse)
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_blink_period(mut self, period: Duration) -> Self {
        self.blink_period = Some(period);
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Default look of each event state
    ///
    /// Errors blink red, warnings blink orange, OTA is blue, healthy
    /// connectivity is green.
    pub const fn default_for(kind: EventKind) -> Self {
        match kind {
            EventKind::Error | EventKind::OtaError => Self::blinking(RgbColor::RED),
            EventKind::Warning => Self::blinking(RgbColor::ORANGE),
            EventKind::Ok | EventKind::ApiConnected | EventKind::OtaEnd => {
                Self::solid(RgbColor::GREEN)
            }
            EventKind::Boot => Self::solid(RgbColor::RED),
            EventKind::WifiConnected => Self::solid(RgbColor::SOFT_WHITE),
            EventKind::ApiDisconnected => Self::solid(RgbColor::YELLOW),
            EventKind::OtaBegin => Self::solid(RgbColor::BLUE),
            EventKind::OtaProgress => Self::blinking(RgbColor::BLUE),
        }
    }

    /// Check ranges. `kind` is only used to label the error.
    pub fn validate(&self, kind: EventKind) -> Result<(), ConfigError> {
        if !self.color.is_normalized() {
            return Err(ConfigError::ColorOutOfRange(kind));
        }
        if !is_fraction(self.brightness) {
            return Err(ConfigError::BrightnessOutOfRange(Some(kind)));
        }
        if let Some(period) = self.blink_period {
            if period.as_ticks() == 0 {
                return Err(ConfigError::InvalidBlinkPeriod(Some(kind)));
            }
        }
        Ok(())
    }
}
