//! Engine configuration
//!
//! One struct, validated once by [`StatusLedConfig::validate`] (and again by
//! `StatusEngine::new`). Nothing is looked up at runtime.

use embassy_time::Duration;

use crate::catalog::EventCatalog;
use crate::color::is_fraction;
use crate::error::ConfigError;
use crate::event::EventKind;
use crate::priority::{PriorityOrder, validate_fallback};

const PRIORITY_MODE_NAME_STATUS: &str = "status";
const PRIORITY_MODE_NAME_USER: &str = "user";

/// Which side wins when no status event is asserted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PriorityMode {
    /// Status indication owns the LED; idle shows the fallback or nothing
    #[default]
    Status,
    /// The manual color takes over whenever no status event wins
    User,
}

impl PriorityMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => PRIORITY_MODE_NAME_STATUS,
            Self::User => PRIORITY_MODE_NAME_USER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRIORITY_MODE_NAME_STATUS => Some(Self::Status),
            PRIORITY_MODE_NAME_USER => Some(Self::User),
            _ => None,
        }
    }
}

/// Settings shared by all event states
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlobalSettings {
    /// Blink period of the error class
    pub error_blink_speed: Duration,
    /// Blink period of the warning class
    pub warning_blink_speed: Duration,
    /// Blink period of every other event kind
    pub default_blink_speed: Duration,
    /// Period of the pulse effect
    pub pulse_speed: Duration,
    /// Scalar applied on top of every per-event brightness
    pub brightness: f32,
    pub priority_mode: PriorityMode,
    /// When false, `ok` never wins even if asserted
    pub ok_state_enabled: bool,
    /// Winner in status mode when nothing is asserted; `None` turns the LED off
    pub status_fallback: Option<EventKind>,
    /// Treat `boot` as asserted for this long after the first tick
    pub boot_duration: Option<Duration>,
    /// Once `ota_begin` has been held this long it shows as `ota_progress`
    pub ota_begin_hold: Option<Duration>,
    /// Status mode only: after the manual light was touched, idle for this
    /// long hands the LED to the manual color
    pub user_takeover: Option<Duration>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            error_blink_speed: Duration::from_millis(250),
            warning_blink_speed: Duration::from_millis(1500),
            default_blink_speed: Duration::from_millis(1000),
            pulse_speed: Duration::from_millis(2000),
            brightness: 0.5,
            priority_mode: PriorityMode::Status,
            ok_state_enabled: true,
            status_fallback: None,
            boot_duration: None,
            ota_begin_hold: None,
            user_takeover: None,
        }
    }
}

impl GlobalSettings {
    pub const BOOT_DURATION: Duration = Duration::from_secs(10);
    pub const OTA_BEGIN_HOLD: Duration = Duration::from_millis(500);
    pub const USER_TAKEOVER: Duration = Duration::from_secs(30);

    /// Enable the boot window, the OTA handoff and the user takeover with
    /// their stock timings
    pub const fn with_lifecycle_timing(self) -> Self {
        Self {
            boot_duration: Some(Self::BOOT_DURATION),
            ota_begin_hold: Some(Self::OTA_BEGIN_HOLD),
            user_takeover: Some(Self::USER_TAKEOVER),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_fraction(self.brightness) {
            return Err(ConfigError::BrightnessOutOfRange(None));
        }
        let speeds = [
            self.error_blink_speed,
            self.warning_blink_speed,
            self.default_blink_speed,
            self.pulse_speed,
        ];
        if speeds.iter().any(|speed| speed.as_ticks() == 0) {
            return Err(ConfigError::InvalidBlinkPeriod(None));
        }
        Ok(())
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLedConfig {
    pub catalog: EventCatalog,
    pub priority: PriorityOrder,
    pub settings: GlobalSettings,
}

impl Default for StatusLedConfig {
    /// All eleven event states with the default severity order
    fn default() -> Self {
        Self {
            catalog: EventCatalog::full(),
            priority: PriorityOrder::default(),
            settings: GlobalSettings::default(),
        }
    }
}

impl StatusLedConfig {
    /// Error and warning only; the manual color shows otherwise
    pub fn minimal() -> Self {
        Self {
            catalog: EventCatalog::minimal(),
            priority: PriorityOrder::minimal(),
            settings: GlobalSettings {
                brightness: 1.0,
                priority_mode: PriorityMode::User,
                ..GlobalSettings::default()
            },
        }
    }

    /// Run every check the engine runs on construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.settings.validate()?;
        self.priority.validate_against(&self.catalog)?;
        validate_fallback(&self.settings, &self.catalog)
    }
}
