use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::catalog::EventCatalog;
use crate::color::RgbColor;
use crate::compositor::{ChannelOutput, OutputCompositor};
use crate::config::{GlobalSettings, PriorityMode, StatusLedConfig};
use crate::effect::{BlinkClass, BlinkClock, Effect};
use crate::error::ConfigError;
use crate::event::{EventConfig, EventKind};
use crate::manual::{ManualColor, ManualProcessor, ManualReceiver};
use crate::priority::{PriorityResolver, Resolution};
use crate::signal::{EventSignalBus, SignalSet};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    pub resolution: Resolution,
    pub output: ChannelOutput,
}

/// Status LED engine - resolves signals into channel intensities
pub struct StatusEngine<'a, const MANUAL_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    manual_processor: ManualProcessor<'a, MANUAL_CHANNEL_SIZE>,
    catalog: EventCatalog,
    resolver: PriorityResolver,
    settings: GlobalSettings,

    // Internal state
    manual: ManualColor,
    clocks: [BlinkClock; BlinkClass::COUNT],
    resolution: Option<Resolution>,
    started: Option<Instant>,
    ota_begin_since: Option<Instant>,
    idle_since: Option<Instant>,
    manual_touched: bool,

    // Internal dependencies
    compositor: OutputCompositor,
}

impl<'a, const MANUAL_CHANNEL_SIZE: usize> StatusEngine<'a, MANUAL_CHANNEL_SIZE> {
    /// Create a new engine
    ///
    /// Fails if any part of the configuration is out of range or the
    /// priority order does not match the catalog.
    pub fn new(
        config: &StatusLedConfig,
        manual: ManualReceiver<'a, MANUAL_CHANNEL_SIZE>,
    ) -> Result<Self, ConfigError> {
        config.catalog.validate()?;
        config.settings.validate()?;
        let resolver =
            PriorityResolver::new(config.priority.clone(), &config.catalog, &config.settings)?;

        #[cfg(feature = "esp32-log")]
        {
            let settings = &config.settings;
            println!(
                "[StatusEngine.new] {} events, priority mode: {}, brightness: {}",
                config.catalog.len(),
                settings.priority_mode.as_str(),
                settings.brightness
            );
            println!(
                "[StatusEngine.new] blink speeds: error {}ms, warning {}ms, default {}ms",
                settings.error_blink_speed.as_millis(),
                settings.warning_blink_speed.as_millis(),
                settings.default_blink_speed.as_millis()
            );
        }

        Ok(Self {
            manual_processor: ManualProcessor::new(manual),
            catalog: config.catalog,
            resolver,
            settings: config.settings,
            manual: ManualColor::default(),
            clocks: [BlinkClock::new(); BlinkClass::COUNT],
            resolution: None,
            started: None,
            ota_begin_since: None,
            idle_since: None,
            manual_touched: false,
            compositor: OutputCompositor::new(),
        })
    }

    /// Process one tick against a signal snapshot
    ///
    /// The snapshot is first shaped by the boot window and the OTA handoff,
    /// then resolved. The user takeover may replace an idle result with the
    /// manual color.
    pub fn tick(&mut self, now: Instant, signals: SignalSet) -> TickOutput {
        if self.manual_processor.process_pending(&mut self.manual) {
            self.manual_touched = true;
        }

        let signals = self.shape_signals(now, signals);
        let resolved = self.resolver.resolve(&self.catalog, signals);
        let resolution = self.apply_takeover(now, signals, resolved);
        if self.resolution != Some(resolution) {
            self.on_resolution_changed(resolution, now);
        }

        let output = match resolution {
            Resolution::Event(kind) => self.compose_event(kind, now),
            Resolution::Manual => self.compositor.compose(
                self.manual.color,
                self.manual.effective_brightness(),
                self.settings.brightness,
                1.0,
            ),
            Resolution::Off => ChannelOutput::OFF,
        };

        TickOutput { resolution, output }
    }

    /// Snapshot the bus and process one tick
    pub fn tick_bus(&mut self, now: Instant, bus: &EventSignalBus) -> TickOutput {
        self.tick(now, bus.snapshot())
    }

    /// Set the manual color directly, bypassing the channel
    pub fn set_manual_color(&mut self, color: RgbColor, brightness: f32) -> Result<(), ConfigError> {
        self.manual = ManualColor::new(color, brightness)?;
        self.manual_touched = true;
        Ok(())
    }

    /// Switch the manual light on or off
    pub fn set_manual_power(&mut self, on: bool) {
        self.manual.power = on;
        self.manual_touched = true;
    }

    /// Resolution of the last tick
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn manual(&self) -> &ManualColor {
        &self.manual
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn resolver(&self) -> &PriorityResolver {
        &self.resolver
    }

    /// Number of channel values clamped since construction
    pub fn clamp_count(&self) -> u32 {
        self.compositor.clamp_count()
    }

    /// Period used by `kind` for its blink or pulse effect
    pub fn period_for(&self, kind: EventKind) -> Duration {
        let config = self.catalog.get(kind);
        if let Some(period) = config.blink_period {
            return period;
        }
        match config.effect {
            Effect::Pulse => self.settings.pulse_speed,
            Effect::None | Effect::Blink => match kind.blink_class() {
                BlinkClass::Error => self.settings.error_blink_speed,
                BlinkClass::Warning => self.settings.warning_blink_speed,
                BlinkClass::Default => self.settings.default_blink_speed,
            },
        }
    }

    /// Add the boot window and swap a held `ota_begin` for `ota_progress`
    fn shape_signals(&mut self, now: Instant, mut signals: SignalSet) -> SignalSet {
        let started = *self.started.get_or_insert(now);
        if let Some(window) = self.settings.boot_duration {
            if elapsed(started, now) < window {
                signals = signals.with(EventKind::Boot);
            }
        }

        if !signals.contains(EventKind::OtaBegin) {
            self.ota_begin_since = None;
            return signals;
        }
        let since = *self.ota_begin_since.get_or_insert(now);
        if let Some(hold) = self.settings.ota_begin_hold {
            if elapsed(since, now) >= hold && self.catalog.is_enabled(EventKind::OtaProgress) {
                signals = signals
                    .without(EventKind::OtaBegin)
                    .with(EventKind::OtaProgress);
            }
        }
        signals
    }

    /// Hand an idle status LED to the manual color once the user touched it
    ///
    /// Idle means nothing outranking `ok` is asserted: the LED is off, shows
    /// `ok`, or shows the unasserted fallback.
    fn apply_takeover(
        &mut self,
        now: Instant,
        signals: SignalSet,
        resolved: Resolution,
    ) -> Resolution {
        let idle = match resolved {
            Resolution::Off => true,
            Resolution::Event(kind) => kind == EventKind::Ok || !signals.contains(kind),
            Resolution::Manual => false,
        };
        if !idle {
            self.idle_since = None;
            return resolved;
        }

        let since = *self.idle_since.get_or_insert(now);
        match self.settings.user_takeover {
            Some(after)
                if self.manual_touched
                    && self.resolver.mode() == PriorityMode::Status
                    && elapsed(since, now) >= after =>
            {
                Resolution::Manual
            }
            _ => resolved,
        }
    }

    /// Anchor the winner's clock so its phase starts now
    fn on_resolution_changed(&mut self, resolution: Resolution, now: Instant) {
        #[cfg(feature = "esp32-log")]
        match resolution {
            Resolution::Event(kind) => println!("[StatusEngine.tick] state: {}", kind),
            Resolution::Manual => println!("[StatusEngine.tick] state: manual"),
            Resolution::Off => println!("[StatusEngine.tick] state: off"),
        }

        if let Resolution::Event(kind) = resolution {
            self.clocks[kind.blink_class().index()].restart(now);
        }
        self.resolution = Some(resolution);
    }

    fn compose_event(&mut self, kind: EventKind, now: Instant) -> ChannelOutput {
        let config = self.catalog.get(kind);
        let factor = self.effect_factor(kind, &config, now);
        self.compositor
            .compose(config.color, config.brightness, self.settings.brightness, factor)
    }

    fn effect_factor(&self, kind: EventKind, config: &EventConfig, now: Instant) -> f32 {
        let clock = &self.clocks[kind.blink_class().index()];
        match config.effect {
            Effect::None => 1.0,
            Effect::Blink => clock.evaluate(now, self.period_for(kind)),
            Effect::Pulse => clock.pulse(now, self.period_for(kind)),
        }
    }
}

fn elapsed(since: Instant, now: Instant) -> Duration {
    now.checked_duration_since(since).unwrap_or(Duration::from_ticks(0))
}
