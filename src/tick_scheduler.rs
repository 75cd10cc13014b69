//! Tick scheduling utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::compositor::ChannelOutput;
use crate::engine::{StatusEngine, TickOutput};
use crate::signal::EventSignalBus;
use crate::ChannelSink;

/// Default tick rate (50 Hz), fast enough for the 250 ms error blink.
pub const DEFAULT_TICK_RATE: u32 = 50;

/// Default tick duration based on the tick rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_TICK_RATE as u64);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the sink was written this tick.
    pub written: bool,
    /// What the engine produced.
    pub tick: TickOutput,
}

/// Portable tick scheduler.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Snapshots the signal bus and ticks the engine
/// - Writes the sink only when the output changed
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(engine, sink, &BUS);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct TickScheduler<'a, S: ChannelSink, const MANUAL_CHANNEL_SIZE: usize> {
    sink: S,
    engine: StatusEngine<'a, MANUAL_CHANNEL_SIZE>,
    bus: &'a EventSignalBus,
    next_tick: Instant,
    tick_duration: Duration,
    last_written: Option<ChannelOutput>,
}

impl<'a, S: ChannelSink, const MANUAL_CHANNEL_SIZE: usize> TickScheduler<'a, S, MANUAL_CHANNEL_SIZE> {
    /// Create a new tick scheduler.
    ///
    /// Uses `DEFAULT_TICK_DURATION` (50 Hz) for tick timing.
    pub fn new(
        engine: StatusEngine<'a, MANUAL_CHANNEL_SIZE>,
        sink: S,
        bus: &'a EventSignalBus,
    ) -> Self {
        Self::with_tick_duration(engine, sink, bus, DEFAULT_TICK_DURATION)
    }

    /// Create a new tick scheduler with custom tick duration.
    pub fn with_tick_duration(
        engine: StatusEngine<'a, MANUAL_CHANNEL_SIZE>,
        sink: S,
        bus: &'a EventSignalBus,
        tick_duration: Duration,
    ) -> Self {
        Self {
            sink,
            engine,
            bus,
            next_tick: Instant::from_millis(0),
            tick_duration,
            last_written: None,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Skip the backlog after a long stall instead of catching up
        let max_drift = self.tick_duration.as_ticks() * 2;
        if now.as_ticks() > self.next_tick.as_ticks() + max_drift {
            self.next_tick = now;
        }

        let tick = self.engine.tick_bus(now, self.bus);
        let written = self.last_written != Some(tick.output);
        if written {
            self.sink.write(tick.output);
            self.last_written = Some(tick.output);
        }

        self.next_tick += self.tick_duration;

        let sleep_duration = self
            .next_tick
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            written,
            tick,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &StatusEngine<'a, MANUAL_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut StatusEngine<'a, MANUAL_CHANNEL_SIZE> {
        &mut self.engine
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the scheduler apart.
    pub fn into_parts(self) -> (StatusEngine<'a, MANUAL_CHANNEL_SIZE>, S) {
        (self.engine, self.sink)
    }
}
