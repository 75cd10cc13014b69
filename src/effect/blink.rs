//! Blink oscillator
//!
//! The output is a pure function of `now`, the period and the anchor. The
//! anchor is moved only by [`BlinkClock::restart`], so a clock that is not
//! being evaluated does not drift.

use core::f32::consts::TAU;

use embassy_time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkClock {
    anchor: Instant,
}

impl Default for BlinkClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkClock {
    /// Create a clock anchored at `Instant` zero
    pub const fn new() -> Self {
        Self::anchored_at(Instant::from_ticks(0))
    }

    pub const fn anchored_at(anchor: Instant) -> Self {
        Self { anchor }
    }

    /// Start a new cycle at `now`
    pub fn restart(&mut self, now: Instant) {
        self.anchor = now;
    }

    pub const fn anchor(&self) -> Instant {
        self.anchor
    }

    /// Square wave intensity: `1.0` for the first half of each period,
    /// `0.0` for the second.
    ///
    /// A zero period never reaches the engine; it reads as solid on.
    pub fn evaluate(&self, now: Instant, period: Duration) -> f32 {
        if self.is_on(now, period) { 1.0 } else { 0.0 }
    }

    pub fn is_on(&self, now: Instant, period: Duration) -> bool {
        let Some((position, period)) = self.position(now, period) else {
            return true;
        };
        position < period - period / 2
    }

    /// Sine breathing intensity in `[0, 1]`, starting at half intensity
    pub fn pulse(&self, now: Instant, period: Duration) -> f32 {
        let Some((position, period)) = self.position(now, period) else {
            return 1.0;
        };
        let phase = position as f32 / period as f32;
        ((libm::sinf(phase * TAU) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Position inside the current cycle, in ticks
    fn position(&self, now: Instant, period: Duration) -> Option<(u64, u64)> {
        let period = period.as_ticks();
        if period == 0 {
            return None;
        }
        let elapsed = now
            .checked_duration_since(self.anchor)
            .map_or(0, |elapsed| elapsed.as_ticks());
        Some((elapsed % period, period))
    }
}
