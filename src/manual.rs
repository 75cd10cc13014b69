//! Manual (user) light control
//!
//! The host light surface sends [`ManualIntent`]s through a bounded
//! [`ManualChannel`] built on `critical-section` and `heapless::Deque`, so
//! intents can be sent from any context. The engine drains the channel at
//! the start of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{RgbColor, is_fraction};
use crate::error::ConfigError;

/// Color shown when no status event wins in user priority mode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualColor {
    pub color: RgbColor,
    pub brightness: f32,
    /// A switched off light shows black
    pub power: bool,
}

impl Default for ManualColor {
    fn default() -> Self {
        Self {
            color: RgbColor::WHITE,
            brightness: 1.0,
            power: true,
        }
    }
}

impl ManualColor {
    /// Create a powered manual color
    pub fn new(color: RgbColor, brightness: f32) -> Result<Self, ConfigError> {
        if !color.is_normalized() || !is_fraction(brightness) {
            return Err(ConfigError::ManualOutOfRange);
        }
        Ok(Self {
            color,
            brightness,
            power: true,
        })
    }

    /// Brightness taking the power state into account
    pub fn effective_brightness(&self) -> f32 {
        if self.power { self.brightness } else { 0.0 }
    }
}

/// Request to change the manual light state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualIntent {
    pub power: Option<bool>,
    pub color: Option<RgbColor>,
    pub brightness: Option<f32>,
}

impl ManualIntent {
    /// Set color and brightness, and switch the light on
    pub const fn color(color: RgbColor, brightness: f32) -> Self {
        Self {
            power: Some(true),
            color: Some(color),
            brightness: Some(brightness),
        }
    }

    pub const fn power(on: bool) -> Self {
        Self {
            power: Some(on),
            color: None,
            brightness: None,
        }
    }

    /// Fold the intent into `state`
    ///
    /// An out-of-range color or brightness rejects the whole intent and
    /// leaves `state` untouched.
    pub fn apply_to(&self, state: &mut ManualColor) -> Result<(), ConfigError> {
        if self.color.is_some_and(|color| !color.is_normalized())
            || self.brightness.is_some_and(|brightness| !is_fraction(brightness))
        {
            return Err(ConfigError::ManualOutOfRange);
        }
        if let Some(color) = self.color {
            state.color = color;
        }
        if let Some(brightness) = self.brightness {
            state.brightness = brightness;
        }
        if let Some(power) = self.power {
            state.power = power;
        }
        Ok(())
    }
}

/// Error returned when the channel is full
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub ManualIntent);

/// Bounded multi-sender channel of manual intents
pub struct ManualChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ManualIntent, SIZE>>>,
}

impl<const SIZE: usize> Default for ManualChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> ManualChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> ManualSender<'_, SIZE> {
        ManualSender { channel: self }
    }

    /// Get the receiving end; hand it to exactly one engine
    pub const fn receiver(&self) -> ManualReceiver<'_, SIZE> {
        ManualReceiver { channel: self }
    }

    fn try_send(&self, intent: ManualIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<ManualIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued intents
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sending handle of a [`ManualChannel`]
#[derive(Clone, Copy)]
pub struct ManualSender<'a, const SIZE: usize> {
    channel: &'a ManualChannel<SIZE>,
}

impl<const SIZE: usize> ManualSender<'_, SIZE> {
    pub fn try_send(&self, intent: ManualIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    /// Queue a new manual color; it is observed only while no event wins
    pub fn set_manual_color(&self, color: RgbColor, brightness: f32) -> Result<(), TrySendError> {
        self.try_send(ManualIntent::color(color, brightness))
    }

    pub fn set_power(&self, on: bool) -> Result<(), TrySendError> {
        self.try_send(ManualIntent::power(on))
    }
}

/// Receiving handle of a [`ManualChannel`]
#[derive(Clone, Copy)]
pub struct ManualReceiver<'a, const SIZE: usize> {
    channel: &'a ManualChannel<SIZE>,
}

impl<const SIZE: usize> ManualReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ManualIntent> {
        self.channel.try_receive()
    }
}

/// Drains pending intents into the manual state
pub(crate) struct ManualProcessor<'a, const SIZE: usize> {
    intents: ManualReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> ManualProcessor<'a, SIZE> {
    pub(crate) const fn new(intents: ManualReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Apply every queued intent in order
    ///
    /// Invalid intents are dropped. Returns true if anything was applied.
    pub(crate) fn process_pending(&mut self, state: &mut ManualColor) -> bool {
        let mut changed = false;
        while let Some(intent) = self.intents.try_receive() {
            match intent.apply_to(state) {
                Ok(()) => changed = true,
                Err(_err) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[ManualProcessor.process_pending] dropped intent: {}", _err);
                }
            }
        }
        changed
    }
}
