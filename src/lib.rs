#![no_std]

pub mod catalog;
pub mod color;
pub mod compositor;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod event;
pub mod manual;
pub mod priority;
pub mod signal;
pub mod tick_scheduler;

pub use catalog::EventCatalog;
pub use compositor::{ChannelOutput, OutputCompositor};
pub use config::{GlobalSettings, PriorityMode, StatusLedConfig};
pub use effect::{BlinkClass, BlinkClock, Effect};
pub use engine::{StatusEngine, TickOutput};
pub use error::ConfigError;
pub use event::{EventConfig, EventKind};
pub use manual::{
    ManualChannel, ManualColor, ManualIntent, ManualReceiver, ManualSender, TrySendError,
};
pub use priority::{PriorityOrder, PriorityResolver, Resolution};
pub use signal::{EventSignalBus, SignalSet};
pub use tick_scheduler::{TickResult, TickScheduler};

pub use color::{Rgb, RgbColor};
pub use embassy_time::{Duration, Instant};

/// Abstract output driver trait
///
/// Implement this trait to drive the three LED channels (PWM, smart LED,
/// ...). The engine owns no hardware state.
pub trait ChannelSink {
    /// Write channel intensities, each in `[0, 1]`
    fn write(&mut self, output: ChannelOutput);
}

impl<S: ChannelSink + ?Sized> ChannelSink for &mut S {
    fn write(&mut self, output: ChannelOutput) {
        (**self).write(output);
    }
}
