//! Output composition
//!
//! `channel = color * brightness * global_brightness * factor`. With a valid
//! configuration every factor is in `[0, 1]` and so is the product; clamping
//! still runs and is counted, so a misconfiguration shows up in diagnostics
//! instead of on the wire.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, RgbColor, fraction_to_u8};

/// Intensities of the three LED channels, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelOutput {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ChannelOutput {
    pub const OFF: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    pub const fn as_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn is_off(self) -> bool {
        self == Self::OFF
    }

    /// Convert to 8-bit RGB for smart LED sinks
    pub fn to_rgb8(self) -> Rgb {
        Rgb {
            r: fraction_to_u8(self.red),
            g: fraction_to_u8(self.green),
            b: fraction_to_u8(self.blue),
        }
    }
}

/// Computes channel intensities and counts clamped values
#[derive(Debug, Default)]
pub struct OutputCompositor {
    clamped: u32,
}

impl OutputCompositor {
    pub const fn new() -> Self {
        Self { clamped: 0 }
    }

    /// Number of channel values that had to be clamped so far
    pub const fn clamp_count(&self) -> u32 {
        self.clamped
    }

    pub fn compose(
        &mut self,
        color: RgbColor,
        brightness: f32,
        global_brightness: f32,
        factor: f32,
    ) -> ChannelOutput {
        let scale = brightness * global_brightness * factor;
        ChannelOutput {
            red: self.clamp_channel(color.r * scale),
            green: self.clamp_channel(color.g * scale),
            blue: self.clamp_channel(color.b * scale),
        }
    }

    fn clamp_channel(&mut self, value: f32) -> f32 {
        if (0.0..=1.0).contains(&value) {
            return value;
        }
        self.clamped = self.clamped.saturating_add(1);
        #[cfg(feature = "esp32-log")]
        println!("[OutputCompositor.compose] clamped channel value {}", value);
        if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
    }
}
