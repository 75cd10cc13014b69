//! Normalized colors
//!
//! Channel values are fractions in `[0.0, 1.0]`. Conversion to 8-bit
//! [`Rgb`] only happens at the sink boundary.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Returns true if `value` is a fraction in `[0.0, 1.0]`. `NaN` is not.
pub fn is_fraction(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Convert a fraction to an 8-bit channel value, rounding to nearest
pub fn fraction_to_u8(value: f32) -> u8 {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    libm::roundf(value * 255.0) as u8
}

/// RGB color with normalized channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// Status green, slightly tinted towards blue
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.1);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Dimmed white used for the wifi connected state
    pub const SOFT_WHITE: Self = Self::new(0.7, 0.7, 0.7);

    /// Create a color without range checks
    ///
    /// Use [`RgbColor::is_normalized`] or let the engine configuration
    /// validate it.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from percentages (`0..=100`)
    pub const fn from_percent(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 100.0, g as f32 / 100.0, b as f32 / 100.0)
    }

    /// Create a color from an 8-bit RGB value
    pub fn from_rgb8(color: Rgb) -> Self {
        Self::new(
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
        )
    }

    /// Returns true if every channel is within `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        is_fraction(self.r) && is_fraction(self.g) && is_fraction(self.b)
    }

    pub const fn as_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit RGB, clamping out-of-range channels
    pub fn to_rgb8(self) -> Rgb {
        Rgb {
            r: fraction_to_u8(self.r),
            g: fraction_to_u8(self.g),
            b: fraction_to_u8(self.b),
        }
    }
}

impl From<Rgb> for RgbColor {
    fn from(color: Rgb) -> Self {
        Self::from_rgb8(color)
    }
}
