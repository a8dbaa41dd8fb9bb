//! Logical LED descriptors.
//!
//! A board describes its LEDs as an ordered table of descriptors; the
//! position of a descriptor in that table is the LED's logical index. Each
//! descriptor names the chip it sits on and the channel offset(s) it drives.

use crate::config::{MAX_LEDS, SCALING_OFF, SCALING_ON};

/// A color made of one PWM value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How a descriptor maps values onto a chip's channel buffers.
pub trait LedLayout: Copy {
    /// Value written for one LED: a color, or a single brightness.
    type Value: Copy;
    /// Per channel on/off selection for the scaling buffer.
    type Enable: Copy;

    /// Scaling value used when no manual scaling table is supplied.
    const FULL_SCALE: Self::Value;

    /// Index of the chip in the settings' chip list.
    fn chip(&self) -> usize;

    /// Largest channel offset the descriptor uses.
    fn max_offset(&self) -> u8;

    fn write_value(&self, buffer: &mut [u8; MAX_LEDS], value: Self::Value);

    /// Writes `on` to every enabled channel and [`SCALING_OFF`] to the others.
    fn write_scaling(&self, buffer: &mut [u8; MAX_LEDS], on: Self::Value, enable: Self::Enable);
}

/// An RGB LED driven by three channels of one chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbLed {
    pub chip: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbLed {
    pub const fn new(chip: u8, r: u8, g: u8, b: u8) -> Self {
        Self { chip, r, g, b }
    }
}

impl LedLayout for RgbLed {
    type Value = Rgb;
    type Enable = (bool, bool, bool);

    const FULL_SCALE: Rgb = Rgb::new(SCALING_ON, SCALING_ON, SCALING_ON);

    fn chip(&self) -> usize {
        self.chip as usize
    }

    fn max_offset(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    fn write_value(&self, buffer: &mut [u8; MAX_LEDS], value: Rgb) {
        buffer[self.r as usize] = value.r;
        buffer[self.g as usize] = value.g;
        buffer[self.b as usize] = value.b;
    }

    fn write_scaling(
        &self,
        buffer: &mut [u8; MAX_LEDS],
        on: Rgb,
        (red, green, blue): (bool, bool, bool),
    ) {
        buffer[self.r as usize] = if red { on.r } else { SCALING_OFF };
        buffer[self.g as usize] = if green { on.g } else { SCALING_OFF };
        buffer[self.b as usize] = if blue { on.b } else { SCALING_OFF };
    }
}

/// A single-color LED driven by one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SingleLed {
    pub chip: u8,
    pub v: u8,
}

impl SingleLed {
    pub const fn new(chip: u8, v: u8) -> Self {
        Self { chip, v }
    }
}

impl LedLayout for SingleLed {
    type Value = u8;
    type Enable = bool;

    const FULL_SCALE: u8 = SCALING_ON;

    fn chip(&self) -> usize {
        self.chip as usize
    }

    fn max_offset(&self) -> u8 {
        self.v
    }

    fn write_value(&self, buffer: &mut [u8; MAX_LEDS], value: u8) {
        buffer[self.v as usize] = value;
    }

    fn write_scaling(&self, buffer: &mut [u8; MAX_LEDS], on: u8, enabled: bool) {
        buffer[self.v as usize] = if enabled { on } else { SCALING_OFF };
    }
}
