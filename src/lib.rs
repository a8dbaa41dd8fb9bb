//! Driver for the Awinic AW20xxx family of I2C LED matrix controllers
//! (AW20036, AW20072, AW20108, AW20198).
//!
//! The driver keeps a mirror of each chip's PWM and scaling registers. Setting
//! a color or brightness only touches the mirror; [`Aw20xxx::update_pwm_register`]
//! and [`Aw20xxx::update_scaling_register`] push a chip's mirror over the bus,
//! typically once per rendered frame.
//!
//! ```ignore
//! use aw20xxx::{position::*, Aw20xxx, RgbLed, Settings};
//!
//! const LEDS: [RgbLed; 2] = [
//!     RgbLed::new(0, CS1_SW1, CS2_SW1, CS3_SW1),
//!     RgbLed::new(0, CS4_SW1, CS5_SW1, CS6_SW1),
//! ];
//!
//! let mut leds = Aw20xxx::new_with_i2c_bus(i2c, Settings::new([0x20], &LEDS))?;
//! leds.init_all()?;
//! leds.set_color(1, 0xff, 0x00, 0x40)?;
//! leds.flush()?;
//! ```
//!
//! The chip cannot report which register page is selected. Every flush and
//! every initialization therefore re-runs the unlock sequence instead of
//! trusting the page the driver last selected.
#![no_std]

pub mod aw20xxx;
pub mod config;
pub mod device;
pub mod i2c;
pub mod led;
pub mod position;
pub mod protocol;
pub mod settings;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use crate::aw20xxx::Aw20xxx;
pub use crate::config::{channel_offset, locate, Bank, PagedRegister, MAX_LEDS};
pub use crate::device::{BusFault, RawDevice};
pub use crate::i2c::{I2cAdapter, I2cAdapterError};
pub use crate::led::{LedLayout, Rgb, RgbLed, SingleLed};
pub use crate::settings::{ChipSettings, Settings};
pub use crate::state::ChipStatus;

use embedded_hal::i2c::{Error, ErrorKind};

/// Settings the chip cannot honour. Reported before any bus traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    NoChips,
    /// Not a 7-bit address.
    AddressOutOfRange(u8),
    /// Two chips configured at the same address.
    DuplicateAddress(u8),
    /// `max_leds` is zero or above [`MAX_LEDS`].
    MaxLedsOutOfRange(usize),
    /// LED `led` names a chip that is not configured.
    ChipOutOfRange { led: usize },
    /// LED `led` uses a channel offset at or above `max_leds`.
    OffsetOutOfRange { led: usize, offset: u8 },
    ScalingTableLength { expected: usize, found: usize },
    ZeroTransferSize,
    /// A register range that does not fit in one page.
    RangeOutsidePage { offset: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Aw20xxxError {
    /// A transaction did not complete within the configured timeout.
    BusTimeout,
    /// The transport failed, a missing acknowledge included.
    Bus(ErrorKind),
    Configuration(ConfigError),
    /// The chip has not been initialized by [`Aw20xxx::common_init`].
    NotReady,
    /// No LED or chip with that index.
    InvalidIndex,
}

impl Error for Aw20xxxError {
    fn kind(&self) -> ErrorKind {
        match self {
            Aw20xxxError::Bus(kind) => *kind,
            _ => ErrorKind::Other,
        }
    }
}

impl<E: Error> From<BusFault<E>> for Aw20xxxError {
    fn from(fault: BusFault<E>) -> Self {
        match fault {
            BusFault::Timeout => Aw20xxxError::BusTimeout,
            BusFault::Transport(error) => Aw20xxxError::Bus(error.kind()),
        }
    }
}

impl From<ConfigError> for Aw20xxxError {
    fn from(error: ConfigError) -> Self {
        Aw20xxxError::Configuration(error)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoChips => write!(f, "no chips configured"),
            ConfigError::AddressOutOfRange(address) => {
                write!(f, "address {address:#04x} is not a 7-bit address")
            }
            ConfigError::DuplicateAddress(address) => {
                write!(f, "address {address:#04x} is used by more than one chip")
            }
            ConfigError::MaxLedsOutOfRange(max_leds) => {
                write!(f, "max_leds {max_leds} outside 1..={MAX_LEDS}")
            }
            ConfigError::ChipOutOfRange { led } => {
                write!(f, "LED {led} is on a chip that is not configured")
            }
            ConfigError::OffsetOutOfRange { led, offset } => {
                write!(f, "LED {led} uses channel offset {offset:#04x} out of range")
            }
            ConfigError::ScalingTableLength { expected, found } => {
                write!(f, "manual scaling table has {found} entries, expected {expected}")
            }
            ConfigError::ZeroTransferSize => write!(f, "transfer size is zero"),
            ConfigError::RangeOutsidePage { offset, len } => {
                write!(f, "{len} registers at {offset:#04x} do not fit in one page")
            }
        }
    }
}

impl core::fmt::Display for Aw20xxxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Aw20xxxError::BusTimeout => write!(f, "bus transaction timed out"),
            Aw20xxxError::Bus(kind) => write!(f, "bus error: {kind}"),
            Aw20xxxError::Configuration(error) => write!(f, "invalid configuration: {error}"),
            Aw20xxxError::NotReady => write!(f, "chip not initialized"),
            Aw20xxxError::InvalidIndex => write!(f, "index out of range"),
        }
    }
}
