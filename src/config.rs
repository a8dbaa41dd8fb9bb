//! Register map of the AW20xxx family.
//!
//! Every register except the three command registers lives on a page. A page
//! is selected by writing [`COMMAND_WRITE_UNLOCK`] to
//! [`COMMAND_WRITE_LOCK_REGISTER`] and then the page id to
//! [`COMMAND_REGISTER`]. The chip offers no way to read the selected page back.

use crate::ConfigError;

pub const COMMAND_REGISTER: u8 = 0xfd;
pub const COMMAND_WRITE_LOCK_REGISTER: u8 = 0xfe;
pub const COMMAND_WRITE_UNLOCK: u8 = 0xc5;
pub const ID_REGISTER: u8 = 0xfc;

pub const PAGE_FUNCTION: u8 = 0xc0;
pub const PAGE_PWM: u8 = 0xc1;
pub const PAGE_SCALING: u8 = 0xc2;
pub const PAGE_PATTERN: u8 = 0xc3;
pub const PAGE_PWM_SCALING: u8 = 0xc4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PagedRegister {
    pub page: u8,
    pub register: u8,
}

const fn function(register: u8) -> PagedRegister {
    PagedRegister {
        page: PAGE_FUNCTION,
        register,
    }
}

pub const CONFIGURATION_REGISTER: PagedRegister = function(0x00);
pub const GCC_REGISTER: PagedRegister = function(0x01);
pub const PULL_DOWN_UP_REGISTER: PagedRegister = function(0x02);
pub const TEMPERATURE_REGISTER: PagedRegister = function(0x27);
/// Spread spectrum control. Older board headers also call this offset
/// `PWM_CLOCK`; the PWM clock itself is selected through [`PWM_CLOCK_REGISTER`].
pub const SPREAD_SPECTRUM_REGISTER: PagedRegister = function(0x28);
pub const PWM_CLOCK_REGISTER: PagedRegister = function(0x29);
pub const UVLO_REGISTER: PagedRegister = function(0x2a);
pub const SLEW_RATE_REGISTER: PagedRegister = function(0x2b);
pub const RESET_REGISTER: PagedRegister = function(0x2f);
pub const MIX_CONTROL_REGISTER: PagedRegister = function(0x46);

pub const PWM_REGISTER_BASE: PagedRegister = PagedRegister {
    page: PAGE_PWM,
    register: 0x00,
};

pub const SCALING_REGISTER_BASE: PagedRegister = PagedRegister {
    page: PAGE_SCALING,
    register: 0x00,
};

pub const RESET_MAGIC: u8 = 0xae;

pub const CONFIGURATION_CHIP_ENABLE: u8 = 0b0000_0001;
pub const CONFIGURATION_SWSEL_MASK: u8 = 0b1111_0000;
pub const CONFIGURATION_SWSEL_SHIFT: u8 = 4;

/// Builds a configuration (GCR) value with SW1 to SW`active_sw` enabled
/// and the chip enable bit set. `active_sw` is clamped to `1..=11`.
pub const fn configuration_with_active_sw(active_sw: u8) -> u8 {
    let active_sw = if active_sw < 1 {
        1
    } else if active_sw > SW_COUNT as u8 {
        SW_COUNT as u8
    } else {
        active_sw
    };
    (((active_sw - 1) << CONFIGURATION_SWSEL_SHIFT) & CONFIGURATION_SWSEL_MASK)
        | CONFIGURATION_CHIP_ENABLE
}

pub const PWM_FREQUENCY_62K: u8 = 0x00;
pub const PWM_FREQUENCY_31K: u8 = 0x20;
pub const PWM_FREQUENCY_15K: u8 = 0x40;
pub const PWM_FREQUENCY_7K: u8 = 0x60;

pub const PHASE_SYNC: u8 = 0x00;
pub const PHASE_INVERT: u8 = 0x01;
pub const PHASE_THREE: u8 = 0x10;

pub const SPREAD_SPECTRUM_ENABLE: u8 = 0x10;
pub const SPREAD_SPECTRUM_DISABLE: u8 = 0x00;
pub const SPREAD_SPECTRUM_5PCT: u8 = 0x00;
pub const SPREAD_SPECTRUM_15PCT: u8 = 0x04;
pub const SPREAD_SPECTRUM_25PCT: u8 = 0x08;
pub const SPREAD_SPECTRUM_35PCT: u8 = 0x0c;

pub const SLEW_RISE_1NS: u8 = 0x00;
pub const SLEW_RISE_6NS: u8 = 0x04;
pub const SLEW_FALL_1NS: u8 = 0x00;
pub const SLEW_FALL_3NS: u8 = 0x01;
pub const SLEW_FALL_6NS: u8 = 0x02;
pub const SLEW_FALL_10NS: u8 = 0x03;

pub const DEFAULT_CONFIGURATION: u8 = CONFIGURATION_CHIP_ENABLE;
pub const DEFAULT_GLOBAL_CURRENT: u8 = 0xff;
/// CSx pull up and SWx pull down, 8k.
pub const DEFAULT_PULL_DOWN_UP: u8 = 0x33;
pub const DEFAULT_TEMPERATURE: u8 = 0x00;
pub const DEFAULT_PWM_CLOCK: u8 = PWM_FREQUENCY_62K | PHASE_SYNC;
pub const DEFAULT_SLEW_RATE: u8 = SLEW_RISE_1NS | SLEW_FALL_6NS;
pub const DEFAULT_TIMEOUT_MS: u32 = 100;

pub const SCALING_ON: u8 = 0xff;
pub const SCALING_OFF: u8 = 0x00;

pub const CS_COUNT: usize = 18;
pub const SW_COUNT: usize = 11;

/// Channel count of the largest family member, and the size of every buffer.
pub const MAX_LEDS: usize = CS_COUNT * SW_COUNT;

pub const AW20036_LEDS: usize = 36;
pub const AW20072_LEDS: usize = 72;
pub const AW20108_LEDS: usize = 108;
pub const AW20198_LEDS: usize = MAX_LEDS;

pub const PWM_TRANSFER_SIZE: usize = 18;
pub const SCALING_TRANSFER_SIZE: usize = 18;

/// Number of addressable registers on a page.
pub const PAGE_SIZE: usize = 0x100;

/// Channel offset of every (CS, SW) pair, in datasheet register order.
/// Rows are SW1..SW11, columns CS1..CS18.
#[rustfmt::skip]
pub const CHANNEL_MAP: [[u8; CS_COUNT]; SW_COUNT] = [
    [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11], // SW1
    [0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20, 0x21, 0x22, 0x23], // SW2
    [0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35], // SW3
    [0x36, 0x37, 0x38, 0x39, 0x3a, 0x3b, 0x3c, 0x3d, 0x3e, 0x3f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47], // SW4
    [0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59], // SW5
    [0x5a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, 0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b], // SW6
    [0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x7b, 0x7c, 0x7d], // SW7
    [0x7e, 0x7f, 0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x8d, 0x8e, 0x8f], // SW8
    [0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b, 0x9c, 0x9d, 0x9e, 0x9f, 0xa0, 0xa1], // SW9
    [0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9, 0xaa, 0xab, 0xac, 0xad, 0xae, 0xaf, 0xb0, 0xb1, 0xb2, 0xb3], // SW10
    [0xb4, 0xb5, 0xb6, 0xb7, 0xb8, 0xb9, 0xba, 0xbb, 0xbc, 0xbd, 0xbe, 0xbf, 0xc0, 0xc1, 0xc2, 0xc3, 0xc4, 0xc5], // SW11
];

/// Looks up the channel offset of CS`cs` on SW`sw`, both 1-based.
pub const fn channel_offset(cs: u8, sw: u8) -> Option<u8> {
    if cs == 0 || sw == 0 || cs as usize > CS_COUNT || sw as usize > SW_COUNT {
        return None;
    }
    Some(CHANNEL_MAP[sw as usize - 1][cs as usize - 1])
}

/// The two mirrored register banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    Pwm,
    Scaling,
}

impl Bank {
    pub const fn base(self) -> PagedRegister {
        match self {
            Bank::Pwm => PWM_REGISTER_BASE,
            Bank::Scaling => SCALING_REGISTER_BASE,
        }
    }

    pub const fn transfer_size(self) -> usize {
        match self {
            Bank::Pwm => PWM_TRANSFER_SIZE,
            Bank::Scaling => SCALING_TRANSFER_SIZE,
        }
    }
}

/// Resolves `len` channels starting at `offset` of `bank` to the page to
/// select and the first register to write.
///
/// Ranges that are empty or run past the last channel are rejected, so a
/// located range never spans two pages.
pub fn locate(bank: Bank, offset: usize, len: usize) -> Result<PagedRegister, ConfigError> {
    let end = offset.checked_add(len);
    match end {
        Some(end) if len > 0 && end <= MAX_LEDS => {
            let base = bank.base();
            Ok(PagedRegister {
                page: base.page,
                register: base.register + offset as u8,
            })
        }
        _ => Err(ConfigError::RangeOutsidePage { offset, len }),
    }
}
