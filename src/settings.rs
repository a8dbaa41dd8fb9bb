//! Board level configuration handed to the driver at construction.

use crate::config::*;
use crate::led::LedLayout;
use crate::ConfigError;

use embedded_hal::i2c::SevenBitAddress;

/// Default I2C address, with ADDR1 and ADDR2 both tied to GND.
///
/// The 7-bit address is `0b010(ADDR2)(ADDR1)`, each pin pair encoding
/// `00` GND, `01` SCL, `10` SDA, `11` VCC.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0b010_0000;

/// Per chip settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipSettings {
    pub address: SevenBitAddress,
    /// Value written to the spread spectrum register.
    pub ssr: u8,
}

impl ChipSettings {
    pub const fn new(address: SevenBitAddress, ssr: u8) -> Self {
        Self { address, ssr }
    }

    /// Spread spectrum default for the chip at `position` out of `count`
    /// chips: a lone chip runs without it, otherwise the first chip is the
    /// clock master (0x80) and the others follow it (0x40).
    pub const fn default_ssr(position: usize, count: usize) -> u8 {
        if count == 1 {
            0x00
        } else if position == 0 {
            0x80
        } else {
            0x40
        }
    }
}

/// Everything the driver needs to know about the board.
#[derive(Clone, Copy)]
pub struct Settings<'a, L: LedLayout, const CHIPS: usize> {
    pub chips: [ChipSettings; CHIPS],
    /// Logical LED table, indexed by logical LED index.
    pub leds: &'a [L],
    /// Per LED scaling values overriding [`Settings::scaling`], same order
    /// as [`Settings::leds`].
    pub manual_scaling: Option<&'a [L::Value]>,
    /// Scaling value of an enabled channel.
    pub scaling: L::Value,
    pub configuration: u8,
    pub global_current: u8,
    pub pull_down_up: u8,
    pub temperature: u8,
    pub pwm_clock: u8,
    pub slew_rate: u8,
    /// Channels in use on every chip, at most [`MAX_LEDS`].
    pub max_leds: usize,
    pub timeout_ms: u32,
}

impl<'a, L: LedLayout, const CHIPS: usize> Settings<'a, L, CHIPS> {
    /// Settings with the register defaults and the default spread spectrum
    /// value for each chip position.
    pub fn new(addresses: [SevenBitAddress; CHIPS], leds: &'a [L]) -> Self {
        let mut chips = [ChipSettings::new(DEFAULT_ADDRESS, 0); CHIPS];
        for (position, (chip, address)) in chips.iter_mut().zip(addresses).enumerate() {
            *chip = ChipSettings::new(address, ChipSettings::default_ssr(position, CHIPS));
        }

        Self {
            chips,
            leds,
            manual_scaling: None,
            scaling: L::FULL_SCALE,
            configuration: DEFAULT_CONFIGURATION,
            global_current: DEFAULT_GLOBAL_CURRENT,
            pull_down_up: DEFAULT_PULL_DOWN_UP,
            temperature: DEFAULT_TEMPERATURE,
            pwm_clock: DEFAULT_PWM_CLOCK,
            slew_rate: DEFAULT_SLEW_RATE,
            max_leds: MAX_LEDS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_ssr(mut self, chip: usize, ssr: u8) -> Self {
        if let Some(chip) = self.chips.get_mut(chip) {
            chip.ssr = ssr;
        }
        self
    }

    pub fn with_manual_scaling(mut self, table: &'a [L::Value]) -> Self {
        self.manual_scaling = Some(table);
        self
    }

    pub fn with_scaling(mut self, scaling: L::Value) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_configuration(mut self, configuration: u8) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn with_global_current(mut self, global_current: u8) -> Self {
        self.global_current = global_current;
        self
    }

    pub fn with_pull_down_up(mut self, pull_down_up: u8) -> Self {
        self.pull_down_up = pull_down_up;
        self
    }

    pub fn with_temperature(mut self, temperature: u8) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_pwm_clock(mut self, pwm_clock: u8) -> Self {
        self.pwm_clock = pwm_clock;
        self
    }

    pub fn with_slew_rate(mut self, slew_rate: u8) -> Self {
        self.slew_rate = slew_rate;
        self
    }

    pub fn with_max_leds(mut self, max_leds: usize) -> Self {
        self.max_leds = max_leds;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Checks the settings against the chip's limits.
    ///
    /// Every LED must sit on a configured chip and use offsets below
    /// `max_leds`; nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if CHIPS == 0 {
            return Err(ConfigError::NoChips);
        }
        if let Some(chip) = self.chips.iter().find(|chip| chip.address > 0x7f) {
            return Err(ConfigError::AddressOutOfRange(chip.address));
        }
        for (position, chip) in self.chips.iter().enumerate() {
            if self.chips[..position].iter().any(|other| other.address == chip.address) {
                return Err(ConfigError::DuplicateAddress(chip.address));
            }
        }
        if self.max_leds == 0 || self.max_leds > MAX_LEDS {
            return Err(ConfigError::MaxLedsOutOfRange(self.max_leds));
        }

        for (led, descriptor) in self.leds.iter().enumerate() {
            if descriptor.chip() >= CHIPS {
                return Err(ConfigError::ChipOutOfRange { led });
            }
            let offset = descriptor.max_offset();
            if offset as usize >= self.max_leds {
                return Err(ConfigError::OffsetOutOfRange { led, offset });
            }
        }

        if let Some(table) = self.manual_scaling {
            if table.len() != self.leds.len() {
                return Err(ConfigError::ScalingTableLength {
                    expected: self.leds.len(),
                    found: table.len(),
                });
            }
        }

        Ok(())
    }

    /// Index of the chip answering at `address`.
    pub fn chip_index(&self, address: SevenBitAddress) -> Option<usize> {
        self.chips.iter().position(|chip| chip.address == address)
    }
}
