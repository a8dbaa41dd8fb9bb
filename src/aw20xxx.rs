use crate::config::*;
use crate::device::RawDevice;
use crate::led::{LedLayout, Rgb, RgbLed, SingleLed};
use crate::protocol;
use crate::settings::Settings;
use crate::state::{ChipState, ChipStatus};
use crate::Aw20xxxError;

use embedded_hal::i2c::SevenBitAddress;

/// Driver for one or more AW20xxx chips sharing a bus.
///
/// Chips are referred to by their position in [`Settings::chips`], LEDs by
/// their position in [`Settings::leds`].
pub struct Aw20xxx<'a, DEV, L: LedLayout, const CHIPS: usize> {
    device: DEV,
    settings: Settings<'a, L, CHIPS>,
    chips: [ChipState; CHIPS],
}

impl<'a, DEV: RawDevice, L: LedLayout, const CHIPS: usize> Aw20xxx<'a, DEV, L, CHIPS> {
    /// Create a new AW20xxx driver
    /// # Arguments
    /// * `device` - The bus the chips are attached to
    /// * `settings` - Chip addresses, function register values and the LED table
    ///
    /// # Returns
    /// A new driver with every chip uninitialized, or
    /// `Aw20xxxError::Configuration` if the settings are invalid
    pub fn new(device: DEV, settings: Settings<'a, L, CHIPS>) -> Result<Self, Aw20xxxError> {
        if let Err(error) = settings.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejecting AW20xxx settings: {}", error);
            return Err(error.into());
        }

        Ok(Self {
            device,
            settings,
            chips: core::array::from_fn(|_| ChipState::default()),
        })
    }

    pub fn into_inner(self) -> DEV {
        self.device
    }

    pub fn inner(&self) -> &DEV {
        &self.device
    }

    pub fn inner_mut(&mut self) -> &mut DEV {
        &mut self.device
    }

    pub fn settings(&self) -> &Settings<'a, L, CHIPS> {
        &self.settings
    }

    pub fn status(&self, chip: usize) -> Option<ChipStatus> {
        self.chips.get(chip).map(|state| state.status)
    }

    /// Page the driver last selected on `chip`, `None` when unknown.
    pub fn assumed_page(&self, chip: usize) -> Option<u8> {
        self.chips.get(chip).and_then(|state| state.page)
    }

    /// Value of the ID register from the last [`Self::read_chip_id`].
    pub fn chip_id(&self, chip: usize) -> Option<u8> {
        self.chips.get(chip).and_then(|state| state.chip_id)
    }

    /// The channels in use of `chip`'s PWM mirror.
    pub fn pwm_buffer(&self, chip: usize) -> Option<&[u8]> {
        let max_leds = self.settings.max_leds;
        self.chips.get(chip).map(|state| &state.pwm[..max_leds])
    }

    /// The channels in use of `chip`'s scaling mirror.
    pub fn scaling_buffer(&self, chip: usize) -> Option<&[u8]> {
        let max_leds = self.settings.max_leds;
        self.chips.get(chip).map(|state| &state.scaling[..max_leds])
    }

    /// Write a single register on the chip at `address`.
    ///
    /// The register lands on whichever page the chip has selected.
    pub fn write_single_register(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        value: u8,
    ) -> Result<(), Aw20xxxError> {
        let result = protocol::write_single_register(
            &mut self.device,
            address,
            register,
            value,
            self.settings.timeout_ms,
        );
        self.forget_page_on_error(address, result)
    }

    /// Unlock the command register of the chip at `address` and select `page`.
    ///
    /// # Returns
    /// * Ok(()) if both writes went through; `page` becomes the chip's assumed page
    pub fn unlock_registers(
        &mut self,
        address: SevenBitAddress,
        page: u8,
    ) -> Result<(), Aw20xxxError> {
        let result =
            protocol::unlock_registers(&mut self.device, address, page, self.settings.timeout_ms);
        if let (Ok(()), Some(chip)) = (&result, self.settings.chip_index(address)) {
            self.chips[chip].page = Some(page);
        }
        self.forget_page_on_error(address, result)
    }

    /// Write `source` to consecutive registers of the chip at `address`, at
    /// most `transfer_size` bytes per transaction.
    ///
    /// The target page must already be selected with [`Self::unlock_registers`].
    pub fn write_multi_registers(
        &mut self,
        address: SevenBitAddress,
        source: &[u8],
        transfer_size: usize,
        start_register: u8,
    ) -> Result<(), Aw20xxxError> {
        let result = protocol::write_multi_registers(
            &mut self.device,
            address,
            source,
            transfer_size,
            start_register,
            self.settings.timeout_ms,
        );
        self.forget_page_on_error(address, result)
    }

    /// Read the ID register of `chip`.
    ///
    /// The ID register is the only value the chip reports back, which makes
    /// it the presence check for a chip.
    pub fn read_chip_id(&mut self, chip: usize) -> Result<u8, Aw20xxxError> {
        let address = self.address(chip)?;
        let id = self
            .device
            .read_register(address, ID_REGISTER, self.settings.timeout_ms)?;
        self.chips[chip].chip_id = Some(id);
        Ok(id)
    }

    /// Reset and configure `chip`, then push default buffers to it.
    ///
    /// The sequence is reset, function page setup, PWM flush and scaling
    /// flush, in that order. Any failure aborts the sequence and leaves the
    /// chip uninitialized; call this again to retry from the start.
    pub fn common_init(&mut self, chip: usize) -> Result<(), Aw20xxxError> {
        self.address(chip)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("initialising AW20xxx chip {=usize}", chip);

        self.chips[chip].status = ChipStatus::Uninitialized;
        match self.run_init(chip) {
            Ok(()) => {
                self.chips[chip].status = ChipStatus::Ready;
                #[cfg(feature = "defmt")]
                defmt::debug!("AW20xxx chip {=usize} ready", chip);
                Ok(())
            }
            Err(error) => {
                self.chips[chip].page = None;
                #[cfg(feature = "defmt")]
                defmt::warn!("AW20xxx chip {=usize} failed to initialise: {}", chip, error);
                Err(error)
            }
        }
    }

    /// Initialize every configured chip.
    ///
    /// A chip failing does not stop the others; the first error is returned.
    pub fn init_all(&mut self) -> Result<(), Aw20xxxError> {
        let mut result = Ok(());
        for chip in 0..CHIPS {
            let outcome = self.common_init(chip);
            if result.is_ok() {
                result = outcome;
            }
        }
        result
    }

    /// Push `chip`'s PWM mirror to the chip if it changed since the last push.
    pub fn update_pwm_register(&mut self, chip: usize) -> Result<(), Aw20xxxError> {
        self.update_bank(chip, Bank::Pwm)
    }

    /// Push `chip`'s scaling mirror to the chip if it changed since the last push.
    pub fn update_scaling_register(&mut self, chip: usize) -> Result<(), Aw20xxxError> {
        self.update_bank(chip, Bank::Scaling)
    }

    /// Push the PWM and scaling mirrors of every chip.
    ///
    /// Every chip is attempted; the first error is returned.
    pub fn flush(&mut self) -> Result<(), Aw20xxxError> {
        let mut result = Ok(());
        for chip in 0..CHIPS {
            for outcome in [self.update_pwm_register(chip), self.update_scaling_register(chip)] {
                if result.is_ok() {
                    result = outcome;
                }
            }
        }
        result
    }

    /// Set the PWM value of LED `index` in the mirror.
    pub fn set_value(&mut self, index: usize, value: L::Value) -> Result<(), Aw20xxxError> {
        let led = *self.settings.leds.get(index).ok_or(Aw20xxxError::InvalidIndex)?;
        let state = self.ready_chip(led.chip())?;
        led.write_value(&mut state.pwm, value);
        state.pwm_dirty = true;
        Ok(())
    }

    /// Set the PWM value of every LED in the mirror.
    pub fn set_value_all(&mut self, value: L::Value) -> Result<(), Aw20xxxError> {
        self.ensure_all_ready()?;
        for led in self.settings.leds {
            let state = self
                .chips
                .get_mut(led.chip())
                .ok_or(Aw20xxxError::InvalidIndex)?;
            led.write_value(&mut state.pwm, value);
            state.pwm_dirty = true;
        }
        Ok(())
    }

    /// Enable or disable the channels of LED `index` in the scaling mirror.
    pub fn set_scaling(&mut self, index: usize, enable: L::Enable) -> Result<(), Aw20xxxError> {
        let led = *self.settings.leds.get(index).ok_or(Aw20xxxError::InvalidIndex)?;
        let on = self.scaling_on(index);
        let state = self.ready_chip(led.chip())?;
        led.write_scaling(&mut state.scaling, on, enable);
        state.scaling_dirty = true;
        Ok(())
    }

    fn address(&self, chip: usize) -> Result<SevenBitAddress, Aw20xxxError> {
        self.settings
            .chips
            .get(chip)
            .map(|chip| chip.address)
            .ok_or(Aw20xxxError::InvalidIndex)
    }

    fn ready_chip(&mut self, chip: usize) -> Result<&mut ChipState, Aw20xxxError> {
        let state = self.chips.get_mut(chip).ok_or(Aw20xxxError::InvalidIndex)?;
        if !state.is_ready() {
            return Err(Aw20xxxError::NotReady);
        }
        Ok(state)
    }

    fn ensure_all_ready(&self) -> Result<(), Aw20xxxError> {
        if self.chips.iter().all(ChipState::is_ready) {
            Ok(())
        } else {
            Err(Aw20xxxError::NotReady)
        }
    }

    /// Scaling value of an enabled channel of LED `index`.
    fn scaling_on(&self, index: usize) -> L::Value {
        self.settings
            .manual_scaling
            .and_then(|table| table.get(index).copied())
            .unwrap_or(self.settings.scaling)
    }

    fn forget_page_on_error<T>(
        &mut self,
        address: SevenBitAddress,
        result: Result<T, Aw20xxxError>,
    ) -> Result<T, Aw20xxxError> {
        if result.is_err() {
            if let Some(chip) = self.settings.chip_index(address) {
                self.chips[chip].page = None;
            }
        }
        result
    }

    fn select_page(&mut self, chip: usize, page: u8) -> Result<(), Aw20xxxError> {
        let address = self.address(chip)?;
        let result =
            protocol::unlock_registers(&mut self.device, address, page, self.settings.timeout_ms);
        self.chips[chip].page = result.is_ok().then_some(page);
        result
    }

    fn write_function_register(
        &mut self,
        chip: usize,
        register: PagedRegister,
        value: u8,
    ) -> Result<(), Aw20xxxError> {
        let address = self.address(chip)?;
        let result = protocol::write_single_register(
            &mut self.device,
            address,
            register.register,
            value,
            self.settings.timeout_ms,
        );
        if result.is_err() {
            self.chips[chip].page = None;
        }
        result
    }

    fn run_init(&mut self, chip: usize) -> Result<(), Aw20xxxError> {
        self.select_page(chip, RESET_REGISTER.page)?;
        self.write_function_register(chip, RESET_REGISTER, RESET_MAGIC)?;
        // The reset drops the chip back to its power-on page
        self.chips[chip].page = None;

        self.select_page(chip, PAGE_FUNCTION)?;
        let ssr = self.settings.chips[chip].ssr;
        let function_registers = [
            (CONFIGURATION_REGISTER, self.settings.configuration),
            (GCC_REGISTER, self.settings.global_current),
            (PULL_DOWN_UP_REGISTER, self.settings.pull_down_up),
            (TEMPERATURE_REGISTER, self.settings.temperature),
            (SPREAD_SPECTRUM_REGISTER, ssr),
            (PWM_CLOCK_REGISTER, self.settings.pwm_clock),
            (SLEW_RATE_REGISTER, self.settings.slew_rate),
        ];
        for (register, value) in function_registers {
            self.write_function_register(chip, register, value)?;
        }

        self.reset_buffers(chip);
        self.push_bank(chip, Bank::Pwm)?;
        self.push_bank(chip, Bank::Scaling)
    }

    fn reset_buffers(&mut self, chip: usize) {
        self.chips[chip].scaling = [SCALING_ON; MAX_LEDS];
        let leds = self.settings.leds;
        for (index, led) in leds.iter().enumerate() {
            if led.chip() != chip {
                continue;
            }
            let on = self.scaling_on(index);
            led.write_value(&mut self.chips[chip].scaling, on);
        }

        let state = &mut self.chips[chip];
        state.pwm = [0; MAX_LEDS];
        state.pwm_dirty = false;
        state.scaling_dirty = false;
    }

    fn update_bank(&mut self, chip: usize, bank: Bank) -> Result<(), Aw20xxxError> {
        let state = self.chips.get(chip).ok_or(Aw20xxxError::InvalidIndex)?;
        if !state.is_ready() {
            return Err(Aw20xxxError::NotReady);
        }
        if !state.is_dirty(bank) {
            return Ok(());
        }
        self.push_bank(chip, bank)
    }

    /// Selects `bank`'s page and writes the whole mirror behind a single
    /// page select. The mirror stays dirty if the write fails.
    fn push_bank(&mut self, chip: usize, bank: Bank) -> Result<(), Aw20xxxError> {
        let max_leds = self.settings.max_leds;
        let target = locate(bank, 0, max_leds)?;
        let address = self.address(chip)?;

        self.select_page(chip, target.page)?;

        let state = &mut self.chips[chip];
        let result = protocol::write_multi_registers(
            &mut self.device,
            address,
            &state.buffer(bank)[..max_leds],
            bank.transfer_size(),
            target.register,
            self.settings.timeout_ms,
        );
        match result {
            Ok(()) => state.set_dirty(bank, false),
            Err(_error) => {
                state.page = None;
                state.set_dirty(bank, true);
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "flushing {} to AW20xxx at {=u8:#x} failed: {}",
                    bank,
                    address,
                    _error
                );
            }
        }
        result
    }
}

impl<'a, DEV: RawDevice, const CHIPS: usize> Aw20xxx<'a, DEV, RgbLed, CHIPS> {
    /// Set the color of LED `index` in the PWM mirror.
    pub fn set_color(
        &mut self,
        index: usize,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), Aw20xxxError> {
        self.set_value(index, Rgb::new(red, green, blue))
    }

    /// Set the color of every LED in the PWM mirror.
    pub fn set_color_all(&mut self, red: u8, green: u8, blue: u8) -> Result<(), Aw20xxxError> {
        self.set_value_all(Rgb::new(red, green, blue))
    }

    /// Set each channel of LED `index` to its scaling value or to off.
    pub fn set_scaling_buffer(
        &mut self,
        index: usize,
        red: bool,
        green: bool,
        blue: bool,
    ) -> Result<(), Aw20xxxError> {
        self.set_scaling(index, (red, green, blue))
    }
}

impl<'a, DEV: RawDevice, const CHIPS: usize> Aw20xxx<'a, DEV, SingleLed, CHIPS> {
    pub fn set_brightness(&mut self, index: usize, value: u8) -> Result<(), Aw20xxxError> {
        self.set_value(index, value)
    }

    pub fn set_brightness_all(&mut self, value: u8) -> Result<(), Aw20xxxError> {
        self.set_value_all(value)
    }

    pub fn set_scaling_buffer(&mut self, index: usize, enabled: bool) -> Result<(), Aw20xxxError> {
        self.set_scaling(index, enabled)
    }
}
