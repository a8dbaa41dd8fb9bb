use crate::config::{Bank, MAX_LEDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipStatus {
    Uninitialized,
    Ready,
}

/// What the driver believes about one chip.
pub struct ChipState {
    pub status: ChipStatus,
    /// Page selected by the last successful unlock sequence. `None` once a
    /// reset or a failed transaction makes the chip's page unknown.
    pub page: Option<u8>,
    pub chip_id: Option<u8>,
    pub pwm: [u8; MAX_LEDS],
    pub scaling: [u8; MAX_LEDS],
    pub pwm_dirty: bool,
    pub scaling_dirty: bool,
}

impl Default for ChipState {
    // Nothing is known about a chip before it has been initialized
    fn default() -> Self {
        Self {
            status: ChipStatus::Uninitialized,
            page: None,
            chip_id: None,
            pwm: [0; MAX_LEDS],
            scaling: [0; MAX_LEDS],
            pwm_dirty: false,
            scaling_dirty: false,
        }
    }
}

impl ChipState {
    pub fn buffer(&self, bank: Bank) -> &[u8; MAX_LEDS] {
        match bank {
            Bank::Pwm => &self.pwm,
            Bank::Scaling => &self.scaling,
        }
    }

    pub fn is_dirty(&self, bank: Bank) -> bool {
        match bank {
            Bank::Pwm => self.pwm_dirty,
            Bank::Scaling => self.scaling_dirty,
        }
    }

    pub fn set_dirty(&mut self, bank: Bank, dirty: bool) {
        match bank {
            Bank::Pwm => self.pwm_dirty = dirty,
            Bank::Scaling => self.scaling_dirty = dirty,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == ChipStatus::Ready
    }
}
