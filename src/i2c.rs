use crate::aw20xxx::Aw20xxx;
use crate::config::MAX_LEDS;
use crate::device::{BusFault, RawDevice};
use crate::led::LedLayout;
use crate::settings::Settings;
use crate::Aw20xxxError;

use embedded_hal::i2c::{Error, ErrorKind, I2c, SevenBitAddress};
use heapless::Vec;

/// Largest frame the adapter sends: the start register plus one full bank.
pub const FRAME_CAPACITY: usize = MAX_LEDS + 1;

impl<'a, BUS: I2c, L: LedLayout, const CHIPS: usize> Aw20xxx<'a, I2cAdapter<BUS>, L, CHIPS> {
    /// Create a new AW20xxx driver on top of an `embedded-hal` I2C bus
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus shared by every configured chip
    /// * `settings` - Chip addresses, function register values and the LED table
    ///
    /// # Returns
    /// A new driver, or `Aw20xxxError::Configuration` if the settings are invalid
    pub fn new_with_i2c_bus(
        i2c: BUS,
        settings: Settings<'a, L, CHIPS>,
    ) -> Result<Self, Aw20xxxError> {
        Self::new(I2cAdapter::new(i2c), settings)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cAdapterError<E> {
    Bus(E),
    /// The frame did not fit in [`FRAME_CAPACITY`] bytes.
    FrameOverflow,
}

impl<E: Error> Error for I2cAdapterError<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            I2cAdapterError::Bus(error) => error.kind(),
            I2cAdapterError::FrameOverflow => ErrorKind::Other,
        }
    }
}

/// [`RawDevice`] over a blocking `embedded-hal` I2C bus.
///
/// `embedded-hal` has no per-call timeout, so `timeout_ms` is not enforced
/// here: the bus implementation's own timeout bounds each transaction and
/// surfaces as one of its error kinds.
pub struct I2cAdapter<BUS: I2c> {
    i2c: BUS,
}

impl<BUS: I2c> I2cAdapter<BUS> {
    pub fn new(i2c: BUS) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> BUS {
        self.i2c
    }
}

impl<BUS: I2c> RawDevice for I2cAdapter<BUS> {
    type Error = I2cAdapterError<BUS::Error>;

    fn write(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        let mut frame: Vec<u8, FRAME_CAPACITY> = Vec::new();
        frame
            .push(register)
            .map_err(|_| BusFault::Transport(I2cAdapterError::FrameOverflow))?;
        frame
            .extend_from_slice(data)
            .map_err(|_| BusFault::Transport(I2cAdapterError::FrameOverflow))?;

        self.i2c
            .write(address, frame.as_slice())
            .map_err(|e| BusFault::Transport(I2cAdapterError::Bus(e)))?;

        Ok(())
    }

    fn read(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        self.i2c
            .write_read(address, &[register], data)
            .map_err(|e| BusFault::Transport(I2cAdapterError::Bus(e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn write_test() {
        let mut bus = FakeI2cBus::<32, 8>::new();
        let mut adapter = I2cAdapter::new(&mut bus);

        adapter.write(0x20, 0x12, &[0xaa, 0xbb, 0xcc], 100).unwrap();
        adapter.write_register(0x20, 0xfe, 0xc5, 100).unwrap();

        assert_eq!(
            bus.write_data_as_ref(),
            &[0x12, 0xaa, 0xbb, 0xcc, 0xfe, 0xc5]
        );
        assert_eq!(bus.addresses_as_ref(), &[0x20, 0x20]);
    }

    #[test]
    fn read_test() {
        let mut bus = FakeI2cBus::<32, 8>::new_with_read_data(&[0x18]);
        let mut adapter = I2cAdapter::new(&mut bus);

        assert_eq!(adapter.read_register(0x20, 0xfc, 100), Ok(0x18));
        assert_eq!(bus.write_data_as_ref(), &[0xfc]);
    }

    #[test]
    fn frame_overflow_test() {
        let mut bus = FakeI2cBus::<512, 8>::new();
        let mut adapter = I2cAdapter::new(&mut bus);

        let data = [0; FRAME_CAPACITY];
        assert_eq!(
            adapter.write(0x20, 0x00, &data, 100),
            Err(BusFault::Transport(I2cAdapterError::FrameOverflow))
        );
        assert!(bus.write_data_as_ref().is_empty());
    }

    #[test]
    fn bus_error_test() {
        let mut bus = FakeI2cBus::<32, 8>::new_failing();
        let mut adapter = I2cAdapter::new(&mut bus);

        let error = adapter.write_register(0x20, 0x00, 0x01, 100).unwrap_err();
        assert_eq!(error, BusFault::Transport(I2cAdapterError::Bus(FakeI2cError::Nack)));
        match error {
            BusFault::Transport(error) => assert_eq!(
                error.kind(),
                ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)
            ),
            BusFault::Timeout => unreachable!(),
        }
    }
}
