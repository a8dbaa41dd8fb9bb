use embedded_hal::i2c::SevenBitAddress;

/// Why a single bus transaction did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault<E> {
    /// The transaction did not finish within its timeout.
    Timeout,
    /// The transport reported an error, a missing acknowledge included.
    Transport(E),
}

/// Register level access to the devices on a bus.
///
/// Every call is one bus transaction that must finish within `timeout_ms`
/// milliseconds or fail with [`BusFault::Timeout`]. Implementations never
/// retry on their own.
pub trait RawDevice {
    type Error: embedded_hal::i2c::Error;

    /// Writes `data` to consecutive registers of the device at `address`,
    /// starting at `register`.
    fn write(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>>;

    fn read(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>>;

    fn write_register(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        value: u8,
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        self.write(address, register, &[value], timeout_ms)?;

        Ok(())
    }

    fn read_register(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        timeout_ms: u32,
    ) -> Result<u8, BusFault<Self::Error>> {
        let mut buffer = [0; 1];

        self.read(address, register, &mut buffer, timeout_ms)?;

        Ok(buffer[0])
    }
}

impl<T> RawDevice for &mut T
where
    T: RawDevice,
{
    type Error = T::Error;

    fn write(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        T::write(self, address, register, data, timeout_ms)
    }

    fn read(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        T::read(self, address, register, data, timeout_ms)
    }
}
