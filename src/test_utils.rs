use crate::config::MAX_LEDS;
use crate::device::{BusFault, RawDevice};

use embedded_hal::i2c::{
    Error, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress,
};
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeI2cError {
    Error,
    Nack,
}

impl Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        match self {
            FakeI2cError::Error => ErrorKind::Other,
            FakeI2cError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
        }
    }
}

/// Records raw I2C traffic for the adapter tests.
pub struct FakeI2cBus<const N: usize, const M: usize> {
    pub write_data: Vec<u8, N>,
    pub read_data: Vec<u8, M>,
    pub addresses: Vec<u8, N>,
    failing: bool,
}

impl<const N: usize, const M: usize> ErrorType for FakeI2cBus<N, M> {
    type Error = FakeI2cError;
}

impl<const N: usize, const M: usize> FakeI2cBus<N, M> {
    pub fn new() -> Self {
        Self {
            write_data: Vec::new(),
            read_data: Vec::new(),
            addresses: Vec::new(),
            failing: false,
        }
    }

    pub fn new_with_read_data(read_data: &[u8]) -> Self {
        Self {
            read_data: Vec::from_slice(read_data).unwrap(),
            ..Self::new()
        }
    }

    pub fn new_failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn write_data_as_ref(&self) -> &[u8] {
        self.write_data.as_slice()
    }

    pub fn addresses_as_ref(&self) -> &[u8] {
        self.addresses.as_slice()
    }
}

impl<const N: usize, const M: usize> I2c for FakeI2cBus<N, M> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.failing {
            return Err(FakeI2cError::Nack);
        }
        self.addresses
            .push(address)
            .map_err(|_| FakeI2cError::Error)?;
        for operation in operations {
            match operation {
                Operation::Write(write) => {
                    self.write_data
                        .extend_from_slice(write)
                        .map_err(|_| FakeI2cError::Error)?;
                }
                Operation::Read(read) => {
                    for byte in read.iter_mut() {
                        *byte = if self.read_data.is_empty() {
                            0
                        } else {
                            self.read_data.remove(0)
                        };
                    }
                }
            }
        }
        Ok(())
    }
}

/// One register write as seen by [`FakeDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub address: u8,
    pub register: u8,
    pub data: Vec<u8, MAX_LEDS>,
}

impl Transfer {
    pub fn new(address: u8, register: u8, data: &[u8]) -> Self {
        Self {
            address,
            register,
            data: Vec::from_slice(data).unwrap(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Timeout,
    Nack,
}

/// Records register writes, and can fail the write at a given position.
pub struct FakeDevice<const N: usize> {
    pub transfers: Vec<Transfer, N>,
    pub read_data: Vec<u8, 8>,
    pub timeouts: Vec<u32, N>,
    fail_at: Option<(usize, Fault)>,
}

impl<const N: usize> FakeDevice<N> {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            read_data: Vec::new(),
            timeouts: Vec::new(),
            fail_at: None,
        }
    }

    pub fn new_with_read_data(read_data: &[u8]) -> Self {
        Self {
            read_data: Vec::from_slice(read_data).unwrap(),
            ..Self::new()
        }
    }

    /// Fails the write with zero-based position `index`, after recording it.
    pub fn failing_at(index: usize, fault: Fault) -> Self {
        Self {
            fail_at: Some((index, fault)),
            ..Self::new()
        }
    }

    pub fn fail_at(&mut self, index: Option<(usize, Fault)>) {
        self.fail_at = index;
    }

    pub fn transfers_as_ref(&self) -> &[Transfer] {
        self.transfers.as_slice()
    }

    pub fn clear(&mut self) {
        self.transfers.clear();
        self.timeouts.clear();
    }

    /// Target register of every recorded write, in order.
    pub fn registers(&self) -> Vec<u8, N> {
        self.transfers.iter().map(|transfer| transfer.register).collect()
    }
}

impl<const N: usize> RawDevice for FakeDevice<N> {
    type Error = FakeI2cError;

    fn write(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        let position = self.transfers.len();
        let transfer = Vec::from_slice(data)
            .map(|data| Transfer {
                address,
                register,
                data,
            })
            .map_err(|_| BusFault::Transport(FakeI2cError::Error))?;
        self.transfers
            .push(transfer)
            .map_err(|_| BusFault::Transport(FakeI2cError::Error))?;
        self.timeouts
            .push(timeout_ms)
            .map_err(|_| BusFault::Transport(FakeI2cError::Error))?;

        match self.fail_at {
            Some((index, Fault::Timeout)) if index == position => Err(BusFault::Timeout),
            Some((index, Fault::Nack)) if index == position => {
                Err(BusFault::Transport(FakeI2cError::Nack))
            }
            _ => Ok(()),
        }
    }

    fn read(
        &mut self,
        _address: SevenBitAddress,
        _register: u8,
        data: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), BusFault<Self::Error>> {
        for byte in data.iter_mut() {
            *byte = if self.read_data.is_empty() {
                0
            } else {
                self.read_data.remove(0)
            };
        }
        Ok(())
    }
}
