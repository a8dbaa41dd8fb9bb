//! Bus transactions of the AW20xxx register protocol.
//!
//! These functions know nothing about the driver's mirrored state; the
//! driver wraps them to keep its view of the selected page current.

use crate::config::{COMMAND_REGISTER, COMMAND_WRITE_LOCK_REGISTER, COMMAND_WRITE_UNLOCK, PAGE_SIZE};
use crate::device::RawDevice;
use crate::{Aw20xxxError, ConfigError};

use embedded_hal::i2c::SevenBitAddress;

/// Writes `value` to `register` in one transaction.
pub fn write_single_register<D: RawDevice>(
    device: &mut D,
    address: SevenBitAddress,
    register: u8,
    value: u8,
    timeout_ms: u32,
) -> Result<(), Aw20xxxError> {
    device.write_register(address, register, value, timeout_ms)?;
    Ok(())
}

/// Unlocks the command register and selects `page`.
pub fn unlock_registers<D: RawDevice>(
    device: &mut D,
    address: SevenBitAddress,
    page: u8,
    timeout_ms: u32,
) -> Result<(), Aw20xxxError> {
    write_single_register(
        device,
        address,
        COMMAND_WRITE_LOCK_REGISTER,
        COMMAND_WRITE_UNLOCK,
        timeout_ms,
    )?;
    write_single_register(device, address, COMMAND_REGISTER, page, timeout_ms)
}

/// Writes `source` to consecutive registers starting at `start_register`,
/// at most `transfer_size` bytes per transaction.
///
/// The page must already be selected. The first failing chunk ends the
/// call; the chunks before it have reached the chip.
pub fn write_multi_registers<D: RawDevice>(
    device: &mut D,
    address: SevenBitAddress,
    source: &[u8],
    transfer_size: usize,
    start_register: u8,
    timeout_ms: u32,
) -> Result<(), Aw20xxxError> {
    if transfer_size == 0 {
        return Err(ConfigError::ZeroTransferSize.into());
    }
    if start_register as usize + source.len() > PAGE_SIZE {
        return Err(ConfigError::RangeOutsidePage {
            offset: start_register as usize,
            len: source.len(),
        }
        .into());
    }

    for (index, chunk) in source.chunks(transfer_size).enumerate() {
        let register = (start_register as usize + index * transfer_size) as u8;
        device.write(address, register, chunk, timeout_ms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

    #[test]
    fn unlock_test() {
        let mut device = FakeDevice::<8>::new();

        unlock_registers(&mut device, 0x20, 0xc1, 100).unwrap();

        assert_eq!(
            device.transfers_as_ref(),
            &[
                Transfer::new(0x20, 0xfe, &[0xc5]),
                Transfer::new(0x20, 0xfd, &[0xc1]),
            ]
        );
        assert_eq!(device.timeouts.as_slice(), &[100, 100]);
    }

    #[test]
    fn unlock_stops_on_failure_test() {
        let mut device = FakeDevice::<8>::failing_at(0, Fault::Timeout);

        assert_eq!(
            unlock_registers(&mut device, 0x20, 0xc1, 100),
            Err(Aw20xxxError::BusTimeout)
        );
        assert_eq!(device.transfers_as_ref().len(), 1);
    }

    #[test]
    fn single_register_nack_test() {
        let mut device = FakeDevice::<8>::failing_at(0, Fault::Nack);

        assert_eq!(
            write_single_register(&mut device, 0x20, 0x01, 0xff, 100),
            Err(Aw20xxxError::Bus(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address
            )))
        );
    }

    #[test]
    fn chunk_count_test() {
        for (size, transfer_size) in [(198, 18), (198, 64), (10, 3), (1, 18), (18, 18), (19, 18)] {
            let mut device = FakeDevice::<128>::new();
            let source = [0x5a; 198];

            write_multi_registers(&mut device, 0x20, &source[..size], transfer_size, 0x00, 100)
                .unwrap();

            let transfers = device.transfers_as_ref();
            assert_eq!(transfers.len(), size.div_ceil(transfer_size));

            let mut covered = 0;
            for transfer in transfers {
                assert!(transfer.data.len() <= transfer_size);
                assert_eq!(transfer.register as usize, covered);
                covered += transfer.data.len();
            }
            assert_eq!(covered, size);
        }
    }

    #[test]
    fn full_bank_chunks_test() {
        let mut device = FakeDevice::<16>::new();
        let mut source = [0; 198];
        for (index, value) in source.iter_mut().enumerate() {
            *value = index as u8;
        }

        write_multi_registers(&mut device, 0x21, &source, 18, 0x00, 100).unwrap();

        let transfers = device.transfers_as_ref();
        assert_eq!(transfers.len(), 11);
        for (index, transfer) in transfers.iter().enumerate() {
            assert_eq!(transfer.address, 0x21);
            assert_eq!(transfer.register as usize, index * 18);
            assert_eq!(transfer.data.as_slice(), &source[index * 18..(index + 1) * 18]);
        }
    }

    #[test]
    fn start_register_offset_test() {
        let mut device = FakeDevice::<8>::new();

        write_multi_registers(&mut device, 0x20, &[1, 2, 3, 4, 5], 2, 0x40, 100).unwrap();

        assert_eq!(
            device.transfers_as_ref(),
            &[
                Transfer::new(0x20, 0x40, &[1, 2]),
                Transfer::new(0x20, 0x42, &[3, 4]),
                Transfer::new(0x20, 0x44, &[5]),
            ]
        );
    }

    #[test]
    fn failing_chunk_aborts_test() {
        // 11 chunks, the 4th fails
        let mut device = FakeDevice::<16>::failing_at(3, Fault::Nack);
        let source = [0xff; 198];

        let result = write_multi_registers(&mut device, 0x20, &source, 18, 0x00, 100);

        assert!(matches!(result, Err(Aw20xxxError::Bus(_))));
        assert_eq!(device.transfers_as_ref().len(), 4);
        assert_eq!(device.registers().as_slice(), &[0, 18, 36, 54]);
    }

    #[test]
    fn rejects_bad_arguments_test() {
        let mut device = FakeDevice::<8>::new();

        assert_eq!(
            write_multi_registers(&mut device, 0x20, &[0; 4], 0, 0x00, 100),
            Err(Aw20xxxError::Configuration(ConfigError::ZeroTransferSize))
        );
        assert_eq!(
            write_multi_registers(&mut device, 0x20, &[0; 4], 2, 0xfe, 100),
            Err(Aw20xxxError::Configuration(ConfigError::RangeOutsidePage {
                offset: 0xfe,
                len: 4
            }))
        );
        assert!(device.transfers_as_ref().is_empty());

        write_multi_registers(&mut device, 0x20, &[0; 2], 2, 0xfe, 100).unwrap();
        write_multi_registers(&mut device, 0x20, &[], 2, 0x00, 100).unwrap();
        assert_eq!(device.transfers_as_ref().len(), 1);
    }
}
