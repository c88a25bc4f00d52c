//! Register access over I²C

use crate::{Ds13xx, Error, DEVICE_ADDRESS};

/// Time block plus the start register.
const MAX_WRITE_LEN: usize = 8;

impl<I2C, IC> Ds13xx<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut data = [0];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], &mut data)
            .map_err(|_| Error::Comm)?;
        Ok(data[0])
    }

    pub(crate) fn read_registers(&mut self, start: u8, data: &mut [u8]) -> Result<(), Error> {
        self.i2c
            .write_read(DEVICE_ADDRESS, &[start], data)
            .map_err(|_| Error::Comm)
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error> {
        let payload: [u8; 2] = [register, data];
        self.i2c
            .write(DEVICE_ADDRESS, &payload)
            .map_err(|_| Error::Comm)
    }

    pub(crate) fn write_registers(&mut self, start: u8, data: &[u8]) -> Result<(), Error> {
        if data.len() >= MAX_WRITE_LEN {
            return Err(Error::InvalidInputData);
        }
        let mut payload = [0; MAX_WRITE_LEN];
        payload[0] = start;
        payload[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(DEVICE_ADDRESS, &payload[..=data.len()])
            .map_err(|_| Error::Comm)
    }
}
