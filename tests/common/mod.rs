#![allow(dead_code)]

use dsrtc::{ic, Ds13xx};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub type Ds3231 = Ds13xx<I2cMock, ic::DS3231>;
pub type Ds1307 = Ds13xx<I2cMock, ic::DS1307>;

pub const DEVICE_ADDRESS: u8 = 0b110_1000;

pub struct Register;

impl Register {
    pub const SECONDS: u8 = 0x00;
    pub const DS1307_CONTROL: u8 = 0x07;
    pub const DS3231_CONTROL: u8 = 0x0E;
    pub const DS3231_STATUS: u8 = 0x0F;
}

pub const OSC_STOP: u8 = 0b1000_0000;

/// 2024-02-29 13:45:30, Thursday
pub const LEAP_DAY_BLOCK: [u8; 7] = [0x30, 0x45, 0x13, 0x04, 0x29, 0x02, 0x24];

pub fn new_ds3231(transactions: &[I2cTrans]) -> Ds3231 {
    Ds13xx::new_ds3231(I2cMock::new(transactions))
}

pub fn new_ds1307(transactions: &[I2cTrans]) -> Ds1307 {
    Ds13xx::new_ds1307(I2cMock::new(transactions))
}

pub fn destroy_ds3231(dev: Ds3231) {
    dev.destroy_ds3231().done();
}

pub fn destroy_ds1307(dev: Ds1307) {
    dev.destroy_ds1307().done();
}

pub fn probe(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEVICE_ADDRESS, vec![register], vec![value])
}

pub fn failed_probe(register: u8) -> I2cTrans {
    probe(register, 0).with_error(embedded_hal::i2c::ErrorKind::Other)
}

pub fn read_block(block: [u8; 7]) -> I2cTrans {
    I2cTrans::write_read(DEVICE_ADDRESS, vec![Register::SECONDS], block.to_vec())
}

pub fn failed_read_block() -> I2cTrans {
    read_block([0; 7]).with_error(embedded_hal::i2c::ErrorKind::Other)
}

pub fn write_block(block: [u8; 7]) -> I2cTrans {
    let mut payload = vec![Register::SECONDS];
    payload.extend_from_slice(&block);
    I2cTrans::write(DEVICE_ADDRESS, payload)
}

pub fn write_register(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEVICE_ADDRESS, vec![register, value])
}
