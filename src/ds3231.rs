//! Functions exclusive of DS3231

use crate::{ic, Chip, Ds13xx, Register, ValidityState};
use core::marker::PhantomData;

impl Chip for ic::DS3231 {
    const NAME: &'static str = "DS3231";
    const PROBE_REGISTER: u8 = Register::DS3231_STATUS;
    const CONTROL_REGISTER: u8 = Register::DS3231_CONTROL;
    const STATUS_REGISTER: Option<u8> = Some(Register::DS3231_STATUS);
}

impl<I2C> Ds13xx<I2C, ic::DS3231>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS3231 device.
    ///
    /// The state stays [`ValidityState::NotFound`] until
    /// [`initialize`](Ds13xx::initialize) is called.
    pub fn new_ds3231(i2c: I2C) -> Self {
        Ds13xx {
            i2c,
            state: ValidityState::NotFound,
            _ic: PhantomData,
        }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy_ds3231(self) -> I2C {
        self.i2c
    }
}
