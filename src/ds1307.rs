//! Functions exclusive of DS1307
//!
//! The DS1307 has no status register: its clock-halt flag is the top bit of
//! the seconds register, which writing the time clears.

use crate::{ic, Chip, Ds13xx, Register, ValidityState};
use core::marker::PhantomData;

impl Chip for ic::DS1307 {
    const NAME: &'static str = "DS1307";
    const PROBE_REGISTER: u8 = Register::SECONDS;
    const CONTROL_REGISTER: u8 = Register::DS1307_CONTROL;
    const STATUS_REGISTER: Option<u8> = None;
}

impl<I2C> Ds13xx<I2C, ic::DS1307>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS1307 device.
    pub fn new_ds1307(i2c: I2C) -> Self {
        Ds13xx {
            i2c,
            state: ValidityState::NotFound,
            _ic: PhantomData,
        }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy_ds1307(self) -> I2C {
        self.i2c
    }
}
