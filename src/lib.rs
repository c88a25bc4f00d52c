//! Driver for the DS3231 and DS1307 real-time clocks.
//!
//! Both chips share the same 7-byte packed-decimal time block starting at
//! the seconds register. The driver tracks whether the chip was found and
//! whether its contents can be trusted, and falls back to a fixed date
//! (2011-01-01 00:00:00) whenever they cannot.
//!
//! ```no_run
//! # fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) {
//! use dsrtc::{Ds13xx, ValidityState};
//!
//! let mut rtc = Ds13xx::new_ds3231(i2c);
//! if rtc.initialize() == ValidityState::Ok {
//!     let now = rtc.read();
//!     let _ = now.hours;
//! }
//! # }
//! ```
#![deny(unsafe_code)]
#![no_std]

use core::marker::PhantomData;

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error
    Comm,
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// The chip is missing, its oscillator was stopped, or the registers
    /// do not hold a real calendar date.
    InvalidDeviceState,
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const DS1307_CONTROL: u8 = 0x07;
    const DS3231_CONTROL: u8 = 0x0E;
    const DS3231_STATUS: u8 = 0x0F;
}

struct BitFlags;

impl BitFlags {
    const CENTURY: u8 = 0b1000_0000;
    /// OSF in the DS3231 status register, CH in the DS1307 seconds register.
    const OSC_STOP: u8 = 0b1000_0000;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;

/// Control register value written after every time update: oscillator
/// running on battery, no square-wave or interrupt output.
const CONTROL_SAFE_VALUE: u8 = 0;
const STATUS_CLEAR_VALUE: u8 = 0;

/// IC markers
pub mod ic {
    /// DS3231 IC marker
    #[derive(Debug)]
    pub struct DS3231;
    /// DS1307 IC marker
    #[derive(Debug)]
    pub struct DS1307;
}

/// Register layout differences between the supported chips.
///
/// Implemented only for the markers in [`ic`].
pub trait Chip: private::Sealed {
    /// Family name used in the initialization log line.
    const NAME: &'static str;
    /// Register whose top bit reports a stopped oscillator.
    const PROBE_REGISTER: u8;
    /// Control register reset after every time update.
    const CONTROL_REGISTER: u8;
    /// Status register cleared after every time update, if the chip has one.
    const STATUS_REGISTER: Option<u8>;
}

/// DS3231 and DS1307 RTC driver
#[derive(Debug)]
pub struct Ds13xx<I2C, IC> {
    i2c: I2C,
    state: ValidityState,
    _ic: PhantomData<IC>,
}

pub mod codec;
pub use crate::codec::{CalendarTime, RegisterBlock, DEFAULT_TIME};
mod datetime;
mod device;
mod ds1307;
mod ds3231;
mod interface;
mod state;
pub use crate::state::ValidityState;

mod private {
    use super::ic;
    pub trait Sealed {}

    impl Sealed for ic::DS3231 {}
    impl Sealed for ic::DS1307 {}
}
