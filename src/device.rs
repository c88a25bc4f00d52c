//! Initialization and time access

use crate::{
    codec::{self, CalendarTime, RegisterBlock, DEFAULT_TIME},
    Chip, Ds13xx, Error, Register, ValidityState, CONTROL_SAFE_VALUE, STATUS_CLEAR_VALUE,
};
use log::{debug, info, warn};

impl<I2C, IC> Ds13xx<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: Chip,
{
    /// Probe the chip and classify it.
    ///
    /// Reads the register holding the oscillator-stopped flag once. Any
    /// earlier state is discarded.
    pub fn initialize(&mut self) -> ValidityState {
        self.state = match self.read_register(IC::PROBE_REGISTER) {
            Ok(probe) => ValidityState::from_probe(probe),
            Err(_) => ValidityState::NotFound,
        };
        match self.state {
            ValidityState::Ok => info!("{} {}", IC::NAME, self.state.as_str()),
            _ => warn!("{} {}", IC::NAME, self.state.as_str()),
        }
        self.state
    }

    /// Current validity state.
    pub fn state(&self) -> ValidityState {
        self.state
    }

    /// Read the current time.
    ///
    /// Returns [`DEFAULT_TIME`] when the chip is absent or stale, and when
    /// the transfer fails. A failed transfer does not change the state.
    pub fn read(&mut self) -> CalendarTime {
        if self.state != ValidityState::Ok {
            debug!("{} {}, using default time", IC::NAME, self.state.as_str());
            return DEFAULT_TIME;
        }
        match self.read_block() {
            Ok(block) => codec::decode(&block),
            Err(e) => {
                warn!("{} read failed: {:?}, using default time", IC::NAME, e);
                DEFAULT_TIME
            }
        }
    }

    /// Read the current time, reporting why it is unavailable.
    ///
    /// Fails with [`Error::InvalidDeviceState`] when the chip is absent or
    /// stale or a field is out of range, [`Error::Comm`] when the transfer
    /// fails and [`Error::InvalidInputData`] when a register holds a
    /// non-decimal digit. None of these change the state.
    pub fn try_read(&mut self) -> Result<CalendarTime, Error> {
        if self.state != ValidityState::Ok {
            return Err(Error::InvalidDeviceState);
        }
        let block = self.read_block()?;
        codec::try_decode(&block)
    }

    /// Set the time.
    ///
    /// Does nothing if no chip was found. Otherwise writes the time block,
    /// resets the control register so the oscillator keeps running on
    /// battery with every output off, and on the DS3231 clears the
    /// oscillator-stopped flag. The state becomes [`ValidityState::Ok`]
    /// only once all of these transfers succeed.
    pub fn write(&mut self, time: &CalendarTime) -> Result<(), Error> {
        if self.state == ValidityState::NotFound {
            debug!("{} not found, ignoring time update", IC::NAME);
            return Ok(());
        }
        let block = codec::encode(time)?;
        self.write_registers(Register::SECONDS, &block)?;
        self.write_register(IC::CONTROL_REGISTER, CONTROL_SAFE_VALUE)?;
        if let Some(status) = IC::STATUS_REGISTER {
            self.write_register(status, STATUS_CLEAR_VALUE)?;
        }
        if self.state == ValidityState::Invalid {
            info!("{} time restored", IC::NAME);
        }
        self.state = ValidityState::Ok;
        Ok(())
    }

    fn read_block(&mut self) -> Result<RegisterBlock, Error> {
        let mut block = [0; 7];
        self.read_registers(Register::SECONDS, &mut block)?;
        Ok(block)
    }
}
