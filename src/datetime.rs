//! chrono bridge

use crate::{
    codec::CalendarTime, Chip, DateTimeAccess, Datelike, Ds13xx, Error, NaiveDate, NaiveDateTime,
    Timelike,
};

const EPOCH_YEAR: i32 = 1900;

impl CalendarTime {
    /// Convert to a chrono date and time.
    ///
    /// Returns `None` when the fields do not form a real date, for example
    /// February 30th.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            EPOCH_YEAR + i32::from(self.year),
            u32::from(self.month) + 1,
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hours),
            u32::from(self.minutes),
            u32::from(self.seconds),
        )
    }
}

impl TryFrom<&NaiveDateTime> for CalendarTime {
    type Error = Error;

    /// Fails for years before 1900 or after 67435. Whether the chip can hold
    /// the year is checked when writing.
    fn try_from(datetime: &NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(datetime.year() - EPOCH_YEAR)
            .map_err(|_| Error::InvalidInputData)?;
        Ok(CalendarTime {
            seconds: datetime.second() as u8,
            minutes: datetime.minute() as u8,
            hours: datetime.hour() as u8,
            day: datetime.day() as u8,
            month: datetime.month0() as u8,
            year,
            weekday: datetime.weekday().num_days_from_monday() as u8,
        })
    }
}

impl<I2C, IC> DateTimeAccess for Ds13xx<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: Chip,
{
    type Error = Error;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        self.try_read()?
            .to_naive_datetime()
            .ok_or(Error::InvalidDeviceState)
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        let time = CalendarTime::try_from(datetime)?;
        self.write(&time)
    }
}
