pub mod clock {
    use crate::config::ClockConfig;
    use chrono::prelude::*;
    use chrono::MappedLocalTime;
    use dsrtc::{CalendarTime, Chip, DateTimeAccess, Ds13xx, ValidityState, DEFAULT_TIME};
    use log::warn;

    /// Wall clock backed by one DS3231 or DS1307.
    ///
    /// Not synchronized. Share it between threads behind a single mutex so
    /// that validity, reads and writes stay consistent.
    pub struct Clock<I2C, IC> {
        rtc: Ds13xx<I2C, IC>,
        config: ClockConfig,
    }

    impl<I2C, IC> Clock<I2C, IC>
    where
        I2C: embedded_hal::i2c::I2c,
        IC: Chip,
    {
        // Constructor for Clock
        pub fn new(rtc: Ds13xx<I2C, IC>, config: ClockConfig) -> Clock<I2C, IC> {
            Clock { rtc, config }
        }

        /// Probe the RTC. Call once before reading or setting the time.
        pub fn start(&mut self) -> ValidityState {
            let configured = self.config.get_chip().name();
            if configured != IC::NAME {
                warn!(
                    "Configured chip {} does not match driver for {}",
                    configured,
                    IC::NAME
                );
            }
            self.rtc.initialize()
        }

        /// Whether the RTC holds a time that can be trusted
        pub fn is_trustworthy(&self) -> bool {
            self.rtc.state() == ValidityState::Ok
        }

        /// Method to get the raw calendar fields
        ///
        /// One bus read, so the fields form a consistent snapshot.
        pub fn get_calendar_time(&mut self) -> CalendarTime {
            self.rtc.read()
        }

        /// Method for returning the current date and time
        ///
        /// Falls back to the default date if the chip holds an impossible one.
        pub fn get_date_time(&mut self) -> NaiveDateTime {
            match self.rtc.read().to_naive_datetime() {
                Some(datetime) => datetime,
                None => {
                    warn!("RTC holds an impossible date, using default time");
                    DEFAULT_TIME.to_naive_datetime().unwrap_or_default()
                }
            }
        }

        /// Method for setting the date and time
        pub fn set_date_time(&mut self, date_time: &NaiveDateTime) -> anyhow::Result<()> {
            self.rtc
                .set_datetime(date_time)
                .map_err(|e| anyhow::anyhow!("Failed to set RTC time to {}: {:?}", date_time, e))
        }

        /// Method to get the hours
        ///
        /// Each getter below reads the chip on its own. Calling several in a
        /// row can mix fields from different seconds; use
        /// [`get_calendar_time`](Clock::get_calendar_time) for a snapshot.
        pub fn get_hour(&mut self) -> u8 {
            self.rtc.read().hours
        }

        /// Method to get the minutes
        pub fn get_minutes(&mut self) -> u8 {
            self.rtc.read().minutes
        }

        /// Method to get the seconds
        pub fn get_seconds(&mut self) -> u8 {
            self.rtc.read().seconds
        }

        /// Method to get the day of the month
        pub fn get_day(&mut self) -> u8 {
            self.rtc.read().day
        }

        /// Method to get the month, 1-12
        pub fn get_month(&mut self) -> u8 {
            self.rtc.read().month.wrapping_add(1)
        }

        /// Method to get the full year
        pub fn get_year(&mut self) -> u16 {
            self.rtc.read().year + 1900
        }

        ///Returns a unix timestamp based on the current date time provided
        pub fn datetime_to_unix_timestamp(&mut self) -> anyhow::Result<i64> {
            let offset_hours = self.config.get_timezone_offset();
            let offset = FixedOffset::east_opt(offset_hours * 3600)
                .ok_or_else(|| anyhow::anyhow!("Invalid timezone offset {}", offset_hours))?;
            let current_time: MappedLocalTime<DateTime<FixedOffset>> =
                self.get_date_time().and_local_timezone(offset);
            let current_time = current_time
                .single()
                .ok_or_else(|| anyhow::anyhow!("Ambiguous local time"))?;
            Ok(current_time.timestamp())
        }

        /// Release the driver
        pub fn release(self) -> Ds13xx<I2C, IC> {
            self.rtc
        }
    }

}

pub mod config;

pub use clock::Clock;
pub use config::ClockConfig;
