//! Conversion between the chip's packed-decimal time block and
//! [`CalendarTime`].
//!
//! Register offsets from the seconds register:
//! 0 seconds, 1 minutes, 2 hours, 3 weekday, 4 day of month,
//! 5 month (bit 7 is the century flag), 6 year.

use crate::{BitFlags, Error};

/// Raw time registers as read from or written to the chip.
pub type RegisterBlock = [u8; 7];

const SECONDS: usize = 0;
const MINUTES: usize = 1;
const HOURS: usize = 2;
const DOW: usize = 3;
const DOM: usize = 4;
const MONTH: usize = 5;
const YEAR: usize = 6;

/// Year stored in the chip with the century flag clear, counted from 1900.
const BASE_YEAR: u16 = 100;
const CENTURY: u16 = 100;
/// First year after the range the century flag can represent.
const YEAR_LIMIT: u16 = BASE_YEAR + 2 * CENTURY;

/// Wall-clock time and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTime {
    /// 0..=59
    pub seconds: u8,
    /// 0..=59
    pub minutes: u8,
    /// 0..=23
    pub hours: u8,
    /// Day of month, 1..=31
    pub day: u8,
    /// Zero-based month, 0..=11
    pub month: u8,
    /// Years since 1900
    pub year: u16,
    /// Zero-based weekday, Monday is 0
    pub weekday: u8,
}

/// Returned whenever the chip is absent, stale or a transfer fails:
/// Saturday 2011-01-01 00:00:00.
pub const DEFAULT_TIME: CalendarTime = CalendarTime {
    seconds: 0,
    minutes: 0,
    hours: 0,
    day: 1,
    month: 0,
    year: 111,
    weekday: 5,
};

impl Default for CalendarTime {
    fn default() -> Self {
        DEFAULT_TIME
    }
}

impl CalendarTime {
    /// Check every field range, including the years the chip can hold
    /// (2000 to 2199).
    ///
    /// Day of month is only checked against 31, not against the month.
    pub fn is_valid(&self) -> bool {
        self.seconds <= 59
            && self.minutes <= 59
            && self.hours <= 23
            && (1..=31).contains(&self.day)
            && self.month <= 11
            && self.weekday <= 6
            && (BASE_YEAR..YEAR_LIMIT).contains(&self.year)
    }
}

/// Unpack the time block. Never fails; out-of-range digits are not checked.
pub fn decode(block: &RegisterBlock) -> CalendarTime {
    let century = if block[MONTH] & BitFlags::CENTURY != 0 {
        CENTURY
    } else {
        0
    };
    CalendarTime {
        seconds: bcd_to_decimal(block[SECONDS] & !BitFlags::OSC_STOP),
        minutes: bcd_to_decimal(block[MINUTES]),
        hours: bcd_to_decimal(block[HOURS]),
        day: bcd_to_decimal(block[DOM]),
        month: bcd_to_decimal(block[MONTH] & !BitFlags::CENTURY).wrapping_sub(1),
        year: u16::from(bcd_to_decimal(block[YEAR])) + BASE_YEAR + century,
        weekday: bcd_to_decimal(block[DOW]).wrapping_sub(1),
    }
}

/// Same as [`decode`] but strict.
///
/// Fails with [`Error::InvalidInputData`] when a byte holds a digit above 9
/// and with [`Error::InvalidDeviceState`] when a field is out of range.
pub fn try_decode(block: &RegisterBlock) -> Result<CalendarTime, Error> {
    try_bcd_to_decimal(block[SECONDS] & !BitFlags::OSC_STOP)?;
    try_bcd_to_decimal(block[MONTH] & !BitFlags::CENTURY)?;
    for index in [MINUTES, HOURS, DOW, DOM, YEAR] {
        try_bcd_to_decimal(block[index])?;
    }
    let time = decode(block);
    if !time.is_valid() {
        return Err(Error::InvalidDeviceState);
    }
    Ok(time)
}

/// Pack a time into the chip layout.
///
/// Sets the century flag for years from 2100 on. The oscillator and status
/// bits are always left clear. Fails for any time outside
/// [`CalendarTime::is_valid`], since the single century flag cannot
/// represent years before 2000 or after 2199.
pub fn encode(time: &CalendarTime) -> Result<RegisterBlock, Error> {
    if !time.is_valid() {
        return Err(Error::InvalidInputData);
    }
    let century = if time.year >= BASE_YEAR + CENTURY {
        BitFlags::CENTURY
    } else {
        0
    };
    let mut block = [0; 7];
    block[SECONDS] = decimal_to_bcd(time.seconds);
    block[MINUTES] = decimal_to_bcd(time.minutes);
    block[HOURS] = decimal_to_bcd(time.hours);
    block[DOW] = decimal_to_bcd(time.weekday + 1);
    block[DOM] = decimal_to_bcd(time.day);
    block[MONTH] = decimal_to_bcd(time.month + 1) | century;
    block[YEAR] = decimal_to_bcd((time.year % 100) as u8);
    Ok(block)
}

/// Convert a packed-decimal byte. Nibbles above 9 are not rejected.
pub fn bcd_to_decimal(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0xF)
}

/// Convert a packed-decimal byte, failing if either nibble is above 9.
pub fn try_bcd_to_decimal(bcd: u8) -> Result<u8, Error> {
    if bcd >> 4 > 9 || bcd & 0xF > 9 {
        return Err(Error::InvalidInputData);
    }
    Ok(bcd_to_decimal(bcd))
}

/// Convert a value in 0..=99 to packed decimal. Larger values wrap
/// modulo 100.
pub fn decimal_to_bcd(dec: u8) -> u8 {
    let dec = dec % 100;
    ((dec / 10) << 4) | (dec % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_BLOCK: RegisterBlock = [0x00, 0x00, 0x00, 0x06, 0x01, 0x01, 0x11];

    fn time(year: u16, month: u8, day: u8, weekday: u8) -> CalendarTime {
        CalendarTime {
            seconds: 59,
            minutes: 30,
            hours: 23,
            day,
            month,
            year,
            weekday,
        }
    }

    #[test]
    fn packed_decimal_conversion() {
        assert_eq!(bcd_to_decimal(0x59), 59);
        assert_eq!(bcd_to_decimal(0x00), 0);
        assert_eq!(decimal_to_bcd(59), 0x59);
        assert_eq!(decimal_to_bcd(7), 0x07);
        assert_eq!(try_bcd_to_decimal(0x99), Ok(99));
        assert_eq!(try_bcd_to_decimal(0x1A), Err(Error::InvalidInputData));
        assert_eq!(try_bcd_to_decimal(0xA1), Err(Error::InvalidInputData));
    }

    #[test]
    fn decodes_default_pattern() {
        assert_eq!(decode(&DEFAULT_BLOCK), DEFAULT_TIME);
        assert_eq!(encode(&DEFAULT_TIME), Ok(DEFAULT_BLOCK));
    }

    #[test]
    fn decode_masks_halt_and_century_flags() {
        let block = [0x80 | 0x45, 0x12, 0x07, 0x03, 0x28, 0x80 | 0x02, 0x24];
        let decoded = decode(&block);
        assert_eq!(decoded.seconds, 45);
        assert_eq!(decoded.month, 1);
        assert_eq!(decoded.year, 224);
        assert_eq!(decoded.weekday, 2);
        assert_eq!(decoded.day, 28);
    }

    #[test]
    fn decode_is_total() {
        let decoded = decode(&[0xFF; 7]);
        assert_eq!(decoded.seconds, bcd_to_decimal(0x7F));
        assert_eq!(decode(&[0; 7]).month, u8::MAX);
        assert_eq!(try_decode(&[0xFF; 7]), Err(Error::InvalidInputData));
        assert_eq!(try_decode(&DEFAULT_BLOCK), Ok(DEFAULT_TIME));
    }

    #[test]
    fn try_decode_rejects_out_of_range_fields() {
        let mut block = DEFAULT_BLOCK;
        block[2] = 0x25;
        assert_eq!(try_decode(&block), Err(Error::InvalidDeviceState));
        let mut block = DEFAULT_BLOCK;
        block[5] = 0x00;
        assert_eq!(try_decode(&block), Err(Error::InvalidDeviceState));
        let mut block = DEFAULT_BLOCK;
        block[3] = 0x08;
        assert_eq!(try_decode(&block), Err(Error::InvalidDeviceState));
        let mut block = DEFAULT_BLOCK;
        block[4] = 0x00;
        assert_eq!(try_decode(&block), Err(Error::InvalidDeviceState));
        let mut block = DEFAULT_BLOCK;
        block[5] = 0x80 | 0x12;
        block[6] = 0x99;
        assert!(try_decode(&block).is_ok());
    }

    #[test]
    fn round_trips_2000_to_2099() {
        for year in 100..200 {
            for month in 0..12 {
                let t = time(year, month, 1 + month * 2, (year % 7) as u8);
                let block = encode(&t).unwrap();
                assert_eq!(block[5] & 0x80, 0);
                assert_eq!(decode(&block), t);
            }
        }
    }

    #[test]
    fn round_trips_2100_to_2199_with_century_flag() {
        for year in 200..300 {
            let t = time(year, 11, 31, 6);
            let block = encode(&t).unwrap();
            assert_eq!(block[5], 0x80 | 0x12);
            assert_eq!(block[6], decimal_to_bcd((year % 100) as u8));
            assert_eq!(decode(&block), t);
        }
    }

    #[test]
    fn encode_never_sets_halt_flag() {
        let block = encode(&time(150, 5, 15, 0)).unwrap();
        assert_eq!(block[0], 0x59);
        assert_eq!(block[3], 0x01);
    }

    #[test]
    fn encode_rejects_unrepresentable_times() {
        assert_eq!(encode(&time(99, 0, 1, 0)), Err(Error::InvalidInputData));
        assert_eq!(encode(&time(300, 0, 1, 0)), Err(Error::InvalidInputData));
        assert_eq!(encode(&time(120, 12, 1, 0)), Err(Error::InvalidInputData));
        assert_eq!(encode(&time(120, 0, 0, 0)), Err(Error::InvalidInputData));
        assert_eq!(encode(&time(120, 0, 1, 7)), Err(Error::InvalidInputData));
        let mut late = DEFAULT_TIME;
        late.hours = 24;
        assert_eq!(encode(&late), Err(Error::InvalidInputData));
    }
}
