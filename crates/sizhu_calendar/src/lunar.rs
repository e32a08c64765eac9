//! Gregorian to Chinese lunisolar conversion.
//!
//! Backed by the packed month-length table covering lunar years 1900-2049.
//! Each entry encodes one lunar year: bits 4..=15 flag 30-day regular months
//! (month 1 at bit 15, 29 days when clear), the low nibble is the leap-month
//! number (0 = none), and bit 16 flags a 30-day leap month. A leap month
//! follows its namesake month and keeps its number.
//!
//! The table epoch is Gregorian 1900-01-31 = lunar 1900-01-01; conversion
//! walks whole lunar years, then months, off the day count from the epoch.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;

/// First lunar year covered by the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last lunar year covered by the table.
pub const LAST_LUNAR_YEAR: i32 = 2049;

/// Days from CE 0001-01-01 to Gregorian 1900-01-31 (lunar 1900-01-01),
/// matching chrono's `num_days_from_ce` scale.
const EPOCH_DAYS_FROM_CE: i64 = 693_626;

/// Packed month lengths per lunar year, 1900..=2049.
const LUNAR_YEAR_INFO: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
];

/// A date on the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Lunar year.
    pub year: i32,
    /// Lunar month 1-12; a leap month keeps its namesake's number.
    pub month: u32,
    /// Day of the lunar month, 1-30.
    pub day: u32,
    /// Whether the date falls in the leap (intercalary) month.
    pub leap: bool,
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)?;
        if self.leap {
            f.write_str(" (leap)")?;
        }
        Ok(())
    }
}

fn year_info(year: i32) -> u32 {
    LUNAR_YEAR_INFO[(year - FIRST_LUNAR_YEAR) as usize]
}

fn regular_month_days(info: u32, month: u32) -> u32 {
    if info & (0x10000 >> month) != 0 { 30 } else { 29 }
}

fn leap_days(info: u32) -> u32 {
    if info & 0xf == 0 {
        0
    } else if info & 0x10000 != 0 {
        30
    } else {
        29
    }
}

fn year_days(info: u32) -> u32 {
    (1..=12).map(|m| regular_month_days(info, m)).sum::<u32>() + leap_days(info)
}

/// Leap-month number of a lunar year, if the year is in range and has one.
pub fn leap_month(year: i32) -> Option<u32> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return None;
    }
    match year_info(year) & 0xf {
        0 => None,
        m => Some(m),
    }
}

/// Convert a Gregorian date to its lunisolar equivalent.
///
/// Dates before 1900-01-31 or beyond the end of the table fail with
/// [`CalendarError::OutOfRange`].
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    let mut offset = i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
    if offset < 0 {
        return Err(CalendarError::OutOfRange(date));
    }

    let mut year = FIRST_LUNAR_YEAR;
    loop {
        if year > LAST_LUNAR_YEAR {
            return Err(CalendarError::OutOfRange(date));
        }
        let days = i64::from(year_days(year_info(year)));
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    let info = year_info(year);
    let leap = info & 0xf;
    let mut remaining = offset as u32;
    for month in 1..=12 {
        let days = regular_month_days(info, month);
        if remaining < days {
            return Ok(LunarDate { year, month, day: remaining + 1, leap: false });
        }
        remaining -= days;
        if month == leap {
            let days = leap_days(info);
            if remaining < days {
                return Ok(LunarDate { year, month, day: remaining + 1, leap: true });
            }
            remaining -= days;
        }
    }

    // The year walk guarantees offset < year_days, so the month walk returns.
    Err(CalendarError::OutOfRange(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn epoch_constant_matches_chrono() {
        assert_eq!(i64::from(d(1900, 1, 31).num_days_from_ce()), EPOCH_DAYS_FROM_CE);
    }

    #[test]
    fn table_covers_every_year() {
        assert_eq!(LUNAR_YEAR_INFO.len(), (LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1) as usize);
    }

    #[test]
    fn year_lengths_plausible() {
        // Every lunar year has 353..=355 days, or 383..=385 with a leap month.
        for year in FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR {
            let info = year_info(year);
            let days = year_days(info);
            if info & 0xf == 0 {
                assert!((353..=355).contains(&days), "year {year}: {days} days");
            } else {
                assert!((383..=385).contains(&days), "year {year}: {days} days");
            }
        }
    }

    #[test]
    fn epoch_is_lunar_new_year_1900() {
        let lunar = solar_to_lunar(d(1900, 1, 31)).unwrap();
        assert_eq!(lunar, LunarDate { year: 1900, month: 1, day: 1, leap: false });
    }

    #[test]
    fn day_after_epoch() {
        let lunar = solar_to_lunar(d(1900, 2, 1)).unwrap();
        assert_eq!(lunar, LunarDate { year: 1900, month: 1, day: 2, leap: false });
    }

    #[test]
    fn new_year_1901() {
        // Lunar 1900 has a 29-day leap month 8, 384 days in all.
        let lunar = solar_to_lunar(d(1901, 2, 19)).unwrap();
        assert_eq!(lunar, LunarDate { year: 1901, month: 1, day: 1, leap: false });
        let eve = solar_to_lunar(d(1901, 2, 18)).unwrap();
        assert_eq!(eve, LunarDate { year: 1900, month: 12, day: 30, leap: false });
    }

    #[test]
    fn leap_month_1900_starts_sep_24() {
        let first = solar_to_lunar(d(1900, 9, 24)).unwrap();
        assert_eq!(first, LunarDate { year: 1900, month: 8, day: 1, leap: true });
        let before = solar_to_lunar(d(1900, 9, 23)).unwrap();
        assert_eq!(before, LunarDate { year: 1900, month: 8, day: 30, leap: false });
    }

    #[test]
    fn leap_month_numbers() {
        assert_eq!(leap_month(1900), Some(8));
        assert_eq!(leap_month(1901), None);
        assert_eq!(leap_month(1990), Some(5));
        assert_eq!(leap_month(2033), Some(11));
        assert_eq!(leap_month(1899), None);
        assert_eq!(leap_month(2050), None);
    }

    #[test]
    fn before_epoch_rejected() {
        assert_eq!(
            solar_to_lunar(d(1900, 1, 30)),
            Err(CalendarError::OutOfRange(d(1900, 1, 30)))
        );
    }

    #[test]
    fn beyond_table_rejected() {
        assert!(matches!(
            solar_to_lunar(d(2050, 6, 1)),
            Err(CalendarError::OutOfRange(_))
        ));
    }

    #[test]
    fn display_format() {
        let lunar = LunarDate { year: 1999, month: 11, day: 25, leap: false };
        assert_eq!(lunar.to_string(), "1999-11-25");
        // Single-digit components stay unpadded.
        let leap = LunarDate { year: 1990, month: 5, day: 3, leap: true };
        assert_eq!(leap.to_string(), "1990-5-3 (leap)");
    }
}
