//! Table-based Gregorian → lunar calendar conversion, 1900..=2100.
//!
//! Each lunar year is one packed `u32`:
//! - bits 0-3: number (1..=12) of that year's leap month, 0 if none
//! - bit 16: length of the leap month (set = 30 days, clear = 29)
//! - bits 15..4: lengths of ordinary months 1..=12, month 1 at bit 15
//!   (set = 30 days)
//!
//! The epoch is Gregorian 1900-01-31 = lunar 1900-01-01. Conversion walks
//! whole lunar years, then months, inserting the leap month immediately
//! after its ordinary month.

use saju_time::{TimeError, calendar_to_jd, days_in_month};

use crate::error::CoreError;

/// First supported lunar year.
pub const LUNAR_FIRST_YEAR: i32 = 1900;

/// Last supported lunar year.
pub const LUNAR_LAST_YEAR: i32 = 2100;

/// Packed month-length data for lunar years 1900..=2100.
///
/// Derived from the standard astronomical construction (new-moon and
/// major-term days in UTC+8); leap month = first month without a major
/// term in a 13-month solstice-to-solstice year.
const LUNAR_YEAR_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, // 1900-1907
    0x09ad0, 0x055d2, 0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d295, 0x0b550, // 1908-1915
    0x056a0, 0x0ada2, 0x095b0, 0x14977, 0x049b0, 0x0a4b0, 0x0b4b5, 0x06a50, // 1916-1923
    0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, 0x06566, 0x0d4a0, // 1924-1931
    0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1932-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, // 1940-1947
    0x0a950, 0x0b557, 0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, // 1948-1955
    0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, 0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, // 1956-1963
    0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, 0x096d0, 0x04dd5, // 1964-1971
    0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1972-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, // 1980-1987
    0x0ab60, 0x09570, 0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, // 1988-1995
    0x05ac0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, 0x0d954, 0x0d4a0, 0x0da50, // 1996-2003
    0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, 0x0a950, 0x0b4a0, // 2004-2011
    0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2012-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, // 2020-2027
    0x0ea65, 0x0d530, 0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, // 2028-2035
    0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, 0x056d0, 0x055b2, 0x049b0, // 2036-2043
    0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, 0x14b63, 0x09370, // 2044-2051
    0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06aa0, 0x1a6c4, 0x0aae0, // 2052-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, // 2060-2067
    0x0a6d0, 0x055d4, 0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, // 2068-2075
    0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, 0x0b273, 0x06930, 0x07337, 0x06aa0, // 2076-2083
    0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, 0x0e968, 0x0d520, // 2084-2091
    0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2092-2099
    0x0d520, // 2100
];

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    /// Month 1..=12; a leap month shares its ordinary month's number.
    pub month: u32,
    /// Day of month, 1..=30.
    pub day: u32,
    pub is_leap_month: bool,
}

fn packed(year: i32) -> u32 {
    LUNAR_YEAR_TABLE[(year - LUNAR_FIRST_YEAR) as usize]
}

/// Number (1..=12) of the leap month in a lunar year, or 0 if none.
pub fn leap_month(year: i32) -> u32 {
    packed(year) & 0xf
}

/// Days in a lunar year's leap month (0 when the year has none).
pub fn leap_month_days(year: i32) -> u32 {
    if leap_month(year) == 0 {
        0
    } else if packed(year) & 0x1_0000 != 0 {
        30
    } else {
        29
    }
}

/// Days in ordinary month `month` (1..=12) of a lunar year.
pub fn month_days(year: i32, month: u32) -> u32 {
    if packed(year) & (0x1_0000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// Total days in a lunar year, leap month included.
pub fn year_days(year: i32) -> u32 {
    let mut total = 348; // twelve 29-day months
    let mut bit = 0x8000;
    while bit > 0x8 {
        if packed(year) & bit != 0 {
            total += 1;
        }
        bit >>= 1;
    }
    total + leap_month_days(year)
}

/// Walk state while distributing days across one lunar year's months.
///
/// The leap month is inserted immediately after its ordinary month, so the
/// walk is a two-phase machine: ordinary months before the insertion, then
/// (at most once) the leap month, then the remaining ordinary months.
enum LeapWalk {
    BeforeLeap,
    AfterLeap,
}

/// Convert a Gregorian date to its lunar calendar equivalent.
///
/// Impossible calendar dates (month 13, Feb 30) fail with
/// [`TimeError::InvalidDate`]; dates outside [1900-01-31, 2100-12-31] are
/// reported as [`CoreError::LunarOutOfRange`]. Never approximated.
pub fn to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CoreError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidDate {
            field: "month",
            value: month as i64,
        }
        .into());
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate {
            field: "day",
            value: day as i64,
        }
        .into());
    }
    let epoch = calendar_to_jd(LUNAR_FIRST_YEAR, 1, 31.0);
    let jd = calendar_to_jd(year, month, day as f64);
    let upper = calendar_to_jd(LUNAR_LAST_YEAR, 12, 31.0);
    if jd < epoch || jd > upper {
        return Err(CoreError::LunarOutOfRange);
    }
    let mut offset = (jd - epoch) as i64;

    let mut lunar_year = LUNAR_FIRST_YEAR;
    while lunar_year <= LUNAR_LAST_YEAR && offset >= year_days(lunar_year) as i64 {
        offset -= year_days(lunar_year) as i64;
        lunar_year += 1;
    }
    if lunar_year > LUNAR_LAST_YEAR {
        return Err(CoreError::LunarOutOfRange);
    }

    let leap = leap_month(lunar_year);
    let mut state = LeapWalk::BeforeLeap;
    let mut lunar_month = 1;
    let mut is_leap = false;
    loop {
        let len = month_days(lunar_year, lunar_month) as i64;
        if offset < len {
            break;
        }
        offset -= len;
        if lunar_month == leap {
            if let LeapWalk::BeforeLeap = state {
                state = LeapWalk::AfterLeap;
                let leap_len = leap_month_days(lunar_year) as i64;
                if offset < leap_len {
                    is_leap = true;
                    break;
                }
                offset -= leap_len;
            }
        }
        lunar_month += 1;
    }

    Ok(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: offset as u32 + 1,
        is_leap_month: is_leap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_lunar_new_year_1900() {
        let d = to_lunar(1900, 1, 31).unwrap();
        assert_eq!(
            d,
            LunarDate {
                year: 1900,
                month: 1,
                day: 1,
                is_leap_month: false
            }
        );
    }

    #[test]
    fn day_before_epoch_is_unsupported() {
        assert_eq!(to_lunar(1900, 1, 30), Err(CoreError::LunarOutOfRange));
    }

    #[test]
    fn impossible_gregorian_dates_are_rejected() {
        // Feb 30 must not be read as early March.
        assert!(matches!(
            to_lunar(2024, 2, 30),
            Err(CoreError::Time(TimeError::InvalidDate { field: "day", .. }))
        ));
        assert!(matches!(
            to_lunar(2024, 13, 1),
            Err(CoreError::Time(TimeError::InvalidDate {
                field: "month",
                ..
            }))
        ));
        assert!(matches!(
            to_lunar(2023, 2, 29),
            Err(CoreError::Time(TimeError::InvalidDate { field: "day", .. }))
        ));
        assert!(matches!(
            to_lunar(2024, 4, 0),
            Err(CoreError::Time(TimeError::InvalidDate { field: "day", .. }))
        ));
        // A real leap day still converts.
        assert!(to_lunar(2024, 2, 29).is_ok());
    }

    #[test]
    fn past_upper_bound_is_unsupported() {
        assert!(to_lunar(2100, 12, 31).is_ok());
        assert_eq!(to_lunar(2101, 1, 1), Err(CoreError::LunarOutOfRange));
    }

    #[test]
    fn year_lengths_are_plausible() {
        for y in LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR {
            let days = year_days(y);
            if leap_month(y) == 0 {
                assert!((353..=355).contains(&days), "year {y}: {days}");
            } else {
                assert!((383..=385).contains(&days), "year {y}: {days}");
            }
        }
    }

    #[test]
    fn leap_months_in_known_years() {
        assert_eq!(leap_month(1984), 10);
        assert_eq!(leap_month(1990), 5);
        assert_eq!(leap_month(2017), 6);
        assert_eq!(leap_month(2020), 4);
        assert_eq!(leap_month(2033), 11);
        assert_eq!(leap_month(2023), 2);
        assert_eq!(leap_month(1985), 0);
    }

    #[test]
    fn mid_month_conversion() {
        let d = to_lunar(1990, 5, 15).unwrap();
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (1990, 4, 21, false));
    }

    #[test]
    fn conversion_crosses_gregorian_year() {
        // New Year's Day 2000 is still in lunar 1999.
        let d = to_lunar(2000, 1, 1).unwrap();
        assert_eq!((d.year, d.month, d.day), (1999, 11, 25));
    }

    #[test]
    fn leap_month_days_resolve() {
        // 2017-08-15 falls inside leap month 6.
        let d = to_lunar(2017, 8, 15).unwrap();
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2017, 6, 24, true));
        // A month earlier is the ordinary month 6.
        let d = to_lunar(2017, 7, 15).unwrap();
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2017, 6, 22, false));
    }
}
