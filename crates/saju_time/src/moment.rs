//! The validated birth-moment input type.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// A civil moment: local calendar date/time plus UTC offset and longitude.
///
/// Immutable once constructed. Construction validates every calendar field
/// against real Gregorian rules (including leap years) and never clamps;
/// an out-of-range field is a [`TimeError::InvalidDate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_hours: f64,
    longitude_deg: f64,
}

/// Days in a Gregorian month, 0 for an out-of-range month number.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

impl Moment {
    /// Construct a moment at whole-minute precision.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        Self::with_seconds(
            year,
            month,
            day,
            hour,
            minute,
            0.0,
            utc_offset_hours,
            longitude_deg,
        )
    }

    /// Construct a moment with sub-minute precision.
    #[allow(clippy::too_many_arguments)]
    pub fn with_seconds(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate {
                field: "month",
                value: month as i64,
            });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate {
                field: "day",
                value: day as i64,
            });
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate {
                field: "hour",
                value: hour as i64,
            });
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate {
                field: "minute",
                value: minute as i64,
            });
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate {
                field: "second",
                value: second as i64,
            });
        }
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidUtcOffset(utc_offset_hours));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(TimeError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
            longitude_deg,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Minutes since local midnight, including fractional seconds.
    pub fn minutes_of_day(&self) -> f64 {
        self.hour as f64 * 60.0 + self.minute as f64 + self.second / 60.0
    }

    /// Julian Date of this moment with the UTC offset applied.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + (self.hour as f64 - self.utc_offset_hours) / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date of this moment's local midnight, expressed in UTC.
    ///
    /// Used for the day-pillar boundary: the sexagesimal day flips at
    /// local civil 00:00, not at UTC midnight.
    pub fn local_midnight_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64 - self.utc_offset_hours / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_month_13() {
        let r = Moment::new(2024, 13, 1, 0, 0, 9.0, 126.98);
        assert!(matches!(
            r,
            Err(TimeError::InvalidDate { field: "month", .. })
        ));
    }

    #[test]
    fn rejects_day_32() {
        let r = Moment::new(2024, 1, 32, 0, 0, 9.0, 126.98);
        assert!(matches!(r, Err(TimeError::InvalidDate { field: "day", .. })));
    }

    #[test]
    fn rejects_feb_30() {
        assert!(Moment::new(2023, 2, 29, 0, 0, 9.0, 126.98).is_err());
        assert!(Moment::new(2024, 2, 29, 0, 0, 9.0, 126.98).is_ok());
        assert!(Moment::new(1900, 2, 29, 0, 0, 9.0, 126.98).is_err());
        assert!(Moment::new(2000, 2, 29, 0, 0, 9.0, 126.98).is_ok());
    }

    #[test]
    fn jd_utc_applies_offset() {
        let m = Moment::new(1990, 5, 15, 8, 30, 9.0, 126.98).unwrap();
        assert!((m.to_jd_utc() - 2_448_026.479166).abs() < 1e-5);
    }

    #[test]
    fn local_midnight_is_offset_utc() {
        let m = Moment::new(1988, 1, 27, 12, 0, 9.0, 126.98).unwrap();
        // local 1988-01-27 00:00 KST = 1988-01-26 15:00 UTC = JD 2447187.125
        assert!((m.local_midnight_jd_utc() - 2_447_187.125).abs() < 1e-9);
    }

    #[test]
    fn minutes_of_day_with_seconds() {
        let m = Moment::with_seconds(2024, 1, 1, 15, 0, 30.0, 9.0, 126.98).unwrap();
        assert!((m.minutes_of_day() - 900.5).abs() < 1e-12);
    }
}
