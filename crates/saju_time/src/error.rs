//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar field outside its valid range (month 13, day 32, hour 25, ...).
    InvalidDate {
        field: &'static str,
        value: i64,
    },
    /// UTC offset outside the plausible [-14, +14] hour window.
    InvalidUtcOffset(f64),
    /// Longitude outside [-180, +180] degrees east.
    InvalidLongitude(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { field, value } => {
                write!(f, "invalid calendar date: {field} = {value}")
            }
            Self::InvalidUtcOffset(h) => write!(f, "invalid UTC offset: {h} hours"),
            Self::InvalidLongitude(d) => write!(f, "invalid longitude: {d} degrees"),
        }
    }
}

impl Error for TimeError {}
