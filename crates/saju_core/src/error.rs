//! Error types for pillar, lunar, and luck-cycle calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from the Saju core.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// Error from civil time handling.
    Time(TimeError),
    /// Stem and branch indices with different parity can never pair.
    InvalidGanZhiPair { stem: u8, branch: u8 },
    /// A stem or branch character was not recognized during parsing.
    UnknownGanZhi(String),
    /// Gregorian date outside the supported lunar table range
    /// [1900-01-31, 2100-12-31].
    LunarOutOfRange,
    /// Requested cycle count was zero.
    EmptyCycleRequest,
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidGanZhiPair { stem, branch } => {
                write!(f, "unreachable ganzhi pair: stem {stem}, branch {branch}")
            }
            Self::UnknownGanZhi(s) => write!(f, "unrecognized ganzhi: {s:?}"),
            Self::LunarOutOfRange => {
                write!(f, "date outside the supported lunar range 1900-01-31..2100-12-31")
            }
            Self::EmptyCycleRequest => write!(f, "cycle count must be at least 1"),
        }
    }
}

impl Error for CoreError {}

impl From<TimeError> for CoreError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
