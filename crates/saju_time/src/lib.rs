//! Civil time handling for the Saju engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions (both directions)
//! - `Moment`, the validated birth-moment input (local time + UTC offset
//!   + longitude)
//! - `CivilDateTime`, a plain timestamp for reporting computed instants
//!
//! No leap-second awareness by design; callers that need UTC apply the
//! moment's fixed offset.

pub mod civil;
pub mod error;
pub mod julian;
pub mod moment;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use moment::{Moment, days_in_month};
