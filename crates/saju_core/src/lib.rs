//! Four Pillars (Saju) derivations built on the solar-term solver.
//!
//! This crate provides:
//! - The sexagesimal stem/branch cycle and pillar arithmetic
//! - Year, month, day, and hour pillar computation for a birth moment
//! - Table-based Gregorian to lunisolar date conversion, 1900..=2100
//! - Luck-cycle (decade pillar) timelines
//!
//! All implementations are clean-room, derived from the classical
//! calendar rules and public astronomical formulas.

pub mod error;
pub mod ganzhi;
pub mod luck;
pub mod lunar;
pub mod pillars;

pub use error::CoreError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, GanZhi, Stem};
pub use luck::{
    Direction, LuckCycle, LuckTimeline, Sex, direction_for, luck_cycles,
};
pub use lunar::{LunarDate, leap_month, leap_month_days, month_days, to_lunar, year_days};
pub use pillars::{
    FourPillars, day_pillar, four_pillars, hour_pillar, lmt_shift_minutes, month_pillar,
    month_pillar_from_longitude, pillar_year, year_pillar, year_pillar_from_year,
};
