//! Analytic solar position and solar-term search for the Saju engine.
//!
//! This crate provides:
//! - The low-precision apparent solar ecliptic longitude series
//! - The 12 month-boundary solar terms (Ipchun .. Sohan)
//! - A bisection root-finder for term crossing instants
//!
//! No precomputed term tables: crossings are solved numerically from the
//! longitude model each time.

pub mod search;
pub mod solar;
pub mod term;
pub mod util;

pub use search::{find_term_time, term_time};
pub use solar::{jd_to_centuries, sun_ecliptic_longitude_deg};
pub use term::{
    ALL_SOLAR_TERMS, SolarTerm, TERM_CYCLE_ANCHOR_DEG, TERM_SPAN_DEG, term_bin_from_longitude,
};
pub use util::{normalize_360, normalize_to_pm180};
