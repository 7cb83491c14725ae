//! Bisection search for solar-term crossing instants.

use crate::solar::sun_ecliptic_longitude_deg;
use crate::term::SolarTerm;
use crate::util::normalize_to_pm180;
use saju_time::calendar_to_jd;

/// Half-width of the search window around the seed date, days.
const WINDOW_HALF_DAYS: f64 = 40.0;

/// Fixed bisection depth. 80 halvings of an 80-day window put the result
/// far below floating-point resolution; the count is part of the
/// reference behavior.
const BISECTION_ITERATIONS: u32 = 80;

/// Signed angular residual of the Sun against a target longitude.
///
/// Zero exactly at a crossing; the ±180 wrap keeps the sign meaningful
/// across 0°/360°.
fn residual(jd: f64, target_deg: f64) -> f64 {
    normalize_to_pm180(sun_ecliptic_longitude_deg(jd) - target_deg)
}

/// Find the UTC Julian Date at which the Sun crosses `target_deg`, near
/// the 15th of `seed_month` in `year`.
///
/// Precondition: exactly one crossing inside the ±40-day window. Each term
/// recurs only once per year, so a correct seed month guarantees this; a
/// wrong seed converges to some sign change without reporting an error.
pub fn find_term_time(year: i32, target_deg: f64, seed_month: u32) -> f64 {
    let seed_jd = calendar_to_jd(year, seed_month, 15.0);
    let mut lo = seed_jd - WINDOW_HALF_DAYS;
    let mut hi = seed_jd + WINDOW_HALF_DAYS;

    for _ in 0..BISECTION_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if residual(lo, target_deg) * residual(mid, target_deg) <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    (lo + hi) / 2.0
}

/// Crossing instant of a named term in a calendar year.
pub fn term_time(year: i32, term: SolarTerm) -> f64 {
    find_term_time(year, term.target_longitude_deg(), term.seed_month())
}
