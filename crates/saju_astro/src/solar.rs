//! Low-precision apparent solar ecliptic longitude.
//!
//! Truncated Meeus-style series: quadratic mean elements, a three-term
//! equation of center, and a small nutation/aberration correction from the
//! lunar node angle. Good to roughly arc-minute level, which is what the
//! pillar rules are calibrated against. The series and the order of its
//! corrections are load-bearing for output compatibility; do not swap in a
//! higher-precision ephemeris.

use crate::util::normalize_360;
use saju_time::J2000_JD;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian centuries since J2000.0 for a given Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Apparent solar ecliptic longitude in degrees, normalized to [0, 360).
pub fn sun_ecliptic_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    // Mean anomaly and geometric mean longitude, degrees.
    let m = 357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t;
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;

    let m_rad = normalize_360(m).to_radians();
    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + center;

    // Nutation in longitude + aberration, via the mean lunar node.
    let omega = 125.04 - 1_934.136 * t;
    let apparent = true_longitude - 0.005_69 - 0.004_78 * omega.to_radians().sin();

    normalize_360(apparent)
}
