//! Luck-cycle (decade pillar) calculation.
//!
//! A birth chart's luck cycles continue the sexagesimal cycle from the
//! month pillar, one step per decade, forward or backward depending on sex
//! and the year stem's polarity. The first cycle starts at an age derived
//! from the distance to the nearest month-boundary term crossing at the
//! fixed rate of 3 days per year of age.

use saju_astro::{SolarTerm, term_bin_from_longitude, term_time};
use saju_time::Moment;

use crate::error::CoreError;
use crate::ganzhi::{GanZhi, Stem};
use crate::pillars::moment_solar_longitude;

/// Elapsed days that count as one year of starting age.
pub const DAYS_PER_AGE_YEAR: f64 = 3.0;

/// Tropical year length used to project cycle timestamps.
///
/// A mean solar year rather than a civil 365/366-day year, so ages and
/// calendar projections stay consistent over many decades.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242196;

/// Years covered by one cycle.
pub const YEARS_PER_CYCLE: f64 = 10.0;

/// Biological sex, used only for the direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Direction the cycle pillars advance through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed step per cycle.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Direction rule: forward for yang-year males and yin-year females,
/// backward otherwise.
pub fn direction_for(sex: Sex, year_stem: Stem) -> Direction {
    match (sex, year_stem.is_yang()) {
        (Sex::Male, true) | (Sex::Female, false) => Direction::Forward,
        (Sex::Male, false) | (Sex::Female, true) => Direction::Backward,
    }
}

/// One decade cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckCycle {
    /// 1-based position in the timeline.
    pub order: u16,
    /// Age in years at which the cycle begins.
    pub start_age_years: f64,
    /// Age in years at which the cycle ends (the next cycle's start).
    pub end_age_years: f64,
    /// UTC Julian Date of the cycle start.
    pub start_jd: f64,
    /// UTC Julian Date of the cycle end.
    pub end_jd: f64,
    /// Pillar ruling the cycle.
    pub pillar: GanZhi,
}

/// A birth chart's full luck-cycle timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LuckTimeline {
    pub direction: Direction,
    /// The month-boundary term whose crossing fixes the starting age.
    pub boundary_term: SolarTerm,
    /// UTC Julian Date of that crossing.
    pub boundary_jd: f64,
    /// Age in years at which the first cycle begins.
    pub start_age_years: f64,
    pub cycles: Vec<LuckCycle>,
}

/// Boundary term for a birth: the term sector boundary ahead of the moment
/// when moving forward, or the sector's own start when moving backward.
fn boundary_term(solar_lon_deg: f64, direction: Direction) -> SolarTerm {
    let bin = term_bin_from_longitude(solar_lon_deg);
    let boundary_bin = match direction {
        Direction::Forward => (bin + 1) % 12,
        Direction::Backward => bin,
    };
    SolarTerm::from_index(boundary_bin).unwrap_or(SolarTerm::Ipchun)
}

/// Crossing instant of `term` nearest to `birth_jd` strictly on the side
/// `direction` requires.
///
/// Terms recur yearly, so the three candidate years around the birth year
/// always bracket the wanted crossing; if rounding leaves no candidate
/// strictly on the required side, the nearest candidate overall is used so
/// a result is always produced.
fn boundary_crossing(birth_jd: f64, birth_year: i32, term: SolarTerm, direction: Direction) -> f64 {
    let candidates = [
        term_time(birth_year - 1, term),
        term_time(birth_year, term),
        term_time(birth_year + 1, term),
    ];
    let on_side = |jd: f64| match direction {
        Direction::Forward => jd > birth_jd,
        Direction::Backward => jd < birth_jd,
    };
    let nearest = |jds: &mut dyn Iterator<Item = f64>| {
        jds.min_by(|a, b| (a - birth_jd).abs().total_cmp(&(b - birth_jd).abs()))
    };
    nearest(&mut candidates.iter().copied().filter(|&jd| on_side(jd)))
        .or_else(|| nearest(&mut candidates.iter().copied()))
        .unwrap_or(candidates[1])
}

/// Compute the luck-cycle timeline for a birth moment.
///
/// `month_pillar` must be the moment's month pillar; cycle pillars continue
/// the 60-cycle from it.
pub fn luck_cycles(
    moment: &Moment,
    month_pillar: GanZhi,
    sex: Sex,
    year_stem: Stem,
    cycle_count: u16,
) -> Result<LuckTimeline, CoreError> {
    if cycle_count == 0 {
        return Err(CoreError::EmptyCycleRequest);
    }

    let birth_jd = moment.to_jd_utc();
    let direction = direction_for(sex, year_stem);
    let lon = moment_solar_longitude(moment);
    let term = boundary_term(lon, direction);
    let boundary_jd = boundary_crossing(birth_jd, moment.year(), term, direction);
    let start_age_years = (boundary_jd - birth_jd).abs() / DAYS_PER_AGE_YEAR;

    let mut cycles = Vec::with_capacity(cycle_count as usize);
    for n in 1..=cycle_count {
        let start_age = start_age_years + YEARS_PER_CYCLE * (n - 1) as f64;
        let end_age = start_age + YEARS_PER_CYCLE;
        cycles.push(LuckCycle {
            order: n,
            start_age_years: start_age,
            end_age_years: end_age,
            start_jd: birth_jd + start_age * TROPICAL_YEAR_DAYS,
            end_jd: birth_jd + end_age * TROPICAL_YEAR_DAYS,
            pillar: month_pillar.offset(direction.step() * n as i64),
        });
    }

    Ok(LuckTimeline {
        direction,
        boundary_term: term,
        boundary_jd,
        start_age_years,
        cycles,
    })
}
