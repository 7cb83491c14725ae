//! The 12 principal solar terms that bound the Saju months.
//!
//! Each term is the instant the Sun's apparent ecliptic longitude crosses a
//! multiple of 30°, with the cycle anchored at 315° (Ipchun, start of
//! spring). The terms partition the ecliptic into the 12 pillar months,
//! starting with the Tiger month at [315°, 345°).

use crate::util::normalize_360;

/// Ecliptic longitude of Ipchun, the start of the term cycle.
pub const TERM_CYCLE_ANCHOR_DEG: f64 = 315.0;

/// Width of one term sector.
pub const TERM_SPAN_DEG: f64 = 30.0;

/// The 12 month-boundary solar terms, in cycle order from Ipchun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 terms in cycle order (0 = Ipchun .. 11 = Sohan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

impl SolarTerm {
    /// 0-based position in the cycle (Ipchun = 0 .. Sohan = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baengno => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// Term at a cycle position.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(idx as usize).copied()
    }

    /// Target apparent solar longitude of this term's crossing.
    pub fn target_longitude_deg(self) -> f64 {
        normalize_360(TERM_CYCLE_ANCHOR_DEG + TERM_SPAN_DEG * self.index() as f64)
    }

    /// Gregorian month the crossing usually falls in.
    ///
    /// Only used to seed the root-finder's search window; never affects the
    /// solved instant.
    pub const fn seed_month(self) -> u32 {
        match self {
            Self::Ipchun => 2,
            Self::Gyeongchip => 3,
            Self::Cheongmyeong => 4,
            Self::Ipha => 5,
            Self::Mangjong => 6,
            Self::Soseo => 7,
            Self::Ipchu => 8,
            Self::Baengno => 9,
            Self::Hallo => 10,
            Self::Ipdong => 11,
            Self::Daeseol => 12,
            Self::Sohan => 1,
        }
    }

    /// Korean romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ipchun => "Ipchun",
            Self::Gyeongchip => "Gyeongchip",
            Self::Cheongmyeong => "Cheongmyeong",
            Self::Ipha => "Ipha",
            Self::Mangjong => "Mangjong",
            Self::Soseo => "Soseo",
            Self::Ipchu => "Ipchu",
            Self::Baengno => "Baengno",
            Self::Hallo => "Hallo",
            Self::Ipdong => "Ipdong",
            Self::Daeseol => "Daeseol",
            Self::Sohan => "Sohan",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "清明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }
}

/// Which 30° term sector a solar longitude falls in (0 = Tiger month).
///
/// A direct bucket of a continuous value: the sector starting exactly at a
/// boundary belongs to that boundary's term.
pub fn term_bin_from_longitude(lon_deg: f64) -> u8 {
    let offset = normalize_360(lon_deg - TERM_CYCLE_ANCHOR_DEG);
    let bin = (offset / TERM_SPAN_DEG).floor() as u8;
    bin.min(11)
}
