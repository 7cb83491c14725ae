//! Stems, branches, and the 60-term sexagesimal cycle.
//!
//! A pillar is a (stem, branch) pair addressed by a single index 0..=59:
//! `index mod 10` is the stem, `index mod 12` the branch. Only pairs whose
//! indices share parity are reachable, so the cycle has 60 members rather
//! than 120.

use crate::error::CoreError;

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = Gap .. 9 = Gye).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based index (Gap = 0 .. Gye = 9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a cycle position, modulo 10.
    pub fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Korean romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Yang polarity: even-indexed stems are yang, odd are yin.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Shin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = Ja .. 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Shin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based index (Ja = 0 .. Hae = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Shin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a cycle position, modulo 12.
    pub fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// Korean romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Shin => "Shin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Shin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Zodiac animal, for display.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Shin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }
}

/// One pillar of the 60-term sexagesimal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi {
    index: u8,
}

impl GanZhi {
    /// Pillar at a cycle position, modulo 60.
    pub fn from_index(idx: i64) -> Self {
        Self {
            index: idx.rem_euclid(60) as u8,
        }
    }

    /// Pair a stem and branch, rejecting parity-mismatched combinations.
    pub fn from_stem_branch(stem: Stem, branch: Branch) -> Result<Self, CoreError> {
        let s = stem.index();
        let b = branch.index();
        if s % 2 != b % 2 {
            return Err(CoreError::InvalidGanZhiPair { stem: s, branch: b });
        }
        Ok(Self::pair(stem, branch))
    }

    /// Pair a stem and branch that are known to share parity.
    ///
    /// CRT over (mod 10, mod 12): 6s - 5b is the unique solution mod 60.
    /// For a mismatched pair this still yields *a* pillar, so callers that
    /// take external input must go through [`GanZhi::from_stem_branch`].
    pub(crate) fn pair(stem: Stem, branch: Branch) -> Self {
        let idx = (6 * stem.index() as i64 - 5 * branch.index() as i64).rem_euclid(60);
        Self { index: idx as u8 }
    }

    /// Parse a two-character hanja pair such as "辛巳".
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let mut chars = s.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoreError::UnknownGanZhi(s.to_string()));
        };
        let stem = ALL_STEMS
            .iter()
            .find(|st| st.hanja().chars().next() == Some(sc))
            .copied()
            .ok_or_else(|| CoreError::UnknownGanZhi(s.to_string()))?;
        let branch = ALL_BRANCHES
            .iter()
            .find(|br| br.hanja().chars().next() == Some(bc))
            .copied()
            .ok_or_else(|| CoreError::UnknownGanZhi(s.to_string()))?;
        Self::from_stem_branch(stem, branch)
    }

    /// Cycle position 0..=59.
    pub const fn index(self) -> u8 {
        self.index
    }

    pub fn stem(self) -> Stem {
        Stem::from_index(self.index)
    }

    pub fn branch(self) -> Branch {
        Branch::from_index(self.index)
    }

    /// Pillar shifted by `steps` positions (negative steps move backward).
    pub fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index as i64 + steps)
    }

    /// Romanized name, e.g. "Sinsa".
    pub fn name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name().to_lowercase())
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().hanja(), self.branch().hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_start_is_gapja() {
        let gz = GanZhi::from_index(0);
        assert_eq!(gz.stem(), Stem::Gap);
        assert_eq!(gz.branch(), Branch::Ja);
        assert_eq!(gz.to_string(), "甲子");
    }

    #[test]
    fn parity_invariant_holds_for_all_60() {
        for n in 0..60 {
            let gz = GanZhi::from_index(n);
            assert_eq!(
                gz.stem().index() % 2,
                gz.branch().index() % 2,
                "index {n}"
            );
            assert_eq!(gz.index() % 10, gz.stem().index());
            assert_eq!(gz.index() % 12, gz.branch().index());
        }
    }

    #[test]
    fn stem_branch_pairing_roundtrips() {
        for n in 0..60 {
            let gz = GanZhi::from_index(n);
            let back = GanZhi::from_stem_branch(gz.stem(), gz.branch()).unwrap();
            assert_eq!(back.index(), gz.index());
        }
    }

    #[test]
    fn mismatched_parity_is_rejected() {
        let r = GanZhi::from_stem_branch(Stem::Gap, Branch::Chuk);
        assert!(matches!(r, Err(CoreError::InvalidGanZhiPair { .. })));
    }

    #[test]
    fn parse_sinsa() {
        let gz = GanZhi::parse("辛巳").unwrap();
        assert_eq!(gz.index(), 17);
        assert_eq!(gz.stem(), Stem::Sin);
        assert_eq!(gz.branch(), Branch::Sa);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(GanZhi::parse("").is_err());
        assert!(GanZhi::parse("辛").is_err());
        assert!(GanZhi::parse("辛巳年").is_err());
        assert!(GanZhi::parse("XY").is_err());
        // valid characters, impossible pair
        assert!(GanZhi::parse("甲丑").is_err());
    }

    #[test]
    fn negative_offsets_wrap() {
        let gz = GanZhi::from_index(0).offset(-1);
        assert_eq!(gz.index(), 59);
    }

    #[test]
    fn yang_yin_alternate() {
        assert!(Stem::Gap.is_yang());
        assert!(!Stem::Eul.is_yang());
        assert!(Stem::Gyeong.is_yang());
        assert!(!Stem::Sin.is_yang());
    }
}
