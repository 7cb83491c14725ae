//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Map an angular difference into [-180, 180) degrees.
///
/// Sign changes of the result correspond to true crossings of the
/// reference angle even across the 0°/360° wrap.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    normalize_360(deg + 540.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn pm180_small_positive() {
        assert!((normalize_to_pm180(10.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn pm180_wraps_large_difference() {
        // 350 deg ahead is 10 deg behind
        assert!((normalize_to_pm180(350.0) + 10.0).abs() < 1e-12);
    }

    #[test]
    fn pm180_half_turn_maps_to_lower_bound() {
        assert!((normalize_to_pm180(180.0) + 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-180.0) + 180.0).abs() < 1e-12);
    }
}
