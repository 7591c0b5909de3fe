//! Shared angle helpers for sign and house arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360.0 rounds to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest circular separation between two longitudes, in [0, 180].
///
/// Same value as `|((a - b + 180) mod 360) - 180|`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// 0-based sign index (0 = Aries .. 11 = Pisces) of a longitude.
pub fn sign_index(deg: f64) -> u8 {
    let idx = (normalize_360(deg) / 30.0).floor() as u8;
    // Clamp in case of floating point edge just below 360.0
    idx.min(11)
}

/// Offset of a longitude within its sign, in [0, 30).
pub fn degrees_in_sign(deg: f64) -> f64 {
    normalize_360(deg) % 30.0
}

/// Round to 4 decimal places, used for reported percentages.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round4_truncates_noise() {
        assert_eq!(round4(37.500000000001), 37.5);
        assert_eq!(round4(12.34567), 12.3457);
    }

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
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn distance_is_symmetric_and_short() {
        assert!((angular_distance(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_distance(100.0, 100.0)).abs() < 1e-12);
    }

    #[test]
    fn sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999), 11);
        assert_eq!(sign_index(-0.5), 11);
    }

    #[test]
    fn degrees_in_sign_wraps() {
        assert!((degrees_in_sign(95.0) - 5.0).abs() < 1e-12);
        assert!((degrees_in_sign(-10.0) - 20.0).abs() < 1e-12);
    }
}
