//! Angle wrapping and degree/radian conversion helpers.
//!
//! All public angles in the engine are degrees; these helpers convert to
//! radians at the trigonometry boundary and fold bearings into range.

use std::f64::consts::PI;

/// Folds an angle into `[0, max)`.
pub fn wrap_angle(angle: f64, max: f64) -> f64 {
    let wrapped = angle.rem_euclid(max);
    // rem_euclid rounds up to the modulus itself for tiny negative inputs
    if wrapped >= max {
        0.0
    } else {
        wrapped
    }
}

/// Folds a bearing into `[0, 360)` degrees.
pub fn wrap_degrees(angle: f64) -> f64 {
    wrap_angle(angle, 360.0)
}

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees, subtracting a full turn if the result
/// exceeds 360.
#[allow(dead_code)] // Convenience inverse of deg_to_rad
pub fn rad_to_deg(radians: f64) -> f64 {
    let degrees = radians * (180.0 / PI);
    if degrees > 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees_in_range() {
        for s in [-720.0, -360.0, -30.0, 0.0, 83.0, 359.9, 360.0, 1000.0] {
            let wrapped = wrap_degrees(s);
            assert!(wrapped >= 0.0 && wrapped < 360.0, "wrap({}) = {}", s, wrapped);
        }
    }

    #[test]
    fn test_wrap_degrees_periodic() {
        for k in -3i32..=3 {
            assert_eq!(wrap_degrees(83.0 + 360.0 * k as f64), 83.0);
        }
    }

    #[test]
    fn test_wrap_boundary_resolves_to_zero() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-360.0), 0.0);
    }

    #[test]
    fn test_wrap_angle_custom_modulus() {
        assert_eq!(wrap_angle(200.0, 180.0), 20.0);
        assert_eq!(wrap_angle(-10.0, 180.0), 170.0);
    }

    #[test]
    fn test_wrap_extreme_magnitudes() {
        // Magnitudes where a single ±360 step makes no progress in f64
        // still fold into range.
        for s in [1e300, -1e300, f64::MAX, f64::MIN] {
            let wrapped = wrap_degrees(s);
            assert!(wrapped >= 0.0 && wrapped < 360.0, "wrap({}) = {}", s, wrapped);
        }
    }

    #[test]
    fn test_wrap_tiny_negative_resolves_to_range() {
        let wrapped = wrap_degrees(-1e-18);
        assert!(wrapped >= 0.0 && wrapped < 360.0, "got {}", wrapped);
    }

    #[test]
    fn test_degree_radian_round_trip() {
        assert_eq!(deg_to_rad(180.0), PI);
        assert_eq!(rad_to_deg(PI), 180.0);
        assert!((rad_to_deg(deg_to_rad(83.0)) - 83.0).abs() < 1e-12);
    }
}
