use std::f64::consts::TAU;

/// Convert radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 360.0 / TAU
}

/// Convert degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * TAU / 360.0
}

/// Normalize an angle in radians into `[0, 2π)`, also for negative input.
///
/// # Examples
///
/// ```
/// use base_util::math::modulo_two_pi;
/// use std::f64::consts::PI;
///
/// assert!((modulo_two_pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// ```
pub fn modulo_two_pi(n: f64) -> f64 {
    ((n % TAU) + TAU) % TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rad_to_deg() {
        assert!(close(rad_to_deg(PI), 180.0));
        assert!(close(rad_to_deg(-PI / 2.0), -90.0));
        assert_eq!(rad_to_deg(0.0), 0.0);
    }

    #[test]
    fn test_deg_to_rad() {
        assert!(close(deg_to_rad(180.0), PI));
        assert!(close(deg_to_rad(360.0), TAU));
    }

    #[test]
    fn test_round_trip_degrees() {
        for deg in [-720.0, -45.0, 0.0, 12.5, 359.0] {
            assert!(close(rad_to_deg(deg_to_rad(deg)), deg));
        }
    }

    #[test]
    fn test_modulo_two_pi() {
        assert!(close(modulo_two_pi(0.0), 0.0));
        assert!(close(modulo_two_pi(TAU), 0.0));
        assert!(close(modulo_two_pi(3.0 * PI), PI));
        assert!(close(modulo_two_pi(-PI), PI));
        assert!(close(modulo_two_pi(-5.0 * TAU - 1.0), TAU - 1.0));
    }
}
