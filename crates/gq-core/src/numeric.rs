//! Float helpers shared by the property crates.

pub type Real = f64;

/// Absolute and relative closeness bounds.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within either bound.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// |calc − target| / |target|. NaN when `target` is zero or either side is NaN.
pub fn relative_residual(calc: Real, target: Real) -> Real {
    ((calc - target) / target).abs()
}

/// Nearest value with `digits` fraction digits, e.g. `round_decimals(10.0267, 2) == 10.03`.
pub fn round_decimals(value: Real, digits: i32) -> Real {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closeness_uses_either_bound() {
        let tol = Tolerances::default();
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(nearly_equal(1000.0, 1000.0 + 1e-7, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn residual_is_relative_to_target() {
        assert!((relative_residual(1.01, 1.0) - 0.01).abs() < 1e-15);
        assert!((relative_residual(99.0, 100.0) - 0.01).abs() < 1e-15);
        assert!(relative_residual(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn round_decimals_half_up() {
        assert_eq!(round_decimals(10.0267, 2), 10.03);
        assert_eq!(round_decimals(36.94912, 4), 36.9491);
        assert_eq!(round_decimals(-1.25, 1), -1.3);
    }
}
