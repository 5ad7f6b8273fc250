/// Floating point type for all electrical quantities (volts, amps, ohms).
pub type Real = f64;

/// Absolute + relative tolerance pair for comparing computed quantities.
///
/// The defaults absorb float noise from the series-current arithmetic while
/// keeping genuinely different LED operating points apart: a microamp is a
/// real difference at the milliamp scale this model works in.
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

/// Approximate equality under the given tolerances. The absolute floor
/// handles comparisons against an exact zero (a disconnected component's
/// current); the relative term scales with the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorbs_arithmetic_noise() {
        let tol = Tolerances::default();
        // power computed two ways: 0.35 A * 9 V drifts in the last bit
        assert!(nearly_equal(0.35 * 9.0, 3.15, tol));
    }

    #[test]
    fn separates_distinct_currents() {
        let tol = Tolerances::default();
        // one microamp apart straddles the LED visibility threshold
        assert!(!nearly_equal(0.001, 0.001001, tol));
    }

    #[test]
    fn zero_current_uses_the_absolute_floor() {
        let tol = Tolerances::default();
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(0.0, 1e-6, tol));
    }
}
