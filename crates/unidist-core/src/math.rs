//! Special-function utilities shared across the unidist crates
//!
//! Provides the error function, standard-normal CDF/quantile, log-gamma,
//! log-beta and the regularized incomplete beta function. These are exactly
//! the functions the catalog distributions need for their closed forms;
//! this is not a general special-function library.

use crate::error::{Error, Result};

/// The Euler-Mascheroni constant
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Error function approximation.
///
/// Abramowitz and Stegun 7.1.26, maximum absolute error about 1.5e-7.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Complementary error function `1 - erf(x)`
pub fn erfc(x: f64) -> f64 {
    1.0 - erf(x)
}

/// Inverse complementary error function.
///
/// Returns the `z` with `erfc(z) = p` for `p` in `(0, 2)`; the boundary
/// values map to `inf` and `-inf` respectively.
pub fn erfc_inv(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::INFINITY;
    }
    if p >= 2.0 {
        return f64::NEG_INFINITY;
    }
    // erfc(z) = 2 * Phi(-z * sqrt(2))
    -normal::ppf(0.5 * p) / std::f64::consts::SQRT_2
}

/// Standard normal distribution utilities
pub mod normal {
    use std::f64::consts::SQRT_2;

    /// Cumulative distribution function of the standard normal distribution
    pub fn cdf(x: f64) -> f64 {
        if x < -8.0 {
            return 0.0;
        }
        if x > 8.0 {
            return 1.0;
        }

        0.5 * (1.0 + super::erf(x / SQRT_2))
    }

    /// Quantile function of the standard normal distribution.
    ///
    /// Beasley-Springer-Moro algorithm; `p <= 0` and `p >= 1` map to the
    /// infinities.
    pub fn ppf(p: f64) -> f64 {
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        if (p - 0.5).abs() < 1e-15 {
            return 0.0;
        }

        let a = [
            -3.969683028665376e+01,
            2.209460984245205e+02,
            -2.759285104469687e+02,
            1.38357751867269e+02,
            -3.066479806614716e+01,
            2.506628277459239e+00,
        ];

        let b = [
            -5.447609879822406e+01,
            1.615858368580409e+02,
            -1.556989798598866e+02,
            6.680131188771972e+01,
            -1.328068155288572e+01,
        ];

        let c = [
            -7.784894002430293e-03,
            -3.223964580411365e-01,
            -2.400758277161838e+00,
            -2.549732539343734e+00,
            4.374664141464968e+00,
            2.938163982698783e+00,
        ];

        let d = [
            7.784695709041462e-03,
            3.224671290700398e-01,
            2.445134137142996e+00,
            3.754408661907416e+00,
        ];

        let p_low = 0.02425;
        let p_high = 1.0 - p_low;

        if p < p_low {
            // Rational approximation for the lower region
            let q = (-2.0 * p.ln()).sqrt();
            (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
                / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
        } else if p <= p_high {
            // Rational approximation for the central region
            let q = p - 0.5;
            let r = q * q;
            (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
                / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + 1.0)
        } else {
            // Rational approximation for the upper region
            let q = (-2.0 * (1.0 - p).ln()).sqrt();
            -(((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
                / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
        }
    }
}

/// Lanczos coefficients, g = 7, n = 9
const LANCZOS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural logarithm of the gamma function for `x > 0`.
///
/// Lanczos approximation, accurate to about 1e-13 over the positive reals.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula; only the x > 0 strip is needed here
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, c) in LANCZOS.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + 7.5;
    let half_ln_two_pi = 0.918_938_533_204_672_8;

    half_ln_two_pi + (x + 0.5) * t.ln() - t + acc.ln()
}

/// Natural logarithm of the beta function `B(a, b)`
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Iteration budget for the incomplete-beta continued fraction
const BETAINC_MAX_ITER: usize = 200;

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Domain: `a > 0`, `b > 0`, `0 <= x <= 1`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] outside the domain, [`Error::Convergence`] if
/// the continued fraction does not settle within its iteration budget.
pub fn reg_inc_beta(a: f64, b: f64, x: f64) -> Result<f64> {
    if a <= 0.0 || b <= 0.0 {
        return Err(Error::invalid_argument(
            "incomplete beta parameters must be positive",
        ));
    }
    if !(0.0..=1.0).contains(&x) {
        return Err(Error::InvalidArgument(format!(
            "incomplete beta argument {x} must be in [0, 1]"
        )));
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if x == 1.0 {
        return Ok(1.0);
    }

    // The continued fraction converges fastest for x below the mean of the
    // corresponding beta distribution; use the symmetry relation otherwise.
    if x > (a + 1.0) / (a + b + 2.0) {
        Ok(1.0 - betainc_cf(b, a, 1.0 - x)?)
    } else {
        betainc_cf(a, b, x)
    }
}

/// Continued fraction for `I_x(a, b)` by the modified Lentz method
fn betainc_cf(a: f64, b: f64, x: f64) -> Result<f64> {
    let tiny = 1e-30;
    let eps = f64::EPSILON;

    let ln_prefix = a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b);
    let prefix = ln_prefix.exp() / a;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < tiny {
        d = tiny;
    }
    d = 1.0 / d;
    let mut f = d;

    for m in 1..=BETAINC_MAX_ITER {
        let fm = m as f64;
        let m2 = 2.0 * fm;

        // Even step
        let num = fm * (b - fm) * x / ((qam + m2) * (a + m2));
        d = 1.0 + num * d;
        if d.abs() < tiny {
            d = tiny;
        }
        c = 1.0 + num / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        f *= d * c;

        // Odd step
        let num = -((a + fm) * (qab + fm) * x) / ((a + m2) * (qap + m2));
        d = 1.0 + num * d;
        if d.abs() < tiny {
            d = tiny;
        }
        c = 1.0 + num / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        let delta = d * c;
        f *= delta;

        if (delta - 1.0).abs() < eps {
            return Ok(prefix * f);
        }
    }

    Err(Error::convergence(
        "incomplete beta continued fraction",
        BETAINC_MAX_ITER,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_erf() {
        assert_eq!(erf(0.0), 0.0);
        assert_relative_eq!(erf(1.0), 0.842_700_792_9, epsilon = 1e-6);
        assert_relative_eq!(erf(-1.0), -0.842_700_792_9, epsilon = 1e-6);
        assert!((erf(4.0) - 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_erfc_inv_round_trip() {
        for &p in &[0.05, 0.2, 0.5, 1.0, 1.5, 1.9] {
            let z = erfc_inv(p);
            assert_relative_eq!(erfc(z), p, epsilon = 1e-5);
        }
        assert_eq!(erfc_inv(0.0), f64::INFINITY);
        assert_eq!(erfc_inv(2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_normal_cdf() {
        assert_relative_eq!(normal::cdf(0.0), 0.5, epsilon = 1e-7);
        assert_relative_eq!(normal::cdf(-1.96), 0.025, epsilon = 1e-4);
        assert_relative_eq!(normal::cdf(1.96), 0.975, epsilon = 1e-4);
        assert_eq!(normal::cdf(-9.0), 0.0);
        assert_eq!(normal::cdf(9.0), 1.0);
    }

    #[test]
    fn test_normal_ppf() {
        assert_eq!(normal::ppf(0.5), 0.0);
        assert_relative_eq!(normal::ppf(0.975), 1.959_963_985, epsilon = 1e-5);
        assert_relative_eq!(normal::ppf(0.025), -1.959_963_985, epsilon = 1e-5);
        assert_eq!(normal::ppf(0.0), f64::NEG_INFINITY);
        assert_eq!(normal::ppf(1.0), f64::INFINITY);
    }

    #[test]
    fn test_normal_cdf_ppf_inverse() {
        for &p in &[0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
            let x = normal::ppf(p);
            assert_relative_eq!(normal::cdf(x), p, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_ln_gamma() {
        // Gamma(1) = Gamma(2) = 1
        assert!(ln_gamma(1.0).abs() < 1e-12);
        assert!(ln_gamma(2.0).abs() < 1e-12);
        // Gamma(5) = 24
        assert_relative_eq!(ln_gamma(5.0), 24.0f64.ln(), epsilon = 1e-12);
        // Gamma(0.5) = sqrt(pi)
        assert_relative_eq!(
            ln_gamma(0.5),
            0.5 * std::f64::consts::PI.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ln_beta() {
        // B(2, 3) = 1/12
        assert_relative_eq!(ln_beta(2.0, 3.0), (1.0f64 / 12.0).ln(), epsilon = 1e-12);
        // B(0.5, 0.5) = pi
        assert_relative_eq!(
            ln_beta(0.5, 0.5),
            std::f64::consts::PI.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_reg_inc_beta() {
        assert_eq!(reg_inc_beta(2.0, 3.0, 0.0).unwrap(), 0.0);
        assert_eq!(reg_inc_beta(2.0, 3.0, 1.0).unwrap(), 1.0);
        // I_x(1, 1) = x
        assert_relative_eq!(reg_inc_beta(1.0, 1.0, 0.5).unwrap(), 0.5, epsilon = 1e-12);
        // I_x(2, 2) = x^2 (3 - 2x)
        assert_relative_eq!(
            reg_inc_beta(2.0, 2.0, 0.3).unwrap(),
            0.09 * 2.4,
            epsilon = 1e-10
        );
        // Symmetry: I_x(a, b) = 1 - I_{1-x}(b, a)
        let lhs = reg_inc_beta(2.5, 1.5, 0.4).unwrap();
        let rhs = 1.0 - reg_inc_beta(1.5, 2.5, 0.6).unwrap();
        assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
    }

    #[test]
    fn test_reg_inc_beta_domain() {
        assert!(reg_inc_beta(-1.0, 1.0, 0.5).is_err());
        assert!(reg_inc_beta(1.0, 0.0, 0.5).is_err());
        assert!(reg_inc_beta(1.0, 1.0, 1.5).is_err());
    }
}
