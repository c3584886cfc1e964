//! The shared contract for continuous univariate distributions

use crate::error::Result;
use crate::support::Support;

/// Trait for continuous univariate probability distributions.
///
/// Implementors supply the support together with the density and cumulative
/// functions; descriptive statistics and derived functions build on those.
/// Closed-form distributions implement every method with exact formulas;
/// the generic numerical engine implements the same contract by integration,
/// differentiation and root finding.
///
/// Accessors that may involve numerical work (`cdf`, `inverse_cdf` and the
/// moments) return [`Result`] so that a convergence failure reaches the
/// caller as an error instead of a plausible-looking number. Closed-form
/// implementations simply never return `Err` from the always-defined ones.
pub trait ContinuousDistribution {
    /// The interval on which the density is (potentially) nonzero
    fn support(&self) -> Support;

    /// Probability density at `x`; zero outside the support
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function `P(X <= x)`
    fn cdf(&self, x: f64) -> Result<f64>;

    /// Quantile function: the `x` with `cdf(x) = p`.
    ///
    /// `p = 0` and `p = 1` map to the exact support bounds; `p` outside
    /// `[0, 1]` is an [`crate::Error::InvalidArgument`].
    fn inverse_cdf(&self, p: f64) -> Result<f64>;

    /// Expected value of the distribution
    fn mean(&self) -> Result<f64>;

    /// Variance of the distribution
    fn variance(&self) -> Result<f64>;

    /// Differential entropy in nats
    fn entropy(&self) -> Result<f64>;

    /// Location of the density maximum
    fn mode(&self) -> Result<f64>;

    /// Natural logarithm of the density.
    ///
    /// Override when a direct form is more stable than `pdf(x).ln()`.
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Survival function `P(X > x) = 1 - cdf(x)` (complementary CDF)
    fn sf(&self, x: f64) -> Result<f64> {
        Ok(1.0 - self.cdf(x)?)
    }

    /// Standard deviation, `variance().sqrt()`
    fn std_dev(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// Median, `inverse_cdf(0.5)`
    fn median(&self) -> Result<f64> {
        self.inverse_cdf(0.5)
    }

    /// Hazard function `pdf(x) / sf(x)`.
    ///
    /// Where the survival function is zero this is `inf` (or NaN when the
    /// density is also zero there).
    fn hazard(&self, x: f64) -> Result<f64> {
        let s = self.sf(x)?;
        Ok(self.pdf(x) / s)
    }

    /// Cumulative hazard function `-ln(sf(x))`
    fn cumulative_hazard(&self, x: f64) -> Result<f64> {
        let s = self.sf(x)?;
        Ok(-s.ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Uniform on [0, 1] exercising the default methods
    struct StandardUniform;

    impl ContinuousDistribution for StandardUniform {
        fn support(&self) -> Support {
            Support::new(0.0, 1.0).unwrap()
        }

        fn pdf(&self, x: f64) -> f64 {
            if (0.0..=1.0).contains(&x) {
                1.0
            } else {
                0.0
            }
        }

        fn cdf(&self, x: f64) -> Result<f64> {
            Ok(x.clamp(0.0, 1.0))
        }

        fn inverse_cdf(&self, p: f64) -> Result<f64> {
            Error::check_probability(p)?;
            Ok(p)
        }

        fn mean(&self) -> Result<f64> {
            Ok(0.5)
        }

        fn variance(&self) -> Result<f64> {
            Ok(1.0 / 12.0)
        }

        fn entropy(&self) -> Result<f64> {
            Ok(0.0)
        }

        fn mode(&self) -> Result<f64> {
            Ok(0.5)
        }
    }

    #[test]
    fn test_default_methods() {
        let d = StandardUniform;
        assert_eq!(d.sf(0.25).unwrap(), 0.75);
        assert_eq!(d.median().unwrap(), 0.5);
        assert!((d.std_dev().unwrap() - (1.0f64 / 12.0).sqrt()).abs() < 1e-15);
        assert_eq!(d.hazard(0.5).unwrap(), 2.0);
        assert!((d.cumulative_hazard(0.5).unwrap() - std::f64::consts::LN_2).abs() < 1e-15);
        assert_eq!(d.ln_pdf(0.5), 0.0);
    }

    #[test]
    fn test_inverse_cdf_rejects_bad_probability() {
        let d = StandardUniform;
        assert!(matches!(
            d.inverse_cdf(-0.5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(d.inverse_cdf(1.5), Err(Error::InvalidArgument(_))));
    }
}
