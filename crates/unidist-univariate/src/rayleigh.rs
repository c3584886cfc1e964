//! Rayleigh distribution

use unidist_core::{math, ContinuousDistribution, Error, Result, Support};

/// Rayleigh distribution with scale parameter σ.
///
/// f(x) = (x / σ²) exp(-x² / 2σ²)  for x ≥ 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    scale: f64,
}

impl Rayleigh {
    /// Create a Rayleigh distribution with the given scale.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless the scale is finite and positive.
    pub fn new(scale: f64) -> Result<Self> {
        Error::check_positive("scale", scale)?;
        Ok(Self { scale })
    }

    /// Scale parameter σ
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn sq(&self) -> f64 {
        self.scale * self.scale
    }
}

impl ContinuousDistribution for Rayleigh {
    fn support(&self) -> Support {
        Support::nonnegative()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            x / self.sq() * (-0.5 * x * x / self.sq()).exp()
        }
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            Ok(0.0)
        } else {
            Ok(-(-0.5 * x * x / self.sq()).exp_m1())
        }
    }

    fn sf(&self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            Ok(1.0)
        } else {
            Ok((-0.5 * x * x / self.sq()).exp())
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Ok(self.scale * (-2.0 * (-p).ln_1p()).sqrt())
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.scale * (std::f64::consts::FRAC_PI_2).sqrt())
    }

    fn variance(&self) -> Result<f64> {
        Ok((2.0 - std::f64::consts::FRAC_PI_2) * self.sq())
    }

    fn entropy(&self) -> Result<f64> {
        Ok(1.0 + (self.scale / std::f64::consts::SQRT_2).ln() + math::EULER_MASCHERONI / 2.0)
    }

    fn mode(&self) -> Result<f64> {
        Ok(self.scale)
    }

    fn median(&self) -> Result<f64> {
        Ok(self.scale * (2.0 * std::f64::consts::LN_2).sqrt())
    }

    fn hazard(&self, x: f64) -> Result<f64> {
        // pdf / sf collapses to x / sigma^2 on the support
        Ok(x.max(0.0) / self.sq())
    }

    fn cumulative_hazard(&self, x: f64) -> Result<f64> {
        let x = x.max(0.0);
        Ok(0.5 * x * x / self.sq())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        assert!(Rayleigh::new(1.0).is_ok());
        assert!(Rayleigh::new(0.0).is_err());
        assert!(Rayleigh::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_unit_scale_values() {
        let d = Rayleigh::new(1.0).unwrap();
        assert_eq!(d.pdf(0.0), 0.0);
        // Density peaks at the scale parameter
        assert_relative_eq!(d.pdf(1.0), (-0.5f64).exp(), epsilon = 1e-14);
        assert_relative_eq!(
            d.mean().unwrap(),
            1.253_314_137_315_500_3,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            d.variance().unwrap(),
            2.0 - std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_eq!(d.mode().unwrap(), 1.0);
        assert_relative_eq!(
            d.median().unwrap(),
            (2.0 * std::f64::consts::LN_2).sqrt(),
            epsilon = 1e-14
        );
        // Entropy: 1 + ln(1/sqrt(2)) + gamma/2
        assert_relative_eq!(d.entropy().unwrap(), 0.942_034_242_170_793_2, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let d = Rayleigh::new(2.5).unwrap();
        for &p in &[0.01, 0.1, 0.5, 0.9, 0.99] {
            let x = d.inverse_cdf(p).unwrap();
            assert_relative_eq!(d.cdf(x).unwrap(), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hazard_grows_linearly() {
        let d = Rayleigh::new(2.0).unwrap();
        assert_eq!(d.hazard(0.0).unwrap(), 0.0);
        assert_relative_eq!(d.hazard(1.0).unwrap(), 0.25);
        assert_relative_eq!(d.hazard(2.0).unwrap(), 0.5);
        assert_relative_eq!(d.cumulative_hazard(2.0).unwrap(), 0.5);
    }

    #[test]
    fn test_median_is_consistent() {
        let d = Rayleigh::new(1.7).unwrap();
        let m = d.median().unwrap();
        assert_relative_eq!(d.cdf(m).unwrap(), 0.5, epsilon = 1e-12);
    }
}
