//! Normal (Gaussian) distribution

use unidist_core::{math, ContinuousDistribution, Error, Result, Support};

/// Normal distribution with location μ and scale σ.
///
/// f(x) = exp(-(x-μ)² / 2σ²) / (σ √(2π))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Create a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless the mean is finite and the standard
    /// deviation is finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "mean must be finite, got {mean}"
            )));
        }
        Error::check_positive("std_dev", std_dev)?;
        Ok(Self { mean, std_dev })
    }

    /// The standard normal distribution
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    fn z(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

impl ContinuousDistribution for Normal {
    fn support(&self) -> Support {
        Support::real()
    }

    fn pdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        (-0.5 * z * z).exp() / (self.std_dev * std::f64::consts::TAU.sqrt())
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        -0.5 * z * z - (self.std_dev * std::f64::consts::TAU.sqrt()).ln()
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Ok(math::normal::cdf(self.z(x)))
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Ok(self.mean + self.std_dev * math::normal::ppf(p))
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.mean)
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.std_dev * self.std_dev)
    }

    fn entropy(&self) -> Result<f64> {
        Ok(0.5 * (1.0 + (std::f64::consts::TAU * self.std_dev * self.std_dev).ln()))
    }

    fn mode(&self) -> Result<f64> {
        Ok(self.mean)
    }

    fn median(&self) -> Result<f64> {
        Ok(self.mean)
    }
}
