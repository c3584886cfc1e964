//! Exponential distribution

use unidist_core::{ContinuousDistribution, Error, Result, Support};

/// Exponential distribution with rate parameter λ.
///
/// f(x) = λ exp(-λx)  for x ≥ 0
///
/// # Examples
///
/// ```
/// use unidist_core::ContinuousDistribution;
/// use unidist_univariate::Exponential;
///
/// let d = Exponential::new(2.0).unwrap();
/// assert_eq!(d.mean().unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create an exponential distribution with the given rate.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless the rate is finite and positive.
    pub fn new(rate: f64) -> Result<Self> {
        Error::check_positive("rate", rate)?;
        Ok(Self { rate })
    }

    /// The unit-rate exponential distribution
    pub fn standard() -> Self {
        Self { rate: 1.0 }
    }

    /// Rate parameter λ
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Scale parameter 1/λ
    pub fn scale(&self) -> f64 {
        1.0 / self.rate
    }
}

impl ContinuousDistribution for Exponential {
    fn support(&self) -> Support {
        Support::nonnegative()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.rate * (-self.rate * x).exp()
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            self.rate.ln() - self.rate * x
        }
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            Ok(0.0)
        } else {
            Ok(-(-self.rate * x).exp_m1())
        }
    }

    fn sf(&self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            Ok(1.0)
        } else {
            Ok((-self.rate * x).exp())
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Ok(-(-p).ln_1p() / self.rate)
    }

    fn mean(&self) -> Result<f64> {
        Ok(1.0 / self.rate)
    }

    fn variance(&self) -> Result<f64> {
        Ok(1.0 / (self.rate * self.rate))
    }

    fn entropy(&self) -> Result<f64> {
        Ok(1.0 - self.rate.ln())
    }

    fn mode(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn median(&self) -> Result<f64> {
        Ok(std::f64::consts::LN_2 / self.rate)
    }

    fn hazard(&self, x: f64) -> Result<f64> {
        // Memoryless: the failure rate is flat across the support
        if x < 0.0 {
            Ok(0.0)
        } else {
            Ok(self.rate)
        }
    }

    fn cumulative_hazard(&self, x: f64) -> Result<f64> {
        Ok(self.rate * x.max(0.0))
    }
}
