//! Beta-prime (inverted beta) distribution

use unidist_core::{math, ContinuousDistribution, Error, Result, Support};
use unidist_numeric::{expand_bracket, find_root, Quadrature, RootConfig};

/// Beta-prime distribution with shape parameters α and β.
///
/// f(x) = x^{α-1} (1+x)^{-α-β} / B(α, β)  for x > 0
///
/// The CDF goes through the regularized incomplete beta function and the
/// quantile function through the bracketed root finder; there is no
/// elementary closed form for either. Moments exist only for large enough
/// β and are reported as [`Error::Unsupported`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPrime {
    alpha: f64,
    beta: f64,
}

impl BetaPrime {
    /// Create a beta-prime distribution with the given shapes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless both shapes are finite and
    /// positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Error::check_positive("alpha", alpha)?;
        Error::check_positive("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    /// Shape parameter α
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Shape parameter β
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl ContinuousDistribution for BetaPrime {
    fn support(&self) -> Support {
        Support::nonnegative()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            // The boundary limit depends on the first shape
            return if self.alpha > 1.0 {
                0.0
            } else if self.alpha == 1.0 {
                self.beta
            } else {
                f64::INFINITY
            };
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return self.pdf(x).ln();
        }
        (self.alpha - 1.0) * x.ln() - (self.alpha + self.beta) * x.ln_1p()
            - math::ln_beta(self.alpha, self.beta)
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            return Ok(0.0);
        }
        if x == f64::INFINITY {
            return Ok(1.0);
        }
        math::reg_inc_beta(self.alpha, self.beta, x / (1.0 + x))
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        let config = RootConfig::default();
        let (lo, hi) = expand_bracket(|x| self.cdf(x), p, 0.0, 1.0, false, true)?;
        find_root(|x| self.cdf(x), p, lo, hi, &config)
    }

    fn mean(&self) -> Result<f64> {
        if self.beta <= 1.0 {
            return Err(Error::unsupported(
                "beta-prime mean is undefined for beta <= 1",
            ));
        }
        Ok(self.alpha / (self.beta - 1.0))
    }

    fn variance(&self) -> Result<f64> {
        if self.beta <= 2.0 {
            return Err(Error::unsupported(
                "beta-prime variance is undefined for beta <= 2",
            ));
        }
        let b1 = self.beta - 1.0;
        Ok(self.alpha * (self.alpha + self.beta - 1.0) / ((self.beta - 2.0) * b1 * b1))
    }

    fn entropy(&self) -> Result<f64> {
        // No elementary closed form; integrate the density directly
        let quad = Quadrature::default();
        let plogp = quad.integrate(
            |x| {
                let d = self.pdf(x);
                if d > 0.0 && d.is_finite() {
                    d * d.ln()
                } else {
                    0.0
                }
            },
            0.0,
            f64::INFINITY,
        )?;
        Ok(-plogp)
    }

    fn mode(&self) -> Result<f64> {
        if self.alpha >= 1.0 {
            Ok((self.alpha - 1.0) / (self.beta + 1.0))
        } else {
            Ok(0.0)
        }
    }
}
