//! Lévy distribution

use unidist_core::{math, ContinuousDistribution, Error, Result, Support};

/// Lévy distribution with location μ and scale c.
///
/// f(x) = sqrt(c / 2π) · exp(-c / 2(x-μ)) / (x-μ)^{3/2}  for x > μ
///
/// A heavy-tailed stable distribution: both the mean and the variance
/// diverge, which the accessors report as `inf` (the mathematically correct
/// value) rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levy {
    location: f64,
    scale: f64,
    support: Support,
}

impl Levy {
    /// Create a Lévy distribution with the given location and scale.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless the location is finite and the
    /// scale is finite and positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "location must be finite, got {location}"
            )));
        }
        Error::check_positive("scale", scale)?;
        let support = Support::from_lower(location)?;
        Ok(Self {
            location,
            scale,
            support,
        })
    }

    /// The standard Lévy distribution (location 0, scale 1)
    pub fn standard() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
            support: Support::nonnegative(),
        }
    }

    /// Location parameter μ
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter c
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Levy {
    fn support(&self) -> Support {
        self.support
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 0.0;
        }
        let d = x - self.location;
        (self.scale / std::f64::consts::TAU).sqrt() * (-0.5 * self.scale / d).exp()
            / (d * d.sqrt())
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return f64::NEG_INFINITY;
        }
        let d = x - self.location;
        0.5 * (self.scale.ln() - std::f64::consts::TAU.ln()) - 0.5 * self.scale / d
            - 1.5 * d.ln()
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if x <= self.location {
            return Ok(0.0);
        }
        let d = x - self.location;
        Ok(math::erfc((0.5 * self.scale / d).sqrt()))
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(self.location);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        let z = math::erfc_inv(p);
        Ok(self.location + 0.5 * self.scale / (z * z))
    }

    /// The Lévy mean diverges; `inf` is the documented answer
    fn mean(&self) -> Result<f64> {
        Ok(f64::INFINITY)
    }

    /// The Lévy variance diverges; `inf` is the documented answer
    fn variance(&self) -> Result<f64> {
        Ok(f64::INFINITY)
    }

    fn entropy(&self) -> Result<f64> {
        let c = self.scale;
        Ok(0.5
            * (1.0
                + 3.0 * math::EULER_MASCHERONI
                + (16.0 * std::f64::consts::PI * c * c).ln()))
    }

    fn mode(&self) -> Result<f64> {
        Ok(self.location + self.scale / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        assert!(Levy::new(0.0, 1.0).is_ok());
        assert!(Levy::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Levy::new(0.0, 0.0).is_err());
    }

    #[test]
    fn test_support_starts_at_location() {
        let d = Levy::new(2.0, 1.0).unwrap();
        assert_eq!(d.support().lower(), 2.0);
        assert_eq!(d.pdf(2.0), 0.0);
        assert_eq!(d.cdf(1.9).unwrap(), 0.0);
        assert!(d.pdf(2.1) > 0.0);
    }

    #[test]
    fn test_standard_values() {
        let d = Levy::standard();
        // f(1) = exp(-1/2) / sqrt(2 pi)
        assert_relative_eq!(
            d.pdf(1.0),
            (-0.5f64).exp() / std::f64::consts::TAU.sqrt(),
            epsilon = 1e-14
        );
        // F(1) = erfc(1 / sqrt(2)) ~ 0.3173
        assert_relative_eq!(d.cdf(1.0).unwrap(), 0.317_310_507_9, epsilon = 1e-5);
        assert_eq!(d.mean().unwrap(), f64::INFINITY);
        assert_eq!(d.variance().unwrap(), f64::INFINITY);
        assert_relative_eq!(d.mode().unwrap(), 1.0 / 3.0, epsilon = 1e-14);
        // Entropy: (1 + 3 gamma + ln(16 pi)) / 2
        assert_relative_eq!(d.entropy().unwrap(), 3.324_482_801_396_89, epsilon = 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let d = Levy::new(-1.0, 2.0).unwrap();
        for &p in &[0.05, 0.2, 0.5, 0.8, 0.95] {
            let x = d.inverse_cdf(p).unwrap();
            assert_relative_eq!(d.cdf(x).unwrap(), p, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_heavy_tail_monotone() {
        let d = Levy::standard();
        let mut last = 0.0;
        for i in 1..50 {
            let x = i as f64 * 0.5;
            let c = d.cdf(x).unwrap();
            assert!(c >= last - 1e-12);
            last = c;
        }
        // The tail is heavy: even far out, mass remains
        assert!(d.sf(100.0).unwrap() > 0.05);
    }
}
