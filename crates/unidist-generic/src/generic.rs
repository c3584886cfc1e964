//! The generic continuous distribution facade

use std::sync::Arc;

use log::debug;
use unidist_core::{ContinuousDistribution, Error, Result, Support};
use unidist_numeric::{
    derivative, expand_bracket, find_maximum, find_root, DerivConfig, Quadrature, RootConfig,
};

use crate::builder::{GenericBuilder, Overrides};
use crate::memo::Memo;

/// Shared read-only reference to a user-supplied real function
pub type RealFn = Arc<dyn Fn(f64) -> f64>;

/// Which functions the distribution was constructed from.
///
/// Resolved once at construction; every accessor dispatches on this instead
/// of re-checking which functions happen to be present.
#[derive(Clone)]
pub(crate) enum Source {
    Density(RealFn),
    Cumulative(RealFn),
    Both { density: RealFn, cumulative: RealFn },
}

/// A continuous distribution defined by a density and/or cumulative
/// function, with every other statistic derived numerically.
///
/// Construction follows the available capabilities:
///
/// - density only — the CDF is obtained by integrating the density from the
///   lower support bound, the quantile function by root finding on that CDF
/// - cumulative only — the density is obtained by differentiating the CDF
/// - both — each is used directly
///
/// Mean, variance, entropy and mode are computed on first access and cached
/// in per-statistic compute-once cells; a derivation that fails to converge
/// surfaces as an [`Error`] and nothing is cached. Cloning produces an
/// independent distribution with an empty cache that shares the underlying
/// function references.
///
/// # Concurrency
///
/// The lazy cells are intentionally not thread-safe, so the type is `!Sync`:
/// a single instance belongs to one thread (or behind an external lock);
/// independent instances, including clones, may be used in parallel freely.
///
/// # Examples
///
/// ```
/// use unidist_core::{ContinuousDistribution, Support};
/// use unidist_generic::GenericContinuous;
///
/// // Unit exponential, defined by its density alone
/// let dist = GenericContinuous::from_pdf(Support::nonnegative(), |x: f64| (-x).exp());
/// assert!((dist.mean().unwrap() - 1.0).abs() < 1e-6);
/// assert!((dist.cdf(1.0).unwrap() - 0.6321205588).abs() < 1e-8);
/// ```
#[derive(Clone)]
pub struct GenericContinuous {
    pub(crate) support: Support,
    pub(crate) source: Source,
    pub(crate) quad: Quadrature,
    pub(crate) root: RootConfig,
    pub(crate) deriv: DerivConfig,
    pub(crate) overrides: Overrides,
    pub(crate) mean_cell: Memo,
    pub(crate) variance_cell: Memo,
    pub(crate) entropy_cell: Memo,
    pub(crate) mode_cell: Memo,
}

impl GenericContinuous {
    /// Assemble with default tolerances and an empty override table
    pub(crate) fn assemble(support: Support, source: Source) -> Self {
        Self {
            support,
            source,
            quad: Quadrature::default(),
            root: RootConfig::default(),
            deriv: DerivConfig::default(),
            overrides: Overrides::default(),
            mean_cell: Memo::new(),
            variance_cell: Memo::new(),
            entropy_cell: Memo::new(),
            mode_cell: Memo::new(),
        }
    }

    /// Construct from a density function with default tolerances
    pub fn from_pdf<F>(support: Support, pdf: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self::assemble(support, Source::Density(Arc::new(pdf)))
    }

    /// Construct from a cumulative function with default tolerances
    pub fn from_cdf<F>(support: Support, cdf: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self::assemble(support, Source::Cumulative(Arc::new(cdf)))
    }

    /// Construct from both functions with default tolerances
    pub fn from_functions<F, G>(support: Support, pdf: F, cdf: G) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
        G: Fn(f64) -> f64 + 'static,
    {
        Self::assemble(
            support,
            Source::Both {
                density: Arc::new(pdf),
                cumulative: Arc::new(cdf),
            },
        )
    }

    /// Wrap an existing distribution, keeping only its density.
    ///
    /// Every other statistic is re-derived numerically, which makes this the
    /// natural harness for comparing the engine against closed forms.
    pub fn from_density_of<D>(dist: &D) -> Self
    where
        D: ContinuousDistribution + Clone + 'static,
    {
        let support = dist.support();
        let d = dist.clone();
        Self::from_pdf(support, move |x| d.pdf(x))
    }

    /// Wrap an existing distribution, keeping only its cumulative function.
    ///
    /// The wrapped CDF is treated as a closed form; if it nevertheless
    /// returns an error the value enters the engine as NaN, which the
    /// integrator and root finder reject loudly rather than absorb.
    pub fn from_cumulative_of<D>(dist: &D) -> Self
    where
        D: ContinuousDistribution + Clone + 'static,
    {
        let support = dist.support();
        let d = dist.clone();
        Self::from_cdf(support, move |x| d.cdf(x).unwrap_or(f64::NAN))
    }

    /// Start a builder for tolerance and override configuration
    pub fn builder(support: Support) -> GenericBuilder {
        GenericBuilder::new(support)
    }

    /// The interval the mode search runs over.
    ///
    /// Unbounded supports make global optimization ill-posed, so the search
    /// is restricted to the central 99% of the probability mass; a finite
    /// support is used as-is.
    fn mode_search_interval(&self) -> Result<(f64, f64)> {
        if self.support.is_finite() {
            return Ok((self.support.lower(), self.support.upper()));
        }
        let lo = self.inverse_cdf(0.005)?;
        let hi = self.inverse_cdf(0.995)?;
        Ok((lo, hi))
    }
}

impl ContinuousDistribution for GenericContinuous {
    fn support(&self) -> Support {
        self.support
    }

    fn pdf(&self, x: f64) -> f64 {
        if !self.support.contains(x) {
            return 0.0;
        }
        match &self.source {
            Source::Density(f) | Source::Both { density: f, .. } => f(x),
            Source::Cumulative(cdf) => derivative::central_clamped(
                |t| cdf(t),
                x,
                self.deriv.step,
                self.support.lower(),
                self.support.upper(),
            )
            .max(0.0),
        }
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Err(Error::invalid_argument("cdf argument must not be NaN"));
        }
        if x <= self.support.lower() {
            return Ok(0.0);
        }
        if x >= self.support.upper() {
            return Ok(1.0);
        }
        match &self.source {
            Source::Cumulative(f) | Source::Both { cumulative: f, .. } => {
                Ok(f(x).clamp(0.0, 1.0))
            }
            Source::Density(pdf) => {
                let area = self.quad.integrate(|t| pdf(t), self.support.lower(), x)?;
                Ok(area.clamp(0.0, 1.0))
            }
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        // Boundary probabilities clamp to the exact support bounds without
        // touching the root finder
        if p == 0.0 {
            return Ok(self.support.lower());
        }
        if p == 1.0 {
            return Ok(self.support.upper());
        }

        let (seed_lo, grow_lo) = if self.support.is_unbounded_below() {
            let seed = if self.support.upper().is_finite() {
                self.support.upper() - 1.0
            } else {
                -1.0
            };
            (seed, true)
        } else {
            (self.support.lower(), false)
        };
        let (seed_hi, grow_hi) = if self.support.is_unbounded_above() {
            let seed = if self.support.lower().is_finite() {
                self.support.lower() + 1.0
            } else {
                1.0
            };
            (seed, true)
        } else {
            (self.support.upper(), false)
        };

        let (lo, hi) = expand_bracket(
            |x| self.cdf(x),
            p,
            seed_lo,
            seed_hi,
            grow_lo,
            grow_hi,
        )?;
        find_root(|x| self.cdf(x), p, lo, hi, &self.root)
    }

    fn mean(&self) -> Result<f64> {
        self.mean_cell.get_or_try(|| {
            if let Some(m) = self.overrides.mean {
                return Ok(m);
            }
            debug!("deriving mean by quadrature");
            self.quad.integrate(
                |x| x * self.pdf(x),
                self.support.lower(),
                self.support.upper(),
            )
        })
    }

    fn variance(&self) -> Result<f64> {
        self.variance_cell.get_or_try(|| {
            if let Some(v) = self.overrides.variance {
                return Ok(v);
            }
            let mean = self.mean()?;
            debug!("deriving variance by quadrature");
            let second = self.quad.integrate(
                |x| x * x * self.pdf(x),
                self.support.lower(),
                self.support.upper(),
            )?;
            Ok(second - mean * mean)
        })
    }

    fn entropy(&self) -> Result<f64> {
        self.entropy_cell.get_or_try(|| {
            if let Some(e) = self.overrides.entropy {
                return Ok(e);
            }
            debug!("deriving entropy by quadrature");
            let plogp = self.quad.integrate(
                |x| {
                    let d = self.pdf(x);
                    if d > 0.0 {
                        d * d.ln()
                    } else {
                        0.0
                    }
                },
                self.support.lower(),
                self.support.upper(),
            )?;
            Ok(-plogp)
        })
    }

    fn mode(&self) -> Result<f64> {
        self.mode_cell.get_or_try(|| {
            if let Some(m) = self.overrides.mode {
                return Ok(m);
            }
            let (lo, hi) = self.mode_search_interval()?;
            debug!("searching for the mode on [{lo}, {hi}]");
            find_maximum(|x| self.pdf(x), lo, hi, &self.root)
        })
    }

    fn median(&self) -> Result<f64> {
        if let Some(m) = self.overrides.median {
            return Ok(m);
        }
        self.inverse_cdf(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_exponential() -> GenericContinuous {
        GenericContinuous::from_pdf(Support::nonnegative(), |x: f64| (-x).exp())
    }

    #[test]
    fn test_pdf_outside_support_is_zero() {
        let d = unit_exponential();
        assert_eq!(d.pdf(-1.0), 0.0);
        assert!(d.pdf(1.0) > 0.0);
    }

    #[test]
    fn test_cdf_clamps_at_support_bounds() {
        let d = unit_exponential();
        assert_eq!(d.cdf(-5.0).unwrap(), 0.0);
        assert_eq!(d.cdf(f64::INFINITY).unwrap(), 1.0);
        assert!(d.cdf(f64::NAN).is_err());
    }

    #[test]
    fn test_inverse_cdf_boundaries() {
        let d = unit_exponential();
        assert_eq!(d.inverse_cdf(0.0).unwrap(), 0.0);
        assert_eq!(d.inverse_cdf(1.0).unwrap(), f64::INFINITY);
        assert!(matches!(
            d.inverse_cdf(-0.5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(d.inverse_cdf(1.5), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_statistics_are_cached() {
        let d = unit_exponential();
        assert!(d.mean_cell.get().is_none());
        let first = d.mean().unwrap();
        assert_eq!(d.mean_cell.get(), Some(first));
        // A second query returns the identical cached value
        assert_eq!(d.mean().unwrap(), first);
    }

    #[test]
    fn test_clone_does_not_share_cache() {
        let d = unit_exponential();
        d.mean().unwrap();
        let copy = d.clone();
        assert!(copy.mean_cell.get().is_none());
        // Recomputation arrives at the same value independently
        assert_eq!(copy.mean().unwrap(), d.mean().unwrap());
    }

    #[test]
    fn test_overrides_bypass_derivation() {
        let d = GenericContinuous::builder(Support::nonnegative())
            .density(|x: f64| (-x).exp())
            .overrides(Overrides {
                mean: Some(100.0),
                median: Some(-3.0),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(d.mean().unwrap(), 100.0);
        assert_eq!(d.median().unwrap(), -3.0);
        // Non-overridden statistics still derive numerically
        assert!((d.entropy().unwrap() - 1.0).abs() < 1e-6);
    }
}
