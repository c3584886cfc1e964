//! Builder and closed-form override table for [`GenericContinuous`]

use std::sync::Arc;

use unidist_core::{Error, Result, Support};
use unidist_numeric::{DerivConfig, QuadConfig, Quadrature, RootConfig};

use crate::generic::{GenericContinuous, RealFn, Source};
use crate::memo::Memo;

/// Closed-form statistic values that bypass the numeric derivations.
///
/// A concrete distribution with exact formulas for some statistics supplies
/// them here at construction; the engine computes the rest numerically. The
/// table is consulted once per statistic, before any numerical work starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub entropy: Option<f64>,
    pub mode: Option<f64>,
    pub median: Option<f64>,
}

/// Builder for [`GenericContinuous`].
///
/// At least one of [`density`](Self::density) and
/// [`cumulative`](Self::cumulative) must be supplied;
/// [`build`](Self::build) fails with [`Error::InvalidArgument`] otherwise.
///
/// # Examples
///
/// ```
/// use unidist_core::{ContinuousDistribution, Support};
/// use unidist_generic::GenericBuilder;
///
/// let dist = GenericBuilder::new(Support::nonnegative())
///     .density(|x: f64| (-x).exp())
///     .tolerance(1e-9)
///     .build()
///     .unwrap();
/// assert!((dist.mean().unwrap() - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone)]
pub struct GenericBuilder {
    support: Support,
    density: Option<RealFn>,
    cumulative: Option<RealFn>,
    quad: QuadConfig,
    root: RootConfig,
    deriv: DerivConfig,
    overrides: Overrides,
}

impl GenericBuilder {
    /// Start building a distribution on the given support
    pub fn new(support: Support) -> Self {
        Self {
            support,
            density: None,
            cumulative: None,
            quad: QuadConfig::default(),
            root: RootConfig::default(),
            deriv: DerivConfig::default(),
            overrides: Overrides::default(),
        }
    }

    /// Supply the probability density function
    pub fn density<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.density = Some(Arc::new(f));
        self
    }

    /// Supply the cumulative distribution function
    pub fn cumulative<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.cumulative = Some(Arc::new(f));
        self
    }

    /// Relative tolerance accepted by the quadrature integrator
    pub fn tolerance(mut self, rel_tolerance: f64) -> Self {
        self.quad.rel_tolerance = rel_tolerance;
        self
    }

    /// Subdivision budget for the quadrature integrator; exceeding it turns
    /// a statistic query into an [`Error::Convergence`]
    pub fn max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.quad.max_subdivisions = max_subdivisions;
        self
    }

    /// Settings for root finding and mode search
    pub fn root_config(mut self, config: RootConfig) -> Self {
        self.root = config;
        self
    }

    /// Stencil width used when the density is derived from the CDF
    pub fn derivative_step(mut self, step: f64) -> Self {
        self.deriv.step = step;
        self
    }

    /// Closed-form statistic overrides
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when neither a density nor a cumulative
    /// function was supplied.
    pub fn build(self) -> Result<GenericContinuous> {
        let source = match (self.density, self.cumulative) {
            (Some(density), Some(cumulative)) => Source::Both {
                density,
                cumulative,
            },
            (Some(density), None) => Source::Density(density),
            (None, Some(cumulative)) => Source::Cumulative(cumulative),
            (None, None) => {
                return Err(Error::invalid_argument(
                    "a density or a cumulative function is required",
                ))
            }
        };

        Ok(GenericContinuous {
            support: self.support,
            source,
            quad: Quadrature::new(self.quad),
            root: self.root,
            deriv: self.deriv,
            overrides: self.overrides,
            mean_cell: Memo::new(),
            variance_cell: Memo::new(),
            entropy_cell: Memo::new(),
            mode_cell: Memo::new(),
        })
    }
}
