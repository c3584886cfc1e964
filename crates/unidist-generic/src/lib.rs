//! Generic continuous distribution engine
//!
//! Defines a distribution by nothing more than a support interval and a
//! density and/or cumulative function, then derives every other statistic
//! numerically:
//!
//! - CDF by adaptive quadrature over the density (density-only construction)
//! - density by finite differences on the CDF (cumulative-only construction)
//! - quantile function by bracket expansion plus Brent root finding
//! - mean, variance and entropy by quadrature over the support
//! - mode by golden-section search over the central 99% of the mass
//!
//! Mean, variance, entropy and mode are computed once, on first access, and
//! cached in per-statistic compute-once cells ([`Memo`]). Convergence
//! failures surface as errors and are never cached; closed-form values can
//! short-circuit any derivation through the [`Overrides`] table.
//!
//! # Example
//!
//! ```
//! use unidist_core::{ContinuousDistribution, Support};
//! use unidist_generic::GenericContinuous;
//!
//! let dist = GenericContinuous::from_pdf(Support::nonnegative(), |x: f64| (-x).exp());
//!
//! let median = dist.inverse_cdf(0.5).unwrap();
//! assert!((median - std::f64::consts::LN_2).abs() < 1e-8);
//! ```

pub mod builder;
pub mod generic;
pub mod memo;

pub use builder::{GenericBuilder, Overrides};
pub use generic::{GenericContinuous, RealFn};
pub use memo::Memo;

// Re-export the contract the engine implements
pub use unidist_core::{ContinuousDistribution, Error, Result, Support};
