//! Numerical primitives for the unidist distribution engine
//!
//! Exactly the three tools the generic distribution facade composes:
//!
//! - [`Quadrature`] — adaptive Gauss-Kronrod integration over finite or
//!   infinite intervals, behind [`QuadConfig`]
//! - [`find_root`] / [`find_maximum`] / [`expand_bracket`] — Brent-style
//!   bracketed root search, golden-section extremum search and the
//!   caller-side bracket-doubling pre-step, behind [`RootConfig`]
//! - [`derivative`] — central-difference stencils with boundary clamping,
//!   behind [`DerivConfig`]
//!
//! This is deliberately not a general numerical-analysis toolbox; every
//! routine exists because a distribution statistic needs it.
//!
//! # Example
//!
//! ```
//! use unidist_numeric::{find_root, Quadrature, RootConfig};
//!
//! let quad = Quadrature::default();
//! let cdf = |x: f64| quad.integrate(|t: f64| (-t).exp(), 0.0, x);
//!
//! // Invert the unit-exponential CDF at p = 1 - 1/e
//! let p = 1.0 - (-1.0f64).exp();
//! let x = find_root(cdf, p, 0.0, 10.0, &RootConfig::default()).unwrap();
//! assert!((x - 1.0).abs() < 1e-8);
//! ```

pub mod derivative;
pub mod quadrature;
pub mod root;

pub use derivative::DerivConfig;
pub use quadrature::{QuadConfig, Quadrature};
pub use root::{expand_bracket, find_maximum, find_root, RootConfig};

// Re-export the shared error type for downstream convenience
pub use unidist_core::{Error, Result};
