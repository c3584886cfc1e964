//! Univariate probability distributions with a generic numerical engine
//!
//! A catalog of continuous univariate distributions behind one contract,
//! [`ContinuousDistribution`]: density, log-density, CDF, survival function,
//! quantile function, hazard functions and the descriptive moments.
//!
//! The heart of the library is [`GenericContinuous`]: hand it a support
//! interval and a density and/or cumulative function, and every other
//! statistic is derived numerically (CDF by adaptive Gauss-Kronrod
//! quadrature, density by finite differences, quantiles by bracketed Brent
//! root finding, the mode by golden-section search), each derived statistic
//! computed once and cached. The closed-form distributions in the catalog
//! implement the same contract with exact formulas, which makes them both
//! production plug-ins and test oracles for the engine.
//!
//! # Quick start
//!
//! ```
//! use unidist::{ContinuousDistribution, GenericContinuous, Support};
//!
//! // A distribution defined by nothing but its density
//! let dist = GenericContinuous::from_pdf(Support::nonnegative(), |x: f64| (-x).exp());
//!
//! assert!((dist.mean().unwrap() - 1.0).abs() < 1e-6);
//! assert!((dist.cdf(1.0).unwrap() - 0.6321205588).abs() < 1e-8);
//!
//! // Closed forms implement the same contract
//! use unidist::Exponential;
//! let exact = Exponential::standard();
//! assert_eq!(exact.mean().unwrap(), 1.0);
//! ```
//!
//! # Crates
//!
//! - `unidist-core` — the contract, support intervals, error taxonomy and
//!   special functions
//! - `unidist-numeric` — quadrature, root finding and differentiation
//! - `unidist-generic` — the numerical engine facade
//! - `unidist-univariate` — the closed-form catalog

pub use unidist_core::{math, ContinuousDistribution, Error, Result, Support};
pub use unidist_generic::{GenericBuilder, GenericContinuous, Overrides};
pub use unidist_numeric::{
    expand_bracket, find_maximum, find_root, DerivConfig, QuadConfig, Quadrature, RootConfig,
};
pub use unidist_univariate::{BetaPrime, Exponential, Levy, Normal, Rayleigh};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BetaPrime, ContinuousDistribution, Error, Exponential, GenericBuilder,
        GenericContinuous, Levy, Normal, Overrides, Rayleigh, Result, Support,
    };
}
