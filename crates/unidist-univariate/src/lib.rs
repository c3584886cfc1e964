//! Closed-form univariate distributions
//!
//! Each distribution implements the shared
//! [`ContinuousDistribution`] contract with exact formulas where they
//! exist, falling back on the numerical primitives where they do not
//! (the beta-prime quantile goes through the bracketed root finder, its
//! entropy through quadrature).
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Exponential`] | rate λ | [0, ∞) |
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Rayleigh`] | scale σ | [0, ∞) |
//! | [`Levy`] | location μ, scale c | [μ, ∞) |
//! | [`BetaPrime`] | shape α, shape β | [0, ∞) |
//!
//! # Example
//!
//! ```
//! use unidist_core::ContinuousDistribution;
//! use unidist_univariate::Rayleigh;
//!
//! let d = Rayleigh::new(2.0).unwrap();
//! assert_eq!(d.mode().unwrap(), 2.0);
//! let x = d.inverse_cdf(0.5).unwrap();
//! assert!((d.cdf(x).unwrap() - 0.5).abs() < 1e-12);
//! ```

pub mod beta_prime;
pub mod exponential;
pub mod levy;
pub mod normal;
pub mod rayleigh;

pub use beta_prime::BetaPrime;
pub use exponential::Exponential;
pub use levy::Levy;
pub use normal::Normal;
pub use rayleigh::Rayleigh;

// Re-export the contract these distributions implement
pub use unidist_core::{ContinuousDistribution, Error, Result, Support};
