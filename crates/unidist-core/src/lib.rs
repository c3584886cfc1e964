//! Core traits and types for univariate distributions
//!
//! This crate provides the shared foundation for the unidist ecosystem:
//!
//! - [`ContinuousDistribution`] — the contract every distribution satisfies,
//!   whether its statistics come from closed forms or from the numerical
//!   engine in `unidist-generic`
//! - [`Support`] — the (possibly unbounded) interval a density lives on
//! - [`Error`] / [`Result`] — the unified error taxonomy: invalid arguments,
//!   convergence failures, invalid root-finding brackets and mathematically
//!   undefined statistics
//! - [`math`] — the special functions the catalog distributions need
//!   (error function, standard-normal CDF/quantile, log-gamma, incomplete
//!   beta)
//!
//! # Example
//!
//! ```
//! use unidist_core::{Error, Support};
//!
//! let support = Support::nonnegative();
//! assert!(support.contains(2.0));
//! assert!(Error::check_probability(0.3).is_ok());
//! ```

pub mod error;
pub mod math;
pub mod support;
pub mod traits;

pub use error::{Error, Result};
pub use support::Support;
pub use traits::ContinuousDistribution;
