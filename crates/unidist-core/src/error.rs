//! Error types for distribution construction and numerical evaluation
//!
//! Provides a unified error type shared by all unidist crates.

use thiserror::Error;

/// Core error type for distribution operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a constructor or accessor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An iterative routine exhausted its budget without reaching tolerance
    #[error("{operation} failed to converge within {iterations} iterations")]
    Convergence {
        operation: &'static str,
        iterations: usize,
    },

    /// A root-finding bracket does not straddle the target value
    #[error("interval [{lower}, {upper}] does not bracket the target {target}")]
    InvalidBracket {
        lower: f64,
        upper: f64,
        target: f64,
    },

    /// A statistic is mathematically undefined for the given parameters
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Create an error for an invalid argument
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidArgument(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create a convergence error for a named operation
    pub fn convergence(operation: &'static str, iterations: usize) -> Self {
        Self::Convergence {
            operation,
            iterations,
        }
    }

    /// Create an error for a mathematically undefined statistic
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Check that a probability lies in [0, 1]
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        Ok(())
    }

    /// Check that a distribution parameter is finite and strictly positive
    pub fn check_positive(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "{name} must be finite and positive, got {value}"
            )));
        }
        Ok(())
    }
}
