//! Compute-once memoization for lazily derived statistics

use std::cell::Cell;

use unidist_core::Result;

/// A compute-once cell for a lazily derived scalar statistic.
///
/// A distribution is immutable after construction except for these cells:
/// each statistic transitions from unset to computed exactly once, on first
/// access. A failed computation leaves the cell unset, so the failure is
/// reported again (not masked) on the next access.
///
/// The cell is deliberately built on [`Cell`], making any containing type
/// `!Sync`: concurrent first access from several threads is a documented
/// caller responsibility, not something the engine pays for internally.
#[derive(Debug, Default)]
pub struct Memo {
    cell: Cell<Option<f64>>,
}

impl Memo {
    /// An unset cell
    pub fn new() -> Self {
        Self {
            cell: Cell::new(None),
        }
    }

    /// Return the cached value, or compute, store and return it.
    ///
    /// Errors from `init` propagate without being cached.
    pub fn get_or_try<F>(&self, init: F) -> Result<f64>
    where
        F: FnOnce() -> Result<f64>,
    {
        if let Some(v) = self.cell.get() {
            return Ok(v);
        }
        let v = init()?;
        self.cell.set(Some(v));
        Ok(v)
    }

    /// The cached value, if any
    pub fn get(&self) -> Option<f64> {
        self.cell.get()
    }
}

/// Cloning yields an unset cell: a cloned distribution recomputes its
/// statistics independently rather than sharing cached values.
impl Clone for Memo {
    fn clone(&self) -> Self {
        Self::new()
    }
}
