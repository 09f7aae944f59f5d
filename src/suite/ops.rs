//! Aggregation operations over integer slices.
//!
//! Free functions backing the suite entry points, usable directly on any
//! slice so the operations can be exercised in isolation.

use super::error::{SuiteError, SuiteResult};

/// Minimum value in the slice.
///
/// # Errors
///
/// Returns [`SuiteError::EmptySequence`] when the slice is empty.
pub fn min(values: &[i64]) -> SuiteResult<i64> {
    values
        .iter()
        .copied()
        .min()
        .ok_or(SuiteError::EmptySequence { operation: "min" })
}

/// Maximum value in the slice.
///
/// # Errors
///
/// Returns [`SuiteError::EmptySequence`] when the slice is empty.
pub fn max(values: &[i64]) -> SuiteResult<i64> {
    values
        .iter()
        .copied()
        .max()
        .ok_or(SuiteError::EmptySequence { operation: "max" })
}

/// Sum of the slice elements.
///
/// Returns 0 for an empty slice (additive identity). Accumulates in `i64`,
/// which keeps consecutive-integer datasets far larger than the default
/// configuration clear of overflow.
#[must_use]
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Arithmetic mean of the slice as a floating-point quotient.
///
/// Division is by element count with `f64` semantics, never integer
/// truncation.
///
/// # Errors
///
/// Returns [`SuiteError::EmptySequence`] when the slice is empty.
pub fn average(values: &[i64]) -> SuiteResult<f64> {
    if values.is_empty() {
        return Err(SuiteError::EmptySequence {
            operation: "average",
        });
    }
    Ok(sum(values) as f64 / values.len() as f64)
}
