//! Suite error types and result alias.

use thiserror::Error;

/// Result type alias for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors raised by aggregation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuiteError {
    /// The operation requires at least one element.
    ///
    /// Raised by min, max, and average over an empty dataset. Sum is exempt:
    /// it returns the additive identity instead.
    #[error("empty sequence: {operation} requires at least one element")]
    EmptySequence {
        /// Name of the failing operation.
        operation: &'static str,
    },
}
