//! Error types for query construction.

use thiserror::Error;

/// Errors raised while building a query.
///
/// Evaluation itself never fails: a clause that cannot be applied to a field
/// simply does not match.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The pattern passed to a regex clause did not compile.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Operator cannot be applied to the given value kind.
    #[error("operator '{op}' is not valid for {value_type} values")]
    InvalidOperatorForType {
        op: &'static str,
        value_type: &'static str,
    },

    /// Range bounds were given in the wrong order.
    #[error("range lower bound {low} is greater than upper bound {high}")]
    InvertedRange { low: String, high: String },
}

/// Result type for query construction.
pub type Result<T> = std::result::Result<T, QueryError>;
