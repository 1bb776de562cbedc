//! Errors raised by the exercises.

use chrono::{DateTime, Utc};
use linqs_query::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Subtracting the requested span from the reference instant left the
    /// representable date range.
    #[error("cannot go back {amount} {unit} from {now}")]
    DateOutOfRange {
        amount: i64,
        unit: &'static str,
        now: DateTime<Utc>,
    },
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
