//! # linqs
//!
//! Declarative query exercises over small in-memory collections: city
//! names, integers, companies with their employees, and students.
//!
//! Each exercise in [`exercises`] is a pure function that builds a
//! [`linqs_query::Query`] and runs it against borrowed sample records.
//! [`report`] strings them together into the demonstration transcript and
//! [`output`] renders it.
//!
//! ```
//! use linqs::exercises::numbers;
//! use linqs::sample;
//!
//! let eights = numbers::multiples_of_eight_descending(&sample::numbers());
//! assert_eq!(eights, vec![40, 24, 16, 8]);
//! ```

pub mod cli;
pub mod error;
pub mod exercises;
pub mod model;
pub mod output;
pub mod report;
pub mod sample;

pub use error::{ExerciseError, Result};
