//! Record types queried by the exercises.
//!
//! Records are plain values built once from the sample data and never
//! mutated by a query.

mod company;
mod student;

pub use company::{BusinessProfile, Company, Employee};
pub use student::Student;
