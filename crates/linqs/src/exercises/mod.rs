//! Exercise query sets, one module per sample collection.
//!
//! Every function is a pure query over borrowed records: matches come back
//! as references in input order unless the exercise asks for a sort.

pub mod cities;
pub mod companies;
pub mod employees;
pub mod numbers;
pub mod students;

use clap::ValueEnum;
use serde::Serialize;

/// Selects which exercise group to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Cities,
    Numbers,
    Companies,
    Employees,
    Students,
}

impl Exercise {
    /// Every exercise in transcript order.
    pub const ALL: [Exercise; 5] = [
        Exercise::Cities,
        Exercise::Numbers,
        Exercise::Companies,
        Exercise::Employees,
        Exercise::Students,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Exercise::Cities => "cities",
            Exercise::Numbers => "numbers",
            Exercise::Companies => "companies",
            Exercise::Employees => "employees",
            Exercise::Students => "students",
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
