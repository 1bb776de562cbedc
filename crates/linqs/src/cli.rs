//! Command-line arguments.

use clap::{ArgAction, Parser};

use crate::exercises::Exercise;
use crate::output::OutputMode;

/// Runs declarative query exercises over built-in sample collections
/// and prints the results.
#[derive(Debug, Parser)]
#[command(name = "linqs", version)]
pub struct Cli {
    /// Exercise to run; repeat to run several. Runs all when omitted.
    #[arg(short, long = "exercise", value_enum)]
    pub exercises: Vec<Exercise>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Selected exercises in transcript order, or all of them.
    pub fn selected(&self) -> Vec<Exercise> {
        if self.exercises.is_empty() {
            return Exercise::ALL.to_vec();
        }
        let mut selected = self.exercises.clone();
        selected.sort_by_key(|e| Exercise::ALL.iter().position(|all| all == e));
        selected.dedup();
        selected
    }

    /// Default log directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
