//! Output mode control and transcript rendering.
//!
//! [`OutputMode`] decides whether section headers are styled, left plain,
//! or whether the whole transcript is serialized as JSON.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::report::Section;

/// Controls how the transcript is rendered.
///
/// This is the user-facing enum for the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Auto-detect: a terminal gets Term, a pipe gets Text
    #[default]
    Auto,
    /// Always style section headers
    Term,
    /// Never style (plain text)
    Text,
    /// Serialize sections as JSON
    Json,
}

impl OutputMode {
    /// Returns true if this mode serializes data instead of printing text.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// Resolves Auto to Term or Text depending on whether stdout is attended.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::user_attended() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}

/// Writes `sections` to `out` in the given mode.
///
/// Text modes print each title followed by a colon, then the section rows,
/// with a blank line between sections.
pub fn render(sections: &[Section], mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
    let mode = mode.resolve_auto();
    if mode.is_structured() {
        serde_json::to_writer_pretty(&mut *out, sections)?;
        return writeln!(out);
    }

    let styled = mode == OutputMode::Term;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let header = format!("{}:", section.title);
        if styled {
            writeln!(out, "{}", console::style(header).bold().force_styling(true))?;
        } else {
            writeln!(out, "{header}")?;
        }
        for line in section.rows.lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
