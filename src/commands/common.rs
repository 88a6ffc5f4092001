//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use clap::Args;

use pokesort_lib::terminal::NarratorOptions;

/// How much of the sort to show while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration {
    /// Only the final table and statistics
    Quiet,
    /// Every step written to the log
    Logged,
    /// Every step drawn on the terminal
    Visual(NarratorOptions),
}

/// Options controlling step-by-step visualization.
#[derive(Debug, Clone, Default, Args)]
pub struct StepOptions {
    /// Show every comparison and swap as the sort runs
    #[arg(long = "step", conflicts_with = "trace")]
    pub step: bool,

    /// Do not wait for Enter between steps (requires --step)
    #[arg(long = "no-pause", requires = "step")]
    pub no_pause: bool,

    /// Do not clear the screen between steps (requires --step)
    #[arg(long = "no-clear", requires = "step")]
    pub no_clear: bool,

    /// Log every step at info level instead of drawing it
    #[arg(long = "trace")]
    pub trace: bool,
}

impl StepOptions {
    /// Resolves the flags into a narration mode.
    #[must_use]
    pub fn narration(&self) -> Narration {
        if self.step {
            Narration::Visual(NarratorOptions { pause: !self.no_pause, clear: !self.no_clear })
        } else if self.trace {
            Narration::Logged
        } else {
            Narration::Quiet
        }
    }
}
