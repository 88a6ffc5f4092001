//! Sort the Pokédex with an instrumented selection sort.
//!
//! # Sort Keys
//!
//! - **Stage**: Basic, Stage 1, Stage 2, then anything else
//! - **Generation**: ascending generation number
//! - **HP**: ascending hit points
//! - **Type**: primary type in canonical type-chart order, unknown types last
//! - **Name**: alphabetical, case-sensitive

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use pokesort_lib::sort::SortMode;
use pokesort_lib::terminal::TermScreen;

use crate::commands::command::Command;
use crate::commands::common::StepOptions;
use crate::commands::runner::{SortOutcome, run_sort};

/// Sort key for the Pokédex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortModeArg {
    /// Evolution stage (Basic < Stage 1 < Stage 2 < other)
    Stage,
    /// Generation number
    Generation,
    /// Hit points
    Hp,
    /// Primary type in type-chart order
    Type,
    /// Name, A-Z
    Name,
}

impl From<SortModeArg> for SortMode {
    fn from(arg: SortModeArg) -> Self {
        match arg {
            SortModeArg::Stage => SortMode::Stage,
            SortModeArg::Generation => SortMode::Generation,
            SortModeArg::Hp => SortMode::HitPoints,
            SortModeArg::Type => SortMode::Type,
            SortModeArg::Name => SortMode::Name,
        }
    }
}

/// Sort the Pokédex.
#[derive(Debug, Parser)]
#[command(
    name = "sort",
    about = "\x1b[38;5;72m[SORT]\x1b[0m    \x1b[36mSort the Pokédex by stage, generation, HP, type, or name\x1b[0m",
    long_about = r#"
Sort a copy of the embedded Pokédex with selection sort and print the result.

Every run reports the number of key comparisons (always n(n-1)/2), the number of
swaps, and the elapsed time.

SORT KEYS:

  stage        Evolution stage: Basic, Stage 1, Stage 2, then anything else.

  generation   Generation number, ascending.

  hp           Hit points, lowest to highest.

  type         Primary type in type-chart order (Normal, Fire, Water, ...).
               Unrecognized types sort last.

  name         Name, alphabetical (case-sensitive).

STEP MODE:

  --step draws every comparison and swap, waiting for Enter after each one.
  Enter q at the prompt to stop the sort early.

EXAMPLES:

  # Sort by hit points
  pokesort sort --by hp

  # Watch a sort by type, one step at a time
  pokesort sort --by type --step

  # Stream every step without pausing or clearing the screen
  pokesort sort --by name --step --no-pause --no-clear
"#
)]
pub struct Sort {
    /// Sort key.
    #[arg(short = 'b', long = "by", value_enum)]
    pub by: SortModeArg,

    #[command(flatten)]
    pub steps: StepOptions,
}

impl Command for Sort {
    fn execute(&self, command_line: &str) -> Result<()> {
        info!("Command: {command_line}");
        let mode = SortMode::from(self.by);
        let narration = self.steps.narration();
        info!("Sort key: {}", mode.title());
        info!("Narration: {narration:?}");

        match run_sort(&mut TermScreen::stdout(), mode, narration)? {
            SortOutcome::Completed(_) => Ok(()),
            SortOutcome::Stopped(partial) => bail!("Sorting stopped by user after {partial}"),
        }
    }
}
