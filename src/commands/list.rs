//! List the Pokédex in its original order.

use anyhow::Result;
use clap::Parser;
use log::info;
use pokesort_lib::dataset::pokedex;
use pokesort_lib::display;
use pokesort_lib::terminal::{Screen, TermScreen};

use crate::commands::command::Command;

/// Title shown above the unsorted table.
pub const LIST_TITLE: &str = "Original List";

/// List the Pokédex.
#[derive(Debug, Parser)]
#[command(
    name = "list",
    about = "\x1b[38;5;72m[VIEW]\x1b[0m    \x1b[36mList the Pokédex in its original order\x1b[0m"
)]
pub struct List {}

/// Shows the unsorted Pokédex table on `screen`.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or the screen cannot be written.
pub fn show_original<S: Screen + ?Sized>(screen: &mut S) -> Result<usize> {
    let records = pokedex()?;
    screen.show(&display::titled_record_table(LIST_TITLE, &records))?;
    Ok(records.len())
}

impl Command for List {
    fn execute(&self, command_line: &str) -> Result<()> {
        info!("Command: {command_line}");
        let count = show_original(&mut TermScreen::stdout())?;
        info!("Listed {count} records");
        Ok(())
    }
}
