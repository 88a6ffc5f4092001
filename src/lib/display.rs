//! Rendering of records, sort steps and statistics for the terminal.
//!
//! Everything here builds strings or [`Table`]s and never writes to the terminal itself; see
//! [`crate::terminal`] for the part that talks to the user.

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent};
use console::style;

use crate::logging::format_elapsed;
use crate::record::Record;
use crate::sort::{SortMode, SortStatistics, StepEvent, StepKind, TimedStatistics};

/// Application title shown at the top of every screen.
pub const TITLE: &str = "POKEMON SELECTION SORT";

/// Menu key for the unsorted listing.
pub const LIST_CHOICE: &str = "1";

/// Menu key for leaving the program.
pub const EXIT_CHOICE: &str = "0";

/// Set some defaults for how we format tables
fn table_new() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::MiddleHeaderIntersections, ' ');
    table
}

fn header_cells(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|name| Cell::new(name).add_attribute(Attribute::Bold)).collect()
}

fn center_columns(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }
}

/// The boxed application header.
#[must_use]
pub fn header() -> String {
    let bar = "═".repeat(TITLE.chars().count() + 4);
    format!("\n╔{bar}╗\n║  {}  ║\n╚{bar}╝", style(TITLE).bold().blue())
}

/// The main menu text.
#[must_use]
pub fn menu() -> String {
    let mut lines = vec![format!("{}", style("MENU").bold())];
    lines.push(format!("{LIST_CHOICE}. List of Pokemons (Original Order)"));
    for mode in SortMode::ALL {
        lines.push(format!("{}. {}", mode.menu_choice(), mode.menu_label()));
    }
    lines.push(format!("{EXIT_CHOICE}. Exit"));
    lines.join("\n")
}

/// All menu keys, in display order.
#[must_use]
pub fn menu_choices() -> Vec<&'static str> {
    let mut choices = vec![EXIT_CHOICE, LIST_CHOICE];
    choices.extend(SortMode::ALL.iter().map(|mode| mode.menu_choice()));
    choices
}

/// Table of records with Name, Type, HP, Gen and Stage columns.
#[must_use]
pub fn record_table(records: &[Record]) -> Table {
    let mut table = table_new();
    table.set_header(header_cells(&["Name", "Type", "HP", "Gen", "Stage"]));
    for record in records {
        table.add_row(vec![
            Cell::new(record.name()).fg(Color::Cyan),
            Cell::new(record.types_display()),
            Cell::new(record.hit_points()),
            Cell::new(record.generation()),
            Cell::new(record.stage_label()),
        ]);
    }
    center_columns(&mut table, &[2, 3]);
    table
}

/// A record table preceded by a bold title line.
#[must_use]
pub fn titled_record_table(title: &str, records: &[Record]) -> String {
    format!("{}\n{}", style(title).bold(), record_table(records))
}

/// Role of a row in the step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Sorted,
    Current,
    Min,
    Compare,
    Unsorted,
}

impl StepStatus {
    /// Classifies a row. Earlier roles win: a row at the boundary is `Current` even when it is
    /// also the minimum.
    #[must_use]
    pub fn classify(
        index: usize,
        boundary: usize,
        min_index: usize,
        compare_index: Option<usize>,
    ) -> Self {
        if index < boundary {
            Self::Sorted
        } else if index == boundary {
            Self::Current
        } else if index == min_index {
            Self::Min
        } else if compare_index == Some(index) {
            Self::Compare
        } else {
            Self::Unsorted
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "✓ Sorted",
            Self::Current => "Current",
            Self::Min => "Min",
            Self::Compare => "Compare",
            Self::Unsorted => "Unsorted",
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Self::Sorted => Some(Color::Green),
            Self::Current => Some(Color::Yellow),
            Self::Min => Some(Color::Cyan),
            Self::Compare => Some(Color::Magenta),
            Self::Unsorted => None,
        }
    }

    fn styled(self, text: impl ToString) -> Cell {
        let cell = Cell::new(text);
        let cell = match self.color() {
            Some(color) => cell.fg(color),
            None => cell,
        };
        match self {
            Self::Min => cell.add_attribute(Attribute::Bold),
            Self::Sorted => cell.add_attribute(Attribute::Dim),
            _ => cell,
        }
    }
}

/// Table of the sequence at one step, with a status column per row.
#[must_use]
pub fn step_table(event: &StepEvent<'_, Record>) -> Table {
    let mut table = table_new();
    table.set_header(header_cells(&["Index", "Name", "Type", "HP", "Status"]));
    for (index, record) in event.items.iter().enumerate() {
        let status =
            StepStatus::classify(index, event.boundary, event.min_index, event.compare_index);
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            status.styled(record.name()),
            Cell::new(record.types_display()),
            Cell::new(record.hit_points()),
            status.styled(status.label()),
        ]);
    }
    center_columns(&mut table, &[0, 3]);
    table
}

/// The live counter line shown under each narration.
#[must_use]
pub fn counters_line(stats: &SortStatistics) -> String {
    format!("Comparisons: {} | Swaps: {}", stats.comparisons, stats.swaps)
}

/// "→ Swapping: A ↔ B" for a pre-swap event.
#[must_use]
pub fn swap_message(event: &StepEvent<'_, Record>) -> String {
    let name = |i: usize| event.items.get(i).map_or("?", Record::name);
    format!(
        "{} {} ↔ {}",
        style("→ Swapping:").bold(),
        name(event.boundary),
        name(event.min_index)
    )
}

/// Full screen body for a step: narration, counters and table.
#[must_use]
pub fn step_screen(event: &StepEvent<'_, Record>) -> String {
    let mut out = String::new();
    if event.kind == StepKind::PreSwap {
        out.push('\n');
        out.push_str(&swap_message(event));
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{}\n{}\n{}",
        style(event.description()).bold(),
        style(counters_line(&event.stats)).dim(),
        step_table(event)
    ));
    out
}

/// End-of-pass summary with running totals.
#[must_use]
pub fn pass_summary(event: &StepEvent<'_, Record>) -> String {
    format!(
        "\n{}\n{}",
        style(event.description()).bold(),
        style(format!("Running totals - {}", counters_line(&event.stats))).dim()
    )
}

/// Message shown when a narrated sort finishes.
#[must_use]
pub fn completion_message(stats: &SortStatistics) -> String {
    format!(
        "\n{}\n\n{}\n  Total Comparisons: {}\n  Total Swaps: {}\n",
        style("✓ Sorting Complete!").green().bold(),
        style("Final Statistics:").cyan().bold(),
        style(stats.comparisons).yellow(),
        style(stats.swaps).yellow()
    )
}

/// Statistics block printed under the sorted table.
#[must_use]
pub fn statistics_block(timed: &TimedStatistics) -> String {
    format!(
        "\n{}\n  Total Comparisons: {}\n  Total Swaps: {}\n  Time Elapsed: {}\n",
        style("Algorithm Statistics:").cyan().bold(),
        style(timed.stats.comparisons).yellow(),
        style(timed.stats.swaps).yellow(),
        style(format_elapsed(timed.elapsed)).green()
    )
}

/// Message shown when a narrated sort is stopped early.
#[must_use]
pub fn abort_message(stats: &SortStatistics) -> String {
    format!(
        "\n{}\n{}",
        style("✗ Sorting stopped before completion.").red().bold(),
        style(format!("Partial statistics - {}", counters_line(stats))).dim()
    )
}

#[must_use]
pub fn exit_message() -> String {
    format!("\n{}\n", style("Thank you for using Pokemon Selection Sort!").bold())
}
