//! Shared sort runner used by the `sort` and `menu` commands.
//!
//! Takes a fresh copy of the Pokédex, sorts it with the requested narration, times the run, and
//! renders the titled table followed by the statistics block.

use anyhow::Result;
use log::info;
use pokesort_lib::dataset::pokedex;
use pokesort_lib::display;
use pokesort_lib::logging::{OperationTimer, log_sort_summary};
use pokesort_lib::record::Record;
use pokesort_lib::sort::{
    SortMode, SortStatistics, StepLogger, TimedStatistics, selection_sort, selection_sort_observed,
};
use pokesort_lib::terminal::{NarratorError, Screen, StepNarrator};

use crate::commands::common::Narration;

/// How a sort run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// The sort finished and its table was shown.
    Completed(TimedStatistics),
    /// The user quit part way through.
    Stopped(SortStatistics),
}

/// Sorts a copy of the Pokédex by `mode` and shows the result on `screen`.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or the screen cannot be used.
pub fn run_sort<S: Screen + ?Sized>(
    screen: &mut S,
    mode: SortMode,
    narration: Narration,
) -> Result<SortOutcome> {
    let mut records = pokedex()?;
    let timer = OperationTimer::new(&format!("Sorting {} records ({})", records.len(), mode.title()));

    let stats = match sort_records(screen, &mut records, mode, narration)? {
        Ok(stats) => stats,
        Err(partial) => {
            info!("Sort stopped by user after {partial}");
            screen.show(&display::abort_message(&partial))?;
            return Ok(SortOutcome::Stopped(partial));
        }
    };

    let timed = TimedStatistics::new(stats, timer.elapsed());
    if let Narration::Visual(options) = narration {
        // Results get a fresh screen once the step view is done.
        if options.clear {
            screen.clear()?;
            screen.show(&display::header())?;
        }
    }
    screen.show(&display::titled_record_table(mode.title(), &records))?;
    screen.show(&display::statistics_block(&timed))?;

    timer.log_completion(records.len());
    log_sort_summary(mode, records.len(), &stats);
    Ok(SortOutcome::Completed(timed))
}

/// Runs the engine. The inner `Err` carries the counters of a sort the user stopped.
fn sort_records<S: Screen + ?Sized>(
    screen: &mut S,
    records: &mut [Record],
    mode: SortMode,
    narration: Narration,
) -> Result<std::result::Result<SortStatistics, SortStatistics>> {
    match narration {
        Narration::Quiet => Ok(Ok(selection_sort(records, mode))),
        Narration::Logged => match selection_sort_observed(records, mode, &mut StepLogger) {
            Ok(stats) => Ok(Ok(stats)),
            Err(aborted) => match aborted.error {},
        },
        Narration::Visual(options) => {
            let mut narrator = StepNarrator::new(screen, options);
            match selection_sort_observed(records, mode, &mut narrator) {
                Ok(stats) => {
                    narrator.finish(&stats)?;
                    Ok(Ok(stats))
                }
                Err(aborted) => match aborted.error {
                    NarratorError::Aborted => Ok(Err(aborted.stats)),
                    NarratorError::Io(_) => Err(aborted.into()),
                },
            }
        }
    }
}
