#![deny(unsafe_code)]
// Clippy lint configuration for CI
// - missing_*_doc: documentation improvements tracked separately
// - must_use_candidate: rendering helpers return values callers always use
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! # pokesort - Pokédex Selection Sort Library
//!
//! This library sorts a small embedded Pokédex with an instrumented selection sort and renders
//! each step for a terminal audience.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`record`]** - Pokédex records, evolution stages and the canonical type order
//! - **[`dataset`]** - The embedded 18-entry Pokédex
//! - **[`sort`]** - Key policies, the selection sort engine and its step observers
//!
//! ### Presentation
//!
//! - **[`display`]** - Tables, narration and statistics rendering
//! - **[`terminal`]** - Screen abstraction and the step-by-step narrator
//!
//! ### Utilities
//!
//! - **[`errors`]** - Structured error types
//! - **[`validation`]** - Input validation helpers
//! - **[`logging`]** - Timing and summary logging
//!
//! ## Quick Start
//!
//! ```
//! use pokesort_lib::dataset::pokedex;
//! use pokesort_lib::sort::{SortMode, selection_sort};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut records = pokedex()?;
//! let stats = selection_sort(&mut records, SortMode::HitPoints);
//!
//! assert_eq!(records[0].name(), "Abra");
//! assert_eq!(stats.comparisons, 153);
//! # Ok(())
//! # }
//! ```
//!
//! ### Narrating a Sort
//!
//! ```
//! use pokesort_lib::dataset::pokedex;
//! use pokesort_lib::sort::{SortMode, selection_sort_observed};
//! use pokesort_lib::terminal::{NarratorOptions, ScriptedScreen, StepNarrator};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut records = pokedex()?;
//! let mut screen = ScriptedScreen::default();
//! let options = NarratorOptions { pause: false, clear: false };
//! let mut narrator = StepNarrator::new(&mut screen, options);
//! let stats = selection_sort_observed(&mut records, SortMode::Name, &mut narrator)?;
//! narrator.finish(&stats)?;
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod display;
pub mod errors;
pub mod logging;
pub mod record;
pub mod sort;
pub mod terminal;
pub mod validation;

pub use errors::{PokesortError, Result};
