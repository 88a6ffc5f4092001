//! CLI command implementations for pokesort.
//!
//! - [`list`] - Print the Pokédex in its original order
//! - [`sort`] - Sort the Pokédex by one key, optionally step by step
//! - [`menu`] - Interactive menu combining both
//!
//! [`runner`] holds the sort-and-report flow shared by `sort` and `menu`.

pub mod command;
pub mod common;
pub mod list;
pub mod menu;
pub mod runner;
pub mod sort;
