//! Integration tests for pokesort.
//!
//! These tests validate end-to-end workflows that span multiple modules, and drive the built
//! binary the way a user would.

mod test_cli_commands;
mod test_error_paths;
mod test_sort_properties;
mod test_sort_workflows;
