//! Input validation utilities
//!
//! This module provides common validation functions for record fields and interactive
//! parameters with consistent error messages.
//!
//! All validation functions use structured error types from [`crate::errors`] so that
//! callers can attach further context (e.g. the record being built).

use crate::errors::{PokesortError, Result};
use std::fmt::Display;

/// Validate that a string value is not empty or whitespace-only
///
/// # Arguments
/// * `value` - String to validate
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the value is blank
///
/// # Example
/// ```
/// use pokesort_lib::validation::validate_not_blank;
///
/// validate_not_blank("Pikachu", "name").unwrap();
///
/// let result = validate_not_blank("   ", "name");
/// assert!(result.is_err());
/// ```
pub fn validate_not_blank(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PokesortError::InvalidParameter {
            parameter: name.to_string(),
            reason: "Must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Validate that a value is positive (> 0)
///
/// # Arguments
/// * `value` - Value to validate
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the value is not positive
///
/// # Example
/// ```
/// use pokesort_lib::validation::validate_positive;
///
/// validate_positive(10, "hit_points").unwrap();
///
/// let result = validate_positive(0, "hit_points");
/// assert!(result.is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(PokesortError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must be positive (> 0), got: {value}"),
        });
    }
    Ok(())
}

/// Validate that a user-entered choice is one of the allowed values
///
/// Surrounding whitespace is ignored. Returns the matching allowed value.
///
/// # Arguments
/// * `input` - Raw user input
/// * `allowed` - The accepted choices
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the trimmed input is not one of `allowed`
///
/// # Example
/// ```
/// use pokesort_lib::validation::validate_choice;
///
/// assert_eq!(validate_choice(" 3\n", &["0", "1", "2", "3"], "choice").unwrap(), "3");
/// assert!(validate_choice("9", &["0", "1"], "choice").is_err());
/// ```
pub fn validate_choice<'a>(input: &str, allowed: &[&'a str], name: &str) -> Result<&'a str> {
    let trimmed = input.trim();
    allowed.iter().copied().find(|choice| *choice == trimmed).ok_or_else(|| {
        PokesortError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("'{trimmed}' is not one of [{}]", allowed.join(", ")),
        }
    })
}
