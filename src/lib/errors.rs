//! Custom error types for pokesort operations.

use thiserror::Error;

/// Result type alias for pokesort operations
pub type Result<T> = std::result::Result<T, PokesortError>;

/// Error type for pokesort operations
#[derive(Error, Debug)]
pub enum PokesortError {
    /// A record failed validation at construction time
    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord {
        /// The record name (may be empty if the name itself is invalid)
        name: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },
}
