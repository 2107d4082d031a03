//! Error types for the catalog core.
//!
//! The engines themselves are total. Errors only arise where loosely typed
//! input is turned into core values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A project arrived without a usable identifier, so self-exclusion
    /// could not be guaranteed.
    #[error("project id must be a non-empty string")]
    InvalidProjectId,

    #[error("unknown sort key: {0:?} (expected date-desc, date-asc, title-asc or title-desc)")]
    UnknownSortKey(String),

    #[error("unknown visibility: {0:?} (expected public or review)")]
    UnknownVisibility(String),
}
