//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the branch network's contracts.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid draw bound: {bound} (must be positive)")]
    InvalidBound { bound: u64 },

    #[error("invalid branch range: min {min} exceeds max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("no branch carries the name '{name}'")]
    NotFound { name: String },

    #[error("cannot find great branch for '{name}'")]
    NoEnclosingBranch { name: String },

    #[error("node handle does not belong to this forest")]
    UnknownNode,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
