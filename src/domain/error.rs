//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::Side;

/// Domain errors represent rejected tree operations.
/// None of them are fatal: the tree is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("side must be 'left' or 'right', got '{given}'")]
    InvalidSide { given: String },

    #[error("cannot insert because the team lead (root) is not set yet")]
    NoRoot,

    #[error("{manager}'s {side} side is already occupied by {occupant}")]
    SlotOccupied {
        manager: String,
        side: Side,
        occupant: String,
    },

    #[error("manager named '{manager}' does not exist in the current team tree")]
    ManagerNotFound { manager: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
