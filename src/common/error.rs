use crate::domains::grid::Cell;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid placement for '{id}': {fault}")]
    InvalidPlacement { id: String, fault: PlacementFault },

    #[error("Frontier exhausted before the goal was reached")]
    EmptyFrontier,

    #[error("Search aborted after {iterations} iterations (cap {cap})")]
    SearchTimeout { iterations: u64, cap: u64 },

    #[error("Invalid world: {reason}")]
    InvalidWorld { reason: String },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },
}

/// Which precondition a `create_agent` / `create_goal` call violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    #[error("cell {cell:?} is already occupied")]
    CellOccupied { cell: Cell },

    #[error("cell {cell:?} is outside the grid")]
    OutOfBounds { cell: Cell },

    #[error("id is already in use")]
    DuplicateId,
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
