//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::{BudgetExceeded, LocationId};

/// Errors produced by `nav-spatial`.
///
/// Missing edges found while reconstructing a path are not errors: they are
/// logged and the edge is left out of the route.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("location {0} not found in graph")]
    LocationNotFound(LocationId),

    #[error("no location with key {0:?}")]
    UnknownLocationKey(String),

    #[error("duplicate location key {0:?}")]
    DuplicateLocation(String),

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from:   LocationId,
        to:     LocationId,
        reason: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    DeadlineExceeded(#[from] BudgetExceeded),

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
