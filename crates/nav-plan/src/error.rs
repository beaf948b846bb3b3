use nav_core::NavError;
use nav_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no location named {0:?}")]
    UnknownLocation(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Nav(#[from] NavError),
}

pub type PlanResult<T> = Result<T, PlanError>;
