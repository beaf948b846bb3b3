//! Base error type.
//!
//! Engine crates define their own enums (`SpatialError`, `PlanError`,
//! `AllocError`) and wrap `NavError` or [`BudgetExceeded`](crate::BudgetExceeded)
//! through `#[from]` where they surface it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
