use nav_core::BudgetExceeded;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("invalid transportation problem: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    DeadlineExceeded(#[from] BudgetExceeded),
}

pub type AllocResult<T> = Result<T, AllocError>;
