//! Engine-wide configuration.
//!
//! Applications typically deserialize a `NavConfig` from JSON (with the
//! `serde` feature) and hand it to the navigation service.  Sort criterion
//! and algorithm are deliberately absent: callers always pass them per call.

use crate::{NavError, NavResult, SearchBudget};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Bounds applied to every search and allocation call.
    pub budget: SearchBudget,

    /// Route count used by `recommended_routes`.  Default: 3.
    pub default_max_routes: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            budget:             SearchBudget::UNBOUNDED,
            default_max_routes: 3,
        }
    }
}

impl NavConfig {
    /// Reject settings no engine call could honour.
    pub fn validate(&self) -> NavResult<()> {
        if self.default_max_routes == 0 {
            return Err(NavError::Config("default_max_routes must be at least 1".into()));
        }
        if self.budget.max_expansions == Some(0) {
            return Err(NavError::Config("budget.max_expansions must be positive".into()));
        }
        Ok(())
    }
}
