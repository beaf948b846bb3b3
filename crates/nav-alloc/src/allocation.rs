//! Solver output.

use std::fmt;
use std::sync::Arc;

use nav_core::Location;

/// `quantity` units moved from `source` to `destination` at `unit_cost` each.
///
/// `row`/`col` index the source and destination in the problem, so callers
/// can tell apart repeated locations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    pub source:      Arc<Location>,
    pub destination: Arc<Location>,
    pub row:         usize,
    pub col:         usize,
    pub quantity:    f64,
    pub unit_cost:   f64,
}

impl Allocation {
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {:.1} units @ {:.1} = {:.1}",
            self.source.name, self.destination.name, self.quantity, self.unit_cost, self.total_cost()
        )
    }
}

/// Allocations in the order the solver made them, plus what was left over.
///
/// For a balanced problem both leftovers are all zero.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationPlan {
    allocations:      Vec<Allocation>,
    remaining_supply: Vec<f64>,
    remaining_demand: Vec<f64>,
}

impl AllocationPlan {
    pub(crate) fn new(allocations: Vec<Allocation>, remaining_supply: Vec<f64>, remaining_demand: Vec<f64>) -> Self {
        Self { allocations, remaining_supply, remaining_demand }
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn into_allocations(self) -> Vec<Allocation> {
        self.allocations
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Σ quantity × unit cost.
    pub fn total_cost(&self) -> f64 {
        self.allocations.iter().map(Allocation::total_cost).sum()
    }

    pub fn total_quantity(&self) -> f64 {
        self.allocations.iter().map(|a| a.quantity).sum()
    }

    /// Unallocated supply per source.
    pub fn remaining_supply(&self) -> &[f64] {
        &self.remaining_supply
    }

    /// Unmet demand per destination.
    pub fn remaining_demand(&self) -> &[f64] {
        &self.remaining_demand
    }

    /// Total quantity allocated out of source `row`.
    pub fn shipped_from(&self, row: usize) -> f64 {
        self.allocations.iter().filter(|a| a.row == row).map(|a| a.quantity).sum()
    }

    /// Total quantity allocated into destination `col`.
    pub fn received_by(&self, col: usize) -> f64 {
        self.allocations.iter().filter(|a| a.col == col).map(|a| a.quantity).sum()
    }
}
