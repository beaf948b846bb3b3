//! Validated transportation-problem inputs.

use std::sync::Arc;

use nav_core::Location;

use crate::{AllocError, AllocResult};

/// `m` sources with supplies, `n` destinations with demands, and an
/// `m × n` unit-cost matrix.
///
/// Construction checks every shape and value constraint, so the solver
/// never has to.
#[derive(Debug, Clone)]
pub struct TransportationProblem {
    sources:      Vec<Arc<Location>>,
    destinations: Vec<Arc<Location>>,
    /// Row-major, `costs[row * n + col]`.
    costs:        Vec<f64>,
    supply:       Vec<f64>,
    demand:       Vec<f64>,
}

impl TransportationProblem {
    /// Build from an explicit cost matrix (`costs[row][col]`).
    ///
    /// # Errors
    ///
    /// [`AllocError::InvalidInput`] if `supply`/`demand` lengths differ from
    /// the location lists, the matrix is not `m × n`, any supply or demand is
    /// negative or non-finite, or any cost is non-finite.
    pub fn new(
        sources:      Vec<Arc<Location>>,
        destinations: Vec<Arc<Location>>,
        costs:        Vec<Vec<f64>>,
        supply:       Vec<f64>,
        demand:       Vec<f64>,
    ) -> AllocResult<Self> {
        let (m, n) = (sources.len(), destinations.len());

        if supply.len() != m {
            return Err(invalid(format!("{} supplies for {m} sources", supply.len())));
        }
        if demand.len() != n {
            return Err(invalid(format!("{} demands for {n} destinations", demand.len())));
        }
        if costs.len() != m {
            return Err(invalid(format!("cost matrix has {} rows, expected {m}", costs.len())));
        }
        if let Some((row, r)) = costs.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(invalid(format!("cost row {row} has {} columns, expected {n}", r.len())));
        }

        check_quantities("supply", &supply)?;
        check_quantities("demand", &demand)?;

        let costs: Vec<f64> = costs.into_iter().flatten().collect();
        if let Some(i) = costs.iter().position(|c| !c.is_finite()) {
            return Err(invalid(format!("cost[{}][{}] is not finite", i / n, i % n)));
        }

        Ok(Self { sources, destinations, costs, supply, demand })
    }

    /// Build with `cost[i][j]` = great-circle metres from source `i` to
    /// destination `j`.
    pub fn from_locations(
        sources:      Vec<Arc<Location>>,
        destinations: Vec<Arc<Location>>,
        supply:       Vec<f64>,
        demand:       Vec<f64>,
    ) -> AllocResult<Self> {
        let costs = sources
            .iter()
            .map(|s| destinations.iter().map(|d| s.distance_to(d)).collect::<Vec<f64>>())
            .collect();
        Self::new(sources, destinations, costs, supply, demand)
    }

    /// Number of sources (`m`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.sources.len()
    }

    /// Number of destinations (`n`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.costs[row * self.cols() + col]
    }

    pub fn sources(&self) -> &[Arc<Location>] {
        &self.sources
    }

    pub fn destinations(&self) -> &[Arc<Location>] {
        &self.destinations
    }

    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// `true` if total supply equals total demand (to within rounding).
    pub fn is_balanced(&self) -> bool {
        let (s, d) = (self.total_supply(), self.total_demand());
        (s - d).abs() <= 1e-9 * s.abs().max(d.abs()).max(1.0)
    }
}

fn invalid(msg: String) -> AllocError {
    AllocError::InvalidInput(msg)
}

fn check_quantities(what: &str, values: &[f64]) -> AllocResult<()> {
    match values.iter().position(|v| !v.is_finite() || *v < 0.0) {
        Some(i) => Err(invalid(format!("{what}[{i}] = {} must be finite and non-negative", values[i]))),
        None => Ok(()),
    }
}
