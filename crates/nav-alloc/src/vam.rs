//! Vogel's Approximation Method.
//!
//! # Loop
//!
//! While at least one row and one column are active:
//!
//! 1. Penalty of each active row: gap between its two cheapest active-column
//!    costs, or the lone cost if only one column is active.  Columns alike.
//! 2. Pick the largest penalty.  Ties go to rows before columns, then to the
//!    lowest index (strict `>` while scanning in that order).
//! 3. In the chosen line, take the cheapest active cell (lowest index on
//!    ties).
//! 4. Allocate `min(supply, demand)` there and retire whichever side hits
//!    zero (both on equality).
//!
//! If no penalty can be computed the first active cell in row-major order is
//! used instead.
//!
//! Sources with zero supply and destinations with zero demand start retired;
//! an allocation of zero units would never retire them.

use tracing::{debug, warn};

use nav_core::SearchBudget;

use crate::{Allocation, AllocationPlan, AllocResult, TransportationProblem};

/// VAM with an optional iteration/time bound.  Each round allocates one
/// cell, so at most `m + n - 1` rounds run.
#[derive(Copy, Clone, Debug, Default)]
pub struct VamSolver {
    budget: SearchBudget,
}

/// Solve `problem` with no bound.
pub fn solve(problem: &TransportationProblem) -> AllocResult<AllocationPlan> {
    VamSolver::new().solve(problem)
}

#[derive(Copy, Clone, Debug)]
enum Line {
    Row(usize),
    Col(usize),
}

impl VamSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: SearchBudget) -> Self {
        Self { budget }
    }

    pub fn solve(&self, problem: &TransportationProblem) -> AllocResult<AllocationPlan> {
        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let mut row_done: Vec<bool> = supply.iter().map(|&s| s <= 0.0).collect();
        let mut col_done: Vec<bool> = demand.iter().map(|&d| d <= 0.0).collect();

        let mut allocations = Vec::with_capacity(problem.rows() + problem.cols());
        let mut tracker = self.budget.start();

        while row_done.contains(&false) && col_done.contains(&false) {
            tracker
                .step()
                .inspect_err(|e| warn!(error = %e, allocated = allocations.len(), "vam: budget exhausted"))?;

            let cell = select_cell(problem, &row_done, &col_done)
                .or_else(|| first_active_cell(&row_done, &col_done));
            let Some((row, col)) = cell else { break };

            let quantity = supply[row].min(demand[col]);
            let unit_cost = problem.cost(row, col);
            supply[row] -= quantity;
            demand[col] -= quantity;
            if supply[row] <= 0.0 {
                row_done[row] = true;
            }
            if demand[col] <= 0.0 {
                col_done[col] = true;
            }

            debug!(row, col, quantity, unit_cost, "vam: allocate");
            allocations.push(Allocation {
                source:      problem.sources()[row].clone(),
                destination: problem.destinations()[col].clone(),
                row,
                col,
                quantity,
                unit_cost,
            });
        }

        let plan = AllocationPlan::new(allocations, supply, demand);
        debug!(
            rounds = tracker.steps(),
            allocations = plan.len(),
            total_cost = plan.total_cost(),
            "vam: done"
        );
        Ok(plan)
    }
}

// ── Penalties ─────────────────────────────────────────────────────────────────

/// Penalty over one line's active costs; `None` if there are none.
fn penalty(costs: impl Iterator<Item = f64>) -> Option<f64> {
    let mut lowest = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut count = 0usize;
    for c in costs {
        count += 1;
        if c < lowest {
            second = lowest;
            lowest = c;
        } else if c < second {
            second = c;
        }
    }
    match count {
        0 => None,
        1 => Some(lowest),
        _ => Some(second - lowest),
    }
}

/// Cell chosen by the maximum-penalty rule, or `None` if no line has a
/// penalty.
fn select_cell(problem: &TransportationProblem, row_done: &[bool], col_done: &[bool]) -> Option<(usize, usize)> {
    let active_cols = || (0..problem.cols()).filter(|&j| !col_done[j]);
    let active_rows = || (0..problem.rows()).filter(|&i| !row_done[i]);

    let row_penalties = active_rows()
        .filter_map(|i| penalty(active_cols().map(|j| problem.cost(i, j))).map(|p| (p, Line::Row(i))));
    let col_penalties = active_cols()
        .filter_map(|j| penalty(active_rows().map(|i| problem.cost(i, j))).map(|p| (p, Line::Col(j))));

    // Rows then columns, ascending index; only a strictly larger penalty
    // replaces the current best.
    let mut best: Option<(f64, Line)> = None;
    for (p, line) in row_penalties.chain(col_penalties) {
        if best.is_none_or(|(top, _)| p > top) {
            best = Some((p, line));
        }
    }

    match best?.1 {
        Line::Row(i) => cheapest(active_cols(), |j| problem.cost(i, j)).map(|j| (i, j)),
        Line::Col(j) => cheapest(active_rows(), |i| problem.cost(i, j)).map(|i| (i, j)),
    }
}

/// Index with the smallest cost; the first one wins ties.
fn cheapest(indices: impl Iterator<Item = usize>, cost: impl Fn(usize) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for k in indices {
        let c = cost(k);
        if best.is_none_or(|(_, b)| c < b) {
            best = Some((k, c));
        }
    }
    best.map(|(k, _)| k)
}

fn first_active_cell(row_done: &[bool], col_done: &[bool]) -> Option<(usize, usize)> {
    let row = row_done.iter().position(|done| !done)?;
    let col = col_done.iter().position(|done| !done)?;
    Some((row, col))
}
