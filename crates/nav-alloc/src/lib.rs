//! `nav-alloc` — capacity/demand balancing between campus locations.
//!
//! Sources (e.g. transport hubs) have a supply, destinations (e.g. lecture
//! halls) have a demand, and each source→destination pair has a unit cost,
//! by default the great-circle distance.  [`solve`] assigns quantities with
//! Vogel's Approximation Method: a greedy, near-optimal heuristic, not an
//! exact transportation-simplex solver.
//!
//! # Crate layout
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`problem`]     | `TransportationProblem` (validated inputs)        |
//! | [`vam`]         | `VamSolver`, `solve`                              |
//! | [`allocation`]  | `Allocation`, `AllocationPlan`                    |
//! | [`error`]       | `AllocError`, `AllocResult`                       |

pub mod allocation;
pub mod error;
pub mod problem;
pub mod vam;

#[cfg(test)]
mod tests;

pub use allocation::{Allocation, AllocationPlan};
pub use error::{AllocError, AllocResult};
pub use problem::TransportationProblem;
pub use vam::{solve, VamSolver};
