//! A* search with a great-circle heuristic, plus alternative-route discovery.
//!
//! # Heuristic
//!
//! Distance mode uses the Haversine distance to the destination.  Time mode
//! divides it by the 5 km/h walking speed.  Straight-line distance never
//! exceeds the summed length of any path, so the heuristic is admissible and
//! (by the triangle inequality) consistent for distance.  For time it stays a
//! lower bound as long as no edge is faster than walking pace.
//!
//! # Alternatives
//!
//! [`AStarRouter::alternatives`] is a diversity search, not k-shortest-paths.
//! It bans one interior waypoint of the optimal route at a time and keeps a
//! re-routed result only if it overlaps every route accepted so far by at
//! most [`ALTERNATIVE_SIMILARITY_THRESHOLD`].  It can miss distinct routes
//! that exist.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use tracing::debug;

use nav_core::{BudgetTracker, CostMetric, Location, LocationId, SearchBudget};

use crate::network::CampusGraph;
use crate::router::{check_endpoints, route_label, trace_path, Cost, SAME_LOCATION_LABEL};
use crate::{Route, Router, SpatialError, SpatialResult};

/// Alternatives sharing more than this fraction of waypoints with an
/// accepted route are discarded.
pub const ALTERNATIVE_SIMILARITY_THRESHOLD: f64 = 0.7;

const LABEL_PREFIX: &str = "A*";

/// Lower bound on the remaining cost from `from` to `to` under `metric`.
#[inline]
pub fn heuristic(from: &Location, to: &Location, metric: CostMetric) -> f64 {
    match metric {
        CostMetric::Distance => from.position.distance_m(to.position),
        CostMetric::Time     => from.position.walking_minutes(to.position),
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter {
    budget: SearchBudget,
}

impl AStarRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each call by `budget`.  For [`alternatives`](Self::alternatives)
    /// the bound covers all of its searches together.
    pub fn with_budget(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// The optimal route followed by up to `max_paths - 1` diverse
    /// alternatives.
    ///
    /// Returns an empty list when `to` is unreachable.  `max_paths` must be
    /// at least 1.
    pub fn alternatives(
        &self,
        graph:     &CampusGraph,
        from:      LocationId,
        to:        LocationId,
        metric:    CostMetric,
        max_paths: usize,
    ) -> SpatialResult<Vec<Route>> {
        if max_paths < 1 {
            return Err(SpatialError::InvalidInput("max_paths must be at least 1".into()));
        }
        check_endpoints(graph, from, to)?;

        let mut tracker = self.budget.start();
        let mut excluded = FxHashSet::default();

        let primary = match self.find(graph, from, to, metric, &excluded, &mut tracker)? {
            Some(route) => route,
            None => return Ok(Vec::new()),
        };

        let interior: Vec<LocationId> = match primary.waypoints() {
            [_, middle @ .., _] => middle.iter().map(|w| w.id).collect(),
            _ => Vec::new(),
        };
        let mut routes = vec![primary];

        for banned in interior {
            if routes.len() >= max_paths {
                break;
            }
            excluded.insert(banned);
            let candidate = self.find(graph, from, to, metric, &excluded, &mut tracker)?;
            excluded.remove(&banned);

            if let Some(route) = candidate {
                let distinct = routes
                    .iter()
                    .all(|accepted| route.similarity(accepted) <= ALTERNATIVE_SIMILARITY_THRESHOLD);
                if distinct {
                    routes.push(route);
                }
            }
        }

        debug!(%from, %to, %metric, found = routes.len(), expanded = tracker.steps(), "a*: alternatives");
        Ok(routes)
    }

    fn find(
        &self,
        graph:    &CampusGraph,
        from:     LocationId,
        to:       LocationId,
        metric:   CostMetric,
        excluded: &FxHashSet<LocationId>,
        tracker:  &mut BudgetTracker,
    ) -> SpatialResult<Option<Route>> {
        if from == to {
            return Ok(graph.location(from).cloned().map(|l| Route::single(l, SAME_LOCATION_LABEL)));
        }
        let path = search(graph, from, to, metric, excluded, tracker)?;
        Ok(path.map(|p| Route::through(graph, &p, metric, route_label(LABEL_PREFIX, metric))))
    }
}

impl Router for AStarRouter {
    fn route(
        &self,
        graph:  &CampusGraph,
        from:   LocationId,
        to:     LocationId,
        metric: CostMetric,
    ) -> SpatialResult<Route> {
        check_endpoints(graph, from, to)?;
        let mut tracker = self.budget.start();
        let route = self.find(graph, from, to, metric, &FxHashSet::default(), &mut tracker)?;
        route.ok_or(SpatialError::NoRoute { from, to })
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// A* from `from` to `to`, treating `excluded` locations as impassable.
/// Returns the location path, or `None` if the open set runs dry.
fn search(
    graph:    &CampusGraph,
    from:     LocationId,
    to:       LocationId,
    metric:   CostMetric,
    excluded: &FxHashSet<LocationId>,
    tracker:  &mut BudgetTracker,
) -> SpatialResult<Option<Vec<LocationId>>> {
    let n = graph.location_count();
    let goal = graph.location(to).ok_or(SpatialError::LocationNotFound(to))?;
    let h = |id: LocationId| {
        graph
            .location(id)
            .map_or(0.0, |loc| heuristic(loc, goal, metric))
    };

    // g[v] = best known cost from `from`.
    let mut g      = vec![f64::INFINITY; n];
    let mut prev   = vec![LocationId::INVALID; n];
    let mut closed = vec![false; n];

    g[from.index()] = 0.0;

    // Open set keyed on f = g + h.  Re-pushed on improvement; stale entries
    // are dropped when popped.
    let mut open: BinaryHeap<Reverse<(Cost, LocationId)>> = BinaryHeap::new();
    open.push(Reverse((Cost(h(from)), from)));

    while let Some(Reverse((_, node))) = open.pop() {
        if closed[node.index()] {
            continue;
        }
        if node == to {
            return Ok(Some(trace_path(&prev, from, to)));
        }
        closed[node.index()] = true;
        tracker.step()?;

        for edge in graph.out_edges(node) {
            let neighbor = edge.to;
            if closed[neighbor.index()] || excluded.contains(&neighbor) {
                continue;
            }
            let tentative = g[node.index()] + edge.cost(metric);
            if tentative < g[neighbor.index()] {
                g[neighbor.index()] = tentative;
                prev[neighbor.index()] = node;
                open.push(Reverse((Cost(tentative + h(neighbor)), neighbor)));
            }
        }
    }

    Ok(None)
}
