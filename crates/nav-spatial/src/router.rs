//! Routing trait and the Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planning layer calls routing through the [`Router`] trait, so the
//! exact [`DijkstraRouter`] and the heuristic [`AStarRouter`](crate::AStarRouter)
//! are interchangeable wherever a single optimal route is needed.
//!
//! # Priority queue
//!
//! `BinaryHeap` has no decrease-key.  An improved label is pushed as a new
//! entry and stale entries are skipped when popped (the node is already
//! settled).  On sparse campus graphs the extra entries are cheap.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use nav_core::{BudgetTracker, CostMetric, LocationId, SearchBudget};

use crate::network::CampusGraph;
use crate::{Route, SpatialError, SpatialResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-route engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; they hold configuration only and
/// keep all per-query state on the stack of `route`.
pub trait Router: Send + Sync {
    /// Compute the optimal route from `from` to `to` under `metric`.
    ///
    /// `from == to` yields a single-waypoint, zero-edge route.  Returns
    /// [`SpatialError::NoRoute`] if `to` is unreachable and
    /// [`SpatialError::LocationNotFound`] if either id is not in the graph.
    fn route(
        &self,
        graph:  &CampusGraph,
        from:   LocationId,
        to:     LocationId,
        metric: CostMetric,
    ) -> SpatialResult<Route>;
}

/// Check that both endpoints exist before any search state is allocated.
pub(crate) fn check_endpoints(graph: &CampusGraph, from: LocationId, to: LocationId) -> SpatialResult<()> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(SpatialError::LocationNotFound(id));
        }
    }
    Ok(())
}

pub(crate) fn route_label(prefix: &str, metric: CostMetric) -> String {
    let kind = match metric {
        CostMetric::Distance => "Shortest",
        CostMetric::Time     => "Fastest",
    };
    if prefix.is_empty() { kind.to_owned() } else { format!("{prefix} {kind}") }
}

pub(crate) const SAME_LOCATION_LABEL: &str = "Same location";

// ── Heap key ──────────────────────────────────────────────────────────────────

/// Totally ordered `f64` for use as a heap priority.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Cost(pub f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Walk `prev` pointers back from `to` and return the path source-first.
pub(crate) fn trace_path(prev: &[LocationId], from: LocationId, to: LocationId) -> Vec<LocationId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        if cur == LocationId::INVALID {
            break;
        }
        path.push(cur);
    }
    path.reverse();
    path
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Label-setting Dijkstra over the CSR graph.  O((V + E) log V).
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter {
    budget: SearchBudget,
}

impl DijkstraRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every search by `budget`; exhausting it yields
    /// [`SpatialError::DeadlineExceeded`].
    pub fn with_budget(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// Optimal routes from `source` to every reachable location other than
    /// itself, keyed by destination.
    pub fn shortest_path_tree(
        &self,
        graph:  &CampusGraph,
        source: LocationId,
        metric: CostMetric,
    ) -> SpatialResult<FxHashMap<LocationId, Route>> {
        check_endpoints(graph, source, source)?;
        let mut tracker = self.budget.start();
        let search = search(graph, source, None, metric, &mut tracker)?;

        let label = route_label("", metric);
        let routes = (0..graph.location_count())
            .filter_map(|i| LocationId::try_from(i).ok())
            .filter(|&id| id != source && search.visited[id.index()])
            .map(|id| {
                let path = trace_path(&search.prev, source, id);
                (id, Route::through(graph, &path, metric, label.as_str()))
            })
            .collect();
        Ok(routes)
    }
}

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph:  &CampusGraph,
        from:   LocationId,
        to:     LocationId,
        metric: CostMetric,
    ) -> SpatialResult<Route> {
        check_endpoints(graph, from, to)?;
        if from == to {
            let here = graph.location(from).cloned().ok_or(SpatialError::LocationNotFound(from))?;
            return Ok(Route::single(here, SAME_LOCATION_LABEL));
        }

        let mut tracker = self.budget.start();
        let search = search(graph, from, Some(to), metric, &mut tracker)?;
        if !search.visited[to.index()] {
            debug!(%from, %to, %metric, settled = tracker.steps(), "dijkstra: destination unreachable");
            return Err(SpatialError::NoRoute { from, to });
        }

        debug!(
            %from, %to, %metric,
            cost = search.dist[to.index()],
            settled = tracker.steps(),
            "dijkstra: route found"
        );
        let path = trace_path(&search.prev, from, to);
        Ok(Route::through(graph, &path, metric, route_label("", metric)))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct SearchState {
    dist:    Vec<f64>,
    prev:    Vec<LocationId>,
    visited: Vec<bool>,
}

/// Run Dijkstra from `from`.  With a `target`, stop as soon as it is popped;
/// without one, settle every reachable location.
fn search(
    graph:   &CampusGraph,
    from:    LocationId,
    target:  Option<LocationId>,
    metric:  CostMetric,
    tracker: &mut BudgetTracker,
) -> SpatialResult<SearchState> {
    let n = graph.location_count();
    // dist[v] = best known cost to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = predecessor of v on the best known path.
    let mut prev    = vec![LocationId::INVALID; n];
    let mut visited = vec![false; n];

    dist[from.index()] = 0.0;

    // Min-heap via Reverse; LocationId breaks ties deterministically.
    let mut heap: BinaryHeap<Reverse<(Cost, LocationId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Stale entry for an already-settled node.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        tracker.step()?;

        if Some(node) == target {
            break;
        }

        for edge in graph.out_edges(node) {
            let neighbor = edge.to;
            if visited[neighbor.index()] {
                continue;
            }
            let new_cost = cost + edge.cost(metric);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Ok(SearchState { dist, prev, visited })
}
