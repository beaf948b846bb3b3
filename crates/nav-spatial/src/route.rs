//! The result of a routing query.

use std::sync::Arc;

use tracing::warn;

use nav_core::{CostMetric, Edge, Location, LocationCategory, LocationId};

use crate::CampusGraph;

/// An ordered walk through the graph.
///
/// `edges[i]` connects `waypoints[i]` to `waypoints[i + 1]`.  Totals are
/// computed once at construction.  Routes carry no ordering of their own;
/// sort them with an explicit criterion.
#[derive(Debug, Clone)]
pub struct Route {
    waypoints:        Vec<Arc<Location>>,
    edges:            Vec<Edge>,
    total_distance_m: f64,
    total_minutes:    f64,
    label:            String,
}

impl Route {
    pub fn new(waypoints: Vec<Arc<Location>>, edges: Vec<Edge>, label: impl Into<String>) -> Self {
        let total_distance_m = edges.iter().map(|e| e.distance_m).sum();
        let total_minutes = edges.iter().map(Edge::effective_minutes).sum();
        Self {
            waypoints,
            edges,
            total_distance_m,
            total_minutes,
            label: label.into(),
        }
    }

    /// Zero-edge route standing at `location`.
    pub fn single(location: Arc<Location>, label: impl Into<String>) -> Self {
        Self::new(vec![location], Vec::new(), label)
    }

    /// Build a route along `path`, resolving each hop to the cheapest edge
    /// under `metric`.
    ///
    /// A hop with no edge means the graph is inconsistent.  The hop is logged
    /// and its edge left out, so the caller still gets a best-effort route.
    pub fn through(
        graph:  &CampusGraph,
        path:   &[LocationId],
        metric: CostMetric,
        label:  impl Into<String>,
    ) -> Self {
        let waypoints: Vec<Arc<Location>> = path
            .iter()
            .filter_map(|&id| {
                let loc = graph.location(id).cloned();
                if loc.is_none() {
                    warn!(location = %id, "waypoint missing from graph; skipping");
                }
                loc
            })
            .collect();

        let mut edges = Vec::with_capacity(waypoints.len().saturating_sub(1));
        for pair in waypoints.windows(2) {
            match graph.best_edge(pair[0].id, pair[1].id, metric) {
                Some(e) => edges.push(e.clone()),
                None => warn!(
                    from = %pair[0].name,
                    to   = %pair[1].name,
                    "missing edge during path reconstruction; omitting it from the route"
                ),
            }
        }

        Self::new(waypoints, edges, label)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn waypoints(&self) -> &[Arc<Location>] {
        &self.waypoints
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of edge lengths in metres.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// Sum of effective edge times in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// Descriptive tag such as `"Shortest"` or `"Via Library"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> Option<&Arc<Location>> {
        self.waypoints.first()
    }

    pub fn destination(&self) -> Option<&Arc<Location>> {
        self.waypoints.last()
    }

    /// `true` if the route never leaves its starting point.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    // ── Derived views ─────────────────────────────────────────────────────

    /// Waypoints whose category counts as a landmark (landmark, bank,
    /// library), in route order.
    pub fn landmarks(&self) -> Vec<&Arc<Location>> {
        self.waypoints.iter().filter(|w| w.category.is_landmark()).collect()
    }

    pub fn landmark_count(&self) -> usize {
        self.waypoints.iter().filter(|w| w.category.is_landmark()).count()
    }

    pub fn passes_through(&self, category: LocationCategory) -> bool {
        self.waypoints.iter().any(|w| w.category == category)
    }

    /// Share of waypoints in common:
    /// `|self waypoints also on other| / max(len(self), len(other))`.
    ///
    /// Two empty routes have similarity 0.
    pub fn similarity(&self, other: &Route) -> f64 {
        let longest = self.waypoints.len().max(other.waypoints.len());
        if longest == 0 {
            return 0.0;
        }
        let common = self
            .waypoints
            .iter()
            .filter(|w| other.waypoints.contains(w))
            .count();
        common as f64 / longest as f64
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} route: {:.0} m, {:.1} min",
            self.label, self.total_distance_m, self.total_minutes
        )
    }
}
