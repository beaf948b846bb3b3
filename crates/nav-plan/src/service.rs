//! Orchestration over one shared, read-only [`CampusGraph`].
//!
//! The service borrows the graph, so one graph can back any number of
//! services on any number of threads.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use nav_core::{CostMetric, Location, LocationCategory, LocationId, NavConfig};
use nav_spatial::{AStarRouter, CampusGraph, DijkstraRouter, Route, Router, SpatialError};

use crate::compose::{self, merge_distinct};
use crate::sort::{RouteSorter, SortAlgorithm, SortCriterion};
use crate::{PlanError, PlanResult, RouteAnalysis};

/// What a user asks for when they don't pick a metric directly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RoutePreference {
    Fastest,
    #[default]
    Shortest,
}

impl RoutePreference {
    pub fn metric(self) -> CostMetric {
        match self {
            RoutePreference::Fastest  => CostMetric::Time,
            RoutePreference::Shortest => CostMetric::Distance,
        }
    }
}

impl FromStr for RoutePreference {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest"  => Ok(RoutePreference::Fastest),
            "shortest" => Ok(RoutePreference::Shortest),
            other      => Err(PlanError::InvalidInput(format!("unknown route preference {other:?}"))),
        }
    }
}

/// Criterion matching the metric a search optimised.
fn criterion_for(metric: CostMetric) -> SortCriterion {
    match metric {
        CostMetric::Distance => SortCriterion::Distance,
        CostMetric::Time     => SortCriterion::Time,
    }
}

// ── NavigationService ─────────────────────────────────────────────────────────

/// Route finding, landmark routes, and location search over one graph.
///
/// # Example
///
/// ```rust,ignore
/// let graph = load_graph_csv(locations, edges)?;
/// let nav = NavigationService::new(&graph);
/// for route in nav.find_routes_by_name("Main Gate", "Balme Library", CostMetric::Distance, 3)? {
///     println!("{route}");
/// }
/// ```
pub struct NavigationService<'g> {
    graph:    &'g CampusGraph,
    config:   NavConfig,
    dijkstra: DijkstraRouter,
    astar:    AStarRouter,
}

impl<'g> NavigationService<'g> {
    /// Service with the default (unbounded) configuration.
    pub fn new(graph: &'g CampusGraph) -> Self {
        Self::build(graph, NavConfig::default())
    }

    /// Service honouring `config`; fails if `config` is invalid.
    pub fn with_config(graph: &'g CampusGraph, config: NavConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self::build(graph, config))
    }

    fn build(graph: &'g CampusGraph, config: NavConfig) -> Self {
        Self {
            graph,
            dijkstra: DijkstraRouter::with_budget(config.budget),
            astar:    AStarRouter::with_budget(config.budget),
            config,
        }
    }

    pub fn graph(&self) -> &'g CampusGraph {
        self.graph
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Resolve a display name, case-insensitively.
    pub fn resolve(&self, name: &str) -> PlanResult<LocationId> {
        self.graph
            .location_by_name(name)
            .map(|l| l.id)
            .ok_or_else(|| PlanError::UnknownLocation(name.trim().to_owned()))
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Up to `max_routes` distinct routes, best first under `metric`.
    ///
    /// The Dijkstra optimum comes first, then A* alternatives that do not
    /// near-duplicate a route already kept.  The list is stably sorted by
    /// `metric` and truncated.  An unreachable destination gives an empty
    /// list.
    pub fn find_routes(
        &self,
        from:       LocationId,
        to:         LocationId,
        metric:     CostMetric,
        max_routes: usize,
    ) -> PlanResult<Vec<Route>> {
        if max_routes < 1 {
            return Err(PlanError::InvalidInput("max_routes must be at least 1".into()));
        }

        let mut routes = Vec::with_capacity(max_routes + 1);
        match self.dijkstra.route(self.graph, from, to, metric) {
            Ok(route) => routes.push(route),
            Err(SpatialError::NoRoute { .. }) => {}
            Err(e) => return Err(e.into()),
        }

        let alternatives = self.astar.alternatives(self.graph, from, to, metric, max_routes)?;
        let offered = alternatives.len();
        let added = merge_distinct(&mut routes, alternatives);

        let mut routes = RouteSorter::new(criterion_for(metric), SortAlgorithm::Merge).sort(&routes);
        routes.truncate(max_routes);

        debug!(%from, %to, %metric, offered, added, returned = routes.len(), "find_routes");
        Ok(routes)
    }

    /// [`find_routes`](Self::find_routes) with endpoints given by name.
    pub fn find_routes_by_name(
        &self,
        from:       &str,
        to:         &str,
        metric:     CostMetric,
        max_routes: usize,
    ) -> PlanResult<Vec<Route>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.find_routes(from, to, metric, max_routes)
    }

    /// `default_max_routes` routes for a user preference.
    pub fn recommended_routes(
        &self,
        from:       LocationId,
        to:         LocationId,
        preference: RoutePreference,
    ) -> PlanResult<Vec<Route>> {
        self.find_routes(from, to, preference.metric(), self.config.default_max_routes)
    }

    /// Routes that pass through a location of `category`.  See
    /// [`compose::routes_via_landmark`].
    pub fn routes_via_landmark(
        &self,
        from:      LocationId,
        to:        LocationId,
        category:  LocationCategory,
        max_paths: usize,
    ) -> PlanResult<Vec<Route>> {
        compose::routes_via_landmark(&self.dijkstra, self.graph, from, to, category, max_paths)
    }

    pub fn routes_via_landmark_by_name(
        &self,
        from:      &str,
        to:        &str,
        category:  LocationCategory,
        max_paths: usize,
    ) -> PlanResult<Vec<Route>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.routes_via_landmark(from, to, category, max_paths)
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn analyze<'r>(&self, route: &'r Route) -> RouteAnalysis<'r> {
        RouteAnalysis::of(route)
    }

    /// Locations whose name, description, or category name contains
    /// `keyword` (case-insensitive).
    pub fn search_locations(&self, keyword: &str) -> Vec<&'g Arc<Location>> {
        self.graph.search_by_keyword(keyword)
    }

    pub fn locations_by_category(&self, category: LocationCategory) -> Vec<&'g Arc<Location>> {
        self.graph.locations_by_category(category).collect()
    }
}
