//! Landmark-constrained routes and near-duplicate filtering.
//!
//! A landmark route is two independent distance-optimal legs glued at the
//! landmark: `from → landmark` then `landmark → to`.  Detours that would
//! visit the category more cheaply are not considered, so the result is not
//! the optimum of "visit any landmark of this kind".

use std::sync::Arc;

use tracing::debug;

use nav_core::{CostMetric, Location, LocationCategory, LocationId};
use nav_spatial::{CampusGraph, Route, Router, SpatialError};

use crate::{PlanError, PlanResult};

/// When merging route lists, a candidate sharing more than this fraction of
/// waypoints with any kept route is a duplicate.
///
/// Looser than [`nav_spatial::ALTERNATIVE_SIMILARITY_THRESHOLD`]; the two
/// thresholds are independent.
pub const MERGE_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Up to `max_paths` routes from `from` to `to` that pass through a location
/// of `category`, shortest total distance first.
///
/// Landmarks unreachable from `from`, or that cannot reach `to`, are
/// skipped.  An empty result means no landmark of that category works.
pub fn routes_via_landmark<R: Router + ?Sized>(
    router:    &R,
    graph:     &CampusGraph,
    from:      LocationId,
    to:        LocationId,
    category:  LocationCategory,
    max_paths: usize,
) -> PlanResult<Vec<Route>> {
    if max_paths < 1 {
        return Err(PlanError::InvalidInput("max_paths must be at least 1".into()));
    }
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(SpatialError::LocationNotFound(id).into());
        }
    }

    let label = format!("Via {}", category.display_name());
    let landmarks: Vec<&Arc<Location>> = graph.locations_by_category(category).collect();

    #[cfg(not(feature = "parallel"))]
    let composed: Vec<Option<Route>> = landmarks
        .iter()
        .map(|landmark| compose_via(router, graph, from, to, landmark.id, &label))
        .collect::<PlanResult<_>>()?;

    #[cfg(feature = "parallel")]
    let composed: Vec<Option<Route>> = {
        use rayon::prelude::*;

        landmarks
            .par_iter()
            .map(|landmark| compose_via(router, graph, from, to, landmark.id, &label))
            .collect::<PlanResult<_>>()?
    };

    let mut routes: Vec<Route> = composed.into_iter().flatten().collect();
    routes.sort_by(|a, b| a.total_distance_m().total_cmp(&b.total_distance_m()));
    routes.truncate(max_paths);

    debug!(%from, %to, category = category.as_str(), candidates = landmarks.len(), kept = routes.len(), "landmark routes");
    Ok(routes)
}

/// Route through one landmark, or `None` if either leg has no path.
fn compose_via<R: Router + ?Sized>(
    router:   &R,
    graph:    &CampusGraph,
    from:     LocationId,
    to:       LocationId,
    landmark: LocationId,
    label:    &str,
) -> PlanResult<Option<Route>> {
    let first = match router.route(graph, from, landmark, CostMetric::Distance) {
        Ok(route) => route,
        Err(SpatialError::NoRoute { .. }) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let second = match router.route(graph, landmark, to, CostMetric::Distance) {
        Ok(route) => route,
        Err(SpatialError::NoRoute { .. }) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(concatenate(&first, &second, label)))
}

/// Join two routes that meet at `first`'s destination.
///
/// The second route's first waypoint is dropped (it repeats the meeting
/// point); all of its edges are kept.
pub fn concatenate(first: &Route, second: &Route, label: impl Into<String>) -> Route {
    let mut waypoints = first.waypoints().to_vec();
    waypoints.extend(second.waypoints().iter().skip(1).cloned());

    let mut edges = first.edges().to_vec();
    edges.extend_from_slice(second.edges());

    Route::new(waypoints, edges, label)
}

/// `true` if `candidate` overlaps any route in `kept` by more than
/// [`MERGE_SIMILARITY_THRESHOLD`].
pub fn is_near_duplicate(candidate: &Route, kept: &[Route]) -> bool {
    kept.iter().any(|r| candidate.similarity(r) > MERGE_SIMILARITY_THRESHOLD)
}

/// Append each candidate to `kept` unless it near-duplicates a route already
/// there (including candidates appended earlier in the same call).
///
/// Returns how many candidates were appended.
pub fn merge_distinct(kept: &mut Vec<Route>, candidates: impl IntoIterator<Item = Route>) -> usize {
    let before = kept.len();
    for candidate in candidates {
        if !is_near_duplicate(&candidate, kept) {
            kept.push(candidate);
        }
    }
    kept.len() - before
}
