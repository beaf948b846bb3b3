//! Per-route summary for display.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use nav_core::{Location, LocationCategory};
use nav_spatial::Route;

/// Landmarks and category make-up of one route.
#[derive(Debug, Clone)]
pub struct RouteAnalysis<'r> {
    route:           &'r Route,
    landmarks:       Vec<Arc<Location>>,
    category_counts: BTreeMap<LocationCategory, usize>,
}

impl<'r> RouteAnalysis<'r> {
    pub fn of(route: &'r Route) -> Self {
        let landmarks = route.landmarks().into_iter().cloned().collect();
        let mut category_counts = BTreeMap::new();
        for waypoint in route.waypoints() {
            *category_counts.entry(waypoint.category).or_insert(0) += 1;
        }
        Self { route, landmarks, category_counts }
    }

    pub fn route(&self) -> &'r Route {
        self.route
    }

    pub fn landmarks(&self) -> &[Arc<Location>] {
        &self.landmarks
    }

    /// Waypoint count per category.  Categories not on the route are absent.
    pub fn category_counts(&self) -> &BTreeMap<LocationCategory, usize> {
        &self.category_counts
    }

    pub fn count_of(&self, category: LocationCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}

impl fmt::Display for RouteAnalysis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route analysis:")?;
        writeln!(f, "  Total distance: {:.0} m", self.route.total_distance_m())?;
        writeln!(f, "  Estimated time: {:.1} min", self.route.total_minutes())?;
        writeln!(f, "  Waypoints:      {}", self.route.waypoints().len())?;
        write!(f, "  Landmarks:      {}", self.landmarks.len())?;
        if !self.landmarks.is_empty() {
            let names: Vec<&str> = self.landmarks.iter().map(|l| l.name.as_str()).collect();
            write!(f, "\n  Notable:        {}", names.join(", "))?;
        }
        Ok(())
    }
}
