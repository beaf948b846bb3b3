//! Directed, weighted connections between locations.

use crate::{LocationId, WALKING_SPEED_M_PER_MIN};

// ── CostMetric ────────────────────────────────────────────────────────────────

/// Which edge weight a search minimises.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostMetric {
    /// Sum of edge lengths in metres.
    #[default]
    Distance,
    /// Sum of effective travel minutes (`base × difficulty`).
    Time,
}

impl CostMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            CostMetric::Distance => "distance",
            CostMetric::Time     => "time",
        }
    }
}

impl std::fmt::Display for CostMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed arc `from → to`.
///
/// Bidirectional paths are two edges; the builder's `add_path` inserts both.
/// Nothing requires the two directions to share weights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:         LocationId,
    pub to:           LocationId,
    /// Length in metres (non-negative).
    pub distance_m:   f64,
    /// Unimpeded travel time in minutes.
    pub base_minutes: f64,
    /// Surface/incline multiplier on `base_minutes`; at least 1.0.
    pub difficulty:   f64,
    /// Free-form tag such as `"walkway"` or `"main_road"`.
    pub path_type:    String,
}

impl Edge {
    /// A plain walkway: `distance_m` at walking speed, difficulty 1.0.
    pub fn walkway(from: LocationId, to: LocationId, distance_m: f64) -> Self {
        Self {
            from,
            to,
            distance_m,
            base_minutes: distance_m / WALKING_SPEED_M_PER_MIN,
            difficulty:   1.0,
            path_type:    "walkway".to_owned(),
        }
    }

    /// `base_minutes × difficulty`.
    #[inline]
    pub fn effective_minutes(&self) -> f64 {
        self.base_minutes * self.difficulty
    }

    /// Weight of this edge under `metric`.
    #[inline]
    pub fn cost(&self, metric: CostMetric) -> f64 {
        match metric {
            CostMetric::Distance => self.distance_m,
            CostMetric::Time     => self.effective_minutes(),
        }
    }
}
