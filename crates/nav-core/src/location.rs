//! Named places on the campus map.

use std::hash::{Hash, Hasher};

use crate::{GeoPoint, LocationCategory, LocationId};

/// An immutable place in the graph.
///
/// Identity is the builder-assigned [`LocationId`]; `key` is the external
/// string identifier (e.g. `"main_gate"`) and is unique within a graph, so
/// comparing ids and comparing keys agree.  Equality and hashing look at the
/// id only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:          LocationId,
    pub key:         String,
    pub name:        String,
    pub position:    GeoPoint,
    pub category:    LocationCategory,
    pub description: String,
}

impl Location {
    /// Great-circle distance to `other` in metres.
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.position.distance_m(other.position)
    }

    /// Case-insensitive substring match over name, description, and the
    /// category's display name.  `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.display_name().to_lowercase().contains(needle)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
