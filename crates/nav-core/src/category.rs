//! Location category enum shared by the graph, the composer, and the sorter.
//!
//! The set is closed: loaders reject unknown category strings rather than
//! mapping them to [`LocationCategory::Other`].

use std::str::FromStr;

use crate::NavError;

/// What kind of place a [`Location`](crate::Location) is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocationCategory {
    Academic,
    Administrative,
    Residential,
    Recreational,
    Dining,
    Library,
    Medical,
    Transport,
    Bank,
    Landmark,
    Parking,
    Entrance,
    #[default]
    Other,
}

impl LocationCategory {
    /// Every category, in declaration order.
    pub const ALL: [LocationCategory; 13] = [
        LocationCategory::Academic,
        LocationCategory::Administrative,
        LocationCategory::Residential,
        LocationCategory::Recreational,
        LocationCategory::Dining,
        LocationCategory::Library,
        LocationCategory::Medical,
        LocationCategory::Transport,
        LocationCategory::Bank,
        LocationCategory::Landmark,
        LocationCategory::Parking,
        LocationCategory::Entrance,
        LocationCategory::Other,
    ];

    /// Machine label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationCategory::Academic       => "academic",
            LocationCategory::Administrative => "administrative",
            LocationCategory::Residential    => "residential",
            LocationCategory::Recreational   => "recreational",
            LocationCategory::Dining         => "dining",
            LocationCategory::Library        => "library",
            LocationCategory::Medical        => "medical",
            LocationCategory::Transport      => "transport",
            LocationCategory::Bank           => "bank",
            LocationCategory::Landmark       => "landmark",
            LocationCategory::Parking        => "parking",
            LocationCategory::Entrance       => "entrance",
            LocationCategory::Other          => "other",
        }
    }

    /// Human-readable name.  Keyword search matches against it and
    /// landmark-composed routes are tagged with it.
    pub fn display_name(self) -> &'static str {
        match self {
            LocationCategory::Academic       => "Academic Building",
            LocationCategory::Administrative => "Administrative Building",
            LocationCategory::Residential    => "Residential Hall",
            LocationCategory::Recreational   => "Recreational Facility",
            LocationCategory::Dining         => "Dining Facility",
            LocationCategory::Library        => "Library",
            LocationCategory::Medical        => "Medical Facility",
            LocationCategory::Transport      => "Transport Hub",
            LocationCategory::Bank           => "Bank/ATM",
            LocationCategory::Landmark       => "Notable Landmark",
            LocationCategory::Parking        => "Parking Area",
            LocationCategory::Entrance       => "Campus Entrance",
            LocationCategory::Other          => "Other",
        }
    }

    /// `true` for the categories counted as landmarks along a route:
    /// landmark, bank, and library.
    #[inline]
    pub fn is_landmark(self) -> bool {
        matches!(
            self,
            LocationCategory::Landmark | LocationCategory::Bank | LocationCategory::Library
        )
    }
}

impl FromStr for LocationCategory {
    type Err = NavError;

    /// Case-insensitive parse of the machine label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LocationCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| NavError::Parse(format!("unknown location category {needle:?}")))
    }
}

impl std::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
