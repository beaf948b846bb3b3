//! CSV graph loader.
//!
//! # CSV format
//!
//! Two files.  Locations, one row each:
//!
//! ```csv
//! key,name,latitude,longitude,category,description
//! main_gate,Main Gate,5.6502,-0.1860,entrance,Main entrance to campus
//! admin_block,Administration Block,5.6510,-0.1865,administrative,
//! ```
//!
//! Edges, one row per connection:
//!
//! ```csv
//! from,to,distance_m,base_minutes,difficulty,path_type,bidirectional
//! main_gate,admin_block,200,2.5,1.2,main_road,true
//! main_gate,taxi_rank,,,,,
//! ```
//!
//! Blank edge fields take defaults:
//!
//! | Field           | Default                                    |
//! |-----------------|--------------------------------------------|
//! | `distance_m`    | Haversine distance between the endpoints   |
//! | `base_minutes`  | `distance_m` at 5 km/h walking speed       |
//! | `difficulty`    | `1.0`                                      |
//! | `path_type`     | `walkway`                                  |
//! | `bidirectional` | `true`                                     |
//!
//! `category` is one of the `LocationCategory` machine labels, any case.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{Edge, GeoPoint, LocationCategory, WALKING_SPEED_M_PER_MIN};

use crate::{CampusGraph, CampusGraphBuilder, SpatialError, SpatialResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    key:         String,
    name:        String,
    latitude:    f64,
    longitude:   f64,
    category:    String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:          String,
    to:            String,
    distance_m:    Option<f64>,
    base_minutes:  Option<f64>,
    difficulty:    Option<f64>,
    path_type:     Option<String>,
    bidirectional: Option<bool>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CampusGraph`] from a locations CSV and an edges CSV.
pub fn load_graph_csv(locations: &Path, edges: &Path) -> SpatialResult<CampusGraph> {
    let locations = std::fs::File::open(locations)?;
    let edges = std::fs::File::open(edges)?;
    load_graph_readers(locations, edges)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded datasets.
pub fn load_graph_readers<L: Read, E: Read>(locations: L, edges: E) -> SpatialResult<CampusGraph> {
    let mut builder = CampusGraphBuilder::new();

    // ── Locations ─────────────────────────────────────────────────────────
    let mut reader = csv::Reader::from_reader(locations);
    for result in reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let category: LocationCategory = row
            .category
            .parse()
            .map_err(|e: nav_core::NavError| SpatialError::Parse(e.to_string()))?;
        builder.add_location(
            row.key,
            row.name,
            GeoPoint::new(row.latitude, row.longitude),
            category,
            row.description,
        )?;
    }

    // ── Edges ─────────────────────────────────────────────────────────────
    let mut reader = csv::Reader::from_reader(edges);
    for result in reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let from = resolve(&builder, &row.from)?;
        let to = resolve(&builder, &row.to)?;

        let distance_m = match row.distance_m {
            Some(d) => d,
            None => match (builder.position(from), builder.position(to)) {
                (Some(a), Some(b)) => a.distance_m(b),
                _ => 0.0,
            },
        };
        let edge = Edge {
            from,
            to,
            distance_m,
            base_minutes: row.base_minutes.unwrap_or(distance_m / WALKING_SPEED_M_PER_MIN),
            difficulty:   row.difficulty.unwrap_or(1.0),
            path_type:    row
                .path_type
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| "walkway".to_owned()),
        };

        let reverse = row
            .bidirectional
            .unwrap_or(true)
            .then(|| Edge { from: to, to: from, ..edge.clone() });
        builder.add_edge(edge);
        if let Some(reverse) = reverse {
            builder.add_edge(reverse);
        }
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve(builder: &CampusGraphBuilder, key: &str) -> SpatialResult<nav_core::LocationId> {
    let key = key.trim();
    builder
        .id_of(key)
        .ok_or_else(|| SpatialError::UnknownLocationKey(key.to_owned()))
}
