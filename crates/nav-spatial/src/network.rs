//! Campus graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** order.  Given
//! a `LocationId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Edges are sorted by source location with a stable sort, so the edges of
//! one location keep their insertion order.  Search results are therefore
//! deterministic for a given build sequence.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest location, for
//! snapping a raw coordinate (e.g. a GPS fix) onto the map.

use std::sync::Arc;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use nav_core::{CostMetric, Edge, GeoPoint, Location, LocationCategory, LocationId};

use crate::{SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct LocationEntry {
    point: [f64; 2], // [lat, lon]
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    /// Squared Euclidean distance in lat/lon space.  Ranking is what matters
    /// here, and at campus scale it agrees with great-circle ranking.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CampusGraph ───────────────────────────────────────────────────────────────

/// Directed, weighted graph of campus locations.
///
/// Read-only once built: there is no method that mutates it, so a
/// `&CampusGraph` (or an `Arc<CampusGraph>`) can be shared across threads
/// freely.  Construct with [`CampusGraphBuilder`] or the CSV loader.
pub struct CampusGraph {
    /// Indexed by `LocationId`.
    locations: Vec<Arc<Location>>,

    /// External key → id.
    key_index: FxHashMap<String, LocationId>,

    /// CSR row pointer.  Length = `location_count + 1`.
    out_start: Vec<u32>,

    /// All edges, sorted by `from`.
    edges: Vec<Edge>,

    spatial_idx: RTree<LocationEntry>,
}

impl CampusGraph {
    /// A graph with no locations.  Every query against it reports not-found.
    pub fn empty() -> Self {
        Self {
            locations:   Vec::new(),
            key_index:   FxHashMap::default(),
            out_start:   vec![0],
            edges:       Vec::new(),
            spatial_idx: RTree::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// All locations in id order.
    pub fn locations(&self) -> &[Arc<Location>] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Arc<Location>> {
        self.locations.get(id.index())
    }

    pub fn location_by_key(&self, key: &str) -> Option<&Arc<Location>> {
        self.key_index.get(key).and_then(|&id| self.location(id))
    }

    /// Case-insensitive exact match on the display name.  When several
    /// locations share a name the lowest id wins.
    pub fn location_by_name(&self, name: &str) -> Option<&Arc<Location>> {
        let wanted = name.trim().to_lowercase();
        self.locations.iter().find(|l| l.name.to_lowercase() == wanted)
    }

    pub fn locations_by_category(
        &self,
        category: LocationCategory,
    ) -> impl Iterator<Item = &Arc<Location>> + '_ {
        self.locations.iter().filter(move |l| l.category == category)
    }

    /// Locations whose name, description, or category display name contains
    /// `keyword`, ignoring case.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Arc<Location>> {
        let needle = keyword.trim().to_lowercase();
        self.locations.iter().filter(|l| l.matches_keyword(&needle)).collect()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing edges of `id`, contiguous in memory.  Empty for unknown ids.
    #[inline]
    pub fn out_edges(&self, id: LocationId) -> &[Edge] {
        if !self.contains(id) {
            return &[];
        }
        let start = self.out_start[id.index()] as usize;
        let end   = self.out_start[id.index() + 1] as usize;
        &self.edges[start..end]
    }

    #[inline]
    pub fn out_degree(&self, id: LocationId) -> usize {
        self.out_edges(id).len()
    }

    /// The cheapest edge `from → to` under `metric`, if any.  Ties go to the
    /// edge inserted first.
    pub fn best_edge(&self, from: LocationId, to: LocationId, metric: CostMetric) -> Option<&Edge> {
        self.out_edges(from)
            .iter()
            .filter(|e| e.to == to)
            .fold(None, |best: Option<&Edge>, e| match best {
                Some(b) if b.cost(metric) <= e.cost(metric) => Some(b),
                _ => Some(e),
            })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The location nearest to `pos`; `None` only for an empty graph.
    pub fn nearest_location(&self, pos: GeoPoint) -> Option<&Arc<Location>> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .and_then(|e| self.location(e.id))
    }

    /// Up to `k` locations nearest to `pos`, closest first.
    pub fn k_nearest_locations(&self, pos: GeoPoint, k: usize) -> Vec<&Arc<Location>> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .filter_map(|e| self.location(e.id))
            .collect()
    }
}

impl std::fmt::Debug for CampusGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusGraph")
            .field("locations", &self.locations.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

// ── CampusGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`CampusGraph`] incrementally, then call [`build`](Self::build).
///
/// Locations get sequential ids from 0.  Edges may be added in any order;
/// `build()` validates them, lays out the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use nav_core::{GeoPoint, LocationCategory};
/// use nav_spatial::CampusGraphBuilder;
///
/// let mut b = CampusGraphBuilder::new();
/// let gate = b.add_location("main_gate", "Main Gate", GeoPoint::new(5.6502, -0.1860),
///                           LocationCategory::Entrance, "Main entrance").unwrap();
/// let admin = b.add_location("admin_block", "Administration Block", GeoPoint::new(5.6510, -0.1865),
///                            LocationCategory::Administrative, "").unwrap();
/// b.add_path(gate, admin, 200.0, 2.5, 1.2, "main_road");
/// let graph = b.build().unwrap();
/// assert_eq!(graph.location_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // one per direction
/// ```
#[derive(Default)]
pub struct CampusGraphBuilder {
    locations: Vec<Location>,
    key_index: FxHashMap<String, LocationId>,
    raw_edges: Vec<Edge>,
}

impl CampusGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for bulk loading.
    pub fn with_capacity(locations: usize, edges: usize) -> Self {
        Self {
            locations: Vec::with_capacity(locations),
            key_index: FxHashMap::default(),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a location and return its id.  Keys must be unique.
    pub fn add_location(
        &mut self,
        key:         impl Into<String>,
        name:        impl Into<String>,
        position:    GeoPoint,
        category:    LocationCategory,
        description: impl Into<String>,
    ) -> SpatialResult<LocationId> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(SpatialError::DuplicateLocation(key));
        }
        let id = LocationId::try_from(self.locations.len())
            .map_err(|_| SpatialError::InvalidInput("too many locations".into()))?;
        self.key_index.insert(key.clone(), id);
        self.locations.push(Location {
            id,
            key,
            name: name.into(),
            position,
            category,
            description: description.into(),
        });
        Ok(id)
    }

    /// Id of a location added earlier, by key.
    pub fn id_of(&self, key: &str) -> Option<LocationId> {
        self.key_index.get(key).copied()
    }

    /// Position of a location added earlier.
    pub fn position(&self, id: LocationId) -> Option<GeoPoint> {
        self.locations.get(id.index()).map(|l| l.position)
    }

    /// Add a single **directed** edge.  Validated in [`build`](Self::build).
    pub fn add_edge(&mut self, edge: Edge) {
        self.raw_edges.push(edge);
    }

    /// Add a forward/reverse pair with identical weights.
    pub fn add_path(
        &mut self,
        a:            LocationId,
        b:            LocationId,
        distance_m:   f64,
        base_minutes: f64,
        difficulty:   f64,
        path_type:    impl Into<String>,
    ) {
        let forward = Edge {
            from: a,
            to: b,
            distance_m,
            base_minutes,
            difficulty,
            path_type: path_type.into(),
        };
        let reverse = Edge { from: b, to: a, ..forward.clone() };
        self.raw_edges.push(forward);
        self.raw_edges.push(reverse);
    }

    /// Add a bidirectional walkway whose length is the Haversine distance
    /// between the two locations.  Unknown ids are ignored here and reported
    /// by `build()` instead.
    pub fn add_walkway(&mut self, a: LocationId, b: LocationId) {
        let distance_m = match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa.distance_m(pb),
            _ => 0.0,
        };
        self.raw_edges.push(Edge::walkway(a, b, distance_m));
        self.raw_edges.push(Edge::walkway(b, a, distance_m));
    }

    pub fn location_count(&self) -> usize { self.locations.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`CampusGraph`].
    ///
    /// Fails if an edge names a missing endpoint or carries a negative or
    /// non-finite weight, or a difficulty below 1.0.
    pub fn build(self) -> SpatialResult<CampusGraph> {
        let location_count = self.locations.len();

        for e in &self.raw_edges {
            validate_edge(e, location_count)?;
        }

        // Stable: edges of one location keep their insertion order.
        let mut edges = self.raw_edges;
        edges.sort_by_key(|e| e.from);

        let mut out_start = vec![0u32; location_count + 1];
        for e in &edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[location_count] as usize, edges.len());

        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .map(|l| LocationEntry {
                point: [l.position.lat, l.position.lon],
                id:    l.id,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(CampusGraph {
            locations: self.locations.into_iter().map(Arc::new).collect(),
            key_index: self.key_index,
            out_start,
            edges,
            spatial_idx,
        })
    }
}

fn validate_edge(e: &Edge, location_count: usize) -> SpatialResult<()> {
    let invalid = |reason: &str| SpatialError::InvalidEdge {
        from:   e.from,
        to:     e.to,
        reason: reason.to_owned(),
    };
    if e.from.index() >= location_count || e.to.index() >= location_count {
        return Err(invalid("endpoint not in graph"));
    }
    if !(e.distance_m.is_finite() && e.distance_m >= 0.0) {
        return Err(invalid("distance must be finite and non-negative"));
    }
    if !(e.base_minutes.is_finite() && e.base_minutes >= 0.0) {
        return Err(invalid("travel time must be finite and non-negative"));
    }
    if !(e.difficulty.is_finite() && e.difficulty >= 1.0) {
        return Err(invalid("difficulty multiplier must be at least 1.0"));
    }
    Ok(())
}
