//! `nav-spatial` — campus graph, CSV loading, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `CampusGraph` (CSR + R-tree), `CampusGraphBuilder`          |
//! | [`loader`]  | `load_graph_csv`, `load_graph_readers`                      |
//! | [`route`]   | `Route`, waypoint similarity                                |
//! | [`router`]  | `Router` trait, `DijkstraRouter`                            |
//! | [`astar`]   | `AStarRouter`, alternative-path generation                  |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Concurrency
//!
//! A built [`CampusGraph`] is immutable and `Sync`.  Every routing call
//! allocates its own distance vectors and heaps, so any number of threads
//! may query one graph through a shared reference.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `nav-core` types.       |

pub mod astar;
pub mod error;
pub mod loader;
pub mod network;
pub mod route;
pub mod router;


pub use astar::{heuristic, AStarRouter, ALTERNATIVE_SIMILARITY_THRESHOLD};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_graph_csv, load_graph_readers};
pub use network::{CampusGraph, CampusGraphBuilder};
pub use route::Route;
pub use router::{DijkstraRouter, Router};
