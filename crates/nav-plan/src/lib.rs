//! `nav-plan` — route composition, sorting, and the navigation service.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`compose`]   | landmark routes, route concatenation, similarity merge     |
//! | [`sort`]      | `SortCriterion`, `SortAlgorithm`, `RouteSorter`            |
//! | [`service`]   | `NavigationService`, `RoutePreference`                     |
//! | [`analysis`]  | `RouteAnalysis`                                            |
//! | [`error`]     | `PlanError`, `PlanResult`                                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Landmark candidates are routed on Rayon's thread pool.    |

pub mod analysis;
pub mod compose;
pub mod error;
pub mod service;
pub mod sort;


pub use analysis::RouteAnalysis;
pub use compose::{concatenate, merge_distinct, routes_via_landmark, MERGE_SIMILARITY_THRESHOLD};
pub use error::{PlanError, PlanResult};
pub use service::{NavigationService, RoutePreference};
pub use sort::{sort_routes, RouteSorter, SortAlgorithm, SortCriterion};
