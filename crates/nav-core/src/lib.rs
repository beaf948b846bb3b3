//! `nav-core` — foundational types for the campus navigation engine.
//!
//! Every other `nav-*` crate depends on this one.  It has no `nav-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`                                          |
//! | [`geo`]         | `GeoPoint`, Haversine distance, walking-speed helpers |
//! | [`category`]    | `LocationCategory` closed enumeration                 |
//! | [`location`]    | `Location` (identity by id)                           |
//! | [`edge`]        | `Edge`, `CostMetric`                                  |
//! | [`budget`]      | `SearchBudget`, `BudgetTracker`, `BudgetExceeded`     |
//! | [`config`]      | `NavConfig`                                           |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod budget;
pub mod category;
pub mod config;
pub mod edge;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use budget::{BudgetExceeded, BudgetTracker, SearchBudget};
pub use category::LocationCategory;
pub use config::NavConfig;
pub use edge::{CostMetric, Edge};
pub use error::{NavError, NavResult};
pub use geo::{GeoPoint, WALKING_SPEED_M_PER_MIN};
pub use ids::LocationId;
pub use location::Location;
