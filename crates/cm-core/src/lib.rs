//! `cm-core` — foundational value types for the citymap route finder.
//!
//! This crate is a dependency of every other `cm-*` crate and has no `cm-*`
//! dependencies of its own.  Nothing here allocates per query except the
//! point sequence carried by a resolved [`Path`].
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PointId` and its `INVALID` sentinel                    |
//! | [`geo`]       | `Point` integer 2-D coordinate                          |
//! | [`metric`]    | `euclidean`, `manhattan`, `Metric`, `metric_for`        |
//! | [`mode`]      | `TravelMode` (pedestrian / car)                         |
//! | [`query`]     | `Query`, `PedestrianQuery`, `CarQuery`                  |
//! | [`path`]      | `Path`, `PedestrianPath`, `CarPath`                     |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod metric;
pub mod mode;
pub mod path;
pub mod query;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::PointId;
pub use metric::{Metric, euclidean, manhattan, metric_for};
pub use mode::TravelMode;
pub use path::{CarPath, Path, PedestrianPath};
pub use query::{CarQuery, PedestrianQuery, Query};
