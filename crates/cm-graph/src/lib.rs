//! `cm-graph` — point store, shortest-path resolution, and the `Map` facade.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`store`]    | `PointStore`, `PointRecord`, `PointRef`                       |
//! | [`resolver`] | `Resolver` trait, `DijkstraResolver`, `ShortestPathTree`      |
//! | [`map`]      | `Map`: CRUD, name/id lookup, `find_path`, `describe`          |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | `Map::find_paths` resolves queries on Rayon's thread pool.  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `cm-core` value types. |
//!
//! # Adjacency model
//!
//! Connections are undirected: `add_connection(a, b)` inserts `b` into `a`'s
//! neighbour set and `a` into `b`'s.  Self-loops are never stored.  Edge
//! weights are not stored either; the resolver computes them from point
//! coordinates with the metric selected by the query's travel mode.

pub mod error;
pub mod map;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use map::Map;
pub use resolver::{DijkstraResolver, Resolver, ShortestPathTree};
pub use store::{PointRecord, PointRef, PointStore};
