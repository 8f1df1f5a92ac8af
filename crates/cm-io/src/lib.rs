//! `cm-io` — reading map inputs and writing resolved routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`loader`]   | `load_coordinates`, `load_connections`, `load_queries` (+ `_reader`) |
//! | [`row`]      | `RouteRow`: a resolved path flattened to names                  |
//! | [`writer`]   | `RouteWriter` trait, `write_paths`                              |
//! | [`text`]     | `TextWriter`: labelled human-readable records                   |
//! | [`csv`]      | `CsvWriter`: one CSV row per route                              |
//! | [`error`]    | `LoadError`, `OutputError` and their result aliases             |
//!
//! # Input formats
//!
//! All inputs are space-separated text, one record per line.  Blank lines
//! and lines starting with `#` are ignored.
//!
//! ```text
//! # coordinates: <id> <name> <x> <y>
//! 0 Station 0 0
//! 1 Market  3 0
//! 2 Park    3 4
//!
//! # connections: N×N 0/1 matrix, rows/columns in coordinate order
//! 0 1 1
//! 1 0 1
//! 1 1 0
//!
//! # queries: <from_name> <to_name>
//! Station Park
//! ```

pub mod csv;
pub mod error;
pub mod loader;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{LoadError, LoadResult, OutputError, OutputResult};
pub use loader::{
    load_connections, load_connections_reader, load_coordinates, load_coordinates_reader,
    load_queries, load_queries_reader,
};
pub use row::{ROUTE_SEPARATOR, RouteRow};
pub use text::TextWriter;
pub use writer::{RouteWriter, write_paths};
