//! Flat, name-resolved representation of one route.

use cm_core::{Path, TravelMode};
use cm_graph::Map;

use crate::OutputResult;

/// Separator between point names in written routes.
pub const ROUTE_SEPARATOR: &str = " -> ";

/// One resolved route with every id replaced by its name.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRow {
    pub mode:     TravelMode,
    pub from:     String,
    pub to:       String,
    pub distance: f64,
    /// Full point sequence joined with [`ROUTE_SEPARATOR`].
    pub route:    String,
}

impl RouteRow {
    /// Flatten `path` against `map`.  `Ok(None)` for an unreachable path.
    pub fn from_path(map: &Map, path: &Path) -> OutputResult<Option<RouteRow>> {
        let (Some(from), Some(to)) = (path.from(), path.to()) else {
            return Ok(None);
        };
        Ok(Some(RouteRow {
            mode:     path.mode(),
            from:     map.name_of(from)?.to_owned(),
            to:       map.name_of(to)?.to_owned(),
            distance: path.distance(),
            route:    map.describe(path.points(), ROUTE_SEPARATOR)?,
        }))
    }

    /// `"<from> -> <to>"`.
    pub fn endpoints(&self) -> String {
        format!("{}{ROUTE_SEPARATOR}{}", self.from, self.to)
    }
}
