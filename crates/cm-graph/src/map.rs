//! The `Map` facade: the public surface over the point store and resolver.
//!
//! Lookups by id or name go through [`PointRef`]; every operation that needs
//! an existing point reports [`GraphError::PointNotFound`] or
//! [`GraphError::NameNotFound`] instead of falling back to a default.
//! Rejected insertions are the exception: they return
//! [`PointId::INVALID`] so a bulk loader can keep going and report the line.

use tracing::{debug, warn};

use cm_core::{
    CarPath, CarQuery, Path, PedestrianPath, PedestrianQuery, Point, PointId, Query, TravelMode,
};

use crate::resolver::{DijkstraResolver, Resolver, ShortestPathTree};
use crate::store::{PointRef, PointStore};
use crate::{GraphError, GraphResult};

/// A city map: named points, undirected connections, and route finding.
///
/// Resolution never mutates the map, so a fully loaded `Map` can be shared
/// across threads for read-only querying.
#[derive(Clone, Debug, Default)]
pub struct Map {
    store: PointStore,
}

impl Map {
    pub fn new() -> Self {
        Self { store: PointStore::new() }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    // ── Points ────────────────────────────────────────────────────────────

    /// Add a point under the next automatic id.
    ///
    /// Returns [`PointId::INVALID`] if `name` already exists.
    pub fn add_point(&mut self, name: &str, value: Point) -> PointId {
        let id = self.store.insert(name, value);
        if !id.is_valid() {
            warn!(name, "rejected point: duplicate name");
        }
        id
    }

    /// Add a point under an explicit id.
    ///
    /// Returns [`PointId::INVALID`] if `id` or `name` already exists.
    pub fn add_point_with_id(&mut self, id: PointId, name: &str, value: Point) -> PointId {
        let inserted = self.store.insert_with_id(id, name, value);
        if !inserted.is_valid() {
            warn!(%id, name, "rejected point: duplicate id or name");
        }
        inserted
    }

    /// Remove a point and every connection to it.  No-op if absent; returns
    /// whether a point was removed.
    pub fn remove_point<'a>(&mut self, key: impl Into<PointRef<'a>>) -> bool {
        match self.store.resolve(key.into()) {
            Some(id) => self.store.remove(id).is_some(),
            None => false,
        }
    }

    pub fn contains<'a>(&self, key: impl Into<PointRef<'a>>) -> bool {
        self.store.resolve(key.into()).is_some()
    }

    /// Resolve `key` to a live id, or the matching not-found error.
    pub fn resolve<'a>(&self, key: impl Into<PointRef<'a>>) -> GraphResult<PointId> {
        let key = key.into();
        self.store.resolve(key).ok_or_else(|| match key {
            PointRef::Id(id) => GraphError::PointNotFound(id),
            PointRef::Name(name) => GraphError::NameNotFound(name.to_owned()),
        })
    }

    pub fn name_of(&self, id: PointId) -> GraphResult<&str> {
        self.store
            .get(id)
            .map(|rec| rec.name.as_str())
            .ok_or(GraphError::PointNotFound(id))
    }

    pub fn id_of(&self, name: &str) -> GraphResult<PointId> {
        self.store
            .id_of(name)
            .ok_or_else(|| GraphError::NameNotFound(name.to_owned()))
    }

    pub fn value_of<'a>(&self, key: impl Into<PointRef<'a>>) -> GraphResult<Point> {
        let id = self.resolve(key)?;
        self.store
            .get(id)
            .map(|rec| rec.value)
            .ok_or(GraphError::PointNotFound(id))
    }

    pub fn set_value<'a>(&mut self, key: impl Into<PointRef<'a>>, value: Point) -> GraphResult<()> {
        let id = self.resolve(key)?;
        let rec = self.store.get_mut(id).ok_or(GraphError::PointNotFound(id))?;
        rec.value = value;
        Ok(())
    }

    /// Live ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.store.ids()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove every point and reset automatic ids to 0.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ── Connections ───────────────────────────────────────────────────────

    /// Connect two points in both directions.
    ///
    /// Connecting a point to itself is a no-op.
    pub fn add_connection<'a, 'b>(
        &mut self,
        a: impl Into<PointRef<'a>>,
        b: impl Into<PointRef<'b>>,
    ) -> GraphResult<()> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        if a == b {
            debug!(%a, "ignoring self-connection");
            return Ok(());
        }
        self.store.connect(a, b);
        Ok(())
    }

    /// Remove the connection between two points in both directions.
    /// No-op if they were not connected.
    pub fn remove_connection<'a, 'b>(
        &mut self,
        a: impl Into<PointRef<'a>>,
        b: impl Into<PointRef<'b>>,
    ) -> GraphResult<()> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        self.store.disconnect(a, b);
        Ok(())
    }

    /// `false` when either point is missing.
    pub fn has_connection<'a, 'b>(
        &self,
        a: impl Into<PointRef<'a>>,
        b: impl Into<PointRef<'b>>,
    ) -> bool {
        match (self.store.resolve(a.into()), self.store.resolve(b.into())) {
            (Some(a), Some(b)) => self.store.is_connected(a, b),
            _ => false,
        }
    }

    /// Neighbours of a point, in no particular order.
    pub fn neighbors<'a>(&self, key: impl Into<PointRef<'a>>) -> GraphResult<Vec<PointId>> {
        let id = self.resolve(key)?;
        let rec = self.store.get(id).ok_or(GraphError::PointNotFound(id))?;
        Ok(rec.neighbors.iter().copied().collect())
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.store.connection_count()
    }

    // ── Queries and paths ─────────────────────────────────────────────────

    /// Build a query from endpoint names.
    pub fn query(&self, from: &str, to: &str, mode: TravelMode) -> GraphResult<Query> {
        Ok(Query::new(self.id_of(from)?, self.id_of(to)?, mode))
    }

    /// Shortest-path tree from `start` under `mode`'s metric.
    pub fn shortest_paths(&self, start: PointId, mode: TravelMode) -> ShortestPathTree {
        DijkstraResolver.shortest_paths(&self.store, start, mode.metric())
    }

    /// Resolve `query` with the default Dijkstra resolver.
    ///
    /// An unreachable destination is not an error: the returned path is
    /// empty.
    pub fn find_path(&self, query: &Query) -> Path {
        self.find_path_with(&DijkstraResolver, query)
    }

    /// Resolve `query` with a caller-supplied resolver.
    pub fn find_path_with<R: Resolver + ?Sized>(&self, resolver: &R, query: &Query) -> Path {
        self.route(resolver, query.from(), query.to(), query.mode())
    }

    pub fn find_pedestrian_path(&self, query: PedestrianQuery) -> PedestrianPath {
        let (distance, points) =
            self.route(&DijkstraResolver, query.from, query.to, PedestrianQuery::MODE).into_parts();
        PedestrianPath::new(distance, points)
    }

    pub fn find_car_path(&self, query: CarQuery) -> CarPath {
        let (distance, points) =
            self.route(&DijkstraResolver, query.from, query.to, CarQuery::MODE).into_parts();
        CarPath::new(distance, points)
    }

    /// Resolve a batch of queries, preserving order.
    ///
    /// With the `parallel` feature the batch runs on Rayon's thread pool.
    pub fn find_paths(&self, queries: &[Query]) -> Vec<Path> {
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|q| self.find_path(q)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries.par_iter().map(|q| self.find_path(q)).collect()
        }
    }

    fn route<R: Resolver + ?Sized>(
        &self,
        resolver: &R,
        from: PointId,
        to: PointId,
        mode: TravelMode,
    ) -> Path {
        if !self.store.contains(from) || !self.store.contains(to) {
            warn!(%from, %to, %mode, "query endpoint not in map");
            return Path::unreachable(mode);
        }
        let path = resolver
            .shortest_paths(&self.store, from, mode.metric())
            .path_to(to, mode);
        if path.is_empty() {
            debug!(%from, %to, %mode, "destination unreachable");
        } else {
            debug!(%from, %to, %mode, distance = path.distance(), hops = path.points().len() - 1, "route found");
        }
        path
    }

    // ── Output helpers ────────────────────────────────────────────────────

    /// Join the names of `points` with `separator`.
    ///
    /// An empty sequence gives an empty string.
    pub fn describe(&self, points: &[PointId], separator: &str) -> GraphResult<String> {
        let names = points
            .iter()
            .map(|&id| self.name_of(id))
            .collect::<GraphResult<Vec<&str>>>()?;
        Ok(names.join(separator))
    }

    /// `true` iff `path` is non-empty, starts at a live point, and every
    /// consecutive pair of points is connected.
    pub fn is_valid(&self, path: &Path) -> bool {
        let points = path.points();
        points.first().is_some_and(|&first| self.store.contains(first))
            && points
                .windows(2)
                .all(|pair| self.store.is_connected(pair[0], pair[1]))
    }
}
