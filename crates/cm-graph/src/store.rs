//! Point storage with a bidirectional id/name index.
//!
//! # Invariants
//!
//! - `names[records[id].name] == id` for every live id, and the two maps
//!   always have the same length.  Both are updated together on insert and
//!   removal.
//! - No record lists its own id as a neighbour.
//! - Neighbour sets are symmetric: `b ∈ a.neighbors ⇔ a ∈ b.neighbors`.
//! - `next_id` is strictly greater than every id ever inserted since the
//!   last `clear`, so automatic ids never collide with explicit ones.
//!
//! The name index owns its own copy of each name; nothing borrows from the
//! records, so removal and rehashing cannot leave dangling keys.

use rustc_hash::{FxHashMap, FxHashSet};

use cm_core::{Point, PointId};

// ── PointRef ──────────────────────────────────────────────────────────────────

/// A point addressed either by id or by name.
///
/// Every lookup that accepts "id or name" takes `impl Into<PointRef>`, so
/// callers pass a `PointId` or a `&str` directly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PointRef<'a> {
    Id(PointId),
    Name(&'a str),
}

impl From<PointId> for PointRef<'_> {
    #[inline]
    fn from(id: PointId) -> Self {
        PointRef::Id(id)
    }
}

impl<'a> From<&'a str> for PointRef<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        PointRef::Name(name)
    }
}

impl<'a> From<&'a String> for PointRef<'a> {
    #[inline]
    fn from(name: &'a String) -> Self {
        PointRef::Name(name.as_str())
    }
}

// ── PointRecord ───────────────────────────────────────────────────────────────

/// Everything the store keeps for one point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointRecord {
    pub name:      String,
    pub value:     Point,
    pub neighbors: FxHashSet<PointId>,
}

impl PointRecord {
    fn new(name: &str, value: Point) -> Self {
        Self {
            name: name.to_owned(),
            value,
            neighbors: FxHashSet::default(),
        }
    }
}

// ── PointStore ────────────────────────────────────────────────────────────────

/// Owns all points and their adjacency.
///
/// Low-level: lookups return `Option` and mutations report success as
/// `bool`.  [`crate::Map`] layers error reporting and logging on top.
#[derive(Clone, Debug)]
pub struct PointStore {
    records: FxHashMap<PointId, PointRecord>,
    names:   FxHashMap<String, PointId>,
    next_id: PointId,
}

impl PointStore {
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
            names:   FxHashMap::default(),
            next_id: PointId(0),
        }
    }

    // ── Insertion / removal ───────────────────────────────────────────────

    /// Insert a point under the next automatic id.
    ///
    /// Returns [`PointId::INVALID`] without inserting if `name` is taken or
    /// the id space is exhausted.
    pub fn insert(&mut self, name: &str, value: Point) -> PointId {
        let id = self.next_id;
        self.insert_with_id(id, name, value)
    }

    /// Insert a point under a caller-chosen id.
    ///
    /// Returns [`PointId::INVALID`] without inserting if `id` or `name` is
    /// already present, or if `id` is the sentinel itself.  On success the
    /// automatic id counter is moved past `id`.
    pub fn insert_with_id(&mut self, id: PointId, name: &str, value: Point) -> PointId {
        if !id.is_valid() || self.records.contains_key(&id) || self.names.contains_key(name) {
            return PointId::INVALID;
        }

        self.records.insert(id, PointRecord::new(name, value));
        self.names.insert(name.to_owned(), id);
        if id >= self.next_id {
            self.next_id = id.next().unwrap_or(PointId::INVALID);
        }
        id
    }

    /// Remove a point, its name entry, and every neighbour reference to it.
    ///
    /// O(number of points): every remaining record is scanned.
    pub fn remove(&mut self, id: PointId) -> Option<PointRecord> {
        let record = self.records.remove(&id)?;
        self.names.remove(&record.name);
        for other in self.records.values_mut() {
            other.neighbors.remove(&id);
        }
        Some(record)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.names.clear();
        self.next_id = PointId(0);
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Connect `a` and `b` in both directions.
    ///
    /// Returns `false` if either point is missing or `a == b`; nothing is
    /// changed in that case.
    pub fn connect(&mut self, a: PointId, b: PointId) -> bool {
        if a == b || !self.records.contains_key(&a) || !self.records.contains_key(&b) {
            return false;
        }
        if let Some(rec) = self.records.get_mut(&a) {
            rec.neighbors.insert(b);
        }
        if let Some(rec) = self.records.get_mut(&b) {
            rec.neighbors.insert(a);
        }
        true
    }

    /// Remove the connection between `a` and `b` in both directions.
    /// Returns `true` if a connection existed.
    pub fn disconnect(&mut self, a: PointId, b: PointId) -> bool {
        let removed = self
            .records
            .get_mut(&a)
            .is_some_and(|rec| rec.neighbors.remove(&b));
        if let Some(rec) = self.records.get_mut(&b) {
            rec.neighbors.remove(&a);
        }
        removed
    }

    #[inline]
    pub fn is_connected(&self, a: PointId, b: PointId) -> bool {
        self.records
            .get(&a)
            .is_some_and(|rec| rec.neighbors.contains(&b))
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.records.values().map(|r| r.neighbors.len()).sum::<usize>() / 2
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve an id-or-name reference to a live id.
    pub fn resolve(&self, key: PointRef<'_>) -> Option<PointId> {
        match key {
            PointRef::Id(id) => self.records.contains_key(&id).then_some(id),
            PointRef::Name(name) => self.names.get(name).copied(),
        }
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Option<&PointRecord> {
        self.records.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PointId) -> Option<&mut PointRecord> {
        self.records.get_mut(&id)
    }

    #[inline]
    pub fn id_of(&self, name: &str) -> Option<PointId> {
        self.names.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, id: PointId) -> bool {
        self.records.contains_key(&id)
    }

    /// Iterator over live ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.records.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &PointRecord)> + '_ {
        self.records.iter().map(|(&id, rec)| (id, rec))
    }

    /// The id the next automatic insertion would use.
    #[inline]
    pub fn next_id(&self) -> PointId {
        self.next_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
