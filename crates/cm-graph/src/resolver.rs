//! Resolver trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`crate::Map`] calls resolution through the [`Resolver`] trait, so a
//! different single-source algorithm can be swapped in without touching the
//! map.  The default [`DijkstraResolver`] runs a binary-heap Dijkstra over the
//! point store in O((V + E) log V).
//!
//! # Edge costs
//!
//! Edges carry no stored weight.  The cost of `a → b` is
//! `metric(value(a), value(b))`, where the metric comes from the query's
//! travel mode.  Both metrics are non-negative, so Dijkstra is exact.
//!
//! # Ties
//!
//! Among equal-cost alternatives the chosen predecessor depends on heap and
//! neighbour-set iteration order.  Only the distance is guaranteed to be
//! minimal; the point sequence of a tied route is unspecified.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use cm_core::path::UNREACHABLE_DISTANCE;
use cm_core::{Metric, Path, PointId, TravelMode};

use crate::store::PointStore;

// ── Resolver trait ────────────────────────────────────────────────────────────

/// Single-source shortest-path engine.
///
/// Implementations must be `Send + Sync` so one resolver can serve parallel
/// query batches.
pub trait Resolver: Send + Sync {
    /// Compute shortest distances and predecessors from `start` to every
    /// reachable point of `store`, weighting edges with `metric`.
    ///
    /// A `start` that is not in the store yields a tree in which nothing is
    /// reachable.
    fn shortest_paths(&self, store: &PointStore, start: PointId, metric: Metric) -> ShortestPathTree;
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Tentative distance and predecessor of one point.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Label {
    distance: f64,
    /// `PointId::INVALID` for the start and for unreached points.
    previous: PointId,
}

impl Label {
    const UNREACHED: Label = Label { distance: UNREACHABLE_DISTANCE, previous: PointId::INVALID };
}

/// Result of one single-source run: answers any number of destinations.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    start:  PointId,
    labels: FxHashMap<PointId, Label>,
}

impl ShortestPathTree {
    pub fn start(&self) -> PointId {
        self.start
    }

    /// Shortest distance to `dest`, `None` if unreachable or unknown.
    pub fn distance_to(&self, dest: PointId) -> Option<f64> {
        self.labels
            .get(&dest)
            .map(|l| l.distance)
            .filter(|d| d.is_finite())
    }

    #[inline]
    pub fn is_reachable(&self, dest: PointId) -> bool {
        self.distance_to(dest).is_some()
    }

    /// Walk predecessor links back from `dest` and return the route as
    /// `(distance, start → dest)`.  `None` if `dest` was never settled.
    pub fn route_to(&self, dest: PointId) -> Option<(f64, Vec<PointId>)> {
        let distance = self.distance_to(dest)?;

        let mut points = vec![dest];
        let mut cur = dest;
        while cur != self.start {
            let prev = self.labels.get(&cur)?.previous;
            if !prev.is_valid() || points.len() > self.labels.len() {
                return None;
            }
            points.push(prev);
            cur = prev;
        }
        points.reverse();
        Some((distance, points))
    }

    /// [`route_to`](Self::route_to) wrapped as a [`Path`] of `mode`; the
    /// unreachable value when there is no route.
    pub fn path_to(&self, dest: PointId, mode: TravelMode) -> Path {
        match self.route_to(dest) {
            Some((distance, points)) => Path::new(mode, distance, points),
            None => Path::unreachable(mode),
        }
    }
}

// ── DijkstraResolver ──────────────────────────────────────────────────────────

/// Binary-heap Dijkstra over the point store.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraResolver;

impl Resolver for DijkstraResolver {
    fn shortest_paths(&self, store: &PointStore, start: PointId, metric: Metric) -> ShortestPathTree {
        dijkstra(store, start, metric)
    }
}

/// Heap key.  `f64` is not `Ord`; costs are never NaN, so `total_cmp` gives
/// the usual order.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(store: &PointStore, start: PointId, metric: Metric) -> ShortestPathTree {
    let mut labels: FxHashMap<PointId, Label> =
        store.ids().map(|id| (id, Label::UNREACHED)).collect();

    let Some(start_label) = labels.get_mut(&start) else {
        return ShortestPathTree { start, labels };
    };
    start_label.distance = 0.0;

    let mut settled: FxHashSet<PointId> = FxHashSet::default();

    // Min-heap via Reverse.  Ties on cost fall back to PointId order.
    let mut heap: BinaryHeap<Reverse<(Cost, PointId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), start)));

    while let Some(Reverse((Cost(cost), point))) = heap.pop() {
        // Stale entry: point already settled at a lower or equal cost.
        if !settled.insert(point) {
            continue;
        }
        let Some(record) = store.get(point) else {
            continue;
        };

        for &neighbor in &record.neighbors {
            if settled.contains(&neighbor) {
                continue;
            }
            let Some(next) = store.get(neighbor) else {
                continue;
            };
            let candidate = cost + metric(record.value, next.value);

            let Some(label) = labels.get_mut(&neighbor) else {
                continue;
            };
            if candidate < label.distance {
                label.distance = candidate;
                label.previous = point;
                heap.push(Reverse((Cost(candidate), neighbor)));
            }
        }
    }

    ShortestPathTree { start, labels }
}
