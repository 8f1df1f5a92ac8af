//! Distance metrics.
//!
//! Both metrics are non-negative and symmetric, which is all Dijkstra needs.
//! [`metric_for`] is the only place a travel mode is bound to a metric.

use crate::{Point, TravelMode};

/// A pure distance function between two coordinates.
pub type Metric = fn(Point, Point) -> f64;

/// Straight-line distance.  Used for pedestrians.
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx as f64).hypot(dy as f64)
}

/// Grid (taxicab) distance.  Used for cars.
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx + dy) as f64
}

/// Metric that applies to `mode`.
#[inline]
pub fn metric_for(mode: TravelMode) -> Metric {
    match mode {
        TravelMode::Pedestrian => euclidean,
        TravelMode::Car        => manhattan,
    }
}
