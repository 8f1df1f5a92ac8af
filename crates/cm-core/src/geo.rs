//! Integer 2-D coordinates.
//!
//! City maps are given on an integer grid, so `Point` keeps `i32`
//! components.  Distances are computed in `f64` by [`crate::metric`].

use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Per-axis absolute offsets to `other`, widened so extreme coordinates
    /// cannot overflow.
    #[inline]
    pub fn abs_delta(self, other: Point) -> (i64, i64) {
        (
            (i64::from(other.x) - i64::from(self.x)).abs(),
            (i64::from(other.y) - i64::from(self.y)).abs(),
        )
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
