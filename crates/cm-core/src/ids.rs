//! Stable point identity.
//!
//! `PointId` is the primary key for every point in the graph.  Names are a
//! secondary index kept by the point store; nothing in this crate knows about
//! them.

use std::fmt;

/// Identity of a point in the map.
///
/// Ids are assigned monotonically by the point store unless the loader
/// supplies them explicitly.  `u32::MAX` is reserved as [`PointId::INVALID`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(pub u32);

impl PointId {
    /// Sentinel meaning "no point".  Returned by rejected insertions.
    pub const INVALID: PointId = PointId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// The id immediately after `self`, or `None` past the last usable id.
    #[inline]
    pub fn next(self) -> Option<PointId> {
        self.0
            .checked_add(1)
            .map(PointId)
            .filter(|id| id.is_valid())
    }
}

impl Default for PointId {
    /// Uninitialised ids are visibly invalid.
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#invalid")
        }
    }
}

impl From<u32> for PointId {
    #[inline]
    fn from(raw: u32) -> Self {
        PointId(raw)
    }
}
