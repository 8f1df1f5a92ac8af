//! Travel mode shared by queries, paths, and output.

use std::fmt;

use crate::{Metric, metric_for};

/// How a route is travelled.  The mode selects the distance metric.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot; straight-line distances.
    Pedestrian,
    /// By car; grid distances.
    Car,
}

impl TravelMode {
    pub const ALL: [TravelMode; 2] = [TravelMode::Pedestrian, TravelMode::Car];

    #[inline]
    pub fn metric(self) -> Metric {
        metric_for(self)
    }

    /// The other mode.
    #[inline]
    pub fn toggled(self) -> TravelMode {
        match self {
            TravelMode::Pedestrian => TravelMode::Car,
            TravelMode::Car        => TravelMode::Pedestrian,
        }
    }

    /// Lower-case identifier, used for CSV values.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Pedestrian => "pedestrian",
            TravelMode::Car        => "car",
        }
    }

    /// Capitalised label used in human-readable route output.
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Pedestrian => "Pedestrian",
            TravelMode::Car        => "Car",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
