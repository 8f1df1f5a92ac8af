//! Resolved routes.
//!
//! A [`Path`] carries the total distance and the ordered point sequence of a
//! route, tagged with the travel mode that produced it.  An empty point
//! sequence means the destination was unreachable; the distance of such a
//! path is [`UNREACHABLE_DISTANCE`].
//!
//! As with queries, each variant wraps a concrete view and reinterpretation
//! into the wrong view fails with [`CoreError::ModeMismatch`].

use crate::{CoreError, PointId, TravelMode};

/// Distance recorded on an unreachable path.
pub const UNREACHABLE_DISTANCE: f64 = f64::INFINITY;

/// Generate a concrete single-mode path view.
macro_rules! path_view {
    ($(#[$attr:meta])* $name:ident => $variant:ident) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub distance: f64,
            pub points:   Vec<PointId>,
        }

        impl $name {
            pub const MODE: TravelMode = TravelMode::$variant;

            pub fn new(distance: f64, points: Vec<PointId>) -> Self {
                Self { distance, points }
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.points.is_empty()
            }
        }

        impl From<$name> for Path {
            #[inline]
            fn from(view: $name) -> Path {
                Path::$variant(view)
            }
        }

        impl TryFrom<Path> for $name {
            type Error = CoreError;

            fn try_from(path: Path) -> Result<Self, Self::Error> {
                match path {
                    Path::$variant(view) => Ok(view),
                    other => Err(CoreError::ModeMismatch {
                        expected: TravelMode::$variant,
                        actual:   other.mode(),
                    }),
                }
            }
        }
    };
}

path_view! {
    /// A route travelled on foot.
    PedestrianPath => Pedestrian
}

path_view! {
    /// A route travelled by car.
    CarPath => Car
}

/// A resolved route in either travel mode.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Path {
    Pedestrian(PedestrianPath),
    Car(CarPath),
}

impl Path {
    pub fn new(mode: TravelMode, distance: f64, points: Vec<PointId>) -> Self {
        match mode {
            TravelMode::Pedestrian => Path::Pedestrian(PedestrianPath { distance, points }),
            TravelMode::Car        => Path::Car(CarPath { distance, points }),
        }
    }

    /// Empty path for a destination that could not be reached.
    pub fn unreachable(mode: TravelMode) -> Self {
        Path::new(mode, UNREACHABLE_DISTANCE, Vec::new())
    }

    #[inline]
    pub fn mode(&self) -> TravelMode {
        match self {
            Path::Pedestrian(_) => TravelMode::Pedestrian,
            Path::Car(_)        => TravelMode::Car,
        }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        match self {
            Path::Pedestrian(p) => p.distance,
            Path::Car(p)        => p.distance,
        }
    }

    #[inline]
    pub fn points(&self) -> &[PointId] {
        match self {
            Path::Pedestrian(p) => &p.points,
            Path::Car(p)        => &p.points,
        }
    }

    /// `(distance, points)`, dropping the mode tag.
    pub fn into_parts(self) -> (f64, Vec<PointId>) {
        match self {
            Path::Pedestrian(p) => (p.distance, p.points),
            Path::Car(p)        => (p.distance, p.points),
        }
    }

    /// First point of the route, `None` when unreachable.
    #[inline]
    pub fn from(&self) -> Option<PointId> {
        self.points().first().copied()
    }

    /// Last point of the route, `None` when unreachable.
    #[inline]
    pub fn to(&self) -> Option<PointId> {
        self.points().last().copied()
    }

    /// `true` for the unreachable/failure value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}
