//! Route requests.
//!
//! A [`Query`] is a closed sum over the two travel modes.  Each variant wraps
//! a concrete view ([`PedestrianQuery`], [`CarQuery`]) so code that only
//! handles one mode can take the view by value and never look at the tag.
//! Converting the unified value into the wrong view fails with
//! [`CoreError::ModeMismatch`].
//!
//! Endpoints are plain ids; whether they exist in the map is checked by the
//! loader, not here.

use crate::{CoreError, Metric, PointId, TravelMode};

/// Generate a concrete single-mode query view.
macro_rules! query_view {
    ($(#[$attr:meta])* $name:ident => $variant:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub from: PointId,
            pub to:   PointId,
        }

        impl $name {
            pub const MODE: TravelMode = TravelMode::$variant;

            #[inline]
            pub fn new(from: PointId, to: PointId) -> Self {
                Self { from, to }
            }
        }

        impl From<$name> for Query {
            #[inline]
            fn from(view: $name) -> Query {
                Query::$variant(view)
            }
        }

        impl TryFrom<Query> for $name {
            type Error = CoreError;

            fn try_from(query: Query) -> Result<Self, Self::Error> {
                match query {
                    Query::$variant(view) => Ok(view),
                    other => Err(CoreError::ModeMismatch {
                        expected: TravelMode::$variant,
                        actual:   other.mode(),
                    }),
                }
            }
        }
    };
}

query_view! {
    /// A route request on foot.
    PedestrianQuery => Pedestrian
}

query_view! {
    /// A route request by car.
    CarQuery => Car
}

/// A route request in either travel mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Query {
    Pedestrian(PedestrianQuery),
    Car(CarQuery),
}

impl Query {
    pub fn new(from: PointId, to: PointId, mode: TravelMode) -> Self {
        match mode {
            TravelMode::Pedestrian => Query::Pedestrian(PedestrianQuery { from, to }),
            TravelMode::Car        => Query::Car(CarQuery { from, to }),
        }
    }

    #[inline]
    pub fn mode(&self) -> TravelMode {
        match self {
            Query::Pedestrian(_) => TravelMode::Pedestrian,
            Query::Car(_)        => TravelMode::Car,
        }
    }

    /// The metric this query is resolved with.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.mode().metric()
    }

    /// `(from, to)` regardless of mode.
    #[inline]
    pub fn endpoints(&self) -> (PointId, PointId) {
        match *self {
            Query::Pedestrian(PedestrianQuery { from, to }) => (from, to),
            Query::Car(CarQuery { from, to })               => (from, to),
        }
    }

    #[inline]
    pub fn from(&self) -> PointId {
        self.endpoints().0
    }

    #[inline]
    pub fn to(&self) -> PointId {
        self.endpoints().1
    }

    pub fn set_from(&mut self, id: PointId) {
        match self {
            Query::Pedestrian(q) => q.from = id,
            Query::Car(q)        => q.from = id,
        }
    }

    pub fn set_to(&mut self, id: PointId) {
        match self {
            Query::Pedestrian(q) => q.to = id,
            Query::Car(q)        => q.to = id,
        }
    }

    /// Same endpoints under `mode`.
    #[inline]
    pub fn with_mode(self, mode: TravelMode) -> Query {
        let (from, to) = self.endpoints();
        Query::new(from, to, mode)
    }

    /// Reinterpret the same endpoints under the other mode, in place.
    pub fn toggle_mode(&mut self) {
        *self = self.toggled();
    }

    /// Copy of `self` under the other mode.
    #[inline]
    pub fn toggled(self) -> Query {
        let mode = self.mode().toggled();
        self.with_mode(mode)
    }
}
