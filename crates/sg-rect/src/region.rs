//! The bounding-region contract.

use sg_core::LatLng;

use crate::{Cap, LatLngRect, LatLngRectBuilder};

/// Anything that can report the smallest lat/lng rectangle containing it.
///
/// Indexing and covering code works against this trait, so any shape that
/// can bound itself plugs in without knowing about the others.
pub trait Region {
    fn rect_bound(&self) -> LatLngRect;
}

impl Region for LatLngRect {
    fn rect_bound(&self) -> LatLngRect {
        *self
    }
}

impl Region for LatLngRectBuilder {
    /// A fresh snapshot of the builder's current state.
    fn rect_bound(&self) -> LatLngRect {
        self.build()
    }
}

impl Region for Cap {
    /// Latitude is exact; longitude is full whenever the cap reaches a pole
    /// or is wide enough to wrap the sphere at its axis latitude.
    fn rect_bound(&self) -> LatLngRect {
        LatLngRect::derived(self.bound_state())
    }
}

impl Region for LatLng {
    fn rect_bound(&self) -> LatLngRect {
        LatLngRect::from_point(*self)
    }
}
