//! Mutable, incrementally-built rectangles.
//!
//! # Usage
//!
//! ```rust
//! use sg_core::LatLng;
//! use sg_rect::LatLngRectBuilder;
//!
//! let points = [
//!     LatLng::from_degrees(10.0, 20.0),
//!     LatLng::from_degrees(-5.0, 25.0),
//!     LatLng::from_degrees(3.0, 15.0),
//! ];
//!
//! let mut builder = LatLngRectBuilder::new();
//! for p in points {
//!     builder.add_point(p);
//! }
//! let rect = builder.build();
//!
//! assert!(points.iter().all(|&p| rect.contains(p)));
//! ```
//!
//! Mutators return `&mut Self` so calls can be chained.  The builder never
//! checks the rectangle invariants while it is being mutated; call
//! [`try_build`](LatLngRectBuilder::try_build) to validate on freeze.
//!
//! A builder has a single owner.  Share the frozen [`LatLngRect`] instead of
//! the builder when several threads need the bound.

use sg_core::{Angle, LatLng, Point, R1Interval, S1Interval};

use crate::state::{RectState, Validation};
use crate::{LatLngRect, RectResult};

/// Accumulates a lat/lng rectangle in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatLngRectBuilder {
    state: RectState,
}

impl LatLngRectBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rect(rect: &LatLngRect) -> Self {
        Self { state: rect.0 }
    }

    /// Start from raw intervals.  Validity is not checked until
    /// [`try_build`](Self::try_build).
    pub fn from_intervals(lat: R1Interval, lng: S1Interval) -> Self {
        Self { state: RectState::new(lat, lng) }
    }

    /// Start from south-west and north-east corners.  Validity is not
    /// checked until [`try_build`](Self::try_build).
    pub fn from_lo_hi(lo: LatLng, hi: LatLng) -> Self {
        Self { state: RectState::from_lo_hi(lo, hi) }
    }

    // ── Freezing ──────────────────────────────────────────────────────────

    /// Snapshot the current state as an immutable rectangle.
    ///
    /// The builder is not consumed and may keep changing; earlier snapshots
    /// are unaffected.  The state is not validated: rectangles built purely
    /// from valid inputs through the builder's operations are always valid,
    /// but raw setters can produce invalid states.  Use
    /// [`try_build`](Self::try_build) when that matters.
    pub fn build(&self) -> LatLngRect {
        LatLngRect(self.state)
    }

    /// As [`build`](Self::build), but checks the rectangle invariants first.
    pub fn try_build(&self) -> RectResult<LatLngRect> {
        LatLngRect::from_state(self.state, Validation::Checked)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn lat(&self) -> R1Interval {
        self.state.lat
    }

    pub fn lng(&self) -> S1Interval {
        self.state.lng
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    pub fn vertex(&self, k: usize) -> LatLng {
        self.state.vertex(k)
    }

    // ── Setters ───────────────────────────────────────────────────────────

    /// Overwrite the latitude interval.
    pub fn set_lat(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.state.lat = R1Interval::new(lo, hi);
        self
    }

    /// Overwrite the longitude interval (`-π` endpoints become `π`).
    pub fn set_lng(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.state.lng = S1Interval::new(lo, hi);
        self
    }

    pub fn set_full(&mut self) -> &mut Self {
        self.state = RectState::FULL;
        self
    }

    /// Reset to the empty rectangle.
    pub fn clear(&mut self) -> &mut Self {
        self.state.set_empty();
        self
    }

    // ── In-place transformations ──────────────────────────────────────────

    /// Grow by the minimum amount needed to include the normalized point `ll`.
    pub fn add_point(&mut self, ll: LatLng) -> &mut Self {
        self.state.add_point(ll);
        self
    }

    pub fn add_point_xyz(&mut self, p: Point) -> &mut Self {
        self.add_point(LatLng::from_point(p))
    }

    pub fn union(&mut self, other: &LatLngRect) -> &mut Self {
        self.state.union(&other.0);
        self
    }

    /// Shrink to the bound of the intersection with `other`.  If either axis
    /// becomes empty, both are set to empty.
    pub fn intersection(&mut self, other: &LatLngRect) -> &mut Self {
        self.state.intersection(&other.0);
        self
    }

    /// See [`LatLngRect::expanded`].  Both margins must be non-negative.
    pub fn expanded(&mut self, margin: LatLng) -> &mut Self {
        self.state.expand(margin);
        self
    }

    pub fn polar_closure(&mut self) -> &mut Self {
        self.state.polar_closure();
        self
    }

    /// See [`LatLngRect::convolve_with_cap`].
    pub fn convolve_with_cap(&mut self, angle: Angle) -> &mut Self {
        self.state.convolve_with_cap(angle);
        self
    }

    /// See [`LatLngRect::expanded_by_distance`].
    pub fn expanded_by_distance(&mut self, distance: Angle) -> &mut Self {
        self.state.expand_by_distance(distance);
        self
    }
}

impl From<&LatLngRect> for LatLngRectBuilder {
    fn from(rect: &LatLngRect) -> Self {
        Self::from_rect(rect)
    }
}
