//! The immutable latitude/longitude rectangle.
//!
//! `LatLngRect` is a `Copy` value: every transformation returns a new
//! rectangle and leaves the receiver untouched, so rectangles can be shared
//! freely across threads.  To apply many changes in a row (e.g. bounding a
//! large point set), use [`LatLngRectBuilder`] and freeze once at the end.
//!
//! # Longitude conventions
//!
//! The longitude interval may have `lo > hi`; such a rectangle crosses the
//! 180° meridian rather than wrapping the other way around the sphere.
//! Longitudes of -180° are stored as +180° (except in the full and empty
//! rectangles), so a rectangle starting at -180° is inverted as well.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use sg_core::{Angle, LatLng, Point, R1Interval, S1Interval};
use tracing::debug;

use crate::state::{FULL_LAT, RectState, Validation};
use crate::{Cap, LatLngRectBuilder, RectError, RectResult};

/// Default tolerance for [`LatLngRect::approx_eq`], radians.
pub const DEFAULT_MAX_ERROR: f64 = 1e-15;

/// A closed rectangle in latitude/longitude space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct LatLngRect(pub(crate) RectState);

impl LatLngRect {
    // ── Construction ──────────────────────────────────────────────────────

    /// Wrap a state produced by a transformation of valid inputs.
    pub(crate) fn derived(state: RectState) -> Self {
        debug_assert!(state.is_valid(), "derived invalid rectangle {state:?}");
        LatLngRect(state)
    }

    pub(crate) fn from_state(state: RectState, mode: Validation) -> RectResult<Self> {
        if mode == Validation::Checked {
            if let Err(violation) = state.validate() {
                debug!(%violation, ?state, "rejected rectangle construction");
                return Err(RectError::Invalid(violation));
            }
        }
        Ok(LatLngRect(state))
    }

    /// The canonical empty rectangle: `lat = [1, 0]`, `lng = [π, -π]`.
    pub fn empty() -> Self {
        LatLngRect(RectState::EMPTY)
    }

    pub fn full() -> Self {
        LatLngRect(RectState::FULL)
    }

    /// The full latitude range, `[-π/2, π/2]`.
    pub fn full_lat() -> R1Interval {
        FULL_LAT
    }

    pub fn full_lng() -> S1Interval {
        S1Interval::full()
    }

    /// Construct from latitude and longitude intervals.  With
    /// [`Validation::Checked`] the intervals must satisfy the rectangle
    /// invariants; with [`Validation::Trusted`] they are accepted as-is.
    pub fn from_intervals(lat: R1Interval, lng: S1Interval, mode: Validation) -> RectResult<Self> {
        Self::from_state(RectState::new(lat, lng), mode)
    }

    /// Construct from the south-west (`lo`) and north-east (`hi`) corners.
    /// If `lo.lng > hi.lng` the rectangle crosses the 180° meridian.
    pub fn from_lo_hi(lo: LatLng, hi: LatLng, mode: Validation) -> RectResult<Self> {
        Self::from_state(RectState::from_lo_hi(lo, hi), mode)
    }

    /// Construct without checking the invariants.  The caller guarantees the
    /// intervals form a valid rectangle.
    pub fn new_unchecked(lat: R1Interval, lng: S1Interval) -> Self {
        LatLngRect(RectState::new(lat, lng))
    }

    /// A degenerate rectangle containing exactly one normalized point.
    pub fn from_point(p: LatLng) -> Self {
        Self::derived(RectState::from_point(p))
    }

    /// The minimal rectangle containing two normalized points.  Unlike
    /// [`from_lo_hi`](Self::from_lo_hi), neither point is treated as a corner:
    /// each axis takes the shortest range covering both coordinates.
    pub fn from_point_pair(p1: LatLng, p2: LatLng) -> Self {
        Self::derived(RectState::from_point_pair(p1, p2))
    }

    /// A rectangle of `size` centred on `center`, i.e.
    /// `from_point(center).expanded(size / 2)`.  Latitude is clamped to
    /// `[-90°, 90°]`; longitude becomes full once `size.lng` reaches 360°.
    pub fn from_center_size(center: LatLng, size: LatLng) -> Self {
        Self::from_point(center).expanded(size.scaled(0.5))
    }

    pub fn to_builder(&self) -> LatLngRectBuilder {
        LatLngRectBuilder::from_rect(self)
    }

    fn map(self, f: impl FnOnce(&mut RectState)) -> Self {
        let mut state = self.0;
        f(&mut state);
        Self::derived(state)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn lat(&self) -> R1Interval {
        self.0.lat
    }

    #[inline]
    pub fn lng(&self) -> S1Interval {
        self.0.lng
    }

    pub fn lat_lo(&self) -> Angle {
        Angle::from_radians(self.0.lat.lo())
    }

    pub fn lat_hi(&self) -> Angle {
        Angle::from_radians(self.0.lat.hi())
    }

    pub fn lng_lo(&self) -> Angle {
        Angle::from_radians(self.0.lng.lo())
    }

    pub fn lng_hi(&self) -> Angle {
        Angle::from_radians(self.0.lng.hi())
    }

    /// South-west corner.
    pub fn lo(&self) -> LatLng {
        self.0.vertex(0)
    }

    /// North-east corner.
    pub fn hi(&self) -> LatLng {
        self.0.vertex(2)
    }

    /// Corner `k` (taken modulo 4) in counter-clockwise order from the
    /// south-west: SW, SE, NE, NW.
    pub fn vertex(&self, k: usize) -> LatLng {
        self.0.vertex(k)
    }

    /// Midpoint in lat/lng space.  Arbitrary for empty and full rectangles.
    pub fn center(&self) -> LatLng {
        self.0.center()
    }

    /// Width and height in lat/lng space.  Negative for the empty rectangle.
    pub fn size(&self) -> LatLng {
        self.0.size()
    }

    /// Surface area on the unit sphere, steradians.
    pub fn area(&self) -> f64 {
        self.0.area()
    }

    // ── Predicates ────────────────────────────────────────────────────────

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.is_full()
    }

    /// `true` if both intervals are single values.  A pole with a full
    /// longitude range is *not* a point under this definition.
    pub fn is_point(&self) -> bool {
        self.0.is_point()
    }

    /// `true` if the rectangle crosses the 180° meridian.
    pub fn is_inverted(&self) -> bool {
        self.0.lng.is_inverted()
    }

    pub fn contains(&self, ll: LatLng) -> bool {
        self.0.contains(ll)
    }

    /// Containment of a point given as a vector; it need not be unit length.
    pub fn contains_point(&self, p: Point) -> bool {
        self.0.contains(LatLng::from_point(p))
    }

    pub fn interior_contains(&self, ll: LatLng) -> bool {
        self.0.interior_contains(ll)
    }

    pub fn contains_rect(&self, other: &LatLngRect) -> bool {
        self.0.contains_rect(&other.0)
    }

    pub fn intersects(&self, other: &LatLngRect) -> bool {
        self.0.intersects(&other.0)
    }

    /// `true` if each bound of `other` is within `max_error` radians of the
    /// corresponding bound here.
    pub fn approx_equals(&self, other: &LatLngRect, max_error: f64) -> bool {
        self.0.approx_equals(&other.0, max_error)
    }

    pub fn approx_eq(&self, other: &LatLngRect) -> bool {
        self.approx_equals(other, DEFAULT_MAX_ERROR)
    }

    /// A spherical cap containing the rectangle.
    pub fn cap_bound(&self) -> Cap {
        self.0.cap_bound()
    }

    // ── Transformations ───────────────────────────────────────────────────

    /// The minimal rectangle containing `self` and the normalized point `ll`.
    pub fn add_point(&self, ll: LatLng) -> Self {
        self.map(|s| s.add_point(ll))
    }

    /// As [`add_point`](Self::add_point) for a point given as a vector.
    pub fn add_point_xyz(&self, p: Point) -> Self {
        self.add_point(LatLng::from_point(p))
    }

    /// Grow latitude by `margin.lat` and longitude by `margin.lng`.
    /// Latitude is clamped at the poles, longitude wraps, and the empty
    /// rectangle stays empty.  Both margins must be non-negative.
    ///
    /// The result may contain some representations of a pole but not
    /// others; see [`polar_closure`](Self::polar_closure).  To grow by a
    /// distance on the sphere use [`convolve_with_cap`](Self::convolve_with_cap).
    pub fn expanded(&self, margin: LatLng) -> Self {
        self.map(|s| s.expand(margin))
    }

    /// If the rectangle touches a pole, widen longitude to the full circle
    /// so every representation of that pole is included.
    pub fn polar_closure(&self) -> Self {
        if self.0.lat.lo() == -FRAC_PI_2 || self.0.lat.hi() == FRAC_PI_2 {
            self.map(RectState::polar_closure)
        } else {
            *self
        }
    }

    pub fn union(&self, other: &LatLngRect) -> Self {
        self.map(|s| s.union(&other.0))
    }

    /// The smallest rectangle containing the intersection.  Longitude is
    /// circular, so the true intersection may be two disjoint pieces; the
    /// result then spans both.  If either axis is empty the canonical empty
    /// rectangle is returned.
    pub fn intersection(&self, other: &LatLngRect) -> Self {
        self.map(|s| s.intersection(&other.0))
    }

    /// All points within `distance` of the rectangle (for `distance >= 0`),
    /// or the largest rectangle excluding every point within `|distance|` of
    /// its boundary (for `distance < 0`), measured on the sphere.
    ///
    /// * Full and empty rectangles have no boundary and are unchanged.
    /// * A full longitude range has no east or west edge to move.
    /// * A full longitude range touching a pole has no edge at that pole.
    /// * Growing to within `distance` of a pole makes longitude full.
    ///
    /// `expanded_by_distance(x).expanded_by_distance(-x)` approximately
    /// restores the rectangle unless the first step made longitude full or
    /// empty, or pulled a pole into the latitude range.
    pub fn expanded_by_distance(&self, distance: Angle) -> Self {
        self.map(|s| s.expand_by_distance(distance))
    }

    /// A rectangle containing every point within `angle` of this one,
    /// measured on the sphere rather than in lat/lng space.
    pub fn convolve_with_cap(&self, angle: Angle) -> Self {
        self.map(|s| s.convolve_with_cap(angle))
    }
}

impl Default for LatLngRect {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<(R1Interval, S1Interval)> for LatLngRect {
    type Error = RectError;

    fn try_from((lat, lng): (R1Interval, S1Interval)) -> RectResult<Self> {
        Self::from_intervals(lat, lng, Validation::Checked)
    }
}

impl fmt::Display for LatLngRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lo={}, Hi={}]", self.lo(), self.hi())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LatLngRect {
    /// Deserialized rectangles are untrusted input and always validated.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = <RectState as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_state(state, Validation::Checked).map_err(serde::de::Error::custom)
    }
}
