//! Shared rectangle representation, invariants, and transformation algorithms.
//!
//! # Representation
//!
//! A rectangle is a latitude [`R1Interval`] and a longitude [`S1Interval`],
//! both in radians.  [`LatLngRect`](crate::LatLngRect) (immutable, validated)
//! and [`LatLngRectBuilder`](crate::LatLngRectBuilder) (mutable, unvalidated)
//! are both thin wrappers around `RectState`; every algorithm is written
//! here once, as an in-place mutation, and the wrappers delegate.
//!
//! # Invariants
//!
//! A state is *valid* when:
//!
//! 1. `lat` lies within `[-π/2, π/2]`;
//! 2. `lng` is a valid circular interval;
//! 3. `lat` and `lng` are both empty or both non-empty.
//!
//! Mutations do not check these; callers validate at the points where a
//! state becomes a `LatLngRect`.
//!
//! The lat/lng space is treated as a *cylinder*: a pole has many
//! representations (one per longitude), and a rectangle may contain some of
//! them but not others.  Polar closure adds all of them.

use std::f64::consts::{FRAC_PI_2, PI};

use sg_core::math::remainder;
use sg_core::{Angle, ChordAngle, LatLng, Point, R1Interval, S1Interval};
use tracing::trace;

use crate::{Cap, Violation};

/// Whether construction from raw intervals checks the rectangle invariants.
///
/// `Trusted` skips the check entirely: the caller guarantees validity, and an
/// invalid rectangle constructed this way silently exists.  Decoding ignores
/// this setting and always checks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Checked,
    Trusted,
}

/// The full latitude range `[-π/2, π/2]`.
pub const FULL_LAT: R1Interval = R1Interval::new(-FRAC_PI_2, FRAC_PI_2);

/// Latitude and longitude intervals of a rectangle, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct RectState {
    pub(crate) lat: R1Interval,
    pub(crate) lng: S1Interval,
}

impl RectState {
    /// Canonical empty: `lat = [1, 0]`, `lng = [π, -π]`.
    pub(crate) const EMPTY: RectState =
        RectState { lat: R1Interval::empty(), lng: S1Interval::empty() };

    pub(crate) const FULL: RectState = RectState { lat: FULL_LAT, lng: S1Interval::full() };

    #[inline]
    pub(crate) fn new(lat: R1Interval, lng: S1Interval) -> Self {
        Self { lat, lng }
    }

    /// `lo` is the south-west corner and `hi` the north-east one; if
    /// `lo.lng > hi.lng` the rectangle crosses the antimeridian.
    pub(crate) fn from_lo_hi(lo: LatLng, hi: LatLng) -> Self {
        Self {
            lat: R1Interval::new(lo.lat, hi.lat),
            lng: S1Interval::new(lo.lng, hi.lng),
        }
    }

    pub(crate) fn from_point(p: LatLng) -> Self {
        debug_assert!(p.is_valid(), "point {p} is not normalized");
        Self::from_lo_hi(p, p)
    }

    pub(crate) fn from_point_pair(p1: LatLng, p2: LatLng) -> Self {
        debug_assert!(p1.is_valid() && p2.is_valid());
        Self {
            lat: R1Interval::from_point_pair(p1.lat, p2.lat),
            lng: S1Interval::from_point_pair(p1.lng, p2.lng),
        }
    }

    // ── Invariants ────────────────────────────────────────────────────────

    pub(crate) fn validate(&self) -> Result<(), Violation> {
        if !(self.lat.lo().abs() <= FRAC_PI_2 && self.lat.hi().abs() <= FRAC_PI_2) {
            return Err(Violation::LatitudeOutOfRange);
        }
        if !self.lng.is_valid() {
            return Err(Violation::InvalidLongitude);
        }
        if self.lat.is_empty() != self.lng.is_empty() {
            return Err(Violation::MixedEmptiness);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.lat == FULL_LAT && self.lng.is_full()
    }

    pub(crate) fn is_point(&self) -> bool {
        self.lat.lo() == self.lat.hi() && self.lng.lo() == self.lng.hi()
    }

    /// Corner `k` in counter-clockwise order starting from the south-west:
    /// `(lat.lo, lng.lo)`, `(lat.lo, lng.hi)`, `(lat.hi, lng.hi)`,
    /// `(lat.hi, lng.lo)`.  `k` is taken modulo 4.
    pub(crate) fn vertex(&self, k: usize) -> LatLng {
        let i = (k >> 1) & 1;
        let j = i ^ (k & 1);
        LatLng::from_radians(
            if i == 0 { self.lat.lo() } else { self.lat.hi() },
            if j == 0 { self.lng.lo() } else { self.lng.hi() },
        )
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub(crate) fn center(&self) -> LatLng {
        LatLng::from_radians(self.lat.center(), self.lng.center())
    }

    pub(crate) fn size(&self) -> LatLng {
        LatLng::from_radians(self.lat.length(), self.lng.length())
    }

    /// Surface area on the unit sphere, steradians.
    pub(crate) fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.lng.length() * (self.lat.hi().sin() - self.lat.lo().sin())
    }

    pub(crate) fn contains(&self, ll: LatLng) -> bool {
        debug_assert!(ll.is_valid());
        self.lat.contains(ll.lat) && self.lng.contains(ll.lng)
    }

    pub(crate) fn interior_contains(&self, ll: LatLng) -> bool {
        debug_assert!(ll.is_valid());
        self.lat.interior_contains(ll.lat) && self.lng.interior_contains(ll.lng)
    }

    pub(crate) fn contains_rect(&self, other: &RectState) -> bool {
        self.lat.contains_interval(other.lat) && self.lng.contains_interval(other.lng)
    }

    pub(crate) fn intersects(&self, other: &RectState) -> bool {
        self.lat.intersects(other.lat) && self.lng.intersects(other.lng)
    }

    pub(crate) fn approx_equals(&self, other: &RectState, max_error: f64) -> bool {
        self.lat.approx_equals(other.lat, max_error) && self.lng.approx_equals(other.lng, max_error)
    }

    /// A cap containing the rectangle: the smaller of a cap centred on the
    /// nearer pole and, for rectangles narrower than the full circle, a cap
    /// centred on the rectangle's midpoint.
    pub(crate) fn cap_bound(&self) -> Cap {
        if self.is_empty() {
            return Cap::empty();
        }
        let (pole_z, pole_angle) = if self.lat.lo() + self.lat.hi() < 0.0 {
            (-1.0, FRAC_PI_2 + self.lat.hi())
        } else {
            (1.0, FRAC_PI_2 - self.lat.lo())
        };
        let pole_cap =
            Cap::from_axis_angle(Point::new(0.0, 0.0, pole_z), Angle::from_radians(pole_angle));

        let lng_span = self.lng.hi() - self.lng.lo();
        if remainder(lng_span, 2.0 * PI) >= 0.0 && lng_span < 2.0 * PI {
            let mut mid_cap = Cap::from_axis_angle(self.center().to_point(), Angle::ZERO);
            for k in 0..4 {
                mid_cap = mid_cap.add_point(self.vertex(k).to_point());
            }
            if mid_cap.height() < pole_cap.height() {
                return mid_cap;
            }
        }
        pole_cap
    }

    // ── In-place transformations ──────────────────────────────────────────

    pub(crate) fn set_empty(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grow each axis independently to include `ll`.
    pub(crate) fn add_point(&mut self, ll: LatLng) {
        debug_assert!(ll.is_valid(), "point {ll} is not normalized");
        self.lat = self.lat.add_point(ll.lat);
        self.lng = self.lng.add_point(ll.lng);
    }

    pub(crate) fn union(&mut self, other: &RectState) {
        self.lat = self.lat.union(other.lat);
        self.lng = self.lng.union(other.lng);
    }

    /// Intersect each axis.  When either axis empties the whole state becomes
    /// the canonical empty rectangle, so the two axes never disagree.
    pub(crate) fn intersection(&mut self, other: &RectState) {
        let lat = self.lat.intersection(other.lat);
        let lng = self.lng.intersection(other.lng);
        if lat.is_empty() || lng.is_empty() {
            self.set_empty();
        } else {
            self.lat = lat;
            self.lng = lng;
        }
    }

    /// Grow latitude by `margin.lat` (clamped to the poles) and longitude by
    /// `margin.lng` (wrapped).  Both margins must be non-negative.
    pub(crate) fn expand(&mut self, margin: LatLng) {
        debug_assert!(margin.lat >= 0.0, "negative latitude margin {}", margin.lat);
        debug_assert!(margin.lng >= 0.0, "negative longitude margin {}", margin.lng);
        self.lat = self.lat.expanded(margin.lat).intersection(FULL_LAT);
        self.lng = self.lng.expanded(margin.lng);
    }

    /// If either latitude bound sits on a pole, make longitude full.
    pub(crate) fn polar_closure(&mut self) {
        if self.lat.lo() == -FRAC_PI_2 || self.lat.hi() == FRAC_PI_2 {
            self.lng = S1Interval::full();
        }
    }

    /// Union with the bounds of caps of radius `angle` centred on each corner.
    ///
    /// This approximates the convolution with a cap: the corners dominate the
    /// boundary of a lat/lng-aligned rectangle, but the bound is not exact for
    /// every input.  The empty rectangle has no corners and is left unchanged.
    pub(crate) fn convolve_with_cap(&mut self, angle: Angle) {
        if self.is_empty() {
            return;
        }
        let radius = ChordAngle::from_angle(angle);
        let corners = [self.vertex(0), self.vertex(1), self.vertex(2), self.vertex(3)];
        for corner in corners {
            let bound = Cap::from_axis_chord(corner.to_point(), radius).bound_state();
            self.union(&bound);
        }
    }

    /// Grow (`distance >= 0`) or shrink (`distance < 0`) by a distance
    /// measured on the sphere.
    pub(crate) fn expand_by_distance(&mut self, distance: Angle) {
        if distance.radians() >= 0.0 {
            self.convolve_with_cap(distance);
            return;
        }
        let margin = -distance.radians();

        // A bound at a pole has no edge to shrink when every longitude is present.
        let full_lng = self.lng.is_full();
        let lat = R1Interval::new(
            if self.lat.lo() <= -FRAC_PI_2 && full_lng {
                -FRAC_PI_2
            } else {
                self.lat.lo() + margin
            },
            if self.lat.hi() >= FRAC_PI_2 && full_lng {
                FRAC_PI_2
            } else {
                self.lat.hi() - margin
            },
        );
        if lat.is_empty() {
            trace!(margin, "latitude range collapsed while shrinking");
            self.set_empty();
            return;
        }

        // The cap covers the widest longitude range at the latitude farthest
        // from the equator (law of sines, as in the cap bound).
        let max_abs_lat = (-lat.lo()).max(lat.hi());
        let a_sin = margin.sin();
        let c_sin = max_abs_lat.cos();
        let lng_margin = if a_sin < c_sin { (a_sin / c_sin).asin() } else { FRAC_PI_2 };
        let lng = self.lng.expanded(-lng_margin);
        if lng.is_empty() {
            trace!(margin, lng_margin, "longitude range collapsed while shrinking");
            self.set_empty();
            return;
        }
        self.lat = lat;
        self.lng = lng;
    }
}
