//! Spherical caps: all points within an angular radius of an axis point.

use std::f64::consts::{FRAC_PI_2, PI};

use sg_core::math::remainder;
use sg_core::{Angle, ChordAngle, LatLng, Point, R1Interval, S1Interval};

use crate::state::RectState;

/// A closed disc on the sphere, stored as a unit-length axis and a
/// [`ChordAngle`] radius.  A negative radius is the empty cap; a radius of
/// 180° is the full sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cap {
    axis: Point,
    radius: ChordAngle,
}

impl Cap {
    pub fn empty() -> Self {
        Cap { axis: Point::new(1.0, 0.0, 0.0), radius: ChordAngle::NEGATIVE }
    }

    pub fn full() -> Self {
        Cap { axis: Point::new(1.0, 0.0, 0.0), radius: ChordAngle::STRAIGHT }
    }

    /// `axis` must be unit length.
    pub fn from_axis_chord(axis: Point, radius: ChordAngle) -> Self {
        debug_assert!(axis.is_unit_length());
        Cap { axis, radius }
    }

    /// A negative `angle` yields an empty cap; 180° or more yields a full one.
    pub fn from_axis_angle(axis: Point, angle: Angle) -> Self {
        Self::from_axis_chord(axis, ChordAngle::from_angle(angle))
    }

    /// A cap of the given height, measured along the axis from its tip.
    /// Negative heights yield an empty cap.
    pub fn from_axis_height(axis: Point, height: f64) -> Self {
        let radius =
            if height < 0.0 { ChordAngle::NEGATIVE } else { ChordAngle::from_length2(2.0 * height) };
        Self::from_axis_chord(axis, radius)
    }

    /// A cap with the given surface area, in steradians.
    pub fn from_axis_area(axis: Point, area: f64) -> Self {
        Self::from_axis_height(axis, area / (2.0 * PI))
    }

    #[inline]
    pub fn axis(&self) -> Point {
        self.axis
    }

    #[inline]
    pub fn radius(&self) -> ChordAngle {
        self.radius
    }

    pub fn angle(&self) -> Angle {
        self.radius.to_angle()
    }

    /// Distance from the cap plane to the tip, `1 - cos(angle)`; negative
    /// for the empty cap.
    pub fn height(&self) -> f64 {
        0.5 * self.radius.length2()
    }

    pub fn area(&self) -> f64 {
        2.0 * PI * self.height().max(0.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_negative()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.radius == ChordAngle::STRAIGHT
    }

    pub fn contains(&self, p: Point) -> bool {
        ChordAngle::between(self.axis, p) <= self.radius
    }

    /// The smallest cap with the same axis that also contains `p`.  Adding a
    /// point to the empty cap gives a zero-radius cap centred on `p`.
    pub fn add_point(&self, p: Point) -> Self {
        if self.is_empty() {
            return Cap::from_axis_chord(p, ChordAngle::ZERO);
        }
        let d = ChordAngle::between(self.axis, p);
        Cap { axis: self.axis, radius: if d > self.radius { d } else { self.radius } }
    }

    /// Bounding lat/lng intervals of the cap.
    pub(crate) fn bound_state(&self) -> RectState {
        if self.is_empty() {
            return RectState::EMPTY;
        }
        if self.is_full() {
            return RectState::FULL;
        }
        let axis = LatLng::from_point(self.axis);
        let cap_angle = self.angle().radians();

        let mut all_longitudes = false;
        let mut lat_lo = axis.lat - cap_angle;
        let mut lat_hi = axis.lat + cap_angle;
        if lat_lo <= -FRAC_PI_2 {
            lat_lo = -FRAC_PI_2;
            all_longitudes = true;
        }
        if lat_hi >= FRAC_PI_2 {
            lat_hi = FRAC_PI_2;
            all_longitudes = true;
        }

        let mut lng = S1Interval::full();
        if !all_longitudes {
            // The longitude span follows from the law of sines on the right
            // spherical triangle formed by the pole, the axis, and the point
            // where a meridian is tangent to the cap.
            let sin_a = self.radius.sin();
            let sin_c = axis.lat.cos();
            if sin_a <= sin_c {
                let angle_a = (sin_a / sin_c).asin();
                lng = S1Interval::new(
                    remainder(axis.lng - angle_a, 2.0 * PI),
                    remainder(axis.lng + angle_a, 2.0 * PI),
                );
            }
        }
        RectState::new(R1Interval::new(lat_lo, lat_hi), lng)
    }
}
