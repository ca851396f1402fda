//! Latitude/longitude coordinates on the sphere.
//!
//! `LatLng` uses `f64` radians throughout.  A *normalized* (valid) value has
//! latitude in `[-π/2, π/2]` and longitude in `[-π, π]`; the rectangle and
//! interval types assume their inputs are normalized.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::math::remainder;
use crate::{Angle, Point};

/// A point on the sphere expressed as latitude and longitude, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub const fn from_radians(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self { lat: lat.to_radians(), lng: lng.to_radians() }
    }

    #[inline]
    pub fn from_angles(lat: Angle, lng: Angle) -> Self {
        Self { lat: lat.radians(), lng: lng.radians() }
    }

    /// Convert a point to lat/lng.  The point need not be unit length.
    pub fn from_point(p: Point) -> Self {
        Self {
            lat: p.z.atan2((p.x * p.x + p.y * p.y).sqrt()),
            lng: p.y.atan2(p.x),
        }
    }

    #[inline]
    pub fn lat(self) -> Angle {
        Angle::from_radians(self.lat)
    }

    #[inline]
    pub fn lng(self) -> Angle {
        Angle::from_radians(self.lng)
    }

    /// `true` if latitude is within `[-π/2, π/2]` and longitude within `[-π, π]`.
    pub fn is_valid(self) -> bool {
        self.lat.abs() <= FRAC_PI_2 && self.lng.abs() <= PI
    }

    /// Clamp latitude to `[-π/2, π/2]` and wrap longitude into `[-π, π]`.
    pub fn normalized(self) -> Self {
        Self {
            lat: self.lat.clamp(-FRAC_PI_2, FRAC_PI_2),
            lng: remainder(self.lng, 2.0 * PI),
        }
    }

    /// Unit-length point for this coordinate.
    pub fn to_point(self) -> Point {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lng, cos_lng) = self.lng.sin_cos();
        Point::new(cos_lng * cos_lat, sin_lng * cos_lat, sin_lat)
    }

    /// Both components multiplied by `m`.  Used for size/margin arithmetic,
    /// where the result is not interpreted as a location.
    #[inline]
    pub fn scaled(self, m: f64) -> Self {
        Self { lat: self.lat * m, lng: self.lng * m }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat.to_degrees(), self.lng.to_degrees())
    }
}
