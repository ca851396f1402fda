//! Angular distances: plain radians and squared-chord representations.
//!
//! [`Angle`] is the user-facing type: every public API that takes a margin
//! or a distance on the sphere takes an `Angle`.  [`ChordAngle`] stores the
//! squared length of the chord subtending the angle, which is cheaper and
//! more robust to compare (no trigonometry) and is what spherical caps use
//! internally for their radius.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Point;

/// Mean Earth radius used to convert surface distances to angles, metres.
pub const EARTH_RADIUS_METERS: f64 = 6_371_010.0;

// ── Angle ─────────────────────────────────────────────────────────────────────

/// A one-dimensional angle, stored in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    /// Angle subtended at the Earth's centre by a surface distance in metres.
    #[inline]
    pub fn from_meters(meters: f64) -> Self {
        Angle(meters / EARTH_RADIUS_METERS)
    }

    #[inline]
    pub fn from_km(km: f64) -> Self {
        Self::from_meters(1000.0 * km)
    }

    #[inline]
    pub const fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Surface distance on the Earth corresponding to this angle, km.
    #[inline]
    pub fn to_km(self) -> f64 {
        self.0 * EARTH_RADIUS_METERS / 1000.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Angle(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}d", self.degrees())
    }
}

// ── ChordAngle ────────────────────────────────────────────────────────────────

/// An angle represented by the squared length of its chord on the unit sphere.
///
/// Valid values lie in `[0, 4]`; the special value `-1` ([`ChordAngle::NEGATIVE`])
/// is smaller than every valid angle and is used as the radius of the empty cap.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordAngle(f64);

impl ChordAngle {
    pub const NEGATIVE: ChordAngle = ChordAngle(-1.0);
    pub const ZERO: ChordAngle = ChordAngle(0.0);
    /// 90 degrees.
    pub const RIGHT: ChordAngle = ChordAngle(2.0);
    /// 180 degrees, the largest representable angle.
    pub const STRAIGHT: ChordAngle = ChordAngle(4.0);

    /// Convert from an [`Angle`].  Negative angles map to `NEGATIVE`, and
    /// angles of π or more saturate at `STRAIGHT`.
    pub fn from_angle(angle: Angle) -> Self {
        let radians = angle.radians();
        if radians < 0.0 {
            Self::NEGATIVE
        } else if radians >= PI {
            Self::STRAIGHT
        } else {
            let length = 2.0 * (0.5 * radians).sin();
            ChordAngle((length * length).min(4.0))
        }
    }

    /// Construct directly from a squared chord length, clamped to at most 4.
    #[inline]
    pub fn from_length2(length2: f64) -> Self {
        ChordAngle(length2.min(4.0))
    }

    /// The angle between two unit-length points.
    #[inline]
    pub fn between(a: Point, b: Point) -> Self {
        Self::from_length2((a - b).norm2())
    }

    #[inline]
    pub fn length2(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn to_angle(self) -> Angle {
        if self.is_negative() {
            return Angle::from_radians(-1.0);
        }
        Angle::from_radians(2.0 * (0.5 * self.0.sqrt()).asin())
    }

    /// Sine of the angle, computed without converting back to radians.
    pub fn sin(self) -> f64 {
        debug_assert!(!self.is_negative());
        (self.0 * (1.0 - 0.25 * self.0)).max(0.0).sqrt()
    }
}

impl From<Angle> for ChordAngle {
    fn from(angle: Angle) -> Self {
        ChordAngle::from_angle(angle)
    }
}
