//! Points on the unit sphere, represented as 3-D vectors.
//!
//! A `Point` is not required to be unit length in general (it is also used
//! for intermediate vector arithmetic), but every public API that interprets
//! it as a location on the sphere expects [`Point::normalize`]d input.

use std::ops::{Add, Mul, Neg, Sub};

use crate::Angle;

/// A 3-D vector; a location on the sphere when unit length.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, o: Point) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    #[inline]
    pub fn cross(self, o: Point) -> Point {
        Point::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    #[inline]
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Scale to unit length.  The zero vector is returned unchanged.
    pub fn normalize(self) -> Point {
        let n = self.norm();
        if n == 0.0 { self } else { self * (1.0 / n) }
    }

    pub fn is_unit_length(self) -> bool {
        (self.norm2() - 1.0).abs() <= 5.0 * f64::EPSILON
    }

    /// Angle between two vectors, in `[0, π]`.
    pub fn angle(self, o: Point) -> Angle {
        Angle::from_radians(self.cross(o).norm().atan2(self.dot(o)))
    }

    /// Index of the component with the largest absolute value.
    fn largest_abs_component(self) -> usize {
        let (x, y, z) = (self.x.abs(), self.y.abs(), self.z.abs());
        if x > y {
            if x > z { 0 } else { 2 }
        } else if y > z {
            1
        } else {
            2
        }
    }

    /// A unit vector orthogonal to `self`.
    pub fn ortho(self) -> Point {
        let k = match self.largest_abs_component() {
            0 => 2,
            n => n - 1,
        };
        let mut temp = [0.012, 0.0053, 0.00457];
        temp[k] = 1.0;
        self.cross(Point::new(temp[0], temp[1], temp[2])).normalize()
    }

    /// A vector orthogonal to both `self` and `o`, stable even when the two
    /// points are nearly identical.  Falls back to [`Point::ortho`] when the
    /// points coincide or are antipodal.
    pub fn robust_cross(self, o: Point) -> Point {
        // (b + a) x (b - a) == 2 (a x b), with far less cancellation error.
        let x = (o + self).cross(o - self);
        if x == Point::default() { self.ortho() } else { x }
    }

    /// The point at angular distance `ax` from `a` along the great circle
    /// through `a` and `b`.  `a` and `b` must be unit length.
    pub fn interpolate_at_distance(ax: Angle, a: Point, b: Point) -> Point {
        let normal = a.robust_cross(b).normalize();
        let tangent = normal.cross(a);
        let radians = ax.radians();
        (a * radians.cos() + tangent * radians.sin()).normalize()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point {
        Point::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, m: f64) -> Point {
        Point::new(self.x * m, self.y * m, self.z * m)
    }
}
