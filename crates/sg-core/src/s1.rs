//! Closed intervals on the unit circle, used for longitude ranges.
//!
//! # Representation
//!
//! Points are angles in `(-π, π]`.  An interval `[lo, hi]` with `lo <= hi`
//! is the usual range; one with `lo > hi` is *inverted* and wraps through
//! the cut point at ±π (the antimeridian).  Two sentinels are distinguished:
//!
//! | Interval  | `lo` | `hi` |
//! |-----------|------|------|
//! | empty     | `π`  | `-π` |
//! | full      | `-π` | `π`  |
//!
//! Outside of these two sentinels the value `-π` never appears: it is
//! normalized to `π` on construction.  This is why an interval starting at
//! -180° becomes inverted (`[170°, 180°]` is fine, but `[-180°, -170°]`
//! turns into `[180°, -170°]`).

use std::f64::consts::PI;

use crate::math::remainder;

/// A closed interval of angles on the unit circle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct S1Interval {
    lo: f64,
    hi: f64,
}

impl S1Interval {
    /// Construct from endpoints in `[-π, π]`, normalizing `-π` to `π`
    /// except for the full and empty sentinels.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self {
            lo: if lo == -PI && hi != PI { PI } else { lo },
            hi: if hi == -PI && lo != PI { PI } else { hi },
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self { lo: PI, hi: -PI }
    }

    #[inline]
    pub const fn full() -> Self {
        Self { lo: -PI, hi: PI }
    }

    pub fn from_point(p: f64) -> Self {
        let p = if p == -PI { PI } else { p };
        Self { lo: p, hi: p }
    }

    /// The minimal interval containing both points.  Of the two arcs joining
    /// them, the shorter one is chosen (ties pick `[p1, p2]`).
    pub fn from_point_pair(p1: f64, p2: f64) -> Self {
        let p1 = if p1 == -PI { PI } else { p1 };
        let p2 = if p2 == -PI { PI } else { p2 };
        if positive_distance(p1, p2) <= PI {
            Self { lo: p1, hi: p2 }
        } else {
            Self { lo: p2, hi: p1 }
        }
    }

    #[inline]
    pub fn lo(self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(self) -> f64 {
        self.hi
    }

    /// Endpoints within `[-π, π]`, and `-π` only as part of a sentinel.
    pub fn is_valid(self) -> bool {
        self.lo.abs() <= PI
            && self.hi.abs() <= PI
            && !(self.lo == -PI && self.hi != PI)
            && !(self.hi == -PI && self.lo != PI)
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    /// `true` if `lo > hi`, i.e. the interval crosses the antimeridian (or is empty).
    #[inline]
    pub fn is_inverted(self) -> bool {
        self.lo > self.hi
    }

    /// Midpoint of the interval.  For full and empty intervals the result is
    /// arbitrary.
    pub fn center(self) -> f64 {
        let center = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            center
        } else if center <= 0.0 {
            center + PI
        } else {
            center - PI
        }
    }

    /// Arc length; negative for the empty interval.
    pub fn length(self) -> f64 {
        let mut length = self.hi - self.lo;
        if length >= 0.0 {
            return length;
        }
        length += 2.0 * PI;
        if length > 0.0 { length } else { -1.0 }
    }

    /// Containment for a point already normalized away from `-π`.
    fn fast_contains(self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    pub fn contains(self, p: f64) -> bool {
        debug_assert!(p.abs() <= PI);
        self.fast_contains(if p == -PI { PI } else { p })
    }

    pub fn interior_contains(self, p: f64) -> bool {
        debug_assert!(p.abs() <= PI);
        let p = if p == -PI { PI } else { p };
        if self.is_inverted() {
            p > self.lo || p < self.hi
        } else {
            (p > self.lo && p < self.hi) || self.is_full()
        }
    }

    pub fn contains_interval(self, y: S1Interval) -> bool {
        if self.is_inverted() {
            if y.is_inverted() {
                return y.lo >= self.lo && y.hi <= self.hi;
            }
            (y.lo >= self.lo || y.hi <= self.hi) && !self.is_empty()
        } else {
            if y.is_inverted() {
                return self.is_full() || y.is_empty();
            }
            y.lo >= self.lo && y.hi <= self.hi
        }
    }

    pub fn intersects(self, y: S1Interval) -> bool {
        if self.is_empty() || y.is_empty() {
            return false;
        }
        if self.is_inverted() {
            // Every non-empty inverted interval contains π.
            y.is_inverted() || y.lo <= self.hi || y.hi >= self.lo
        } else if y.is_inverted() {
            y.lo <= self.hi || y.hi >= self.lo
        } else {
            y.lo <= self.hi && y.hi >= self.lo
        }
    }

    /// The minimal interval containing `self` and `p`.  When `p` is outside,
    /// the interval is grown in whichever direction is shorter.
    pub fn add_point(self, p: f64) -> Self {
        debug_assert!(p.abs() <= PI);
        let p = if p == -PI { PI } else { p };
        if self.fast_contains(p) {
            return self;
        }
        if self.is_empty() {
            return Self::from_point(p);
        }
        let dlo = positive_distance(p, self.lo);
        let dhi = positive_distance(self.hi, p);
        if dlo < dhi {
            Self { lo: p, hi: self.hi }
        } else {
            Self { lo: self.lo, hi: p }
        }
    }

    /// Grow both ends by `margin`, wrapping around the circle.
    ///
    /// Growing never affects an empty interval and saturates at full once
    /// the arc length would reach 2π.  A negative margin shrinks instead:
    /// full stays full, and the interval collapses to empty once the arc
    /// length would reach zero.
    pub fn expanded(self, margin: f64) -> Self {
        if margin >= 0.0 {
            if self.is_empty() {
                return self;
            }
            // Check whether this interval will be full after expansion, allowing
            // for a rounding error when computing each endpoint.
            if self.length() + 2.0 * margin + 2.0 * f64::EPSILON >= 2.0 * PI {
                return Self::full();
            }
        } else {
            if self.is_full() {
                return self;
            }
            if self.length() + 2.0 * margin - 2.0 * f64::EPSILON <= 0.0 {
                return Self::empty();
            }
        }
        let mut lo = remainder(self.lo - margin, 2.0 * PI);
        let mut hi = remainder(self.hi + margin, 2.0 * PI);
        if lo <= -PI {
            lo = PI;
        }
        if hi <= -PI {
            hi = PI;
        }
        Self { lo, hi }
    }

    pub fn union(self, y: S1Interval) -> Self {
        if y.is_empty() {
            return self;
        }
        if self.fast_contains(y.lo) {
            if self.fast_contains(y.hi) {
                // Either self contains y, or the union of the two is full.
                if self.contains_interval(y) {
                    return self;
                }
                return Self::full();
            }
            return Self { lo: self.lo, hi: y.hi };
        }
        if self.fast_contains(y.hi) {
            return Self { lo: y.lo, hi: self.hi };
        }
        // The two intervals are disjoint, or y contains self.
        if self.is_empty() || y.fast_contains(self.lo) {
            return y;
        }
        // Close the shorter of the two gaps.
        let dlo = positive_distance(y.hi, self.lo);
        let dhi = positive_distance(self.hi, y.lo);
        if dlo < dhi {
            Self { lo: y.lo, hi: self.hi }
        } else {
            Self { lo: self.lo, hi: y.hi }
        }
    }

    /// The smallest interval containing the intersection.  When the true
    /// intersection is two disjoint arcs, the result spans both of them.
    pub fn intersection(self, y: S1Interval) -> Self {
        if y.is_empty() {
            return Self::empty();
        }
        if self.fast_contains(y.lo) {
            if self.fast_contains(y.hi) {
                // Either self contains y, or the region of intersection consists
                // of two disjoint pieces; keep the shorter interval.
                if y.length() < self.length() {
                    return y;
                }
                return self;
            }
            return Self { lo: y.lo, hi: self.hi };
        }
        if self.fast_contains(y.hi) {
            return Self { lo: self.lo, hi: y.hi };
        }
        // Either y contains self, or the two are disjoint.
        if y.fast_contains(self.lo) {
            return self;
        }
        Self::empty()
    }

    /// `true` if `self` can be turned into `y` by moving each endpoint by at
    /// most `max_error`, without the arc length changing by more than
    /// `2 * max_error`.
    pub fn approx_equals(self, y: S1Interval, max_error: f64) -> bool {
        if self.is_empty() {
            return y.length() <= 2.0 * max_error;
        }
        if y.is_empty() {
            return self.length() <= 2.0 * max_error;
        }
        if self.is_full() {
            return y.length() >= 2.0 * (PI - max_error);
        }
        if y.is_full() {
            return self.length() >= 2.0 * (PI - max_error);
        }
        remainder(y.lo - self.lo, 2.0 * PI).abs() <= max_error
            && remainder(y.hi - self.hi, 2.0 * PI).abs() <= max_error
            && (self.length() - y.length()).abs() <= 2.0 * max_error
    }
}

impl Default for S1Interval {
    fn default() -> Self {
        Self::empty()
    }
}

/// Distance from `a` to `b` travelling counter-clockwise, in `[0, 2π)`.
/// Both arguments must be in `[-π, π]`.
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        return d;
    }
    // Written this way to keep the result exact when b ≈ π and a ≈ -π.
    (b + PI) - (a - PI)
}
