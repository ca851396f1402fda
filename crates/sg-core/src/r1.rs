//! Closed intervals on the real line, used for latitude ranges.

/// A closed interval `[lo, hi]`.  Any interval with `lo > hi` is empty; the
/// canonical empty interval is `[1, 0]`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct R1Interval {
    lo: f64,
    hi: f64,
}

impl R1Interval {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self { lo: 1.0, hi: 0.0 }
    }

    #[inline]
    pub const fn from_point(p: f64) -> Self {
        Self { lo: p, hi: p }
    }

    /// The minimal interval containing both points, in either order.
    pub fn from_point_pair(p1: f64, p2: f64) -> Self {
        if p1 <= p2 { Self::new(p1, p2) } else { Self::new(p2, p1) }
    }

    #[inline]
    pub fn lo(self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo > self.hi
    }

    pub fn center(self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// `hi - lo`; negative for empty intervals.
    pub fn length(self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn contains(self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    #[inline]
    pub fn interior_contains(self, p: f64) -> bool {
        self.lo < p && p < self.hi
    }

    pub fn contains_interval(self, y: R1Interval) -> bool {
        y.is_empty() || (self.lo <= y.lo && y.hi <= self.hi)
    }

    pub fn intersects(self, y: R1Interval) -> bool {
        if self.lo <= y.lo {
            y.lo <= self.hi && y.lo <= y.hi
        } else {
            self.lo <= y.hi && self.lo <= self.hi
        }
    }

    pub fn add_point(self, p: f64) -> Self {
        if self.is_empty() {
            Self::from_point(p)
        } else if p < self.lo {
            Self::new(p, self.hi)
        } else if p > self.hi {
            Self::new(self.lo, p)
        } else {
            self
        }
    }

    /// Grow both ends by `margin`.  A negative margin shrinks the interval
    /// and may empty it; an empty interval stays empty.
    pub fn expanded(self, margin: f64) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::new(self.lo - margin, self.hi + margin)
    }

    pub fn union(self, y: R1Interval) -> Self {
        if self.is_empty() {
            y
        } else if y.is_empty() {
            self
        } else {
            Self::new(self.lo.min(y.lo), self.hi.max(y.hi))
        }
    }

    /// The result may be a non-canonical empty interval.
    pub fn intersection(self, y: R1Interval) -> Self {
        Self::new(self.lo.max(y.lo), self.hi.min(y.hi))
    }

    /// The closest point in the interval to `p`.  The interval must be non-empty.
    pub fn clamp_point(self, p: f64) -> f64 {
        debug_assert!(!self.is_empty());
        p.max(self.lo).min(self.hi)
    }

    /// `true` if each endpoint is within `max_error` of the other interval's.
    /// An empty interval approximately equals any interval of length at most
    /// `2 * max_error`.
    pub fn approx_equals(self, y: R1Interval, max_error: f64) -> bool {
        if self.is_empty() {
            return y.length() <= 2.0 * max_error;
        }
        if y.is_empty() {
            return self.length() <= 2.0 * max_error;
        }
        (y.lo - self.lo).abs() <= max_error && (y.hi - self.hi).abs() <= max_error
    }
}

impl Default for R1Interval {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for R1Interval {
    /// All empty intervals compare equal.
    fn eq(&self, o: &Self) -> bool {
        (self.lo == o.lo && self.hi == o.hi) || (self.is_empty() && o.is_empty())
    }
}
