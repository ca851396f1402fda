//! Floating-point helpers shared by the interval and coordinate types.

/// IEEE-754 remainder: `x - n * y` where `n` is `x / y` rounded to the
/// nearest integer (ties to even).
///
/// Unlike `%`, the result of `remainder(x, 2π)` always lies in `[-π, π]`,
/// which is exactly the range needed to wrap a longitude.
#[inline]
pub fn remainder(x: f64, y: f64) -> f64 {
    libm::remainder(x, y)
}
