//! Random sampling inside caps and rectangles.
//!
//! Companions to [`GeoRng`] for randomized checks: every function is
//! deterministic given the generator's seed.

use std::f64::consts::PI;

use sg_core::{GeoRng, LatLng, Point};

use crate::{Cap, LatLngRect};

/// A cap with a random axis and an area in `[min_area, max_area]`,
/// log-uniformly distributed so small and large caps are equally likely.
pub fn random_cap(rng: &mut GeoRng, min_area: f64, max_area: f64) -> Cap {
    debug_assert!(0.0 < min_area && min_area <= max_area);
    let area = max_area * (min_area / max_area).powf(rng.uniform(0.0, 1.0));
    Cap::from_axis_area(rng.random_point(), area)
}

/// A point uniformly distributed (by area) inside `cap`.
pub fn sample_point_in_cap(rng: &mut GeoRng, cap: &Cap) -> Point {
    // Treat the axis as "z" and complete the frame.
    let z = cap.axis();
    let x = z.ortho();
    let y = z.cross(x);

    // Cap area grows linearly with height, so a uniform height gives a
    // uniform point; then pick an angle around the circle at that height.
    let h = rng.uniform(0.0, 1.0) * cap.height();
    let theta = rng.uniform(0.0, 2.0 * PI);
    let r = (h * (2.0 - h)).sqrt();
    (x * (theta.cos() * r) + y * (theta.sin() * r) + z * (1.0 - h)).normalize()
}

/// A point uniformly distributed (by area) inside a non-empty `rect`.
pub fn sample_point_in_rect(rng: &mut GeoRng, rect: &LatLngRect) -> Point {
    debug_assert!(!rect.is_empty());
    let lat = rect.lat();
    let sin_lo = lat.lo().sin();
    let sin_hi = lat.hi().sin();
    let sampled_lat = (sin_lo + rng.uniform(0.0, 1.0) * (sin_hi - sin_lo)).asin();
    let sampled_lng = rect.lng().lo() + rng.uniform(0.0, 1.0) * rect.lng().length();
    LatLng::from_radians(sampled_lat, sampled_lng).normalized().to_point()
}
