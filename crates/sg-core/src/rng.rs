//! Deterministic random geometry for tests and benchmarks.
//!
//! `GeoRng` wraps a `SmallRng` seeded from a `u64`, so every generated
//! point, angle, and coordinate sequence is reproducible from its seed.
//! Nothing in the geometry types depends on this module; it exists to feed
//! randomized checks of their properties.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Angle, LatLng, Point};

/// Seed used by [`GeoRng::default`].
pub const DEFAULT_SEED: u64 = 123_455;

/// Seeded generator of random geometry.
///
/// Not `Sync`: give each thread its own generator (see [`GeoRng::child`]).
pub struct GeoRng {
    seed: u64,
    rng: SmallRng,
}

impl GeoRng {
    pub fn new(seed: u64) -> Self {
        GeoRng { seed, rng: SmallRng::seed_from_u64(seed) }
    }

    /// Restart the sequence from the seed.
    pub fn reset(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator, e.g. one per worker thread.
    pub fn child(&mut self, offset: u64) -> GeoRng {
        let seed = self.rng.r#gen::<u64>() ^ offset.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        GeoRng::new(seed)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Uniform `f64` in `[min, max)`.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.rng.r#gen::<f64>() * (max - min)
    }

    /// `true` with probability `1/n`.
    pub fn one_in(&mut self, n: u32) -> bool {
        debug_assert!(n > 0);
        self.rng.gen_range(0..n) == 0
    }

    pub fn angle_in_range(&mut self, min_radians: f64, max_radians: f64) -> Angle {
        Angle::from_radians(self.uniform(min_radians, max_radians))
    }

    /// A unit-length point, uniformly distributed over the sphere.
    pub fn random_point(&mut self) -> Point {
        // Rejection-sample the unit ball so the direction is area-uniform.
        loop {
            let p = Point::new(
                self.uniform(-1.0, 1.0),
                self.uniform(-1.0, 1.0),
                self.uniform(-1.0, 1.0),
            );
            let n2 = p.norm2();
            if n2 > 1e-12 && n2 <= 1.0 {
                return p.normalize();
            }
        }
    }

    /// A normalized coordinate, uniformly distributed over the sphere.
    pub fn random_latlng(&mut self) -> LatLng {
        LatLng::from_point(self.random_point())
    }

    /// A normalized coordinate with latitude and longitude each uniform over
    /// their range (denser near the poles than [`random_latlng`](Self::random_latlng)).
    pub fn uniform_latlng(&mut self) -> LatLng {
        LatLng::from_radians(self.uniform(-FRAC_PI_2, FRAC_PI_2), self.uniform(-PI, PI))
    }
}

impl Default for GeoRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
