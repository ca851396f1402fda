//! `sg-core` — angle, point, coordinate, and interval primitives for the
//! `sphere_geom` workspace.
//!
//! These are the building blocks the lat/lng rectangle in `sg-rect` is made
//! of.  The crate has no workspace dependencies and only small external ones
//! (`libm` for IEEE remainder, `rand` for [`rng`], plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`angle`]  | `Angle`, `ChordAngle`, Earth-radius distance conversions  |
//! | [`point`]  | `Point` (unit-sphere vector), great-circle interpolation  |
//! | [`latlng`] | `LatLng` and its point conversions                        |
//! | [`r1`]     | `R1Interval` — closed linear interval (latitude)          |
//! | [`s1`]     | `S1Interval` — closed circular interval (longitude)       |
//! | [`math`]   | `remainder` (IEEE-754)                                    |
//! | [`rng`]    | `GeoRng` — seeded random geometry for tests               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod angle;
pub mod latlng;
pub mod math;
pub mod point;
pub mod r1;
pub mod rng;
pub mod s1;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{Angle, ChordAngle, EARTH_RADIUS_METERS};
pub use latlng::LatLng;
pub use point::Point;
pub use r1::R1Interval;
pub use rng::GeoRng;
pub use s1::S1Interval;
