//! `sg-rect` — latitude/longitude bounding rectangles.
//!
//! A [`LatLngRect`] is a closed rectangle in lat/lng space: a latitude
//! interval and a (possibly antimeridian-crossing) longitude interval.  It
//! supports set algebra, point and margin growth, polar closure, growth and
//! shrinkage by true distances on the sphere, and a fixed 33-byte encoding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`rect`]    | `LatLngRect` — immutable, validated value type              |
//! | [`builder`] | `LatLngRectBuilder` — in-place construction, explicit freeze |
//! | [`state`]   | Shared representation, invariants, `Validation` mode        |
//! | [`cap`]     | `Cap` — spherical caps and their rectangle bounds           |
//! | [`region`]  | `Region` trait: "smallest rectangle containing me"          |
//! | [`codec`]   | Versioned little-endian encoding                            |
//! | [`sample`]  | Random points in caps and rectangles (test data)            |
//! | [`error`]   | `RectError`, `Violation`, `RectResult<T>`                   |
//!
//! # Validation
//!
//! Constructors that accept raw intervals take an explicit [`Validation`]
//! mode.  `Checked` rejects invalid intervals with [`RectError::Invalid`];
//! `Trusted` skips the check and leaves validity to the caller.  Decoding is
//! always checked.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize`; deserialization validates. |

pub mod builder;
pub mod cap;
pub mod codec;
pub mod error;
pub mod rect;
pub mod region;
pub mod sample;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::LatLngRectBuilder;
pub use cap::Cap;
pub use codec::{ENCODED_LEN, ENCODING_VERSION};
pub use error::{RectError, RectResult, Violation};
pub use rect::{DEFAULT_MAX_ERROR, LatLngRect};
pub use region::Region;
pub use state::{FULL_LAT, Validation};
