//! Lossless binary encoding of [`LatLngRect`].
//!
//! # Layout (little-endian, 33 bytes)
//!
//! ```text
//! offset  size  field
//!      0     1  version (= 1)
//!      1     8  lat.lo  (f64)
//!      9     8  lat.hi  (f64)
//!     17     8  lng.lo  (f64)
//!     25     8  lng.hi  (f64)
//! ```
//!
//! Decoders reject any other version outright; a future version may change
//! the layout.  Decoded intervals are always validated, regardless of the
//! [`Validation`](crate::Validation) mode used elsewhere.

use std::io::{Read, Write};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use sg_core::{R1Interval, S1Interval};
use tracing::debug;

use crate::state::RectState;
use crate::{LatLngRect, RectError, RectResult};

/// Version byte written by [`LatLngRect::encode`].
pub const ENCODING_VERSION: u8 = 1;

/// Size of an encoded rectangle in bytes.
pub const ENCODED_LEN: usize = 33;

impl LatLngRect {
    /// The 33-byte encoding of this rectangle.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut bytes = [0u8; ENCODED_LEN];
        bytes[0] = ENCODING_VERSION;
        LittleEndian::write_f64(&mut bytes[1..9], self.0.lat.lo());
        LittleEndian::write_f64(&mut bytes[9..17], self.0.lat.hi());
        LittleEndian::write_f64(&mut bytes[17..25], self.0.lng.lo());
        LittleEndian::write_f64(&mut bytes[25..33], self.0.lng.hi());
        bytes
    }

    /// Write the encoding to `out`.  Fails only if the writer does.
    pub fn encode<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.to_bytes())
    }

    /// Decode from the first [`ENCODED_LEN`] bytes of `bytes`; anything after
    /// them is ignored.
    pub fn from_bytes(bytes: &[u8]) -> RectResult<Self> {
        let Some(&version) = bytes.first() else {
            return Err(truncated(0));
        };
        check_version(version)?;
        if bytes.len() < ENCODED_LEN {
            return Err(truncated(bytes.len()));
        }
        decoded(
            LittleEndian::read_f64(&bytes[1..9]),
            LittleEndian::read_f64(&bytes[9..17]),
            LittleEndian::read_f64(&bytes[17..25]),
            LittleEndian::read_f64(&bytes[25..33]),
        )
    }

    /// Read one encoded rectangle from `input`.
    ///
    /// A stream that ends early yields [`RectError::Io`] with
    /// `ErrorKind::UnexpectedEof`, which [`RectError::is_malformed`] reports.
    pub fn decode<R: Read>(input: &mut R) -> RectResult<Self> {
        check_version(input.read_u8()?)?;
        let lat_lo = input.read_f64::<LittleEndian>()?;
        let lat_hi = input.read_f64::<LittleEndian>()?;
        let lng_lo = input.read_f64::<LittleEndian>()?;
        let lng_hi = input.read_f64::<LittleEndian>()?;
        decoded(lat_lo, lat_hi, lng_lo, lng_hi)
    }
}

fn truncated(got: usize) -> RectError {
    debug!(got, expected = ENCODED_LEN, "rejected truncated rectangle encoding");
    RectError::Truncated { expected: ENCODED_LEN, got }
}

fn check_version(version: u8) -> RectResult<()> {
    if version != ENCODING_VERSION {
        debug!(version, "rejected rectangle encoding with unsupported version");
        return Err(RectError::UnsupportedVersion(version));
    }
    Ok(())
}

fn decoded(lat_lo: f64, lat_hi: f64, lng_lo: f64, lng_hi: f64) -> RectResult<LatLngRect> {
    let state = RectState::new(R1Interval::new(lat_lo, lat_hi), S1Interval::new(lng_lo, lng_hi));
    if let Err(violation) = state.validate() {
        debug!(%violation, ?state, "rejected decoded rectangle");
        return Err(RectError::InvalidEncoding(violation));
    }
    Ok(LatLngRect(state))
}
