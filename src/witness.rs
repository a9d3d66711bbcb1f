//! Verify-fast witness serialization
//!
//! In verify-fast mode the signer appends the message encoding to the
//! signature so the verifier can check it instead of re-encoding: `t`
//! little-endian 16-bit values placed after the chain blocks. The bytes
//! arrive from an untrusted signature; [`read_witness`] only re-frames
//! them, and `check_encoding` re-validates every coordinate against the
//! digest.

use thiserror::Error;

/// Bytes occupied by one witness coordinate.
pub const COORD_BYTES: usize = 2;

/// Errors raised when re-framing a witness.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessError {
    /// Byte string length does not match the coordinate count
    #[error("witness must be exactly {expected} bytes, got {actual}")]
    Length {
        /// `t * 2` for the parameter set
        expected: usize,
        /// Observed byte count
        actual: usize,
    },
}

/// Result type for witness re-framing
pub type Result<T> = std::result::Result<T, WitnessError>;

/// Serialized length of a `t`-coordinate witness.
#[inline]
pub fn witness_len(t: i32) -> usize {
    t as usize * COORD_BYTES
}

/// Serializes an encoding as consecutive little-endian 16-bit values.
///
/// Coordinates above `u16::MAX` never occur for the supported parameter
/// sets (`n <= 510`); debug builds assert the range.
pub fn write_witness(encoding: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoding.len() * COORD_BYTES);
    for &k in encoding {
        debug_assert!((0..=i32::from(u16::MAX)).contains(&k));
        out.extend_from_slice(&(k as u16).to_le_bytes());
    }
    out
}

/// Re-frames a witness byte string into `t` coordinates.
pub fn read_witness(bytes: &[u8], t: i32) -> Result<Vec<i32>> {
    let expected = witness_len(t);
    if bytes.len() != expected {
        return Err(WitnessError::Length {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(COORD_BYTES)
        .map(|chunk| i32::from(u16::from_le_bytes([chunk[0], chunk[1]])))
        .collect())
}
