//! Signature parameter sets
//!
//! A constant-sum encoding instance is fixed by three integers: the number
//! of coordinates `t`, the per-coordinate maximum `n` (equal to
//! `wots_w - 1` in the hash-chain interpretation), and the required
//! component sum `s`. The canonical sets used with the signature scheme
//! are exported as constants; everything else about OID and parameter
//! string handling belongs to the layer embedding this crate.

use crate::bigint::Big;
use crate::combinatorics::constant_sum_len;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by parameter validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// `t` or `n` below 1
    #[error("t and n must both be at least 1 (got t={t}, n={n})")]
    NonPositive {
        /// Rejected coordinate count
        t: i32,
        /// Rejected per-coordinate maximum
        n: i32,
    },

    /// `s` outside `[0, t*n]`
    #[error("sum must lie in [0, {max}] (got {s})")]
    SumOutOfRange {
        /// Rejected sum
        s: i32,
        /// Largest admissible sum, `t * n`
        max: i64,
    },
}

/// Result type for parameter validation
pub type Result<T> = std::result::Result<T, ParamError>;

/// Constant-sum encoding parameters.
///
/// Describes tuples of `t` coordinates, each in `[0, n]`, summing to
/// exactly `s`. The encodable interval is `[0, domain_size())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Number of coordinates (hash chains) in an encoding.
    pub t: i32,
    /// Maximum value of a single coordinate.
    pub n: i32,
    /// Required component sum.
    pub s: i32,
}

impl Params {
    /// Validates and creates a parameter set.
    pub fn new(t: i32, n: i32, s: i32) -> Result<Self> {
        if t < 1 || n < 1 {
            return Err(ParamError::NonPositive { t, n });
        }
        let max = t as i64 * n as i64;
        if s < 0 || (s as i64) > max {
            return Err(ParamError::SumOutOfRange { s, max });
        }
        Ok(Params { t, n, s })
    }

    /// Creates a parameter set without validation. Intended for the
    /// canonical constants below.
    pub const fn new_unchecked(t: i32, n: i32, s: i32) -> Self {
        Params { t, n, s }
    }

    /// Number of encodable values, `C(t,n,s)`: the count of `t`-tuples
    /// over `[0, n]` summing to `s`.
    pub fn domain_size(&self) -> Big {
        constant_sum_len(self.t, self.n, self.s)
    }

    /// Largest digest width (in bits) this set can represent: digests of
    /// up to this many bits are always below [`Self::domain_size`].
    pub fn digest_capacity_bits(&self) -> u64 {
        self.domain_size().bits() - 1
    }

    /// Looks up a canonical parameter set by its label (for example
    /// `"C16"`).
    pub fn by_label(label: &str) -> Option<Params> {
        PARAMETER_SETS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, params)| *params)
    }
}

/// `w = 16` chains: 67 coordinates in `[0, 15]` summing to 400.
pub const C16: Params = Params::new_unchecked(67, 15, 400);

/// `w = 42` chains: 67 coordinates in `[0, 41]` summing to 341.
pub const C42: Params = Params::new_unchecked(67, 41, 341);

/// `w = 256` chains: 34 coordinates in `[0, 255]` summing to 3099.
pub const C256: Params = Params::new_unchecked(34, 255, 3099);

/// `w = 510` chains: 34 coordinates in `[0, 509]` summing to 2836.
pub const C510: Params = Params::new_unchecked(34, 509, 2836);

/// `w = 226` chains: 34 coordinates in `[0, 225]` summing to 3643.
pub const C226: Params = Params::new_unchecked(34, 225, 3643);

/// Canonical parameter sets, by label.
pub const PARAMETER_SETS: [(&str, Params); 5] = [
    ("C16", C16),
    ("C42", C42),
    ("C256", C256),
    ("C510", C510),
    ("C226", C226),
];
