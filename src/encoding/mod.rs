//! Constant-sum encoder, verifier, and decoder
//!
//! The bijection between the integer interval `[0, C(t,n,s))` and the
//! `t`-tuples over `[0, n]` summing to `s`, used as the message
//! representative of the one-time signature in place of a base-`w`
//! digest plus checksum: the fixed sum leaves a forger no slack to trade
//! chain positions against a checksum.
//!
//! Encoding walks coordinates MSB-first. At each step the digest falls
//! into exactly one window `[R(k-1), R(k))` of the rank function, which
//! fixes the coordinate at `k`; the digest is rebased into the window and
//! the residual sum shrinks by `k`. The strategies differ only in how the
//! window bounds are found:
//!
//! - [`Strategy::Linear`] / [`Strategy::LinearCached`] scan candidate
//!   values upward, accumulating cardinality windows;
//! - [`Strategy::Cky`] / [`Strategy::CkyInverted`] replace the
//!   per-candidate cardinality with a one-multiplication binomial
//!   recurrence (unbounded regime, `n >= s`);
//! - [`Strategy::BinarySearch`] / [`Strategy::BinarySearchCached`]
//!   lower-bound search the rank function directly.
//!
//! Verification re-walks the windows for a claimed tuple and rejects on
//! the first mismatch. All strategies implement the same bijection; every
//! invocation allocates a small bounded set of temporaries, released on
//! all exit paths.

mod binary;
mod cky;
mod linear;

use crate::bigint::Big;
use crate::cache::CacheContext;
use crate::combinatorics::rank;
use crate::params::Params;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when assembling an encoder or decoding a tuple.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Strategy reads a cache the context does not hold
    #[error("strategy {strategy:?} requires the {cache} cache to be loaded")]
    MissingCache {
        /// Requested strategy
        strategy: Strategy,
        /// Human-readable name of the missing table
        cache: &'static str,
    },

    /// CKY recurrences only cover the unbounded regime
    #[error("CKY strategies require n >= s (got n={n}, s={s})")]
    CkyRequiresUnbounded {
        /// Per-coordinate maximum
        n: i32,
        /// Required sum
        s: i32,
    },

    /// Cache context was built for a different parameter set
    #[error("cache context was built for {cached:?}, encoder uses {requested:?}")]
    ParamsMismatch {
        /// Parameters the context was built with
        cached: Params,
        /// Parameters handed to the encoder
        requested: Params,
    },

    /// Tuple rejected by the decoder
    #[error("not a valid constant-sum tuple for the parameter set")]
    InvalidEncoding,
}

/// Result type for encoder assembly and decoding
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Search strategy used by [`ConstantSumEncoder::to_constant_sum`].
///
/// All strategies compute the same bijection; they differ in how the
/// per-coordinate window bounds are obtained and in which caches they
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Linear forward scan, cardinalities computed per candidate.
    Linear,
    /// Linear forward scan reading the cardinality cache.
    LinearCached,
    /// Closed-form descending walk on the complement rank (`n >= s` only).
    Cky,
    /// Closed-form ascending walk on slice widths (`n >= s` only).
    CkyInverted,
    /// Lower-bound binary search over rank bounds.
    BinarySearch,
    /// Lower-bound binary search reading the rank cache.
    BinarySearchCached,
}

/// Encoder, verifier, and decoder for one parameter set.
///
/// Coordinate order is MSB-first throughout: index 0 of an encoding is
/// the most significant coordinate, the one fixed first by the encoder.
/// The struct has no interior mutability; once built (caches included) it
/// can be shared across threads for independent calls.
#[derive(Debug, Clone)]
pub struct ConstantSumEncoder {
    params: Params,
    strategy: Strategy,
    caches: CacheContext,
}

impl ConstantSumEncoder {
    /// Creates an encoder, building whatever caches the strategy reads.
    pub fn new(params: Params, strategy: Strategy) -> Result<Self> {
        let caches = match strategy {
            Strategy::LinearCached => CacheContext::new(params).with_len_cache(),
            Strategy::BinarySearchCached => CacheContext::new(params).with_rank_cache(),
            _ => CacheContext::new(params),
        };
        Self::with_caches(params, strategy, caches)
    }

    /// Creates an encoder around caller-built caches, so one expensive
    /// context can serve several encoders (or outlive parameter
    /// re-selection decisions made elsewhere). Context clones share the
    /// built tables, so handing one to each encoder costs nothing.
    pub fn with_caches(
        params: Params,
        strategy: Strategy,
        caches: CacheContext,
    ) -> Result<Self> {
        if *caches.params() != params {
            return Err(EncodingError::ParamsMismatch {
                cached: *caches.params(),
                requested: params,
            });
        }
        match strategy {
            Strategy::LinearCached if caches.len_cache().is_none() => {
                return Err(EncodingError::MissingCache {
                    strategy,
                    cache: "cardinality",
                });
            }
            Strategy::BinarySearchCached if caches.rank_cache().is_none() => {
                return Err(EncodingError::MissingCache {
                    strategy,
                    cache: "rank",
                });
            }
            Strategy::Cky | Strategy::CkyInverted if params.n < params.s => {
                return Err(EncodingError::CkyRequiresUnbounded {
                    n: params.n,
                    s: params.s,
                });
            }
            _ => {}
        }
        log::debug!(
            "constant-sum encoder ready: strategy={:?}, t={}, n={}, s={}",
            strategy,
            params.t,
            params.n,
            params.s
        );
        Ok(ConstantSumEncoder {
            params,
            strategy,
            caches,
        })
    }

    /// Parameter set of this encoder.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Strategy selected at construction.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Cache context backing this encoder.
    pub fn caches(&self) -> &CacheContext {
        &self.caches
    }

    /// Encodes a digest into its constant-sum tuple.
    ///
    /// The digest must lie in `[0, C(t,n,s))`. The encoder is not
    /// defensive about that precondition: debug builds assert it, release
    /// builds produce unspecified output for out-of-range digests.
    pub fn to_constant_sum(&self, digest: &Big) -> Vec<i32> {
        debug_assert!(!digest.is_negative());
        debug_assert!(*digest < self.params.domain_size());
        let mut out = vec![0i32; self.params.t as usize];
        match self.strategy {
            Strategy::Linear => linear::encode(&self.params, None, digest, &mut out),
            Strategy::LinearCached => {
                linear::encode(&self.params, self.caches.len_cache(), digest, &mut out)
            }
            Strategy::Cky => cky::encode(&self.params, digest, &mut out),
            Strategy::CkyInverted => cky::encode_inverted(&self.params, digest, &mut out),
            Strategy::BinarySearch => binary::encode(&self.params, None, digest, &mut out),
            Strategy::BinarySearchCached => {
                binary::encode(&self.params, self.caches.rank_cache(), digest, &mut out)
            }
        }
        out
    }

    /// Verifies that `encoding` is the unique constant-sum tuple of
    /// `digest`.
    ///
    /// The witness is untrusted: coordinate bounds, the running sum, and
    /// every window comparison are recomputed here, and the first failure
    /// rejects. Returns `true` only for the exact tuple
    /// [`Self::to_constant_sum`] would produce.
    pub fn check_encoding(&self, digest: &Big, encoding: &[i32]) -> bool {
        let p = &self.params;
        if encoding.len() != p.t as usize {
            return false;
        }
        let mut i = digest.clone();
        let mut s = p.s;
        for pos in 0..p.t {
            let t_rem = p.t - pos;
            let k = encoding[pos as usize];
            // Bounds come first: the rank table has no cells past
            // min(n, s) and the window formulas assume k is in range.
            if k < 0 || k > p.n || k > s {
                return false;
            }
            match self.caches.rank_cache() {
                Some(cache) => {
                    if i >= *cache.get(t_rem, s, k) {
                        return false;
                    }
                    if k > 0 {
                        let left = cache.get(t_rem, s, k - 1);
                        if i < *left {
                            return false;
                        }
                        i -= left;
                    }
                }
                None => {
                    if i >= rank(t_rem, p.n, s, k) {
                        return false;
                    }
                    if k > 0 {
                        let left = rank(t_rem, p.n, s, k - 1);
                        if i < left {
                            return false;
                        }
                        i -= left;
                    }
                }
            }
            s -= k;
        }
        true
    }

    /// Recovers the digest whose encoding is `encoding`, the inverse of
    /// [`Self::to_constant_sum`].
    ///
    /// Walks the same windows as the verifier, accumulating the lower
    /// bounds instead of comparing against them. Rejects tuples with
    /// out-of-bounds coordinates or the wrong component sum.
    pub fn from_constant_sum(&self, encoding: &[i32]) -> Result<Big> {
        let p = &self.params;
        if encoding.len() != p.t as usize {
            return Err(EncodingError::InvalidEncoding);
        }
        let mut acc = Big::zero();
        let mut s = p.s;
        for pos in 0..p.t {
            let t_rem = p.t - pos;
            let k = encoding[pos as usize];
            if k < 0 || k > p.n || k > s {
                return Err(EncodingError::InvalidEncoding);
            }
            if k > 0 {
                match self.caches.rank_cache() {
                    Some(cache) => acc += cache.get(t_rem, s, k - 1),
                    None => acc += rank(t_rem, p.n, s, k - 1),
                }
                s -= k;
            }
        }
        if s != 0 {
            return Err(EncodingError::InvalidEncoding);
        }
        Ok(acc)
    }
}
