//! # constsum - Constant-Sum Encoding for Hash-Based Signatures
//!
//! The message-representative transform of a WOTS+-style one-time
//! signature: a bijection between the integer interval `[0, C(t,n,s))`
//! and the `t`-tuples of integers in `[0, n]` whose components sum to
//! exactly `s`. Because the sum is a fixed invariant, the encoding needs
//! no separate checksum: a forger cannot raise one chain position
//! without lowering another.
//!
//! ## Architecture
//!
//! - `bigint`: Arbitrary-precision adapter over `num-bigint`
//! - `combinatorics`: Tuple counting and lexicographic rank bounds
//! - `params`: Parameter sets `(t, n, s)` and the canonical instances
//! - `cache`: Optional memoization tables, built once per parameter set
//! - `encoding`: Encoder, verifier, and decoder with interchangeable
//!   search strategies
//! - `witness`: Verify-fast witness serialization
//!
//! ## Example
//!
//! ```rust
//! use constsum::{Big, ConstantSumEncoder, Params, Strategy};
//!
//! let params = Params::new(3, 3, 3)?;
//! let encoder = ConstantSumEncoder::new(params, Strategy::Linear)?;
//!
//! let digest = Big::from(5);
//! let encoding = encoder.to_constant_sum(&digest);
//! assert_eq!(encoding, vec![1, 1, 1]);
//! assert!(encoder.check_encoding(&digest, &encoding));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Arbitrary-precision arithmetic adapter
pub mod bigint;

// Combinatorial counting primitives
pub mod combinatorics;

// Parameter sets
pub mod params;

// Memoization tables
pub mod cache;

// Encoder / verifier / decoder
pub mod encoding;

// Verify-fast witness serialization
pub mod witness;

// Re-export commonly used types
pub use bigint::Big;
pub use cache::{CacheContext, LenCache, RankCache};
pub use encoding::{ConstantSumEncoder, EncodingError, Strategy};
pub use params::{ParamError, Params, C16, C226, C256, C42, C510, PARAMETER_SETS};
pub use witness::{read_witness, write_witness, WitnessError};

/// Re-export version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
