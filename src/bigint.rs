//! Arbitrary-precision integer adapter
//!
//! Thin layer over [`num_bigint::BigInt`] providing the handful of
//! operations the encoding core needs beyond what `num-bigint` spells
//! natively: big-endian digest import, fused multiply-accumulate, scalar
//! exact division, and binomial coefficients. Construction, copying,
//! comparison, and release come from `num-bigint` itself; every value is
//! freed when it drops, on all exit paths.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

/// Arbitrary-precision signed integer used throughout the crate.
///
/// All values exposed by the public API (digests, tuple counts, rank
/// bounds) are nonnegative; the partial sums of the inclusion-exclusion
/// series are not, which is why the signed representation is used.
pub type Big = BigInt;

/// Imports a digest from big-endian bytes (most significant byte first,
/// no sign).
#[inline]
pub fn from_bytes_be(bytes: &[u8]) -> Big {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Fused multiply-accumulate: `acc += a * b`.
#[inline]
pub fn addmul(acc: &mut Big, a: &Big, b: &Big) {
    *acc += a * b;
}

/// Fused multiply-subtract: `acc -= a * b`.
#[inline]
pub fn submul(acc: &mut Big, a: &Big, b: &Big) {
    *acc -= a * b;
}

/// In-place scalar multiplication: `x *= k`.
#[inline]
pub fn mul_ui(x: &mut Big, k: u64) {
    *x *= k;
}

/// In-place exact scalar division: `x /= k`.
///
/// The quotient must be exact. A non-exact divisor is a caller bug and
/// trips a debug assertion; release builds truncate.
#[inline]
pub fn divexact_ui(x: &mut Big, k: u64) {
    debug_assert!((&*x % k).is_zero(), "non-exact division by {}", k);
    *x /= k;
}

/// Binomial coefficient `C(n, k)` for nonnegative arguments.
///
/// Returns zero when `k > n`. Out-of-range (negative) arguments are the
/// concern of [`crate::combinatorics::binomial`].
pub fn binomial_exact(n: u64, k: u64) -> Big {
    num_integer::binomial(Big::from(n), Big::from(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_be() {
        assert_eq!(from_bytes_be(&[0x01, 0x02]), Big::from(258));
        assert_eq!(from_bytes_be(&[]), Big::zero());
        assert_eq!(from_bytes_be(&[0x00, 0xff]), Big::from(255));
    }

    #[test]
    fn test_addmul_submul() {
        let mut acc = Big::from(10);
        addmul(&mut acc, &Big::from(3), &Big::from(4));
        assert_eq!(acc, Big::from(22));
        submul(&mut acc, &Big::from(5), &Big::from(5));
        assert_eq!(acc, Big::from(-3));
    }

    #[test]
    fn test_scalar_ops() {
        let mut x = Big::from(21);
        mul_ui(&mut x, 4);
        assert_eq!(x, Big::from(84));
        divexact_ui(&mut x, 7);
        assert_eq!(x, Big::from(12));
    }

    #[test]
    fn test_binomial_exact() {
        assert_eq!(binomial_exact(5, 2), Big::from(10));
        assert_eq!(binomial_exact(0, 0), Big::from(1));
        assert_eq!(binomial_exact(4, 7), Big::zero());
        assert_eq!(binomial_exact(67, 33), "14226520737620288370".parse::<Big>().unwrap());
    }
}
