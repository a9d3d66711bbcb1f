//! Combinatorial counting primitives
//!
//! The two quantities the encoder and verifier are built on: the number of
//! `t`-tuples over `[0, n]` with component sum `s`, and the count of such
//! tuples whose leading component is bounded. Both are alternating
//! inclusion-exclusion sums over binomial coefficients; the accumulator is
//! signed because the partial sums genuinely dip below zero (for example
//! `t = 4, n = 1, s = 4` after the `i = 1` term), even though every final
//! value is nonnegative.

use crate::bigint::{self, Big};
use num_traits::Zero;

/// Binomial coefficient `C(n, k)` that tolerates out-of-range arguments.
///
/// Returns zero when `n < k` or when either argument is negative. The
/// inclusion-exclusion sums below rely on this to terminate naturally; do
/// not substitute an unsigned-only variant.
pub fn binomial(n: i64, k: i64) -> Big {
    if n < 0 || k < 0 || n < k {
        return Big::zero();
    }
    bigint::binomial_exact(n as u64, k as u64)
}

/// Number of `t`-tuples with components in `[0, n]` summing to `s`.
///
/// Inclusion-exclusion over the number of components that overflow the
/// per-component bound:
///
/// ```text
/// C(t,n,s) = sum_{i=0..k} (-1)^i C(t, i) C(s - (n+1)i + t - 1, t - 1)
/// k = min(t, floor(s / (n+1)))
/// ```
///
/// A negative `s` yields zero through the [`binomial`] conventions.
pub fn constant_sum_len(t: i32, n: i32, s: i32) -> Big {
    let (t, n, s) = (t as i64, n as i64, s as i64);
    let mut out = Big::zero();
    let k = t.min(s / (n + 1));
    for i in 0..=k {
        let a = binomial(t, i);
        let b = binomial(s - (n + 1) * i + t - 1, t - 1);
        if i % 2 == 0 {
            bigint::addmul(&mut out, &a, &b);
        } else {
            bigint::submul(&mut out, &a, &b);
        }
    }
    out
}

/// Number of `t`-tuples with components in `[0, n]`, sum `s`, and leading
/// component at most `j`.
///
/// ```text
/// R(t,n,s,j) = sum_{i=0..k} (-1)^i C(t-1, i)
///              [ C(s - (n+1)i + t - 1, t - 1) - C(s - (n+1)i + t - 2 - j, t - 1) ]
/// ```
///
/// `rank(t, n, s, -1)` is zero and `rank(t, n, s, n)` equals
/// [`constant_sum_len`]`(t, n, s)`; the widths `R(.., j) - R(.., j - 1)`
/// partition the tuple space by leading component, which is what the
/// encoder's window search walks over.
pub fn rank(t: i32, n: i32, s: i32, j: i32) -> Big {
    let (t, n, s, j) = (t as i64, n as i64, s as i64, j as i64);
    let mut out = Big::zero();
    let k = t.min(s / (n + 1));
    for i in 0..=k {
        let a = binomial(t - 1, i);
        let mut b = binomial(s - (n + 1) * i + t - 1, t - 1);
        b -= binomial(s - (n + 1) * i + t - 2 - j, t - 1);
        if i % 2 == 0 {
            bigint::addmul(&mut out, &a, &b);
        } else {
            bigint::submul(&mut out, &a, &b);
        }
    }
    out
}
