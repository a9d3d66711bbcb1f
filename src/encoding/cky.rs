//! Closed-form incremental search
//!
//! Both variants replace the per-candidate cardinality computation of the
//! linear strategy with a one-multiplication binomial recurrence. The
//! recurrences describe unbounded compositions, so they are exact only
//! while the coordinate bound never truncates a count: construction
//! requires `n >= s`, and the residual sum only shrinks from there.
//!
//! Every division below is exact by a binomial ratio identity;
//! `divexact_ui` asserts that in debug builds.

use crate::bigint::{self, Big};
use crate::combinatorics::binomial;
use crate::params::Params;
use num_traits::{One, Zero};

/// Descending walk over the complement rank.
///
/// Enumerating the leading coordinate downward from `s` visits tuples in
/// descending lexicographic order, so the walk runs on the complement
/// rank `M - 1 - I`. With `t_rem` open coordinates, the count of tuples
/// whose leading coordinate is at least `s - k` is `C(k + t_rem - 1,
/// t_rem - 1)`: it starts at 1 for `k = 0` and grows by the exact update
/// `right *= (k + t_rem - 1) / k`. The step emits `s - k` and leaves `k`
/// as the residual sum.
pub(super) fn encode(p: &Params, digest: &Big, out: &mut [i32]) {
    debug_assert!(p.n >= p.s);
    let mut ibar = p.domain_size() - 1 - digest;
    let mut s = p.s;
    for pos in 0..p.t - 1 {
        let t_rem = (p.t - pos) as u64;
        let mut k: i32 = 0;
        let mut left = Big::zero();
        let mut right = Big::one();
        while ibar >= right {
            k += 1;
            left.clone_from(&right);
            bigint::mul_ui(&mut right, k as u64 + t_rem - 1);
            bigint::divexact_ui(&mut right, k as u64);
        }
        out[pos as usize] = s - k;
        ibar -= &left;
        s = k;
    }
    out[(p.t - 1) as usize] = s;
}

/// Ascending walk over slice widths.
///
/// Enumerates the leading coordinate upward like the linear strategy, but
/// carries the width of the current slice, `C(s - k + t_rem - 2,
/// t_rem - 2)` completions for leading value `k`, and advances it with
/// the exact update `width *= (s - k + 1) / (s - k + t_rem - 1)`,
/// accumulating widths into the window edge.
pub(super) fn encode_inverted(p: &Params, digest: &Big, out: &mut [i32]) {
    debug_assert!(p.n >= p.s);
    let mut i = digest.clone();
    let mut s = p.s;
    for pos in 0..p.t - 1 {
        let t_rem = (p.t - pos) as i64;
        let mut k: i32 = 0;
        let mut width = binomial(s as i64 + t_rem - 2, t_rem - 2);
        let mut left = Big::zero();
        let mut right = width.clone();
        while i >= right {
            k += 1;
            bigint::mul_ui(&mut width, (s - k + 1) as u64);
            bigint::divexact_ui(&mut width, (s as i64 - k as i64 + t_rem - 1) as u64);
            left.clone_from(&right);
            right += &width;
        }
        out[pos as usize] = k;
        i -= &left;
        s -= k;
    }
    out[(p.t - 1) as usize] = s;
}
