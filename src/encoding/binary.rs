//! Lower-bound binary search over rank bounds
//!
//! Each coordinate is the unique `k` with `rank(.., k - 1) <= I <
//! rank(.., k)`. A lower-bound search over `[0, min(n, s)]` finds it in
//! logarithmically many rank probes; with the rank cache loaded every
//! probe is a table read. Empty windows (`rank(.., k) = rank(.., k - 1)`)
//! cannot contain the digest and are skipped by the same comparisons.

use crate::bigint::Big;
use crate::cache::RankCache;
use crate::combinatorics::rank;
use crate::params::Params;

/// MSB-first binary-search encode.
pub(super) fn encode(p: &Params, cache: Option<&RankCache>, digest: &Big, out: &mut [i32]) {
    let mut i = digest.clone();
    let mut s = p.s;
    for pos in 0..p.t {
        let t_rem = p.t - pos;
        let mut count = p.n.min(s);
        let mut k = 0;
        while count > 0 {
            let step = count / 2;
            let mid = k + step;
            let past = match cache {
                Some(c) => i >= *c.get(t_rem, s, mid),
                None => i >= rank(t_rem, p.n, s, mid),
            };
            if past {
                k = mid + 1;
                count -= step + 1;
            } else {
                count = step;
            }
        }
        out[pos as usize] = k;
        if k > 0 {
            match cache {
                Some(c) => i -= c.get(t_rem, s, k - 1),
                None => i -= rank(t_rem, p.n, s, k - 1),
            }
            s -= k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheContext;
    use crate::encoding::linear;

    #[test]
    fn test_matches_linear_exhaustively() {
        for &(t, n, s) in &[(3, 3, 3), (4, 2, 5), (5, 3, 6), (4, 6, 11)] {
            let p = Params::new_unchecked(t, n, s);
            let context = CacheContext::new(p).with_rank_cache();
            let table = context.rank_cache().unwrap();
            let m = p.domain_size();
            let mut i = Big::from(0);
            while i < m {
                let len = t as usize;
                let mut reference = vec![0; len];
                let mut probed = vec![0; len];
                let mut cached = vec![0; len];
                linear::encode(&p, None, &i, &mut reference);
                encode(&p, None, &i, &mut probed);
                encode(&p, Some(table), &i, &mut cached);
                assert_eq!(probed, reference, "binary ({t},{n},{s}) digest {i}");
                assert_eq!(cached, reference, "binary-cached ({t},{n},{s}) digest {i}");
                i += 1;
            }
        }
    }

    /// The search range clamps to `[0, s]` once the residual sum drops
    /// below the coordinate bound.
    #[test]
    fn test_clamped_range() {
        let p = Params::new_unchecked(3, 9, 4);
        let m = p.domain_size();
        let mut i = Big::from(0);
        while i < m {
            let mut out = vec![0; 3];
            encode(&p, None, &i, &mut out);
            assert!(out.iter().all(|&k| k <= 4));
            assert_eq!(out.iter().sum::<i32>(), 4);
            i += 1;
        }
    }
}
