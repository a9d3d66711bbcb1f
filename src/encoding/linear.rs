//! Linear forward search
//!
//! Walks candidate values for each coordinate from zero upward, growing a
//! `[left, right)` window by one cardinality slice per candidate until the
//! digest falls inside. The cached flavor turns the per-candidate
//! cardinality into a table read.

use crate::bigint::Big;
use crate::cache::LenCache;
use crate::combinatorics::constant_sum_len;
use crate::params::Params;
use num_traits::Zero;

/// Iterative MSB-first linear encode.
///
/// For each coordinate, candidate `k` owns the window whose width is the
/// number of completions: tuples of the remaining coordinates summing to
/// `s - k`. The final coordinate is forced to the residual sum.
pub(super) fn encode(p: &Params, cache: Option<&LenCache>, digest: &Big, out: &mut [i32]) {
    let mut i = digest.clone();
    let mut s = p.s;
    for pos in 0..p.t - 1 {
        let rem = p.t - 1 - pos; // coordinates after this one
        let mut k = 0;
        let mut left = Big::zero();
        let mut right = match cache {
            Some(c) => c.get(rem, s).clone(),
            None => constant_sum_len(rem, p.n, s),
        };
        while i >= right {
            k += 1;
            left.clone_from(&right);
            match cache {
                Some(c) => right += c.get(rem, s - k),
                None => right += constant_sum_len(rem, p.n, s - k),
            }
        }
        out[pos as usize] = k;
        i -= &left;
        s -= k;
    }
    out[(p.t - 1) as usize] = s;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheContext;

    #[test]
    fn test_forced_last_coordinate() {
        let p = Params::new_unchecked(3, 3, 3);
        let mut out = vec![0; 3];
        encode(&p, None, &Big::from(0), &mut out);
        assert_eq!(out, vec![0, 0, 3]);
        encode(&p, None, &Big::from(9), &mut out);
        assert_eq!(out, vec![3, 0, 0]);
    }

    #[test]
    fn test_cached_equals_uncached() {
        let p = Params::new_unchecked(5, 4, 9);
        let context = CacheContext::new(p).with_len_cache();
        let cache = context.len_cache().unwrap();
        let m = p.domain_size();
        let mut i = Big::from(0);
        while i < m {
            let mut plain = vec![0; 5];
            let mut cached = vec![0; 5];
            encode(&p, None, &i, &mut plain);
            encode(&p, Some(cache), &i, &mut cached);
            assert_eq!(plain, cached, "digest {i}");
            i += 1;
        }
    }
}
