//! Memoization tables for the combinatorial primitives
//!
//! Two read-only tables keyed purely by `(t, n, s)`: a 2-D table of
//! constant-sum cardinalities and a 3-D table of rank bounds. Both are
//! built once after the parameter set is known (the rank table reaches
//! gigabytes for the large sets) and are immutable afterwards, so
//! post-build reads from any number of threads need no locking. Entries
//! are released when the owning [`CacheContext`] drops; switching
//! parameter sets means building a fresh context.
//!
//! Construction fans out over the innermost index with rayon. Each cell
//! is written exactly once by the collecting iterator, so the only
//! barrier is the collect itself. The finished tables sit behind an
//! [`Arc`], so cloning a cache (or a [`CacheContext`] holding one) shares
//! the entries instead of re-allocating them; the last owner to drop
//! releases the memory.

use crate::bigint::Big;
use crate::combinatorics::{constant_sum_len, rank};
use crate::params::Params;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Cardinality table: entry `(b, z)` holds `constant_sum_len(b, n, z)`
/// for `1 <= b < t`, `0 <= z <= s`.
///
/// Clones share the underlying table.
#[derive(Debug, Clone)]
pub struct LenCache {
    table: Arc<Vec<Vec<Big>>>,
}

impl LenCache {
    /// Builds the table for a parameter set.
    pub fn build(params: &Params) -> Self {
        let started = Instant::now();
        let table: Vec<Vec<Big>> = (1..params.t)
            .map(|b| {
                (0..=params.s)
                    .into_par_iter()
                    .map(|z| constant_sum_len(b, params.n, z))
                    .collect()
            })
            .collect();
        let entries: usize = table.iter().map(Vec::len).sum();
        log::info!(
            "cardinality cache for (t={}, n={}, s={}): {} entries in {:.2?}",
            params.t,
            params.n,
            params.s,
            entries,
            started.elapsed()
        );
        LenCache {
            table: Arc::new(table),
        }
    }

    /// Cardinality of `b`-tuples summing to `z`. Requires `1 <= b < t`
    /// and `0 <= z <= s`.
    #[inline]
    pub fn get(&self, b: i32, z: i32) -> &Big {
        &self.table[(b - 1) as usize][z as usize]
    }
}

/// Rank table: entry `(b, z, j)` holds `rank(b + 1, n, z, j)` for
/// `0 <= b < t`, `0 <= z <= s`, `0 <= j <= min(n, z)`.
///
/// Rows are ragged: cells with `j > z` do not exist (their value would
/// describe a leading component larger than the remaining sum) and must
/// not be addressed.
///
/// Clones share the underlying table; this matters here, where the
/// entries can run to gigabytes.
#[derive(Debug, Clone)]
pub struct RankCache {
    table: Arc<Vec<Vec<Vec<Big>>>>,
}

impl RankCache {
    /// Builds the table for a parameter set.
    pub fn build(params: &Params) -> Self {
        let started = Instant::now();
        let table: Vec<Vec<Vec<Big>>> = (0..params.t)
            .map(|b| {
                (0..=params.s)
                    .map(|z| {
                        (0..=params.n.min(z))
                            .into_par_iter()
                            .map(|j| rank(b + 1, params.n, z, j))
                            .collect()
                    })
                    .collect()
            })
            .collect();
        let entries: usize = table
            .iter()
            .flat_map(|rows| rows.iter().map(Vec::len))
            .sum();
        log::info!(
            "rank cache for (t={}, n={}, s={}): {} entries in {:.2?}",
            params.t,
            params.n,
            params.s,
            entries,
            started.elapsed()
        );
        RankCache {
            table: Arc::new(table),
        }
    }

    /// `rank(t_rem, n, z, j)` for `t_rem` remaining coordinates.
    /// Requires `1 <= t_rem <= t`, `0 <= z <= s`, `0 <= j <= min(n, z)`.
    #[inline]
    pub fn get(&self, t_rem: i32, z: i32, j: i32) -> &Big {
        &self.table[(t_rem - 1) as usize][z as usize][j as usize]
    }
}

/// Caller-owned cache bundle handed to the encoder.
///
/// Replaces process-wide tables: the context is built once per parameter
/// set and shared freely once built. Cloning is O(1) and shares the
/// built tables; the entries are released when the last owner drops.
#[derive(Debug, Clone)]
pub struct CacheContext {
    params: Params,
    len: Option<LenCache>,
    rank: Option<RankCache>,
}

impl CacheContext {
    /// Empty context for a parameter set: every lookup recomputes.
    pub fn new(params: Params) -> Self {
        CacheContext {
            params,
            len: None,
            rank: None,
        }
    }

    /// Builds and attaches the cardinality table.
    pub fn with_len_cache(mut self) -> Self {
        self.len = Some(LenCache::build(&self.params));
        self
    }

    /// Builds and attaches the rank table.
    pub fn with_rank_cache(mut self) -> Self {
        self.rank = Some(RankCache::build(&self.params));
        self
    }

    /// Parameter set the tables were built for.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Cardinality table, if loaded.
    pub fn len_cache(&self) -> Option<&LenCache> {
        self.len.as_ref()
    }

    /// Rank table, if loaded.
    pub fn rank_cache(&self) -> Option<&RankCache> {
        self.rank.as_ref()
    }
}
