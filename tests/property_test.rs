// Randomized properties of the encoding bijection

use constsum::{Big, ConstantSumEncoder, Params, Strategy as SearchStrategy};
use proptest::prelude::*;

/// Random small parameter set together with an in-range digest.
fn params_and_digest() -> impl Strategy<Value = (Params, Big)> {
    (1i32..=5, 1i32..=6, any::<u32>(), any::<u64>()).prop_map(|(t, n, s_seed, i_seed)| {
        let s = (s_seed % (t as u32 * n as u32 + 1)) as i32;
        let params = Params::new(t, n, s).unwrap();
        let digest = Big::from(i_seed) % params.domain_size();
        (params, digest)
    })
}

fn admissible_strategies(p: Params) -> Vec<SearchStrategy> {
    let mut strategies = vec![
        SearchStrategy::Linear,
        SearchStrategy::LinearCached,
        SearchStrategy::BinarySearch,
        SearchStrategy::BinarySearchCached,
    ];
    if p.n >= p.s {
        strategies.push(SearchStrategy::Cky);
        strategies.push(SearchStrategy::CkyInverted);
    }
    strategies
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every admissible strategy produces the same valid tuple, the
    /// verifier accepts it, and the decoder inverts it.
    #[test]
    fn prop_round_trip((params, digest) in params_and_digest()) {
        let reference = ConstantSumEncoder::new(params, SearchStrategy::Linear)
            .unwrap()
            .to_constant_sum(&digest);

        prop_assert_eq!(reference.len(), params.t as usize);
        prop_assert!(reference.iter().all(|&k| (0..=params.n).contains(&k)));
        prop_assert_eq!(reference.iter().sum::<i32>(), params.s);

        for strategy in admissible_strategies(params) {
            let encoder = ConstantSumEncoder::new(params, strategy).unwrap();
            prop_assert_eq!(&encoder.to_constant_sum(&digest), &reference);
            prop_assert!(encoder.check_encoding(&digest, &reference));
            prop_assert_eq!(encoder.from_constant_sum(&reference).unwrap(), digest.clone());
        }
    }

    /// Distinct digests never collide (injectivity on a sampled pair).
    #[test]
    fn prop_distinct_digests_distinct_tuples(
        (params, digest) in params_and_digest(),
        offset_seed in any::<u64>(),
    ) {
        let m = params.domain_size();
        if m > Big::from(1) {
            let offset = Big::from(offset_seed) % (&m - 1) + 1;
            let other = (&digest + offset) % &m;
            let encoder = ConstantSumEncoder::new(params, SearchStrategy::Linear).unwrap();
            prop_assert_ne!(
                encoder.to_constant_sum(&digest),
                encoder.to_constant_sum(&other)
            );
        }
    }

    /// Witness framing is the identity on coordinates.
    #[test]
    fn prop_witness_round_trip(coords in proptest::collection::vec(0i32..=510, 1..80)) {
        let bytes = constsum::write_witness(&coords);
        prop_assert_eq!(bytes.len(), coords.len() * constsum::witness::COORD_BYTES);
        let t = coords.len() as i32;
        prop_assert_eq!(constsum::read_witness(&bytes, t).unwrap(), coords);
    }
}
