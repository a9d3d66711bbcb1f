//! Encode / verify throughput over the C16 parameter set.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use constsum::{bigint, params, Big, ConstantSumEncoder, Strategy};

/// Deterministic 256-bit digest reduced into the encodable interval.
fn sample_digest(m: &Big) -> Big {
    let bytes: Vec<u8> = (0u16..32).map(|i| (i * 37 + 11) as u8).collect();
    bigint::from_bytes_be(&bytes) % m
}

fn bench_encode(c: &mut Criterion) {
    let p = params::C16;
    let digest = sample_digest(&p.domain_size());
    let mut group = c.benchmark_group("encode/C16");
    for (name, strategy) in [
        ("linear", Strategy::Linear),
        ("linear_cached", Strategy::LinearCached),
        ("binary_search", Strategy::BinarySearch),
    ] {
        let encoder = ConstantSumEncoder::new(p, strategy).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| encoder.to_constant_sum(black_box(&digest)))
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let p = params::C16;
    let digest = sample_digest(&p.domain_size());
    let encoder = ConstantSumEncoder::new(p, Strategy::BinarySearch).unwrap();
    let encoding = encoder.to_constant_sum(&digest);
    let witness = constsum::write_witness(&encoding);

    let mut group = c.benchmark_group("verify/C16");
    group.bench_function("check_encoding", |b| {
        b.iter(|| encoder.check_encoding(black_box(&digest), black_box(&encoding)))
    });
    group.bench_function("witness_reframe_and_check", |b| {
        b.iter(|| {
            let coords = constsum::read_witness(black_box(&witness), p.t).unwrap();
            encoder.check_encoding(black_box(&digest), &coords)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_verify);
criterion_main!(benches);
