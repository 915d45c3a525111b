use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use tpke::{ConsensusParameters, ScalerSolver, scaled_lagrange_coefficients};

/// Full quorum search for BFT committees of increasing size.
///
/// The cache is bypassed so every iteration pays for the whole search.
pub fn bench_scaler(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaler_solve");
    group.sample_size(10);

    for parties in [4usize, 7, 10, 13] {
        let params = ConsensusParameters::from_consensus_size(parties).expect("valid size");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}of{}", params.threshold, parties)),
            &params,
            |b, params| {
                b.iter(|| {
                    let scaler = ScalerSolver::solve(black_box(params)).expect("solve failed");
                    black_box(scaler);
                })
            },
        );
    }
    group.finish();

    // Coefficients for one concrete quorum once the scaler is known
    let params = ConsensusParameters::from_consensus_size(13).expect("valid size");
    let scaler = ScalerSolver::solve(&params).expect("solve failed");
    let quorum: Vec<u64> = (1..=params.threshold as u64).collect();
    c.bench_function("scaled_lagrange_13", |b| {
        b.iter(|| {
            let weights =
                scaled_lagrange_coefficients(black_box(&quorum), &scaler).expect("coefficients");
            black_box(weights);
        })
    });
}

criterion_group!(benches, bench_scaler);
criterion_main!(benches);
