use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tpke::{AggregatedCommitment, CurvePoint, Encryptor, Envelope, FieldElement, Fr, G1, PublicKey};

/// Key derivation is done once outside the measured loops:
/// - encryption is measured for several payload sizes
/// - envelope parsing is measured on a fixed ciphertext
pub fn bench_encrypt(c: &mut Criterion) {
    // Deterministic RNG for repeatable benchmarks
    let mut rng = StdRng::seed_from_u64(0xdead_beef);

    let secret = <Fr as FieldElement>::random(&mut rng);
    let commitment = AggregatedCommitment::from_point(&G1::generator().mul_scalar(&secret));
    let pk = PublicKey::from_consensus_commitment(commitment.as_bytes(), 7)
        .expect("key derivation failed");

    let encryptor = Encryptor::new();

    let mut group = c.benchmark_group("hybrid_encrypt");
    for size in [32usize, 256, 4096] {
        let payload = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size}B"), |b| {
            b.iter(|| {
                let ct = encryptor
                    .encrypt(&mut rng, &pk, black_box(&payload))
                    .expect("encrypt failed");
                black_box(ct);
            })
        });
    }
    group.finish();

    let ct = encryptor
        .encrypt(&mut rng, &pk, b"benchmark payload for envelope parsing")
        .expect("encrypt failed");
    let wire = Envelope::to_bytes(&ct, true);
    c.bench_function("envelope_parse", |b| {
        b.iter(|| {
            let parsed = Envelope::<tpke::DefaultBackend>::from_bytes(black_box(&wire))
                .expect("parse failed");
            black_box(parsed);
        })
    });
}

criterion_group!(benches, bench_encrypt);
criterion_main!(benches);
