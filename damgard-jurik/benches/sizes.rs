use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use damgard_jurik::{PublicKey, SecretKey, keygen};
use num_bigint::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn setup(s: u32, rng: &mut StdRng) -> (PublicKey, SecretKey) {
    keygen(128, s, rng).expect("Failed to generate key pair")
}

fn bench_sizes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4242);

    let mut group = c.benchmark_group("Damgard-Jurik Encrypt/Decrypt by s");

    for s in [1u32, 2, 3, 4] {
        let (public_key, secret_key) = setup(s, &mut rng);
        let ns = public_key.n.pow(s);
        let messages: Vec<BigUint> = (0..4).map(|_| rng.gen_biguint_below(&ns)).collect();

        // precompute ciphertext for decrypt bench to avoid measuring encrypt twice
        let ciphertext = public_key
            .encrypt(&messages, s, &mut rng)
            .expect("Failed to encrypt");

        group.bench_with_input(BenchmarkId::new("encrypt", s), &messages, |b, m| {
            b.iter(|| black_box(public_key.encrypt(m, s, &mut rng).expect("encrypt")))
        });

        group.bench_with_input(BenchmarkId::new("decrypt", s), &ciphertext, |b, ct| {
            b.iter(|| black_box(secret_key.decrypt(ct).expect("decrypt")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
