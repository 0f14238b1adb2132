use damgard_jurik::{DJCryptoError, keygen};

use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

fn bigs(values: &[u64]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

#[test]
fn showcase_sum_and_scaling_with_s_four() -> Result<(), DJCryptoError> {
    init_tracing();

    let s = 4;
    let mut rng = StdRng::seed_from_u64(2024);
    let (pk, sk) = keygen(8, s, &mut rng)?;
    let ns = pk.n.pow(s);

    let message1 = bigs(&[123456789101112, 123]);
    let message2 = bigs(&[211101987654321, 321]);
    let scale = BigUint::from(5u32);

    let ciphertext1 = pk.encrypt(&message1, s, &mut rng)?;
    let ciphertext2 = pk.encrypt(&message2, s, &mut rng)?;

    let ciphertext_sum = ciphertext2.add(&ciphertext1)?;
    let ciphertext_scaling = &ciphertext1 * &scale;

    let decrypted_sum = sk.decrypt(&ciphertext_sum)?;
    let decrypted_scaling = sk.decrypt(&ciphertext_scaling)?;

    let plaintext_sum: Vec<BigUint> = message1
        .iter()
        .zip(&message2)
        .map(|(a, b)| (a + b) % &ns)
        .collect();
    let plaintext_scaling: Vec<BigUint> = message1.iter().map(|a| (a * &scale) % &ns).collect();

    dbg!(&plaintext_sum, &decrypted_sum);
    dbg!(&plaintext_scaling, &decrypted_scaling);

    assert_eq!(decrypted_sum, plaintext_sum);
    assert_eq!(decrypted_scaling, plaintext_scaling);

    Ok(())
}

#[test]
fn showcase_paillier_sum() -> Result<(), DJCryptoError> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(128);
    let (pk, sk) = damgard_jurik::preset::paillier::keygen(128, &mut rng)?;

    let messages = bigs(&[123456789101112, 123]);
    let message2 = bigs(&[211101987654321, 321]);

    let ciphertext1 = damgard_jurik::preset::paillier::encrypt(&pk, &messages, &mut rng)?;
    let ciphertext2 = damgard_jurik::preset::paillier::encrypt(&pk, &message2, &mut rng)?;

    let decrypted_sum = sk.decrypt(&ciphertext2.add(&ciphertext1)?)?;

    assert_eq!(decrypted_sum, bigs(&[123456789101112 + 211101987654321, 123 + 321]));

    Ok(())
}
