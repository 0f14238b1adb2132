//! # Key generation
//!
//! Produces `(PublicKey, SecretKey)` pairs for the generalized scheme; the Paillier preset
//! reuses [`generate`] with a different [`Totient`].

pub mod keys;
pub mod params;
pub mod primes;

pub use keys::{DecryptionContext, PublicKey, SecretKey};
pub use params::{DEFAULT_S, KeyGenParams, MIN_PRIME_BITS, Totient};

use crate::errors::DJCryptoError;

use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Generates a key pair from two `bits`-bit primes for plaintext space Z/n^sZ.
///
/// `n^s` has to exceed the largest plaintext the caller intends to encrypt; that bound is
/// not checked here.
pub fn keygen<R>(bits: usize, s: u32, rng: &mut R) -> Result<(PublicKey, SecretKey), DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    generate(&KeyGenParams::try_with(bits, s)?, rng)
}

/// Generates a key pair for validated parameters.
pub fn generate<R>(
    params: &KeyGenParams,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    debug!(
        prime_bits = params.prime_bits,
        s = params.s,
        totient = ?params.totient,
        "generating key pair"
    );

    let (p, q) = primes::distinct_primes(params.prime_bits, rng)?;

    let n = &p * &q;
    let phi = params.totient.of(&p, &q);

    let secret_key = SecretKey::try_with(n.clone(), phi, params.s)?;
    let public_key = PublicKey::new(n);

    debug!(modulus_bits = public_key.n.bits(), "key pair ready");

    Ok((public_key, secret_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;
    use num_traits::One;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_keygen_shapes() -> Result<(), DJCryptoError> {
        let mut rng = StdRng::seed_from_u64(41);
        let (pk, sk) = keygen(32, 3, &mut rng)?;

        assert_eq!(pk.g, &pk.n + BigUint::one());
        assert_eq!(sk.n(), &pk.n);
        assert_eq!(sk.s(), 3);
        assert_eq!(sk.ns(), &pk.n.pow(3));
        assert!(pk.n.bits() >= 63 && pk.n.bits() <= 64);
        Ok(())
    }

    #[test]
    fn test_keygen_round_trip() -> Result<(), DJCryptoError> {
        let mut rng = StdRng::seed_from_u64(42);
        let (pk, sk) = keygen(48, DEFAULT_S, &mut rng)?;

        let messages = vec![BigUint::from(31_337u32), BigUint::from(0u32)];
        let ct = pk.encrypt(&messages, DEFAULT_S, &mut rng)?;

        assert_eq!(sk.decrypt(&ct)?, messages);
        Ok(())
    }

    #[test]
    fn test_keygen_smallest_primes() -> Result<(), DJCryptoError> {
        let mut rng = StdRng::seed_from_u64(43);
        let (pk, sk) = keygen(3, 2, &mut rng)?;

        assert_eq!(pk.n, BigUint::from(35u32));
        let ct = pk.encrypt(&[BigUint::from(1_000u32)], 2, &mut rng)?;
        assert_eq!(sk.decrypt(&ct)?, vec![BigUint::from(1_000u32)]);
        Ok(())
    }

    #[test]
    fn test_keygen_rejects_bad_params() {
        let mut rng = StdRng::seed_from_u64(44);
        assert!(matches!(
            keygen(2, 1, &mut rng),
            Err(DJCryptoError::DegenerateKey(_))
        ));
        assert!(matches!(
            keygen(16, 0, &mut rng),
            Err(DJCryptoError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_euler_totient_key() -> Result<(), DJCryptoError> {
        let mut rng = StdRng::seed_from_u64(45);
        let params = KeyGenParams::try_with(24, 1)?.with_totient(Totient::Euler);
        let (pk, sk) = generate(&params, &mut rng)?;

        // (p - 1)(q - 1) = n - p - q + 1 < n
        assert!(sk.phi() < &pk.n);
        let ct = pk.encrypt(&[BigUint::from(77u32)], 1, &mut rng)?;
        assert_eq!(sk.decrypt(&ct)?, vec![BigUint::from(77u32)]);
        Ok(())
    }
}
