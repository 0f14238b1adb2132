//! Paillier: the `s = 1` instance with the textbook `(p - 1)(q - 1)` exponent.
//!
//! Keys and ciphertexts are the generalized types; only the parameters differ, so the
//! whole ciphertext algebra applies unchanged.

use crate::ciphertext::Ciphertext;
use crate::errors::DJCryptoError;
use crate::keypair::{self, KeyGenParams, PublicKey, SecretKey, Totient};

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// Paillier fixes the expansion exponent to one: plaintexts live in Z/nZ.
pub const PAILLIER_S: u32 = 1;

/// Generates a Paillier key pair from two `bits`-bit primes.
pub fn keygen<R>(bits: usize, rng: &mut R) -> Result<(PublicKey, SecretKey), DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let params = KeyGenParams::try_with(bits, PAILLIER_S)?.with_totient(Totient::Euler);
    keypair::generate(&params, rng)
}

/// Encrypts `messages` with `s` fixed to [`PAILLIER_S`].
pub fn encrypt<R>(
    public_key: &PublicKey,
    messages: &[BigUint],
    rng: &mut R,
) -> Result<Ciphertext, DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    public_key.encrypt(messages, PAILLIER_S, rng)
}
