use crate::errors::DJCryptoError;

use num_bigint::{BigUint, RandBigInt};
use num_prime::nt_funcs::is_prime;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::{trace, warn};

/// Candidates examined per prime before giving up.
pub const MAX_PRIME_ATTEMPTS: usize = 100_000;

/// Redraws of `q` while it collides with `p`.
pub const MAX_DISTINCT_ATTEMPTS: usize = 1_000;

/// Generate a random probable prime of exactly `bits` bits.
///
/// Candidates are drawn uniformly below `2^bits`, forced to full length and odd, then
/// checked with the BPSW-style test from `num-prime`.
pub fn random_prime<R>(bits: usize, rng: &mut R) -> Result<BigUint, DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if bits < 2 {
        return Err(DJCryptoError::DegenerateKey(format!(
            "Cannot draw a {}-bit prime",
            bits
        )));
    }

    let top_bit = BigUint::one() << (bits - 1);

    for attempt in 1..=MAX_PRIME_ATTEMPTS {
        let mut candidate = rng.gen_biguint(bits as u64);
        candidate |= &top_bit;
        candidate |= BigUint::one();

        if is_prime(&candidate, None).probably() {
            trace!(bits, attempt, "found probable prime");
            return Ok(candidate);
        }
    }

    warn!(bits, attempts = MAX_PRIME_ATTEMPTS, "prime search budget exhausted");
    Err(DJCryptoError::RandomnessExhausted(format!(
        "No {}-bit prime found after {} candidates",
        bits, MAX_PRIME_ATTEMPTS
    )))
}

/// Draws two distinct primes of `bits` bits each.
///
/// A draw with `p == q` is degenerate; `q` is redrawn until it differs.
pub fn distinct_primes<R>(bits: usize, rng: &mut R) -> Result<(BigUint, BigUint), DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let p = random_prime(bits, rng)?;

    for attempt in 1..=MAX_DISTINCT_ATTEMPTS {
        let q = random_prime(bits, rng)?;
        if q != p {
            return Ok((p, q));
        }
        trace!(bits, attempt, "redrawing q, collided with p");
    }

    Err(DJCryptoError::DegenerateKey(format!(
        "Could not draw two distinct {}-bit primes in {} attempts",
        bits, MAX_DISTINCT_ATTEMPTS
    )))
}
