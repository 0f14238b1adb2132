//! # Single-server PIR
//!
//! Selection-vector private information retrieval on top of the additive homomorphism.
//! The client encrypts the unit vector `e_index`; the server folds it against its
//! database as `Σ Enc(e_i) · db[i]`, which decrypts to `db[index]` without the server
//! learning `index`.

use crate::ciphertext::Ciphertext;
use crate::errors::DJCryptoError;
use crate::keypair::{PublicKey, SecretKey};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Client side: encrypts the selection vector for `index` over a database of `db_len` rows.
pub fn query<R>(
    public_key: &PublicKey,
    index: usize,
    db_len: usize,
    s: u32,
    rng: &mut R,
) -> Result<Ciphertext, DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if index >= db_len {
        return Err(DJCryptoError::IndexOutOfRange { index, len: db_len });
    }

    let selection: Vec<BigUint> = (0..db_len)
        .map(|i| {
            if i == index {
                BigUint::one()
            } else {
                BigUint::zero()
            }
        })
        .collect();

    public_key.encrypt(&selection, s, rng)
}

/// Server side: homomorphic inner product of the query with `database`.
///
/// Rows must be below `n^s` of the query's key to come back intact.
pub fn answer<R>(
    query: &Ciphertext,
    database: &[BigUint],
    rng: &mut R,
) -> Result<Ciphertext, DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if query.len() != database.len() {
        return Err(DJCryptoError::LengthMismatch(format!(
            "Query selects among {} rows, database has {}",
            query.len(),
            database.len()
        )));
    }

    debug!(rows = database.len(), s = query.s(), "answering PIR query");

    // Start from a fresh Enc(0) so the answer is re-randomized even for an empty fold.
    let mut accumulator = query
        .public_key()
        .encrypt(&[BigUint::zero()], query.s(), rng)?;

    for (i, row) in database.iter().enumerate() {
        let term = query.select(i)?.scalar_multiply(row);
        accumulator = accumulator.add(&term)?;
    }

    Ok(accumulator)
}

/// Client side: decrypts the single slot of a PIR answer.
pub fn decode(secret_key: &SecretKey, answer: &Ciphertext) -> Result<BigUint, DJCryptoError> {
    if answer.len() != 1 {
        return Err(DJCryptoError::LengthMismatch(format!(
            "A PIR answer holds exactly one slot, got {}",
            answer.len()
        )));
    }

    secret_key
        .decrypt(answer)?
        .into_iter()
        .next()
        .ok_or_else(|| DJCryptoError::LengthMismatch("Empty PIR answer".to_string()))
}
