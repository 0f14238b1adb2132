//! Chinese Remainder Theorem over pairwise-coprime moduli.

use crate::errors::DJCryptoError;

use super::Ring;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Finds the unique `x` in `[0, N)`, `N = Π moduli[i]`, with `x ≡ residues[i] (mod moduli[i])`.
///
/// Uses the textbook construction `x = Σ a_i · y_i · z_i mod N` with `y_i = N / n_i`
/// and `z_i = y_i^-1 mod n_i`.
///
/// # Errors
///
/// * `LengthMismatch` if the slices have different lengths.
/// * `InvalidModulus` if a modulus is zero.
/// * `ModularInverse` if the moduli are not pairwise coprime.
///
/// # Example
///
/// ```
/// # use damgard_jurik::ring::crt;
/// # use num_bigint::BigUint;
/// let residues = [2u32, 3, 2].map(BigUint::from);
/// let moduli = [3u32, 5, 7].map(BigUint::from);
/// assert_eq!(crt(&residues, &moduli).unwrap(), BigUint::from(23u32));
/// ```
pub fn crt(residues: &[BigUint], moduli: &[BigUint]) -> Result<BigUint, DJCryptoError> {
    if residues.len() != moduli.len() {
        return Err(DJCryptoError::LengthMismatch(format!(
            "CRT needs one residue per modulus, got {} residues and {} moduli",
            residues.len(),
            moduli.len()
        )));
    }

    if moduli.iter().any(Zero::is_zero) {
        return Err(DJCryptoError::InvalidModulus(
            "CRT moduli must be positive".to_string(),
        ));
    }

    let product: BigUint = moduli.iter().product();
    let mut x = BigUint::zero();

    for (a_i, n_i) in residues.iter().zip(moduli) {
        if n_i.is_one() {
            // Every integer is ≡ 0 (mod 1)
            continue;
        }

        let y_i = &product / n_i;
        let z_i = Ring::try_with(n_i.clone())?.inv(&y_i).map_err(|_| {
            DJCryptoError::ModularInverse(format!(
                "CRT moduli are not pairwise coprime: {} shares a factor with the rest",
                n_i
            ))
        })?;

        x += a_i * y_i * z_i;
    }

    Ok(x % product)
}
