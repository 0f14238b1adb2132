//! Implementation of ring ops using arbitrary-precision modular arithmetic.

use crate::errors::DJCryptoError;

use super::is_unit;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Upper bound on rejection-sampling draws in [`Ring::random_unit`].
///
/// For an RSA-style modulus almost every draw is a unit, so this is never reached
/// with a working RNG.
pub const MAX_UNIT_SAMPLING_ATTEMPTS: usize = 10_000;

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: BigUint,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: BigUint) -> Result<Self, DJCryptoError> {
        if modulus <= BigUint::one() {
            return Err(DJCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(13u32)).unwrap();
    /// assert_eq!(ring.modulus(), &BigUint::from(13u32));
    /// ```
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(10u32)).unwrap();
    /// assert_eq!(ring.normalize(&BigUint::from(15u32)), BigUint::from(5u32));
    /// assert_eq!(ring.normalize(&BigUint::from(10u32)), BigUint::from(0u32));
    /// ```
    pub fn normalize(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(10u32)).unwrap();
    /// assert_eq!(ring.mul(&BigUint::from(7u32), &BigUint::from(5u32)), BigUint::from(5u32));
    /// ```
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Computes `base^exp mod modulus` by square-and-multiply.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(13u32)).unwrap();
    /// assert_eq!(ring.pow(&BigUint::from(2u32), &BigUint::from(12u32)), BigUint::from(1u32));
    /// assert_eq!(ring.pow(&BigUint::from(5u32), &BigUint::from(0u32)), BigUint::from(1u32));
    /// ```
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.modulus)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `DJCryptoError::ModularInverse` if `gcd(a, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(BigUint::from(10u32)).unwrap();
    /// assert_eq!(ring.inv(&BigUint::from(3u32)).unwrap(), BigUint::from(7u32));
    /// assert!(ring.inv(&BigUint::from(2u32)).is_err());
    /// assert!(ring.inv(&BigUint::from(0u32)).is_err());
    /// ```
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, DJCryptoError> {
        let a_norm = self.normalize(a);

        a_norm.modinv(&self.modulus).ok_or_else(|| {
            DJCryptoError::ModularInverse(format!(
                "Modular inverse does not exist for {} mod {}",
                a_norm, self.modulus
            ))
        })
    }

    /// Samples a uniformly random unit of Z_m from `[1, modulus)`.
    ///
    /// Draws are rejected and resampled while `gcd(r, modulus) != 1`.
    pub fn random_unit<R>(&self, rng: &mut R) -> Result<BigUint, DJCryptoError>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let one = BigUint::one();

        for attempt in 1..=MAX_UNIT_SAMPLING_ATTEMPTS {
            let r = rng.gen_biguint_range(&one, &self.modulus);
            if is_unit(&r, &self.modulus) {
                return Ok(r);
            }
            trace!(attempt, "rejected non-unit blinding candidate");
        }

        warn!(
            attempts = MAX_UNIT_SAMPLING_ATTEMPTS,
            "unit sampling budget exhausted"
        );
        Err(DJCryptoError::RandomnessExhausted(format!(
            "No unit modulo {} found after {} draws",
            self.modulus, MAX_UNIT_SAMPLING_ATTEMPTS
        )))
    }
}
