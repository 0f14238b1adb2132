use crate::errors::DJCryptoError;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// Plaintext-expansion exponent used when the caller has no preference.
pub const DEFAULT_S: u32 = 2;

/// Smallest prime size for which two distinct equal-length odd primes exist.
pub const MIN_PRIME_BITS: usize = 3;

/// Group exponent used for the secret key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Totient {
    /// `lcm(p - 1, q - 1)`, the generalized scheme.
    Carmichael,
    /// `(p - 1)(q - 1)`, the textbook Paillier choice.
    Euler,
}

impl Totient {
    /// Evaluates the exponent for the primes `p` and `q`.
    ///
    /// # Example
    ///
    /// ```
    /// # use damgard_jurik::keypair::Totient;
    /// # use num_bigint::BigUint;
    /// let (p, q) = (BigUint::from(5u32), BigUint::from(7u32));
    /// assert_eq!(Totient::Carmichael.of(&p, &q), BigUint::from(12u32));
    /// assert_eq!(Totient::Euler.of(&p, &q), BigUint::from(24u32));
    /// ```
    pub fn of(&self, p: &BigUint, q: &BigUint) -> BigUint {
        let p1 = p - BigUint::one();
        let q1 = q - BigUint::one();

        match self {
            Totient::Carmichael => p1.lcm(&q1),
            Totient::Euler => p1 * q1,
        }
    }
}

/// Parameters for key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenParams {
    /// Bit length of each of the two primes; `n` has roughly twice as many bits.
    pub prime_bits: usize,
    /// Plaintext-expansion exponent; plaintexts live in Z/n^sZ.
    pub s: u32,
    pub totient: Totient,
}

impl KeyGenParams {
    /// Creates validated parameters for the generalized scheme.
    ///
    /// Every `k!` with `k <= s` must be a unit modulo `n`, which holds when both primes
    /// exceed `s`. Odd primes of `prime_bits` bits are strictly above `2^(prime_bits-1)`.
    pub fn try_with(prime_bits: usize, s: u32) -> Result<Self, DJCryptoError> {
        if s == 0 {
            return Err(DJCryptoError::InvalidParameters(
                "Expansion exponent s must be >= 1".to_string(),
            ));
        }

        if prime_bits < MIN_PRIME_BITS {
            return Err(DJCryptoError::DegenerateKey(format!(
                "Primes must have at least {} bits, got {}",
                MIN_PRIME_BITS, prime_bits
            )));
        }

        let smallest_prime_bound = BigUint::one() << (prime_bits - 1);
        if smallest_prime_bound < BigUint::from(s) {
            return Err(DJCryptoError::DegenerateKey(format!(
                "{}-bit primes are too small for s = {}",
                prime_bits, s
            )));
        }

        Ok(Self {
            prime_bits,
            s,
            totient: Totient::Carmichael,
        })
    }

    /// Replaces the group exponent, keeping `prime_bits` and `s`.
    pub fn with_totient(mut self, totient: Totient) -> Self {
        self.totient = totient;
        self
    }
}
