//! Batched Damgard-Jurik ciphertexts and their homomorphic algebra.
//!
//! Multiplying ciphertexts adds the plaintexts; raising a ciphertext to `k` multiplies the
//! plaintext by `k`. All plaintext arithmetic happens in Z/n^sZ.

use crate::errors::DJCryptoError;
use crate::keypair::keys::PublicKey;
use crate::ring::Ring;

use itertools::Itertools;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use std::ops::Mul;

/// Encrypts one plaintext: `g^m · r^{ns} mod n^{s+1}`, `ring` being Z/n^{s+1}Z.
pub fn encrypt_component<R>(
    g: &BigUint,
    m: &BigUint,
    ns: &BigUint,
    ring: &Ring,
    rng: &mut R,
) -> Result<BigUint, DJCryptoError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let r = ring.random_unit(rng)?;
    Ok(ring.mul(&ring.pow(g, m), &ring.pow(&r, ns)))
}

/// Homomorphic addition of two components.
pub fn add_component(c1: &BigUint, c2: &BigUint, modulus: &BigUint) -> BigUint {
    (c1 * c2) % modulus
}

/// Homomorphic multiplication of a component by the plaintext scalar `k`.
pub fn mul_component(c: &BigUint, k: &BigUint, modulus: &BigUint) -> BigUint {
    c.modpow(k, modulus)
}

/// A vector of ciphertext components sharing one `(n, g, s)`.
///
/// Deserialized ciphertexts pass the same checks as [`Ciphertext::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCiphertext")]
pub struct Ciphertext {
    n: BigUint,
    g: BigUint,
    s: u32,
    ns: BigUint,
    values: Vec<BigUint>,
}

/// Wire form of [`Ciphertext`], unchecked.
#[derive(Deserialize)]
struct RawCiphertext {
    n: BigUint,
    g: BigUint,
    s: u32,
    ns: BigUint,
    values: Vec<BigUint>,
}

impl TryFrom<RawCiphertext> for Ciphertext {
    type Error = DJCryptoError;

    fn try_from(raw: RawCiphertext) -> Result<Self, Self::Error> {
        let ciphertext = Ciphertext::new(raw.n, raw.g, raw.s, raw.values)?;

        if ciphertext.ns != raw.ns {
            return Err(DJCryptoError::ParameterMismatch(format!(
                "Stored n^s does not match n^{}",
                raw.s
            )));
        }

        Ok(ciphertext)
    }
}

impl Ciphertext {
    /// Wraps raw components under `(n, g, s)`.
    ///
    /// # Errors
    ///
    /// * `InvalidParameters` if `s == 0`.
    /// * `InvalidModulus` if `n^{s+1} <= 1`, i.e. `n <= 1`.
    pub fn new(
        n: BigUint,
        g: BigUint,
        s: u32,
        values: Vec<BigUint>,
    ) -> Result<Self, DJCryptoError> {
        if s == 0 {
            return Err(DJCryptoError::InvalidParameters(
                "Expansion exponent s must be >= 1".to_string(),
            ));
        }

        let ns = n.pow(s);
        Ring::try_with(&ns * &n)?;

        Ok(Self::from_parts(n, g, s, ns, values))
    }

    /// `ns` must equal `n^s`.
    pub(crate) fn from_parts(
        n: BigUint,
        g: BigUint,
        s: u32,
        ns: BigUint,
        values: Vec<BigUint>,
    ) -> Self {
        Self {
            n,
            g,
            s,
            ns,
            values,
        }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn s(&self) -> u32 {
        self.s
    }

    pub fn ns(&self) -> &BigUint {
        &self.ns
    }

    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The ciphertext modulus `n^{s+1}`.
    pub fn modulus(&self) -> BigUint {
        &self.ns * &self.n
    }

    /// Public key the ciphertext was produced under.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            n: self.n.clone(),
            g: self.g.clone(),
        }
    }

    fn with_values(&self, values: Vec<BigUint>) -> Self {
        Self::from_parts(
            self.n.clone(),
            self.g.clone(),
            self.s,
            self.ns.clone(),
            values,
        )
    }

    fn ensure_compatible(&self, other: &Ciphertext) -> Result<(), DJCryptoError> {
        if self.n != other.n || self.g != other.g {
            return Err(DJCryptoError::ParameterMismatch(
                "Ciphertexts were produced under different public keys".to_string(),
            ));
        }

        if self.s != other.s {
            return Err(DJCryptoError::ParameterMismatch(format!(
                "Ciphertexts use different expansion exponents: {} and {}",
                self.s, other.s
            )));
        }

        if self.values.len() != other.values.len() {
            return Err(DJCryptoError::LengthMismatch(format!(
                "Can't add ciphertexts of unequal length: {} and {}",
                self.values.len(),
                other.values.len()
            )));
        }

        Ok(())
    }

    /// Homomorphic addition: decrypts to `(a + b) mod n^s` component-wise.
    pub fn add(&self, other: &Ciphertext) -> Result<Ciphertext, DJCryptoError> {
        self.ensure_compatible(other)?;

        let modulus = self.modulus();
        let values = self
            .values
            .iter()
            .zip_eq(&other.values)
            .map(|(c1, c2)| add_component(c1, c2, &modulus))
            .collect();

        Ok(self.with_values(values))
    }

    /// Adds the plaintext `m`, encrypted here under the ciphertext's own `(n, g, s)` with
    /// fresh randomness.
    ///
    /// The fresh encryption holds a single slot, so only single-component ciphertexts
    /// accept it; wider ones fail with `LengthMismatch`.
    pub fn add_plaintext<R>(&self, m: &BigUint, rng: &mut R) -> Result<Ciphertext, DJCryptoError>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let encrypted = self
            .public_key()
            .encrypt(std::slice::from_ref(m), self.s, rng)?;
        self.add(&encrypted)
    }

    /// Homomorphic scalar multiplication: decrypts to `(a · k) mod n^s` component-wise.
    ///
    /// `k` is not range-checked; products past `n^s` wrap around.
    pub fn scalar_multiply(&self, k: &BigUint) -> Ciphertext {
        let modulus = self.modulus();
        let values = self
            .values
            .iter()
            .map(|c| mul_component(c, k, &modulus))
            .collect();

        self.with_values(values)
    }

    /// Single-component ciphertext holding slot `index`.
    pub fn select(&self, index: usize) -> Result<Ciphertext, DJCryptoError> {
        let value = self
            .values
            .get(index)
            .ok_or(DJCryptoError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })?;

        Ok(self.with_values(vec![value.clone()]))
    }
}

impl Mul<&BigUint> for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, k: &BigUint) -> Ciphertext {
        self.scalar_multiply(k)
    }
}
