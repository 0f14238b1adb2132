use crate::ciphertext::{Ciphertext, encrypt_component};
use crate::errors::DJCryptoError;
use crate::hensel::reduce;
use crate::ring::{Ring, crt, factorial, is_unit};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// RSA modulus `p·q`.
    pub n: BigUint,
    /// Generator, always `n + 1`.
    pub g: BigUint,
}

impl PublicKey {
    /// Public key for modulus `n`, with generator `g = n + 1`.
    pub fn new(n: BigUint) -> Self {
        let g = &n + BigUint::one();
        Self { n, g }
    }

    /// Encrypts every message independently into one batched ciphertext over Z/n^{s+1}Z.
    ///
    /// Each component is `g^m · r^{n^s} mod n^{s+1}` with a fresh unit `r` drawn from `rng`.
    /// Messages are interpreted modulo `n^s`; keeping them below that bound is up to the
    /// caller.
    pub fn encrypt<R>(
        &self,
        messages: &[BigUint],
        s: u32,
        rng: &mut R,
    ) -> Result<Ciphertext, DJCryptoError>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        if s == 0 {
            return Err(DJCryptoError::InvalidParameters(
                "Expansion exponent s must be >= 1".to_string(),
            ));
        }

        let ns = self.n.pow(s);
        let ring = Ring::try_with(&ns * &self.n)?;

        let values = messages
            .iter()
            .map(|m| encrypt_component(&self.g, m, &ns, &ring, rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ciphertext::from_parts(
            self.n.clone(),
            self.g.clone(),
            s,
            ns,
            values,
        ))
    }
}

/// Everything decryption needs for one value of `s`.
///
/// `d` is the CRT solution of `d ≡ 0 (mod phi)`, `d ≡ 1 (mod n^s)`: raising a ciphertext
/// to `d` kills the blinding factor and leaves `(1 + n)^m`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptionContext {
    n: BigUint,
    s: u32,
    ns: BigUint,
    d: BigUint,
}

impl DecryptionContext {
    /// Derives `(n^s, d)` for `s` from the key's `n` and `phi`.
    ///
    /// # Errors
    ///
    /// * `InvalidParameters` if `s == 0`.
    /// * `DegenerateKey` if a prime factor of `n` is not above `s`, so `s!` is not a unit.
    pub fn derive(n: &BigUint, phi: &BigUint, s: u32) -> Result<Self, DJCryptoError> {
        if s == 0 {
            return Err(DJCryptoError::InvalidParameters(
                "Expansion exponent s must be >= 1".to_string(),
            ));
        }

        if !is_unit(&factorial(s), n) {
            return Err(DJCryptoError::DegenerateKey(format!(
                "Modulus {} has a prime factor not above s = {}",
                n, s
            )));
        }

        let ns = n.pow(s);
        let d = crt(&[BigUint::zero(), BigUint::one()], &[phi.clone(), ns.clone()])?;

        Ok(Self {
            n: n.clone(),
            s,
            ns,
            d,
        })
    }

    pub fn s(&self) -> u32 {
        self.s
    }

    pub fn ns(&self) -> &BigUint {
        &self.ns
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Decrypts a ciphertext produced with this context's `n` and `s`.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<BigUint>, DJCryptoError> {
        if ciphertext.n() != &self.n {
            return Err(DJCryptoError::ParameterMismatch(
                "Ciphertext was not produced under this key's modulus".to_string(),
            ));
        }

        if ciphertext.s() != self.s {
            return Err(DJCryptoError::ParameterMismatch(format!(
                "Ciphertext uses s = {}, context was derived for s = {}",
                ciphertext.s(),
                self.s
            )));
        }

        let ring = Ring::try_with(&self.ns * &self.n)?;
        let ns = BigInt::from(self.ns.clone());

        ciphertext
            .values()
            .iter()
            .map(|c| -> Result<BigUint, DJCryptoError> {
                let u = ring.pow(c, &self.d);
                let (_, m) = reduce(&u, &self.n, self.s)?.mod_floor(&ns).into_parts();
                Ok(m)
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecretKey {
    n: BigUint,
    phi: BigUint,
    /// Context for the `s` the key was generated with.
    context: DecryptionContext,
    /// Contexts for every other `s` seen so far, rebuilt on demand from `n` and `phi`.
    #[serde(skip)]
    derived: RwLock<HashMap<u32, Arc<DecryptionContext>>>,
}

impl SecretKey {
    /// Builds a secret key from `n`, its group exponent `phi` and the key's own `s`.
    pub fn try_with(n: BigUint, phi: BigUint, s: u32) -> Result<Self, DJCryptoError> {
        let context = DecryptionContext::derive(&n, &phi, s)?;

        Ok(Self {
            n,
            phi,
            context,
            derived: RwLock::default(),
        })
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn phi(&self) -> &BigUint {
        &self.phi
    }

    pub fn s(&self) -> u32 {
        self.context.s
    }

    pub fn ns(&self) -> &BigUint {
        &self.context.ns
    }

    pub fn d(&self) -> &BigUint {
        &self.context.d
    }

    /// The public half of this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.n.clone())
    }

    /// Re-derives `(n^s, d)` for `s` from the key's immutable `n` and `phi`.
    ///
    /// Pure: calling it never touches the key.
    pub fn derive_context(&self, s: u32) -> Result<DecryptionContext, DJCryptoError> {
        DecryptionContext::derive(&self.n, &self.phi, s)
    }

    /// Memoized [`SecretKey::derive_context`].
    pub fn context(&self, s: u32) -> Result<Arc<DecryptionContext>, DJCryptoError> {
        if s == self.context.s {
            return Ok(Arc::new(self.context.clone()));
        }

        {
            let cache = self.derived.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(context) = cache.get(&s) {
                return Ok(Arc::clone(context));
            }
        }

        let context = Arc::new(self.derive_context(s)?);
        debug!(s, key_s = self.context.s, "derived decryption context");

        let mut cache = self.derived.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(s).or_insert(context)))
    }

    /// Decrypts every component of `ciphertext`.
    ///
    /// A ciphertext encrypted under a different `s` than the key's own is decrypted with
    /// the matching derived context.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<BigUint>, DJCryptoError> {
        if ciphertext.s() == self.context.s {
            return self.context.decrypt(ciphertext);
        }

        self.context(ciphertext.s())?.decrypt(ciphertext)
    }
}

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        let derived = self
            .derived
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        Self {
            n: self.n.clone(),
            phi: self.phi.clone(),
            context: self.context.clone(),
            derived: RwLock::new(derived),
        }
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.phi == other.phi && self.context == other.context
    }
}

impl Eq for SecretKey {}
