//! # Damgard-Jurik
//!
//! Additively homomorphic public-key encryption over Z/n^sZ, with Paillier as the `s = 1`
//! preset.
//!
//! ```
//! use damgard_jurik::{DJCryptoError, keygen};
//! use num_bigint::BigUint;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), DJCryptoError> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let (pk, sk) = keygen(32, 2, &mut rng)?;
//!
//! let a = pk.encrypt(&[BigUint::from(20u32)], 2, &mut rng)?;
//! let b = pk.encrypt(&[BigUint::from(22u32)], 2, &mut rng)?;
//!
//! assert_eq!(sk.decrypt(&a.add(&b)?)?, vec![BigUint::from(42u32)]);
//! assert_eq!(sk.decrypt(&(&a * &BigUint::from(3u32)))?, vec![BigUint::from(60u32)]);
//! # Ok(())
//! # }
//! ```

pub mod ciphertext;
pub mod errors;
pub mod hensel;
pub mod keypair;
pub mod pir;
pub mod preset;
pub mod ring;

pub use ciphertext::Ciphertext;
pub use errors::DJCryptoError;
pub use hensel::reduce;
pub use keypair::{DecryptionContext, KeyGenParams, PublicKey, SecretKey, Totient, keygen};
pub use pir::{answer, decode, query};
pub use preset::paillier;
pub use ring::crt;
