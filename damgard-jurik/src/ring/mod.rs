//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic over Z_m with arbitrary-precision
//! moduli, plus the CRT solver used to derive decryption exponents.

pub mod crt;
pub mod helper;
pub mod math;

pub use crt::crt;
pub use helper::{factorial, is_unit};
pub use math::Ring;
