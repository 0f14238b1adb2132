//! Preconfigured instantiations of the generalized scheme.

pub mod paillier;
