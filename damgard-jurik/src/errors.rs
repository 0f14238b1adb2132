#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DJCryptoError {
    /// Ciphertexts (or a ciphertext and a key) built over different `(n, g, s)`.
    #[error("ParameterMismatch: {0}")]
    ParameterMismatch(String),
    /// Vector lengths differ where they have to agree.
    #[error("LengthMismatch: {0}")]
    LengthMismatch(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("ModularInverse: {0}")]
    ModularInverse(String),
    /// Prime draw produced `p == q`, or the prime size cannot support the requested `s`.
    #[error("DegenerateKey: {0}")]
    DegenerateKey(String),
    #[error("Index {index} is out of range for a ciphertext of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A rejection-sampling loop ran out of attempts; points at a broken RNG.
    #[error("RandomnessExhausted: {0}")]
    RandomnessExhausted(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
}
