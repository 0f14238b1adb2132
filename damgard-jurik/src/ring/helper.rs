use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Returns `true` when `a` is invertible modulo `m`, i.e. `gcd(a, m) == 1`.
pub fn is_unit(a: &BigUint, m: &BigUint) -> bool {
    a.gcd(m).is_one()
}

/// Computes `k!` as an arbitrary-precision integer.
pub fn factorial(k: u32) -> BigUint {
    (2..=k).map(BigUint::from).product()
}
