//! Discrete-log extraction in the subgroup generated by `1 + n` of `(Z/n^{s+1}Z)^*`.
//!
//! Given `a ≡ (1 + n)^m (mod n^{s+1})`, [`reduce`] recovers `m mod n^s` one power of `n`
//! at a time. For `s = 1` it collapses to the Paillier formula `L(a mod n^2)`.

use crate::errors::DJCryptoError;
use crate::ring::{Ring, factorial};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// `L(b) = (b - 1) / n`, exact whenever `b ≡ 1 (mod n)`.
fn l_function(b: &BigInt, n: &BigInt) -> BigInt {
    (b - BigInt::one()).div_floor(n)
}

/// Recovers `i` with `a ≡ (1 + n)^i (mod n^{s+1})`.
///
/// The returned representative is only meaningful modulo `n^s` and may be negative;
/// callers reduce it with `mod_floor(n^s)`.
///
/// Step `j` knows `i mod n^{j-1}` and lifts it to `i mod n^j` by stripping the binomial
/// terms `C(i, k) · n^{k-1}`, `2 <= k <= j`, from `L(a mod n^{j+1})`.
///
/// # Errors
///
/// * `InvalidModulus` if `n <= 1`.
/// * `ModularInverse` if some `k!`, `k <= s`, shares a factor with `n`.
///
/// # Example
///
/// ```
/// # use damgard_jurik::hensel::reduce;
/// # use num_bigint::{BigInt, BigUint};
/// // (1 + 5)^7 mod 5^3 = 61
/// let i = reduce(&BigUint::from(61u32), &BigUint::from(5u32), 2).unwrap();
/// assert_eq!(i, BigInt::from(7));
/// ```
pub fn reduce(a: &BigUint, n: &BigUint, s: u32) -> Result<BigInt, DJCryptoError> {
    Ring::try_with(n.clone())?;

    // n^0 ..= n^{s+1}
    let mut powers: Vec<BigUint> = Vec::with_capacity(s as usize + 2);
    powers.push(BigUint::one());
    for e in 1..=(s as usize + 1) {
        let next = &powers[e - 1] * n;
        powers.push(next);
    }

    let n_int = BigInt::from(n.clone());
    let a_int = BigInt::from(a.clone());

    let mut i = BigInt::zero();
    for j in 1..=s {
        let ju = j as usize;
        let n_j = BigInt::from(powers[ju].clone());
        let n_j_ring = Ring::try_with(powers[ju].clone())?;

        let mut t1 = l_function(&a_int.mod_floor(&BigInt::from(powers[ju + 1].clone())), &n_int);
        let mut t2 = i.clone();

        for k in 2..=j {
            i -= BigInt::one();
            t2 = (&t2 * &i).mod_floor(&n_j);

            let k_fact_inv = BigInt::from(n_j_ring.inv(&factorial(k))?);
            let n_k_1 = BigInt::from(powers[k as usize - 1].clone());
            t1 -= (&t2 * n_k_1 * k_fact_inv).mod_floor(&n_j);
        }

        i = t1;
    }

    Ok(i)
}
