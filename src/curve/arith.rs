//! Modular arithmetic over arbitrary-precision unsigned integers
//!
//! The helpers keep every intermediate in `[0, m)` so callers can chain them
//! without worrying about `BigUint` underflow.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// (a + b) mod m
pub(crate) fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// (a - b) mod m, computed without leaving the unsigned domain
pub(crate) fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// (a * b) mod m
pub(crate) fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) * (b % m)) % m
}

/// Compute the multiplicative inverse of `value` modulo `modulus` with the
/// iterative extended Euclidean algorithm.
///
/// Returns the unique representative in `[0, modulus)` such that
/// `value · inverse ≡ 1 (mod modulus)`, or [`Error::NoModularInverse`] when
/// `gcd(value, modulus) ≠ 1`. The modulus does not need to be prime: the
/// generator order of a teaching curve is often composite, and the failure
/// path here is an expected outcome for such curves.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    // Run the Euclidean recurrence on (r, t) pairs. Only the Bézout
    // coefficient of `value` is tracked; the gcd ends up in r0.
    let mut r0 = BigInt::from(modulus.clone());
    let mut r1 = BigInt::from(value % modulus);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let quotient = &r0 / &r1;
        let r2 = &r0 - &quotient * &r1;
        let t2 = &t0 - &quotient * &t1;
        r0 = core::mem::replace(&mut r1, r2);
        t0 = core::mem::replace(&mut t1, t2);
    }

    if !r0.is_one() {
        return Err(Error::NoModularInverse {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    let normalized = t0.mod_floor(&BigInt::from(modulus.clone()));
    Ok(normalized
        .to_biguint()
        .expect("mod_floor by a positive modulus is non-negative"))
}
