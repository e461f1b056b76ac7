//! Greatest common divisor and modular inverse.

use num_bigint::{BigInt, BigUint, Sign, ToBigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// Euclid's remainder loop. `gcd(a, 0) == a`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = core::mem::replace(&mut b, r);
    }

    a
}

/// Computes `a^-1 mod n` with the extended Euclidean algorithm.
///
/// Returns [`Error::NotInvertible`] if `gcd(a, n) != 1`. The result is
/// normalized into `[0, n)`.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    let modulus = BigInt::from_biguint(Sign::Plus, n.clone());

    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = modulus.clone();
    let mut new_r = BigInt::from_biguint(Sign::Plus, a.clone());

    while !new_r.is_zero() {
        let quotient = &r / &new_r;

        let next_t = &t - &quotient * &new_t;
        t = core::mem::replace(&mut new_t, next_t);

        let next_r = &r - &quotient * &new_r;
        r = core::mem::replace(&mut new_r, next_r);
    }

    if r > BigInt::one() {
        return Err(Error::NotInvertible);
    }

    t.mod_floor(&modulus)
        .to_biguint()
        .ok_or(Error::NotInvertible)
}
