//! Random odd candidates and the Miller-Rabin probable prime test.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Number of Miller-Rabin rounds used during key generation. A composite
/// passes all of them with probability at most 4^-20.
pub const DEFAULT_ROUNDS: usize = 20;

/// Smallest candidate size accepted by [`generate_odd`].
const MIN_PRIME_BITS: usize = 16;

/// Draws `bit_length / 8` random bytes and forces the lowest bit (odd) and
/// the highest bit (exact bit length) to one.
///
/// `bit_length` must be a multiple of 8 and at least 16.
pub fn generate_odd<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_length: usize) -> Result<BigUint> {
    if bit_length < MIN_PRIME_BITS || bit_length % 8 != 0 {
        return Err(Error::InvalidPrimeSize(bit_length));
    }

    let mut bytes = vec![0u8; bit_length / 8];
    rng.fill_bytes(&mut bytes);

    bytes[0] |= 0x80;
    let last = bytes.len() - 1;
    bytes[last] |= 1;

    Ok(BigUint::from_bytes_be(&bytes))
}

/// Reports whether `n` passes `rounds` rounds of the Miller-Rabin test with
/// uniformly chosen witnesses from `[2, n - 2]`.
///
/// A prime always passes. A composite passes with probability at most
/// `4^-rounds`. See Handbook of Applied Cryptography, Algorithm 4.24.
pub fn is_probably_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let one = BigUint::one();
    let n_minus_one = n - &one;

    // n - 1 = d * 2^s with d odd
    let mut d = n_minus_one.clone();
    let mut s = 0usize;
    while d.is_even() {
        d = &d >> 1usize;
        s += 1;
    }

    let n_minus_two = n - &two;

    'witness: for _ in 0..rounds {
        let a = random_witness(rng, &two, &n_minus_two);

        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
            if x == one {
                return false;
            }
        }

        return false;
    }

    true
}

/// Samples uniformly from `[low, high]` by rejection over the bit range of
/// `high`.
fn random_witness<R: CryptoRngCore + ?Sized>(rng: &mut R, low: &BigUint, high: &BigUint) -> BigUint {
    let bits = high.bits();
    let mut bytes = vec![0u8; (bits + 7) / 8];
    let top_bits = bits % 8;

    loop {
        rng.fill_bytes(&mut bytes);
        if top_bits != 0 {
            bytes[0] &= (1u8 << top_bits) - 1;
        }

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate >= low && &candidate <= high {
            return candidate;
        }
    }
}

/// Samples odd candidates of exactly `bit_length` bits until one passes
/// [`is_probably_prime`].
pub(crate) fn generate_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    rounds: usize,
) -> Result<BigUint> {
    loop {
        let candidate = generate_odd(rng, bit_length)?;
        if is_probably_prime(rng, &candidate, rounds) {
            return Ok(candidate);
        }
    }
}

/// `true` if `n` has no divisor in `[2, sqrt(n)]`. Only meant for checking
/// small values in tests.
#[cfg(test)]
pub(crate) fn is_prime_by_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
