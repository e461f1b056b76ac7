//! Generate prime components for an RSA key pair

use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::{
    algorithms::{
        math::{gcd, mod_inverse},
        prime::generate_prime,
    },
    errors::{Error, Result},
    key::{KeyGenOptions, MIN_KEY_SIZE},
};

/// Public exponent of every generated key.
pub(crate) const EXP: u32 = 65537;

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: [BigUint; 2],
}

/// Generates a two-prime RSA key of `bit_size` bits with public exponent
/// 65537.
///
/// `p` and `q` are sampled independently at half the size. Whenever they
/// coincide or `gcd(e, (p - 1)(q - 1)) != 1` both are thrown away and the
/// whole pair is sampled again.
pub(crate) fn generate_key<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    options: &KeyGenOptions,
) -> Result<KeyComponents> {
    if bit_size < MIN_KEY_SIZE || bit_size % 16 != 0 {
        return Err(Error::InvalidKeySize(bit_size));
    }

    tracing::debug!(bit_size, rounds = options.rounds, "generating RSA key pair");

    let exp = BigUint::from(EXP);
    let prime_bits = bit_size / 2;
    let one = BigUint::one();
    let mut attempts = 0usize;

    loop {
        if options.max_attempts.is_some_and(|max| attempts >= max) {
            tracing::debug!(attempts, "giving up on key generation");
            return Err(Error::TooManyAttempts { attempts });
        }
        attempts += 1;

        let p = generate_prime(rng, prime_bits, options.rounds)?;
        let q = generate_prime(rng, prime_bits, options.rounds)?;

        if p == q {
            tracing::trace!(attempts, "sampled equal primes, resampling the pair");
            continue;
        }

        let n = &p * &q;
        let totient = (&p - &one) * (&q - &one);

        if gcd(&exp, &totient) != one {
            tracing::trace!(attempts, "public exponent shares a factor with the totient, resampling the pair");
            continue;
        }

        let d = mod_inverse(&exp, &totient)?;

        tracing::debug!(bit_size, attempts, "generated RSA key pair");

        return Ok(KeyComponents {
            n,
            e: exp,
            d,
            primes: [p, q],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::prime::{is_probably_prime, DEFAULT_ROUNDS};
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_impossible_keys() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let options = KeyGenOptions::default();

        for bits in [0, 8, 16, 24, 31, 40, 100] {
            assert_eq!(
                generate_key(&mut rng, bits, &options).err(),
                Some(Error::InvalidKeySize(bits))
            );
        }
    }

    #[test]
    fn test_attempt_ceiling() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let options = KeyGenOptions::default().max_attempts(0);

        assert_eq!(
            generate_key(&mut rng, 64, &options).err(),
            Some(Error::TooManyAttempts { attempts: 0 })
        );
    }

    macro_rules! key_generation {
        ($name:ident, $size:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                let options = KeyGenOptions::default();
                for _ in 0..10 {
                    let components = generate_key(&mut rng, $size, &options).unwrap();
                    let [p, q] = &components.primes;

                    assert_eq!((components.n.bits() + 7) / 8, $size / 8);
                    assert_eq!(components.e, BigUint::from(65537u32));
                    assert_eq!(&components.n, &(p * q));
                    assert_ne!(p, q);
                    assert!(is_probably_prime(&mut rng, p, DEFAULT_ROUNDS));
                    assert!(is_probably_prime(&mut rng, q, DEFAULT_ROUNDS));

                    let one = BigUint::one();
                    let totient = (p - &one) * (q - &one);
                    assert_eq!(gcd(&components.e, &totient), one);
                    assert_eq!((&components.e * &components.d) % &totient, one);
                }
            }
        };
    }

    key_generation!(key_generation_32, 32);
    key_generation!(key_generation_96, 96);
    key_generation!(key_generation_128, 128);
    key_generation!(key_generation_512, 512);
    key_generation!(key_generation_1024, 1024);
}
