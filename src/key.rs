use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::generate::generate_key;
use crate::algorithms::prime::DEFAULT_ROUNDS;
use crate::errors::{Error, Result};
use crate::traits::{PaddingScheme, PublicKeyParts};

/// Smallest modulus accepted when importing key components.
const MIN_MODULUS: u32 = 10;

/// Smallest key size, in bits, that can be generated at all.
pub const MIN_KEY_SIZE: usize = 32;

/// Smallest key size, in bits, usable with PKCS#1 v1.5 padding. Its modulus
/// is 12 bytes long, leaving room for the 11 bytes of padding overhead.
pub const MIN_PADDED_KEY_SIZE: usize = 96;

/// RSA key material: modulus `n`, public exponent `e` and, unless the pair
/// is public-only, the private exponent `d`.
///
/// A `KeyPair` never changes after construction. The private exponent is
/// wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent, absent for public-only pairs
    d: Option<BigUint>,
}

impl KeyPair {
    /// Generate a new key pair of the given bit size with public exponent
    /// 65537, using the passed in `rng`.
    ///
    /// `bit_size` must be a multiple of 16 and at least [`MIN_KEY_SIZE`].
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<KeyPair> {
        Self::new_with_options(rng, bit_size, &KeyGenOptions::default())
    }

    /// Generate a new key pair, tuning the primality test and the retry
    /// loop through `options`.
    pub fn new_with_options<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bit_size: usize,
        options: &KeyGenOptions,
    ) -> Result<KeyPair> {
        let mut components = generate_key(rng, bit_size, options)?;
        components.primes.zeroize();

        Ok(KeyPair {
            n: components.n,
            e: components.e,
            d: Some(components.d),
        })
    }

    /// Import a public-only key from its modulus and public exponent.
    ///
    /// `n` must be at least 10 and `e` an odd number greater than 1.
    pub fn from_public_components(n: BigUint, e: BigUint) -> Result<KeyPair> {
        check_modulus(&n)?;
        if !is_odd_above_one(&e) {
            return Err(Error::InvalidExponent);
        }

        Ok(KeyPair { n, e, d: None })
    }

    /// Import a full key pair from its modulus, public exponent and private
    /// exponent.
    ///
    /// Same rules as [`KeyPair::from_public_components`]; additionally `d`
    /// must be an odd number greater than 1. Whether `d` actually inverts `e`
    /// is not checked.
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<KeyPair> {
        let mut key = Self::from_public_components(n, e)?;
        if !is_odd_above_one(&d) {
            return Err(Error::InvalidPrivateExponent);
        }

        key.d = Some(d);
        Ok(key)
    }

    /// Get the public-only half of this key pair.
    pub fn to_public_key(&self) -> KeyPair {
        KeyPair {
            n: self.n.clone(),
            e: self.e.clone(),
            d: None,
        }
    }

    /// `true` if this pair has no private exponent and cannot decrypt.
    pub fn is_public_only(&self) -> bool {
        self.d.is_none()
    }

    /// Returns the private exponent, if present.
    pub fn d(&self) -> Option<&BigUint> {
        self.d.as_ref()
    }

    pub(crate) fn private_exponent(&self) -> Result<&BigUint> {
        self.d.as_ref().ok_or(Error::MissingPrivateKey)
    }

    /// Encrypt the given message.
    pub fn encrypt<R: CryptoRngCore + ?Sized, P: PaddingScheme>(
        &self,
        rng: &mut R,
        padding: P,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        padding.encrypt(rng, self, msg)
    }

    /// Decrypt the given message.
    pub fn decrypt<P: PaddingScheme>(&self, padding: P, ciphertext: &[u8]) -> Result<Vec<u8>> {
        padding.decrypt(self, ciphertext)
    }
}

impl PublicKeyParts for KeyPair {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("public_only", &self.is_public_only())
            .finish_non_exhaustive()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

/// Knobs for key generation.
///
/// ```
/// use textbook_rsa::KeyGenOptions;
///
/// let options = KeyGenOptions::default().rounds(32).max_attempts(100);
/// assert_eq!(options.rounds, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenOptions {
    /// Miller-Rabin rounds per prime candidate.
    pub rounds: usize,

    /// Give up with [`Error::TooManyAttempts`] after this many rejected
    /// `(p, q)` pairs. `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl KeyGenOptions {
    /// Set the number of Miller-Rabin rounds.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Bound the number of `(p, q)` pairs tried.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl Default for KeyGenOptions {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_attempts: None,
        }
    }
}

/// Checks a requested key size against the usual policy: a multiple of 16
/// of at least [`MIN_KEY_SIZE`] bits, and at least [`MIN_PADDED_KEY_SIZE`]
/// bits when PKCS#1 v1.5 padding will be used.
pub fn check_key_size(bit_size: usize, use_padding: bool) -> Result<()> {
    if bit_size < MIN_KEY_SIZE || bit_size % 16 != 0 {
        return Err(Error::InvalidKeySize(bit_size));
    }
    if use_padding && bit_size < MIN_PADDED_KEY_SIZE {
        return Err(Error::InvalidKeySize(bit_size));
    }
    Ok(())
}

fn check_modulus(n: &BigUint) -> Result<()> {
    if n < &BigUint::from(MIN_MODULUS) {
        return Err(Error::InvalidModulus);
    }
    Ok(())
}

fn is_odd_above_one(x: &BigUint) -> bool {
    x.is_odd() && x > &BigUint::one()
}
