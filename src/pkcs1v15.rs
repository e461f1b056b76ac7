//! PKCS#1 v1.5 encryption as described in [RFC8017 § 7.2].
//!
//! # Usage
//!
//! See [code example in the toplevel rustdoc](../index.html#pkcs1-v15-encryption).
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

mod decrypting_key;
mod encrypting_key;

pub use self::{decrypting_key::DecryptingKey, encrypting_key::EncryptingKey};

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::algorithms::pad::{uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::algorithms::pkcs1v15::*;
use crate::algorithms::rsa::{rsadp, rsaep};
use crate::errors::{Error, Result};
use crate::key::KeyPair;
use crate::traits::{PaddingScheme, PublicKeyParts};

/// Encryption using PKCS#1 v1.5 padding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pkcs1v15Encrypt;

impl PaddingScheme for Pkcs1v15Encrypt {
    fn decrypt(self, key: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(key, ciphertext)
    }

    fn encrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: &mut Rng,
        key: &KeyPair,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        encrypt(rng, key, msg)
    }
}

/// Encrypts the given message with RSA and the padding
/// scheme from PKCS#1 v1.5.  The message must be no longer than the
/// length of the public modulus minus 11 bytes.
#[inline]
fn encrypt<R: CryptoRngCore + ?Sized>(rng: &mut R, key: &KeyPair, msg: &[u8]) -> Result<Vec<u8>> {
    let k = key.size();
    let em = pkcs1v15_encrypt_pad(rng, msg, k)?;
    let m = BigUint::from_bytes_be(&em);
    uint_to_be_pad(rsaep(key.n(), key.e(), &m)?, k)
}

/// Decrypts a plaintext using RSA and the padding scheme from PKCS#1 v1.5.
///
/// Every malformed block yields the same [`Error::Decryption`]. A ciphertext
/// representative outside `(0, n - 1)` is reported as
/// [`Error::RepresentativeOutOfRange`] before any padding is looked at.
#[inline]
fn decrypt(key: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let d = key.private_exponent()?;
    let k = key.size();

    if ciphertext.len() != k || k < PKCS1V15_OVERHEAD {
        return Err(Error::Decryption);
    }

    let c = BigUint::from_bytes_be(ciphertext);
    let em = uint_to_zeroizing_be_pad(rsadp(key.n(), d, &c)?, k)?;

    pkcs1v15_encrypt_unpad(&em, k)
}
