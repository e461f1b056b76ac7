//! One-call entry points with a plain `use_padding` switch.
//!
//! These route to [`Pkcs1v15Encrypt`] when `use_padding` is set and to
//! [`RawEncrypt`] otherwise. Key import goes through
//! [`KeyPair::from_public_components`] and [`KeyPair::from_components`].

use rand_core::CryptoRngCore;

use crate::errors::Result;
use crate::key::KeyPair;
use crate::pkcs1v15::Pkcs1v15Encrypt;
use crate::raw::RawEncrypt;

/// Generate a key pair of `bit_size` bits with public exponent 65537.
pub fn generate_keys<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<KeyPair> {
    KeyPair::new(rng, bit_size)
}

/// Encrypt `msg` with the public part of `key`.
pub fn encrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    key: &KeyPair,
    msg: &[u8],
    use_padding: bool,
) -> Result<Vec<u8>> {
    if use_padding {
        key.encrypt(rng, Pkcs1v15Encrypt, msg)
    } else {
        key.encrypt(rng, RawEncrypt, msg)
    }
}

/// Decrypt `ciphertext` with the private exponent of `key`.
pub fn decrypt(key: &KeyPair, ciphertext: &[u8], use_padding: bool) -> Result<Vec<u8>> {
    if use_padding {
        key.decrypt(Pkcs1v15Encrypt, ciphertext)
    } else {
        key.decrypt(RawEncrypt, ciphertext)
    }
}
