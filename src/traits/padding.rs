//! Supported padding schemes.

use rand_core::CryptoRngCore;

use crate::errors::Result;
use crate::key::KeyPair;

/// Padding scheme used for encryption.
pub trait PaddingScheme {
    /// Decrypt the given message using the private exponent of `key`.
    ///
    /// Fails with [`Error::MissingPrivateKey`](crate::Error::MissingPrivateKey)
    /// for a public-only key.
    fn decrypt(self, key: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt the given message using the public part of `key`.
    fn encrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        rng: &mut Rng,
        key: &KeyPair,
        msg: &[u8],
    ) -> Result<Vec<u8>>;
}
