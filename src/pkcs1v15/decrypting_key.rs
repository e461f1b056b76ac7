use super::{decrypt, EncryptingKey};
use crate::{
    traits::{Decryptor, EncryptingKeypair},
    Error, KeyPair, Result,
};

/// Decryption key for PKCS#1 v1.5 decryption as described in [RFC8017 § 7.2].
///
/// [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptingKey {
    inner: KeyPair,
}

impl DecryptingKey {
    /// Create a new decrypting key from a key pair holding a private exponent.
    ///
    /// Returns [`Error::MissingPrivateKey`] for a public-only pair.
    pub fn new(key: KeyPair) -> Result<Self> {
        if key.is_public_only() {
            return Err(Error::MissingPrivateKey);
        }
        Ok(Self { inner: key })
    }
}

impl Decryptor for DecryptingKey {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(&self.inner, ciphertext)
    }
}

impl EncryptingKeypair for DecryptingKey {
    type EncryptingKey = EncryptingKey;
    fn encrypting_key(&self) -> EncryptingKey {
        EncryptingKey::new(&self.inner)
    }
}
