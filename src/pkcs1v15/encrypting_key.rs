use super::encrypt;
use crate::{traits::RandomizedEncryptor, KeyPair, Result};
use rand_core::CryptoRngCore;

/// Encryption key for PKCS#1 v1.5 encryption as described in [RFC8017 § 7.2].
///
/// Holds only the public half of whatever key it was built from.
///
/// [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptingKey {
    pub(super) inner: KeyPair,
}

impl EncryptingKey {
    /// Create a new encrypting key from the public part of `key`.
    pub fn new(key: &KeyPair) -> Self {
        Self {
            inner: key.to_public_key(),
        }
    }
}

impl RandomizedEncryptor for EncryptingKey {
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(&self, rng: &mut R, msg: &[u8]) -> Result<Vec<u8>> {
        encrypt(rng, &self.inner, msg)
    }
}
