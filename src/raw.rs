//! Unpadded ("textbook") RSA encryption.
//!
//! The message bytes are read as one big-endian integer and fed straight to
//! RSAEP; the ciphertext is the minimal big-endian encoding of the result.
//! Decryption mirrors this, so leading zero bytes of a message do not
//! survive a round trip and an empty message is rejected as out of range.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::algorithms::rsa::{rsadp, rsaep};
use crate::errors::Result;
use crate::key::KeyPair;
use crate::traits::{PaddingScheme, PublicKeyParts};

/// ⚠️ Encryption without any padding.
///
/// Deterministic and malleable; see the [hazmat](crate::hazmat) warning.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RawEncrypt;

impl PaddingScheme for RawEncrypt {
    fn decrypt(self, key: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let d = key.private_exponent()?;
        let c = BigUint::from_bytes_be(ciphertext);
        Ok(rsadp(key.n(), d, &c)?.to_bytes_be())
    }

    fn encrypt<Rng: CryptoRngCore + ?Sized>(
        self,
        _rng: &mut Rng,
        key: &KeyPair,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        let m = BigUint::from_bytes_be(msg);
        Ok(rsaep(key.n(), key.e(), &m)?.to_bytes_be())
    }
}
