//! Traits related to the key components

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes (`k`). Padded ciphertexts for this
    /// key have exactly this size.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}
