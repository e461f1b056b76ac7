//! Error types.

use thiserror::Error;

/// Alias for [`core::result::Result`] with the `textbook-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Message is longer than the modulus allows under the chosen padding.
    #[error("message too long")]
    MessageTooLong,

    /// Decryption failed. Deliberately says nothing about which check tripped.
    #[error("decryption error")]
    Decryption,

    /// Message or ciphertext representative outside of `(0, n - 1)`.
    #[error("representative out of range")]
    RepresentativeOutOfRange,

    /// Integer does not fit into the requested number of octets.
    #[error("integer too large")]
    IntegerTooLarge,

    /// Value has no multiplicative inverse for the given modulus.
    #[error("value is not invertible")]
    NotInvertible,

    /// Operation needs the private exponent but the key is public-only.
    #[error("no private key")]
    MissingPrivateKey,

    /// Requested key size is unusable.
    #[error("invalid key size: {0} bits")]
    InvalidKeySize(usize),

    /// Requested prime candidate size is unusable.
    #[error("invalid prime size: {0} bits")]
    InvalidPrimeSize(usize),

    /// Modulus is too small.
    #[error("invalid modulus")]
    InvalidModulus,

    /// Public exponent must be an odd number greater than 1.
    #[error("invalid exponent")]
    InvalidExponent,

    /// Private exponent must be an odd number greater than 1.
    #[error("invalid private exponent")]
    InvalidPrivateExponent,

    /// Key generation gave up after the configured number of attempts.
    #[error("key generation gave up after {attempts} attempts")]
    TooManyAttempts {
        /// Number of candidate pairs that were rejected.
        attempts: usize,
    },
}
