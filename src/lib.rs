#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Supported operations
//!
//! - key pair generation from two random primes of half the requested size,
//!   with public exponent 65537
//! - [PKCS#1 v1.5 encryption scheme](#pkcs1-v15-encryption) as described in [RFC8017 § 7.2]
//! - [unpadded encryption](#unpadded-encryption) through RSAEP / RSADP only
//!
//! No signatures, no OAEP, no key serialization and no CRT speedup. Nothing
//! here runs in constant time.
//!
//! # Usage
//!
//! ## PKCS#1 v1.5 encryption
//! ```
//! use textbook_rsa::{KeyPair, Pkcs1v15Encrypt};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let bits = 1024;
//! let private_key = KeyPair::new(&mut rng, bits).expect("failed to generate a key");
//! let public_key = private_key.to_public_key();
//!
//! // Encrypt
//! let data = b"hello world";
//! let enc_data = public_key.encrypt(&mut rng, Pkcs1v15Encrypt, &data[..]).expect("failed to encrypt");
//! assert_ne!(&data[..], &enc_data[..]);
//!
//! // Decrypt
//! let dec_data = private_key.decrypt(Pkcs1v15Encrypt, &enc_data).expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! ## Unpadded encryption
//! ```
//! use textbook_rsa::{BigUint, KeyPair, RawEncrypt};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! // p = 61, q = 53
//! let key = KeyPair::from_components(
//!     BigUint::from(3233u32),
//!     BigUint::from(17u32),
//!     BigUint::from(2753u32),
//! ).expect("invalid key");
//!
//! let c = key.encrypt(&mut rng, RawEncrypt, &[65]).expect("failed to encrypt");
//! assert_eq!(BigUint::from_bytes_be(&c), BigUint::from(2790u32));
//! assert_eq!(key.decrypt(RawEncrypt, &c).expect("failed to decrypt"), [65u8]);
//! ```
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod ops;
pub mod pkcs1v15;
pub mod raw;
pub mod traits;

mod key;

pub use crate::{
    errors::{Error, Result},
    key::{check_key_size, KeyGenOptions, KeyPair, MIN_KEY_SIZE, MIN_PADDED_KEY_SIZE},
    ops::{decrypt, encrypt, generate_keys},
    pkcs1v15::Pkcs1v15Encrypt,
    raw::RawEncrypt,
};

#[cfg(feature = "hazmat")]
pub mod hazmat;
