//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core encryption and decryption
//! primitives to raw integers without adding or removing appropriate padding,
//! along with the number theory used to build keys. A well-reviewed padding
//! scheme is crucial to the security of RSA, so there are very few valid use
//! cases for this API. None of it runs in constant time.

pub use crate::algorithms::math::{gcd, mod_inverse};
pub use crate::algorithms::prime::{generate_odd, is_probably_prime, DEFAULT_ROUNDS};
pub use crate::algorithms::rsa::{rsadp, rsaep};
