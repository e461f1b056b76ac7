//! Generic RSA implementation

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// ⚠️ Raw RSA encryption primitive (RSAEP): `m^e mod n`. No padding is performed.
///
/// The message representative must satisfy `0 < m < n - 1`, otherwise
/// [`Error::RepresentativeOutOfRange`] is returned.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsaep(n: &BigUint, e: &BigUint, m: &BigUint) -> Result<BigUint> {
    check_representative(n, m)?;
    Ok(m.modpow(e, n))
}

/// ⚠️ Raw RSA decryption primitive (RSADP): `c^d mod n`. No padding is removed.
///
/// The ciphertext representative must satisfy `0 < c < n - 1`, otherwise
/// [`Error::RepresentativeOutOfRange`] is returned.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsadp(n: &BigUint, d: &BigUint, c: &BigUint) -> Result<BigUint> {
    check_representative(n, c)?;
    Ok(c.modpow(d, n))
}

/// Open interval `(0, n - 1)`, written as `x + 1 < n` so that tiny moduli
/// cannot underflow.
#[inline]
fn check_representative(n: &BigUint, x: &BigUint) -> Result<()> {
    if x.is_zero() || &(x + BigUint::one()) >= n {
        return Err(Error::RepresentativeOutOfRange);
    }
    Ok(())
}
