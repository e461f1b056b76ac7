//! Special handling for converting the BigUint to u8 vectors

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::IntegerTooLarge);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Integer-to-octet-string: big-endian, exactly `padded_len` bytes.
///
/// Zero encodes as all-zero bytes, even for `padded_len == 0`.
#[inline]
pub(crate) fn uint_to_be_pad(input: BigUint, padded_len: usize) -> Result<Vec<u8>> {
    left_pad(&significant_bytes(&input), padded_len)
}

/// Same as [`uint_to_be_pad`], wiping the intermediate buffers.
#[inline]
pub(crate) fn uint_to_zeroizing_be_pad(input: BigUint, padded_len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let m = Zeroizing::new(input);
    let m = Zeroizing::new(significant_bytes(&m));
    left_pad(&m, padded_len).map(Zeroizing::new)
}

/// `to_bytes_be` encodes zero as a single `0x00`; strip it so zero fits in
/// any length.
fn significant_bytes(input: &BigUint) -> Vec<u8> {
    let mut bytes = input.to_bytes_be();
    if bytes == [0u8] {
        bytes.clear();
    }
    bytes
}
