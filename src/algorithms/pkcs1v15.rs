//! PKCS#1 v1.5 encryption padding as described in [RFC8017 § 7.2].
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Fixed overhead of the block: `0x00 0x02`, eight bytes of `PS` and the
/// `0x00` separator.
pub(crate) const PKCS1V15_OVERHEAD: usize = 11;

/// Minimum length of the padding string `PS`.
const MIN_PS_LEN: usize = 8;

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
#[inline]
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);

    for el in data {
        while *el == 0u8 {
            rng.fill_bytes(core::slice::from_mut(el));
        }
    }
}

/// Applies the padding scheme from PKCS#1 v1.5 for encryption. The message must be no longer than
/// the length of the public modulus minus 11 bytes.
pub(crate) fn pkcs1v15_encrypt_pad<R>(
    rng: &mut R,
    msg: &[u8],
    k: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    R: CryptoRngCore + ?Sized,
{
    if msg.len() + PKCS1V15_OVERHEAD > k {
        return Err(Error::MessageTooLong);
    }

    // EM = 0x00 || 0x02 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![0u8; k]);
    em[1] = 2;
    non_zero_random_bytes(rng, &mut em[2..k - msg.len() - 1]);
    em[k - msg.len() - 1] = 0;
    em[k - msg.len()..].copy_from_slice(msg);
    Ok(em)
}

/// Removes the encryption padding scheme from PKCS#1 v1.5.
///
/// Every structural failure maps to the same [`Error::Decryption`]. The
/// checks are not constant time, so the timing of this function still
/// reveals which one failed.
pub(crate) fn pkcs1v15_encrypt_unpad(em: &[u8], k: usize) -> Result<Vec<u8>> {
    if k < PKCS1V15_OVERHEAD || em.len() != k {
        return Err(Error::Decryption);
    }

    // first zero byte after the two marker bytes
    let separator = em.iter().skip(2).position(|&b| b == 0).map(|i| i + 2);

    if em[0] != 0x00 {
        return Err(Error::Decryption);
    }
    if em[1] != 0x02 {
        return Err(Error::Decryption);
    }
    let index = separator.ok_or(Error::Decryption)?;
    if index - 2 < MIN_PS_LEN {
        return Err(Error::Decryption);
    }

    Ok(em[index + 1..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    /// `0x00 0x02 PS 0x00 M` with `PS` made of `ps_len` copies of 0xAB.
    fn block(ps_len: usize, msg: &[u8]) -> Vec<u8> {
        let mut em = vec![0x00, 0x02];
        em.extend(core::iter::repeat(0xab).take(ps_len));
        em.push(0x00);
        em.extend_from_slice(msg);
        em
    }

    #[test]
    fn test_non_zero_bytes() {
        for _ in 0..10 {
            let mut rng = ChaCha8Rng::from_seed([42; 32]);
            let mut b = vec![0u8; 512];
            non_zero_random_bytes(&mut rng, &mut b);
            for el in &b {
                assert_ne!(*el, 0u8);
            }
        }
    }

    #[test]
    fn test_encrypt_tiny_no_crash() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let k = 8;
        let message = vec![1u8; 4];
        let res = pkcs1v15_encrypt_pad(&mut rng, &message, k);
        assert_eq!(res, Err(Error::MessageTooLong));
    }

    #[test]
    fn test_pad_layout() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let msg = b"hello";
        let k = 32;

        let em = pkcs1v15_encrypt_pad(&mut rng, msg, k).unwrap();
        assert_eq!(em.len(), k);
        assert_eq!(&em[..2], &[0x00, 0x02]);

        let ps_end = k - msg.len() - 1;
        assert!(em[2..ps_end].iter().all(|&b| b != 0));
        assert_eq!(em[ps_end], 0x00);
        assert_eq!(&em[ps_end + 1..], msg);
    }

    #[test]
    fn test_pad_length_limits() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let k = 16;

        assert!(pkcs1v15_encrypt_pad(&mut rng, &[7u8; 5], k).is_ok());
        assert_eq!(
            pkcs1v15_encrypt_pad(&mut rng, &[7u8; 6], k),
            Err(Error::MessageTooLong)
        );

        let em = pkcs1v15_encrypt_pad(&mut rng, &[], k).unwrap();
        assert_eq!(em[k - 1], 0x00);
        assert!(em[2..k - 1].iter().all(|&b| b != 0));
    }

    #[test]
    fn test_unpad_roundtrip() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for len in 0..=21 {
            let msg: Vec<u8> = (0..len as u8).collect();
            let em = pkcs1v15_encrypt_pad(&mut rng, &msg, 32).unwrap();
            assert_eq!(pkcs1v15_encrypt_unpad(&em, 32).unwrap(), msg);
        }
    }

    #[test]
    fn test_unpad_accepts_message_with_zero_bytes() {
        let em = block(8, &[0, 0, 1, 0]);
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()).unwrap(), vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_unpad_rejects_bad_markers() {
        let mut em = block(10, b"msg");
        em[0] = 0x01;
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()), Err(Error::Decryption));

        let mut em = block(10, b"msg");
        em[1] = 0x01;
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()), Err(Error::Decryption));
    }

    #[test]
    fn test_unpad_rejects_short_padding() {
        let em = block(7, b"msg");
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()), Err(Error::Decryption));

        let em = block(8, b"msg");
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()).unwrap(), b"msg".to_vec());
    }

    #[test]
    fn test_unpad_rejects_missing_separator() {
        let mut em = vec![0x00, 0x02];
        em.extend(core::iter::repeat(0x11).take(20));
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()), Err(Error::Decryption));
    }

    #[test]
    fn test_unpad_separator_at_end() {
        let em = block(12, &[]);
        assert_eq!(pkcs1v15_encrypt_unpad(&em, em.len()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_unpad_rejects_bad_lengths() {
        let em = block(8, &[]);
        assert_eq!(em.len(), 11);
        assert!(pkcs1v15_encrypt_unpad(&em, 11).is_ok());
        assert_eq!(pkcs1v15_encrypt_unpad(&em, 12), Err(Error::Decryption));
        assert_eq!(pkcs1v15_encrypt_unpad(&em[..10], 10), Err(Error::Decryption));
    }
}
