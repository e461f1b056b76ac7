//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use textbook_rsa::{KeyPair, Pkcs1v15Encrypt, RawEncrypt};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. Tiny keys keep the tests fast.
    fn private_key()(seed in any::<[u8; 32]>()) -> KeyPair {
        let mut rng = ChaCha8Rng::from_seed(seed);
        KeyPair::new(&mut rng, 256).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pkcs1v15_encrypt_roundtrip(
        private_key in private_key(),
        seed in any::<[u8; 32]>(),
        msg in proptest::collection::vec(any::<u8>(), 0..=21),
    ) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        let ciphertext = private_key.encrypt(&mut rng, Pkcs1v15Encrypt, &msg).unwrap();
        prop_assert_eq!(ciphertext.len(), 32);
        prop_assert_eq!(private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap(), msg);
    }

    #[test]
    fn raw_encrypt_roundtrip(
        private_key in private_key(),
        first in 1u8..,
        rest in proptest::collection::vec(any::<u8>(), 0..30),
    ) {
        let mut msg = vec![first];
        msg.extend(rest);

        let mut rng = ChaCha8Rng::from_seed([0; 32]);
        let ciphertext = private_key.encrypt(&mut rng, RawEncrypt, &msg).unwrap();
        prop_assert_eq!(private_key.decrypt(RawEncrypt, &ciphertext).unwrap(), msg);
    }
}

#[cfg(feature = "hazmat")]
mod hazmat {
    use proptest::prelude::*;
    use textbook_rsa::{
        hazmat::{gcd, mod_inverse},
        BigUint,
    };

    proptest! {
        #[test]
        fn mod_inverse_inverts(a in any::<u64>(), n in 1u64..) {
            let (a, n) = (BigUint::from(a), BigUint::from(n));
            let one = BigUint::from(1u32);

            match mod_inverse(&a, &n) {
                Ok(inv) => {
                    prop_assert!(inv < n);
                    prop_assert_eq!((&a * &inv) % &n, &one % &n);
                }
                Err(_) => prop_assert_ne!(gcd(&a, &n), one),
            }
        }
    }
}
