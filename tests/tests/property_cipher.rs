//! Property-based tests for the symmetric cipher engine

use cryptkit_api::{CipherKind, CryptStatus, Error};
use cryptkit_symmetric::{resolve, CipherConfig, SymmetricCipher};
use cryptkit_tests::{length_classes, native_key};
use proptest::prelude::*;

fn cipher_kind() -> impl Strategy<Value = CipherKind> {
    prop::sample::select(CipherKind::ALL.to_vec())
}

/// Data whose length is one of the block-relative classes for `kind`
fn data_for(kind: CipherKind) -> impl Strategy<Value = Vec<u8>> {
    let block = resolve(kind, 16).block_size;
    prop::sample::select(length_classes(block))
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #[test]
    fn padded_ecb_roundtrip(
        (kind, data) in cipher_kind().prop_flat_map(|k| (Just(k), data_for(k))),
    ) {
        let engine = SymmetricCipher::for_kind(kind);
        let key = native_key(kind);

        let ciphertext = engine.encrypt(&data, &key, None).unwrap();
        let plaintext = engine.decrypt(&ciphertext, &key, None).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn padded_cbc_roundtrip(
        (kind, data) in cipher_kind().prop_flat_map(|k| (Just(k), data_for(k))),
        iv_seed in any::<[u8; 16]>(),
    ) {
        let engine = SymmetricCipher::for_kind(kind);
        let key = native_key(kind);
        let iv = &iv_seed[..resolve(kind, key.len()).block_size];

        let ciphertext = engine.encrypt(&data, &key, Some(iv)).unwrap();
        let plaintext = engine.decrypt(&ciphertext, &key, Some(iv)).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn aes_any_key_length_roundtrip(
        key in prop::collection::vec(any::<u8>(), 1..48),
        data in prop::collection::vec(any::<u8>(), 1..200),
    ) {
        let engine = SymmetricCipher::for_kind(CipherKind::Aes);
        let ciphertext = engine.encrypt(&data, &key, None).unwrap();

        prop_assert_eq!(ciphertext.len(), (data.len() / 16 + 1) * 16);
        prop_assert_eq!(engine.decrypt(&ciphertext, &key, None).unwrap(), data);
    }

    #[test]
    fn unpadded_requires_block_multiple(
        kind in cipher_kind().prop_filter("block ciphers only", |k| !k.is_stream()),
        blocks in 1usize..8,
        extra in 1usize..8,
    ) {
        let engine = SymmetricCipher::new(CipherConfig::new(kind).without_padding());
        let key = native_key(kind);
        let block = resolve(kind, key.len()).block_size;

        let aligned = vec![0x3c; blocks * block];
        let ciphertext = engine.encrypt(&aligned, &key, None).unwrap();
        prop_assert_eq!(ciphertext.len(), aligned.len());
        prop_assert_eq!(engine.decrypt(&ciphertext, &key, None).unwrap(), aligned);

        let ragged = vec![0x3c; blocks * block + extra];
        match engine.encrypt(&ragged, &key, None) {
            Err(Error::CipherOperationFailed { status, .. }) => {
                prop_assert_eq!(status, CryptStatus::AlignmentError);
            }
            other => prop_assert!(false, "expected alignment failure, got {:?}", other),
        }
    }
}
