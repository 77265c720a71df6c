use std::io::Write;

use cryptkit::codec;
use cryptkit::prelude::*;
use cryptkit_symmetric::resolve;
use cryptkit_tests::FailingProvider;
use cryptkit_utils::encoding::from_base64;

#[test]
fn test_digest_lengths() {
    let engine: HashEngine = HashEngine::default();
    for kind in DigestKind::ALL {
        let digest = engine.digest(&HashRequest::from_data(b"length", kind, None)).unwrap();
        assert_eq!(digest.len(), kind.output_size());
    }
    let lengths: Vec<usize> = DigestKind::ALL.iter().map(|k| k.output_size()).collect();
    assert_eq!(lengths, vec![16, 20, 28, 32, 48, 64]);
}

#[test]
fn test_md5_scenario() {
    assert_eq!(codec::md5_hex("hello, world!"), "3adbbad1791fbae3ec908894c4963870");
    assert_eq!(codec::md5_hex("Hello, world!"), "6cd3556deb0da54bca060b4c39479839");
}

#[test]
fn test_aes_key_normalization() {
    let normalized: Vec<usize> = [10, 16, 20, 24, 30, 32]
        .iter()
        .map(|&len| resolve(CipherKind::Aes, len).key_size)
        .collect();
    assert_eq!(normalized, vec![16, 16, 24, 24, 32, 32]);

    // A 20-byte key behaves as itself followed by four zero bytes under AES-192
    let engine = SymmetricCipher::for_kind(CipherKind::Aes);
    let key: Vec<u8> = (1u8..=20).collect();
    let mut extended = key.clone();
    extended.resize(24, 0);
    assert_eq!(
        engine.encrypt(b"normalize", &key, None).unwrap(),
        engine.encrypt(b"normalize", &extended, None).unwrap()
    );
}

#[test]
fn test_empty_inputs_are_invalid() {
    for kind in CipherKind::ALL {
        let engine = SymmetricCipher::for_kind(kind);
        for (data, key) in [(&b""[..], &b"key material"[..]), (&b"data"[..], &b""[..])] {
            let enc = engine.encrypt(data, key, None).unwrap_err();
            let dec = engine.decrypt(data, key, None).unwrap_err();
            assert!(matches!(enc, Error::InvalidInput { .. }), "{}", kind);
            assert!(matches!(dec, Error::InvalidInput { .. }), "{}", kind);
        }
    }
}

#[test]
fn test_provider_failure_surfaces_status() {
    let provider = FailingProvider {
        status: CryptStatus::UnspecifiedError,
    };
    let engine = SymmetricCipher::with_provider(CipherConfig::default(), provider);
    let err = engine.encrypt(b"data", b"key", None).unwrap_err();
    assert_eq!(err.status(), Some(CryptStatus::UnspecifiedError));

    let hasher = HashEngine::with_provider(HashConfig::default(), provider).unwrap();
    // Unkeyed hashing does not touch the failing HMAC path
    assert_eq!(
        hasher.hex_digest(&HashRequest::from_data(b"", DigestKind::Md5, None)).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    let err = hasher
        .digest(&HashRequest::from_data(b"", DigestKind::Md5, Some(&b"k"[..])))
        .unwrap_err();
    assert_eq!(err.status(), Some(CryptStatus::UnspecifiedError));
}

#[test]
fn test_random_aes256_round_trip() {
    let key = generate_random_key(KeyKind::Aes256).unwrap();
    assert_eq!(from_base64(&key).unwrap().len(), 32);

    let engine = SymmetricCipher::new(CipherConfig::new(CipherKind::Aes));
    let sealed = engine.encrypt_string("hello, world!", &key, None).unwrap();
    let opened = engine.decrypt_string(&sealed, &key, None).unwrap();
    assert_eq!(String::from_utf8(opened).unwrap(), "hello, world!");
}

#[test]
fn test_file_and_buffer_hmac_agree() {
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 253) as u8).collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let engine = HashEngine::new(HashConfig::new(DigestKind::Sha256).with_chunk_size(1000)).unwrap();
    let key = b"integration";
    let from_file = engine
        .hex_digest(&engine.request().with_path(file.path()).with_hmac_key(key))
        .unwrap();
    let from_data = engine
        .hex_digest(&engine.request().with_data(&data).with_hmac_key(key))
        .unwrap();
    assert_eq!(from_file, from_data);
    assert_eq!(from_file.len(), 64);
}

#[test]
fn test_every_cipher_interoperates_through_the_facade() {
    for kind in CipherKind::ALL {
        let engine = SymmetricCipher::for_kind(kind);
        let key = cryptkit_tests::native_key(kind);
        let iv = vec![9u8; resolve(kind, key.len()).block_size];

        let ct = engine.encrypt(b"facade", &key, Some(&iv)).unwrap();
        assert_ne!(ct, b"facade");
        assert_eq!(engine.decrypt(&ct, &key, Some(&iv)).unwrap(), b"facade", "{}", kind);
    }
}
