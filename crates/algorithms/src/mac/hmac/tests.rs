use super::*;
use hex;

/// Test vectors for HMAC-MD5 from RFC 2202
#[test]
fn test_hmac_md5_rfc2202() {
    // Test case 1
    let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let expected = hex::decode("9294727a3638bb1c13f48ef8158bfc9d").unwrap();
    assert_eq!(HmacContext::mac(DigestKind::Md5, &key, b"Hi There").unwrap(), expected);

    // Test case 2 - Key shorter than block size
    let expected = hex::decode("750c783e6ab0b503eaa86e310a5db738").unwrap();
    let mac = HmacContext::mac(DigestKind::Md5, b"Jefe", b"what do ya want for nothing?").unwrap();
    assert_eq!(mac, expected);

    // Test case 6 - Key longer than block size
    let key = vec![0xaa; 80];
    let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
    let expected = hex::decode("6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd").unwrap();
    assert_eq!(HmacContext::mac(DigestKind::Md5, &key, data).unwrap(), expected);
}

/// Test vectors for HMAC-SHA-1 from RFC 2202
#[test]
fn test_hmac_sha1_rfc2202() {
    // Test case 1
    let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let data = b"Hi There";
    let expected = hex::decode("b617318655057264e28bc0b6fb378c8ef146be00").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha1, &key, data).unwrap();
    assert_eq!(mac, expected);

    // Test case 2 - Key shorter than block size
    let key = b"Jefe";
    let data = b"what do ya want for nothing?";
    let expected = hex::decode("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha1, key, data).unwrap();
    assert_eq!(mac, expected);

    // Test case 3 - Key and data that will cause padding
    let key = hex::decode("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
    let data = hex::decode("dddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddd").unwrap();
    let expected = hex::decode("125d7342b9ac11cd91a39af48aa17b4f63f175d3").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha1, &key, &data).unwrap();
    assert_eq!(mac, expected);

    // Test case 4 - 25 byte key
    let key = hex::decode("0102030405060708090a0b0c0d0e0f10111213141516171819").unwrap();
    let data = hex::decode("cdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd").unwrap();
    let expected = hex::decode("4c9007f4026250c6bc8414f9bf50c86c2d7235da").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha1, &key, &data).unwrap();
    assert_eq!(mac, expected);
}

/// Test vectors for HMAC-SHA-256 from RFC 4231
#[test]
fn test_hmac_sha256_rfc4231() {
    // Test Case 1 - Key and data shorter than block size
    let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let data = hex::decode("4869205468657265").unwrap(); // "Hi There"
    let expected = hex::decode("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha256, &key, &data).unwrap();
    assert_eq!(mac, expected);

    // Test Case 2 - Key shorter than block size
    let key = hex::decode("4a656665").unwrap(); // "Jefe"
    let data = hex::decode("7768617420646f2079612077616e7420666f72206e6f7468696e673f").unwrap(); // "what do ya want for nothing?"
    let expected = hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha256, &key, &data).unwrap();
    assert_eq!(mac, expected);

    // Test Case 3 - Key of 20 bytes
    let key = hex::decode("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
    let data = hex::decode("dddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddd").unwrap();
    let expected = hex::decode("773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe").unwrap();

    let mac = HmacContext::mac(DigestKind::Sha256, &key, &data).unwrap();
    assert_eq!(mac, expected);
}

/// RFC 4231 test case 2 for the remaining SHA-2 sizes
#[test]
fn test_hmac_sha2_family_jefe() {
    let data = b"what do ya want for nothing?";
    let cases = [
        (DigestKind::Sha224, "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44"),
        (DigestKind::Sha384, "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649"),
        (DigestKind::Sha512, "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"),
    ];

    for (kind, expected) in cases {
        let mac = HmacContext::mac(kind, b"Jefe", data).unwrap();
        assert_eq!(hex::encode(&mac), expected, "{}", kind);
        assert_eq!(mac.len(), kind.output_size());
    }
}

#[test]
fn test_hmac_streaming_matches_one_shot() {
    let key = b"streaming key";
    let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

    for kind in DigestKind::ALL {
        let mut ctx = HmacContext::new(kind, key).unwrap();
        for chunk in data.chunks(333) {
            ctx.update(chunk);
        }
        assert_eq!(ctx.finish(), HmacContext::mac(kind, key, &data).unwrap());
    }
}

#[test]
fn test_hmac_empty_key_is_accepted() {
    let mac = HmacContext::mac(DigestKind::Md5, b"", b"").unwrap();
    assert_eq!(hex::encode(mac), "74e6f7298a9c2d168935f58c001bad88");
}
