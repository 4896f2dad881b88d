//! PBKDF2 known-answer vectors.
//!
//! SHA-1 vectors are RFC 6070 cases 1-3, 5, and 6 (case 4 is the
//! 16,777,216-iteration vector, skipped for runtime). SHA-256 vectors are
//! from RFC 7914 §11 plus the widely published "password"/"salt" series.

use data_encoding::HEXLOWER;
use sesame_credential_core::{derive, HmacAlgorithm};

/// (password, salt, iterations, key_length, expected_hex)
type Vector = (&'static [u8], &'static [u8], u32, usize, &'static str);

const SHA1_VECTORS: &[Vector] = &[
    (
        b"password",
        b"salt",
        1,
        20,
        "0c60c80f961f0e71f3a9b524af6012062fe037a6",
    ),
    (
        b"password",
        b"salt",
        2,
        20,
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
    ),
    (
        b"password",
        b"salt",
        4096,
        20,
        "4b007901b765489abead49d926f721d065a429c1",
    ),
    // Multi-block output (25 bytes > hLen).
    (
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        25,
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
    ),
    // Embedded NUL bytes in both password and salt.
    (
        b"pass\0word",
        b"sa\0lt",
        4096,
        16,
        "56fa6aa75548099dcc37d7f03425e0c3",
    ),
];

const SHA256_VECTORS: &[Vector] = &[
    // RFC 7914 §11.
    (
        b"passwd",
        b"salt",
        1,
        64,
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
    ),
    (
        b"Password",
        b"NaCl",
        80000,
        64,
        "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
         a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
    ),
    (
        b"password",
        b"salt",
        1,
        32,
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b",
    ),
    (
        b"password",
        b"salt",
        2,
        32,
        "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43",
    ),
    (
        b"password",
        b"salt",
        4096,
        32,
        "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a",
    ),
    // Multi-block output (40 bytes > hLen).
    (
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        40,
        "348c89dbcbd32b2f32d814b8116e84cf2b17347ebc1800181c4e2a1fb8dd53e1\
         c635518c7dac47e9",
    ),
];

fn check(algorithm: HmacAlgorithm, vectors: &[Vector]) {
    for &(password, salt, iterations, key_length, expected_hex) in vectors {
        let expected = HEXLOWER
            .decode(expected_hex.as_bytes())
            .expect("vector hex should decode");
        let derived = derive(algorithm, password, salt, iterations, key_length)
            .expect("derive should succeed");
        assert_eq!(
            derived,
            expected,
            "{} vector failed: password={password:?} salt={salt:?} c={iterations} dkLen={key_length}",
            algorithm.name()
        );
    }
}

#[test]
fn pbkdf2_hmac_sha1_rfc6070() {
    check(HmacAlgorithm::Sha1, SHA1_VECTORS);
}

#[test]
fn pbkdf2_hmac_sha256_rfc7914() {
    check(HmacAlgorithm::Sha256, SHA256_VECTORS);
}
