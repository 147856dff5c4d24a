//! tests/vector_tests.rs
//! Known-answer tests: FIPS-197 AES-256 through the CBC framing, and frames
//! built by hand decrypted through the public API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cryptenvvar::encryptor::{encode_block, encrypt_chunk_with_iv};
use cryptenvvar::{decrypt_block, derive_key, DerivedKey};
use hex::decode;

// FIPS-197 Appendix C.3 (AES-256)
const FIPS_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
const FIPS_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";
const FIPS_CIPHERTEXT: &str = "8ea2b7ca516745bfeafc49904b496089";

fn fips_key() -> DerivedKey {
    let mut key = [0u8; 32];
    key.copy_from_slice(&decode(FIPS_KEY).unwrap());
    DerivedKey::new(key)
}

#[test]
fn first_cbc_block_with_zero_iv_matches_fips_197() {
    let key = fips_key();
    let plaintext = decode(FIPS_PLAINTEXT).unwrap();

    let framed = encrypt_chunk_with_iv(&plaintext, &key, &[0u8; 16]).unwrap();

    // IV, the FIPS block, then one full block of padding
    assert_eq!(framed.len(), 48);
    assert_eq!(&framed[..16], &[0u8; 16]);
    assert_eq!(hex::encode(&framed[16..32]), FIPS_CIPHERTEXT);
}

#[test]
fn iv_is_xored_before_the_first_block() {
    let key = fips_key();
    let iv: [u8; 16] = decode("0f0e0d0c0b0a09080706050403020100")
        .unwrap()
        .try_into()
        .unwrap();

    // P xor IV fed to the cipher must equal the FIPS plaintext
    let fips_plain = decode(FIPS_PLAINTEXT).unwrap();
    let chunk: Vec<u8> = fips_plain.iter().zip(iv).map(|(p, v)| p ^ v).collect();

    let framed = encrypt_chunk_with_iv(&chunk, &key, &iv).unwrap();
    assert_eq!(hex::encode(&framed[16..32]), FIPS_CIPHERTEXT);

    let text = encode_block(&framed);
    assert_eq!(decrypt_block(&text, &key).unwrap(), chunk);
}

#[test]
fn fixed_iv_blocks_decrypt_through_public_api() {
    let key = derive_key("Secr3t").unwrap();
    let chunk = b"DATABASE_URL=postgres://user:pw@localhost/db";
    let framed = encrypt_chunk_with_iv(chunk, &key, &[0xA5; 16]).unwrap();

    let text = STANDARD.encode(&framed);
    assert_eq!(decrypt_block(&text, &key).unwrap(), chunk);
}

#[test]
fn fixed_iv_prefix_is_deterministic_except_padding() {
    let key = derive_key("Secr3t").unwrap();
    let chunk = [0x33u8; 40]; // two full blocks + 8 bytes, padding only touches the third
    let a = encrypt_chunk_with_iv(&chunk, &key, &[1u8; 16]).unwrap();
    let b = encrypt_chunk_with_iv(&chunk, &key, &[1u8; 16]).unwrap();
    assert_eq!(a[..48], b[..48]);
    assert_eq!(a.len(), 64);
}
