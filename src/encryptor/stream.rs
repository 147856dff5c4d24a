//! src/encryptor/stream.rs
//! AES-256-CBC encryption of a single chunk with ISO 10126 padding.
//!
//! The output is a framed block: `IV (16 bytes) || ciphertext`. The chunk is
//! padded with 1–16 bytes so its length becomes a multiple of 16; all padding
//! bytes are random except the last, which holds the pad count.

use crate::aliases::{Block16, DerivedKey, Iv16};
use crate::consts::{BLOCK_SIZE, IV_LENGTH};
use crate::crypto::rng::{SecureRandomExt, SecureRng};
use crate::error::CryptEnvError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};

/// Encrypt one chunk under a fresh random IV.
#[inline]
pub fn encrypt_chunk(chunk: &[u8], key: &DerivedKey) -> Result<Vec<u8>, CryptEnvError> {
    let iv = Iv16::random()?;
    encrypt_chunk_with_iv(chunk, key, &iv)
}

/// Encrypt one chunk under the given IV and return `iv || ciphertext`.
///
/// Reusing an IV under the same key leaks plaintext equality; outside of
/// known-answer tests use [`encrypt_chunk`].
pub fn encrypt_chunk_with_iv(
    chunk: &[u8],
    key: &DerivedKey,
    iv: &Iv16,
) -> Result<Vec<u8>, CryptEnvError> {
    let mut ciphertext = pad_chunk(chunk)?;

    let cipher = Aes256Enc::new(key.expose_secret().into());

    // previous ciphertext block, starts as the IV
    let mut prev_block: Block16 = *iv;
    let mut xor_output: Block16 = [0u8; BLOCK_SIZE];

    for block in ciphertext.chunks_exact_mut(BLOCK_SIZE) {
        xor_blocks(block, &prev_block, &mut xor_output);

        let mut aes_block = AesBlock::from(xor_output);
        cipher.encrypt_block(&mut aes_block);

        block.copy_from_slice(aes_block.as_slice());
        prev_block.copy_from_slice(block);
    }

    let mut framed = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    framed.extend_from_slice(iv);
    framed.extend_from_slice(&ciphertext);
    Ok(framed)
}

/// Copy `chunk` into a new buffer and append ISO 10126 padding.
fn pad_chunk(chunk: &[u8]) -> Result<Vec<u8>, CryptEnvError> {
    let pad_len = BLOCK_SIZE - chunk.len() % BLOCK_SIZE;

    let mut padding: Block16 = [0u8; BLOCK_SIZE];
    SecureRng::new().fill(&mut padding[..pad_len - 1])?;
    padding[pad_len - 1] = pad_len as u8;

    let mut padded = Vec::with_capacity(chunk.len() + pad_len);
    padded.extend_from_slice(chunk);
    padded.extend_from_slice(&padding[..pad_len]);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_always_adds_between_one_and_sixteen_bytes() {
        for len in 0..=48 {
            let padded = pad_chunk(&vec![0xEE; len]).unwrap();
            let pad_len = padded.len() - len;
            assert!((1..=16).contains(&pad_len), "len {len}: pad {pad_len}");
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert_eq!(*padded.last().unwrap() as usize, pad_len);
        }
    }

    #[test]
    fn aligned_chunk_gets_a_full_padding_block() {
        let padded = pad_chunk(&[0u8; 32]).unwrap();
        assert_eq!(padded.len(), 48);
        assert_eq!(padded[47], 16);
    }

    #[test]
    fn frame_starts_with_iv() {
        let key = DerivedKey::new([7u8; 32]);
        let iv: Iv16 = [0x11; 16];
        let framed = encrypt_chunk_with_iv(b"hello", &key, &iv).unwrap();
        assert_eq!(&framed[..IV_LENGTH], &iv);
        assert_eq!(framed.len(), IV_LENGTH + BLOCK_SIZE);
    }
}
