//! src/decryptor/stream.rs
//! AES-256-CBC decryption of a single framed block and removal of the
//! ISO 10126 padding.

use crate::aliases::{Block16, DerivedKey};
use crate::consts::BLOCK_SIZE;
use crate::decryptor::read::FramedBlock;
use crate::error::CryptEnvError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use zeroize::Zeroize;

/// Decrypt `frame` and strip its padding, returning the original chunk.
///
/// Only the trailing pad-count byte is checked (it must be 1–16). Without an
/// integrity tag a wrong key passes this check about one time in sixteen and
/// returns garbage.
///
/// # Errors
///
/// [`CryptEnvError::DecryptionFailed`] if the ciphertext is empty, not a
/// multiple of 16 bytes, or decrypts to an out-of-range pad count.
pub fn decrypt_framed(
    frame: FramedBlock,
    key: &DerivedKey,
    index: usize,
) -> Result<Vec<u8>, CryptEnvError> {
    let FramedBlock { iv, mut ciphertext } = frame;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptEnvError::DecryptionFailed {
            index,
            reason: format!(
                "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
                ciphertext.len()
            ),
        });
    }

    let cipher = Aes256Dec::new(key.expose_secret().into());

    // decrypted in place; `ciphertext` holds plaintext after the loop
    let mut prev_block: Block16 = iv;
    let mut current: Block16 = [0u8; BLOCK_SIZE];

    for block in ciphertext.chunks_exact_mut(BLOCK_SIZE) {
        current.copy_from_slice(block);

        let mut aes_block = AesBlock::from(current);
        cipher.decrypt_block(&mut aes_block);

        xor_blocks(aes_block.as_slice(), &prev_block, block);
        prev_block = current;
    }

    let pad_len = ciphertext[ciphertext.len() - 1] as usize;
    if !(1..=BLOCK_SIZE).contains(&pad_len) {
        ciphertext.zeroize();
        return Err(CryptEnvError::DecryptionFailed {
            index,
            reason: format!(
                "pad count {pad_len} outside 1..={BLOCK_SIZE} (wrong password or corrupted block)"
            ),
        });
    }

    ciphertext.truncate(ciphertext.len() - pad_len);
    Ok(ciphertext)
}
