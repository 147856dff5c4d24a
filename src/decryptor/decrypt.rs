//! src/decryptor/decrypt.rs
//! Chunked decryption: decode, decrypt and join blocks in caller order.

use crate::aliases::DerivedKey;
use crate::crypto::kdf::derive_key;
use crate::decryptor::read::read_framed_block;
use crate::decryptor::stream::decrypt_framed;
use crate::error::CryptEnvError;

#[inline]
pub(crate) fn decrypt_block_at(
    text: &str,
    key: &DerivedKey,
    index: usize,
) -> Result<Vec<u8>, CryptEnvError> {
    let frame = read_framed_block(text, index)?;
    decrypt_framed(frame, key, index)
}

/// Decrypt a single base64 block back into its chunk.
#[inline]
pub fn decrypt_block(text: &str, key: &DerivedKey) -> Result<Vec<u8>, CryptEnvError> {
    decrypt_block_at(text, key, 0)
}

/// Decrypt `blocks` with an already derived key and concatenate the chunks.
///
/// Blocks carry no sequence number. They must be passed in the order
/// [`encrypt_blocks`](crate::encrypt_blocks) produced them; any other order
/// decrypts without error into scrambled output.
pub fn decrypt_blocks<I, S>(blocks: I, key: &DerivedKey) -> Result<Vec<u8>, CryptEnvError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = Vec::new();
    for (index, block) in blocks.into_iter().enumerate() {
        let chunk = decrypt_block_at(block.as_ref(), key, index)?;
        output.extend_from_slice(&chunk);
    }
    Ok(output)
}

/// Decrypt `blocks` with a key derived from `password`.
///
/// # Errors
///
/// - [`CryptEnvError::InvalidPassword`] for passwords shorter than six characters
/// - [`CryptEnvError::MalformedBlock`] for undecodable or truncated blocks
/// - [`CryptEnvError::DecryptionFailed`] for bad ciphertext length or padding
#[inline]
pub fn decrypt<I, S>(blocks: I, password: &str) -> Result<Vec<u8>, CryptEnvError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let key = derive_key(password)?;
    decrypt_blocks(blocks, &key)
}
