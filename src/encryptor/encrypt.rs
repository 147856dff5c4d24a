//! src/encryptor/encrypt.rs
//! Chunked encryption: split the payload, encrypt every chunk on its own,
//! base64-encode each framed block.

use crate::aliases::DerivedKey;
use crate::consts::CHUNK_OVERHEAD;
use crate::crypto::kdf::derive_key;
use crate::encryptor::stream::encrypt_chunk;
use crate::encryptor::write::encode_block;
use crate::error::CryptEnvError;

/// Payload bytes that fit in one chunk for the given capacity.
///
/// # Errors
///
/// [`CryptEnvError::ChunkCapacityTooSmall`] unless `chunk_capacity` exceeds
/// [`CHUNK_OVERHEAD`].
#[inline]
pub fn chunk_payload_len(chunk_capacity: usize) -> Result<usize, CryptEnvError> {
    if chunk_capacity <= CHUNK_OVERHEAD {
        return Err(CryptEnvError::ChunkCapacityTooSmall {
            capacity: chunk_capacity,
            overhead: CHUNK_OVERHEAD,
        });
    }
    Ok(chunk_capacity - CHUNK_OVERHEAD)
}

/// Number of blocks [`encrypt_blocks`] produces for a payload of `payload_len` bytes.
#[inline]
pub fn blocks_needed(payload_len: usize, chunk_capacity: usize) -> Result<usize, CryptEnvError> {
    Ok(payload_len.div_ceil(chunk_payload_len(chunk_capacity)?))
}

/// Encrypt `payload` into base64 blocks with an already derived key.
///
/// Blocks are returned in payload order and must be decrypted in that order.
/// An empty payload yields no blocks.
pub fn encrypt_blocks(
    payload: &[u8],
    key: &DerivedKey,
    chunk_capacity: usize,
) -> Result<Vec<String>, CryptEnvError> {
    let chunk_len = chunk_payload_len(chunk_capacity)?;

    payload
        .chunks(chunk_len)
        .map(|chunk| encrypt_chunk(chunk, key).map(|framed| encode_block(&framed)))
        .collect()
}

/// Encrypt `payload` with a key derived from `password`.
///
/// # Errors
///
/// - [`CryptEnvError::InvalidPassword`] for passwords shorter than six characters
/// - [`CryptEnvError::ChunkCapacityTooSmall`] for capacities of 48 bytes or less
#[inline]
pub fn encrypt(
    payload: &[u8],
    password: &str,
    chunk_capacity: usize,
) -> Result<Vec<String>, CryptEnvError> {
    let key = derive_key(password)?;
    encrypt_blocks(payload, &key, chunk_capacity)
}
