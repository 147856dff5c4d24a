//! Parallel chunk encryption/decryption on the rayon pool.
//!
//! Chunks are independent (own IV, no chaining across blocks), so they can be
//! processed concurrently. Indexed collection keeps the output in payload
//! order regardless of which thread finishes first.

use rayon::prelude::*;

use crate::aliases::DerivedKey;
use crate::decryptor::decrypt_block_at;
use crate::encryptor::{chunk_payload_len, encode_block, encrypt_chunk};
use crate::CryptEnvError;

/// Parallel [`encrypt_blocks`](crate::encrypt_blocks); identical block order.
pub fn encrypt_blocks_parallel(
    payload: &[u8],
    key: &DerivedKey,
    chunk_capacity: usize,
) -> Result<Vec<String>, CryptEnvError> {
    let chunk_len = chunk_payload_len(chunk_capacity)?;

    payload
        .par_chunks(chunk_len)
        .map(|chunk| encrypt_chunk(chunk, key).map(|framed| encode_block(&framed)))
        .collect()
}

/// Parallel [`decrypt_blocks`](crate::decrypt_blocks); chunks joined in slice order.
pub fn decrypt_blocks_parallel<S>(blocks: &[S], key: &DerivedKey) -> Result<Vec<u8>, CryptEnvError>
where
    S: AsRef<str> + Sync,
{
    let chunks: Vec<Vec<u8>> = blocks
        .par_iter()
        .enumerate()
        .map(|(index, block)| decrypt_block_at(block.as_ref(), key, index))
        .collect::<Result<_, _>>()?;

    Ok(chunks.concat())
}
