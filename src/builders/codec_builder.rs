//! src/builders/codec_builder.rs
//! Chunk codec builder: explicit capacity, no shared configuration

use crate::consts::DEFAULT_CHUNK_CAPACITY;
use crate::crypto::kdf::derive_key;
use crate::decryptor::decrypt_blocks;
use crate::encryptor::{blocks_needed, chunk_payload_len, encrypt_blocks};
use crate::error::CryptEnvError;

/// Chunked encrypt/decrypt with a configured block capacity.
///
/// Defaults to [`DEFAULT_CHUNK_CAPACITY`] (1024 bytes per framed block).
///
/// # Thread Safety
///
/// `Send + Sync` and `Copy`; every call derives its own key and keeps no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecBuilder {
    chunk_capacity: usize,
}

impl CodecBuilder {
    /// Create builder with the default chunk capacity
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
        }
    }

    /// Set the chunk capacity. Validated when encrypting.
    #[must_use]
    pub const fn with_chunk_capacity(mut self, chunk_capacity: usize) -> Self {
        self.chunk_capacity = chunk_capacity;
        self
    }

    /// Current chunk capacity
    #[must_use]
    pub const fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Payload bytes carried by each full block
    pub fn chunk_payload_len(&self) -> Result<usize, CryptEnvError> {
        chunk_payload_len(self.chunk_capacity)
    }

    /// Number of blocks a payload of `payload_len` bytes encrypts into
    pub fn blocks_needed(&self, payload_len: usize) -> Result<usize, CryptEnvError> {
        blocks_needed(payload_len, self.chunk_capacity)
    }

    /// Encrypt `payload` under `password` into ordered base64 blocks
    pub fn encrypt(&self, payload: &[u8], password: &str) -> Result<Vec<String>, CryptEnvError> {
        let key = derive_key(password)?;
        encrypt_blocks(payload, &key, self.chunk_capacity)
    }

    /// Decrypt ordered base64 blocks under `password`
    ///
    /// Block sizes are read from the blocks themselves, so the configured
    /// capacity does not need to match the one used for encryption.
    pub fn decrypt<I, S>(&self, blocks: I, password: &str) -> Result<Vec<u8>, CryptEnvError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = derive_key(password)?;
        decrypt_blocks(blocks, &key)
    }

    /// Parallel variant of [`encrypt`](Self::encrypt); same output order
    #[cfg(feature = "batch-ops")]
    pub fn encrypt_parallel(
        &self,
        payload: &[u8],
        password: &str,
    ) -> Result<Vec<String>, CryptEnvError> {
        let key = derive_key(password)?;
        crate::batch_ops::encrypt_blocks_parallel(payload, &key, self.chunk_capacity)
    }

    /// Parallel variant of [`decrypt`](Self::decrypt); chunks joined in slice order
    #[cfg(feature = "batch-ops")]
    pub fn decrypt_parallel<S>(
        &self,
        blocks: &[S],
        password: &str,
    ) -> Result<Vec<u8>, CryptEnvError>
    where
        S: AsRef<str> + Sync,
    {
        let key = derive_key(password)?;
        crate::batch_ops::decrypt_blocks_parallel(blocks, &key)
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
