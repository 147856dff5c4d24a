// src/encryptor/mod.rs

//! Encryption facade: payload → ordered base64 blocks.
//!
//! Core API: `encrypt(payload, password, chunk_capacity)?`.
//! Lower level: `encrypt_blocks` with an already derived key,
//! `encrypt_chunk`/`encrypt_chunk_with_iv` for a single framed block.

pub(crate) mod encrypt;
pub(crate) mod stream;
pub(crate) mod write;

pub use encrypt::{blocks_needed, chunk_payload_len, encrypt, encrypt_blocks};
pub use stream::{encrypt_chunk, encrypt_chunk_with_iv};
pub use write::encode_block;
