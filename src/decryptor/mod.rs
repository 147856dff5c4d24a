// src/decryptor/mod.rs

//! Decryption facade: ordered base64 blocks → payload.
//!
//! Core API: `decrypt(blocks, password)?`.
//! Helpers: `read_framed_block` and `decrypt_framed` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_block, decrypt_blocks};
pub(crate) use decrypt::decrypt_block_at;
pub use read::{read_framed_block, FramedBlock};
pub use stream::decrypt_framed;
