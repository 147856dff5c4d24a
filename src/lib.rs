// src/lib.rs

//! Chunked AES-256-CBC codec for text channels.
//!
//! A payload is cut into chunks, each chunk is encrypted under a fresh random
//! IV and framed as `IV || ciphertext`, and each frame is base64-encoded.
//! The resulting blocks are small enough to store in environment variables
//! and are decrypted by handing them back in the same order.
//!
//! ```no_run
//! let blocks = cryptenvvar::encrypt(b"secret file contents", "Secr3t", 1024)?;
//! let payload = cryptenvvar::decrypt(&blocks, "Secr3t")?;
//! assert_eq!(payload, b"secret file contents");
//! # Ok::<(), cryptenvvar::CryptEnvError>(())
//! ```
//!
//! There is no integrity protection: blocks provide confidentiality only.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_block, decrypt_blocks};
pub use encryptor::{blocks_needed, encrypt, encrypt_blocks};
pub use error::CryptEnvError;

pub use aliases::DerivedKey;
pub use builders::CodecBuilder;
pub use crypto::kdf::derive_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_blocks_parallel, encrypt_blocks_parallel};
