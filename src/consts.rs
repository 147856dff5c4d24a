//! # Constants
//!
//! The single, hard-coded cipher configuration (AES-256-CBC with ISO 10126
//! padding) and the framing parameters derived from it.

/// AES-256 key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// IV length in bytes. Every framed block starts with one.
pub const IV_LENGTH: usize = 16;

/// AES block size in bytes. Ciphertext lengths are always a positive multiple of this.
pub const BLOCK_SIZE: usize = 16;

/// Bytes reserved per chunk before payload bytes are counted.
///
/// Blocks have always been cut with `IV_LENGTH + KEY_LENGTH` (48) bytes held
/// back, although the padding can grow a chunk by at most `BLOCK_SIZE`.
/// Changing it would change where existing payloads are split.
pub const CHUNK_OVERHEAD: usize = IV_LENGTH + KEY_LENGTH;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Conventional chunk capacity used by the command-line tool.
pub const DEFAULT_CHUNK_CAPACITY: usize = 1024;

/// Characters appended to short passwords to fill them up to [`KEY_LENGTH`].
pub const KEY_FILL_ALPHABET: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
