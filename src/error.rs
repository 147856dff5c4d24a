//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, CryptEnvError>`](CryptEnvError).

use thiserror::Error;

/// The error type for all chunked encryption and decryption operations.
///
/// Every variant is a deterministic function of the input (apart from
/// [`CryptEnvError::Random`]), so none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptEnvError {
    /// The password cannot be turned into a key.
    ///
    /// Returned when the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`](crate::consts::MIN_PASSWORD_LENGTH) characters, or when
    /// one of the characters that end up in the key is outside the ASCII range.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// The chunk capacity does not leave room for a single payload byte
    /// after the fixed per-chunk overhead is reserved.
    #[error("Chunk capacity {capacity} is too small (must exceed the {overhead}-byte per-chunk overhead)")]
    ChunkCapacityTooSmall { capacity: usize, overhead: usize },

    /// A text block could not be decoded into a framed block.
    ///
    /// Either the base64 text is invalid, or the decoded frame is too short
    /// to contain an IV. `index` is the zero-based position of the block in
    /// the sequence handed to the decryptor.
    #[error("Malformed block #{index}: {reason}")]
    MalformedBlock { index: usize, reason: String },

    /// The ciphertext of a framed block could not be decrypted.
    ///
    /// There is no integrity tag, so this is only a sanity check: a wrong key
    /// or corrupted data usually trips it, but not always.
    #[error("Decryption failed for block #{index}: {reason}")]
    DecryptionFailed { index: usize, reason: String },

    /// The operating system random source failed to produce an IV or padding.
    #[error("Random source error: {0}")]
    Random(String),
}
