//! src/encryptor/write.rs
//! Text encoding of framed blocks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode a framed block as standard base64, padded, without line breaks.
#[inline]
pub fn encode_block(framed: &[u8]) -> String {
    STANDARD.encode(framed)
}
