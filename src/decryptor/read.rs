//! src/decryptor/read.rs
//! Parsing of text blocks into `IV || ciphertext` frames.

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::error::CryptEnvError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// A decoded block: the IV and the ciphertext that follows it.
///
/// The ciphertext is not validated here; see
/// [`decrypt_framed`](crate::decryptor::decrypt_framed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedBlock {
    pub iv: Iv16,
    pub ciphertext: Vec<u8>,
}

/// Decode one base64 text block and split off its IV.
///
/// ASCII whitespace anywhere in `text` is skipped, so blocks that were
/// wrapped or picked up a trailing newline on the way still decode.
/// `index` is only used to label errors.
///
/// # Errors
///
/// [`CryptEnvError::MalformedBlock`] if the text is not valid base64 or the
/// decoded frame is shorter than an IV.
pub fn read_framed_block(text: &str, index: usize) -> Result<FramedBlock, CryptEnvError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let mut raw = STANDARD
        .decode(&compact)
        .map_err(|e| CryptEnvError::MalformedBlock {
            index,
            reason: format!("invalid base64: {e}"),
        })?;

    if raw.len() < IV_LENGTH {
        return Err(CryptEnvError::MalformedBlock {
            index,
            reason: format!(
                "frame is {} bytes, too short for the {IV_LENGTH}-byte IV",
                raw.len()
            ),
        });
    }

    let ciphertext = raw.split_off(IV_LENGTH);
    let mut iv: Iv16 = [0u8; IV_LENGTH];
    iv.copy_from_slice(&raw);

    Ok(FramedBlock { iv, ciphertext })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_iv_from_ciphertext() {
        let raw: Vec<u8> = (0u8..48).collect();
        let text = STANDARD.encode(&raw);
        let frame = read_framed_block(&text, 0).unwrap();
        assert_eq!(&frame.iv[..], &raw[..16]);
        assert_eq!(frame.ciphertext, &raw[16..]);
    }

    #[test]
    fn wrapped_text_decodes() {
        let raw = [0x5Au8; 32];
        let text = STANDARD.encode(raw);
        let wrapped = format!("{}\r\n{}\n", &text[..20], &text[20..]);
        let frame = read_framed_block(&wrapped, 0).unwrap();
        assert_eq!(frame.iv, [0x5A; 16]);
    }

    #[test]
    fn short_frame_is_malformed() {
        let text = STANDARD.encode([1u8; 15]);
        let err = read_framed_block(&text, 4).unwrap_err();
        assert!(matches!(err, CryptEnvError::MalformedBlock { index: 4, .. }));
    }

    #[test]
    fn bad_alphabet_is_malformed() {
        let err = read_framed_block("not*base64!", 2).unwrap_err();
        assert!(matches!(err, CryptEnvError::MalformedBlock { index: 2, .. }));
    }
}
