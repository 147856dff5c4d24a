//! src/crypto/kdf.rs
//! Password → AES-256 key stretching.
//!
//! **This is not a proper KDF.** There is no salt, no iteration count and no
//! hashing: a short password is filled up to 32 characters from a fixed
//! alphabet and the characters are used as the key bytes. Identical passwords
//! always produce identical keys, which is what lets blocks encrypted years
//! ago still decrypt today. The weakness is part of the block format and must
//! not be "upgraded" here, or every existing block becomes unreadable.

use crate::aliases::DerivedKey;
use crate::consts::{KEY_FILL_ALPHABET, KEY_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::CryptEnvError;
use zeroize::Zeroizing;

/// Fill character appended when the key text is `position` characters long.
#[inline]
const fn fill_char(position: usize) -> u8 {
    KEY_FILL_ALPHABET[(KEY_FILL_ALPHABET.len() * position) % KEY_LENGTH]
}

/// Stretch `password` to exactly 32 key bytes.
///
/// Passwords of 32 characters or more are cut to their first 32 characters.
/// Shorter ones are extended: the character appended at position `i` is
/// `KEY_FILL_ALPHABET[(52 * i) % 32]`, for every `i` from the password length
/// up to 31.
///
/// # Errors
///
/// [`CryptEnvError::InvalidPassword`] if the password has fewer than
/// [`MIN_PASSWORD_LENGTH`] characters, or if any of its first 32 characters
/// is not ASCII.
pub fn fill_password(password: &str) -> Result<Zeroizing<[u8; KEY_LENGTH]>, CryptEnvError> {
    let char_count = password.chars().count();
    if char_count < MIN_PASSWORD_LENGTH {
        return Err(CryptEnvError::InvalidPassword(format!(
            "at least {MIN_PASSWORD_LENGTH} characters are required, got {char_count}"
        )));
    }

    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    let mut taken = 0;
    for ch in password.chars().take(KEY_LENGTH) {
        if !ch.is_ascii() {
            return Err(CryptEnvError::InvalidPassword(format!(
                "character {} is not ASCII; key bytes must be single-byte characters",
                taken + 1
            )));
        }
        key[taken] = ch as u8;
        taken += 1;
    }

    for (position, slot) in key.iter_mut().enumerate().skip(taken) {
        *slot = fill_char(position);
    }

    Ok(key)
}

/// Derive the 32-byte AES-256 key for `password`.
///
/// Pure and deterministic: the same password always yields the same key.
/// See the module documentation for why this is not a real KDF.
#[inline]
pub fn derive_key(password: &str) -> Result<DerivedKey, CryptEnvError> {
    let filled = fill_password(password)?;
    Ok(DerivedKey::new(*filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_cycle_repeats_every_eight_positions() {
        let cycle: Vec<u8> = (0..8).map(fill_char).collect();
        assert_eq!(cycle, b"AUIcQEYM");
        for i in 0..KEY_LENGTH {
            assert_eq!(fill_char(i), fill_char(i % 8));
        }
    }

    #[test]
    fn six_char_password_is_filled() {
        let key = fill_password("Secr3t").unwrap();
        assert_eq!(&key[..], b"Secr3tYMAUIcQEYMAUIcQEYMAUIcQEYM");
    }

    #[test]
    fn long_password_is_truncated() {
        let pw = "0123456789abcdefghijklmnopqrstuvWXYZ";
        let key = fill_password(pw).unwrap();
        assert_eq!(&key[..], &pw.as_bytes()[..32]);
    }

    #[test]
    fn non_ascii_past_key_length_is_ignored() {
        let pw = format!("{}é", "a".repeat(32));
        let key = fill_password(&pw).unwrap();
        assert_eq!(&key[..], "a".repeat(32).as_bytes());
    }

    #[test]
    fn non_ascii_inside_key_is_rejected() {
        let err = fill_password("pässwort").unwrap_err();
        assert!(matches!(err, CryptEnvError::InvalidPassword(_)));
    }

    #[test]
    fn minimum_length_counts_characters() {
        assert!(matches!(
            fill_password("abcde"),
            Err(CryptEnvError::InvalidPassword(_))
        ));
        assert!(fill_password("abcdef").is_ok());
    }
}
