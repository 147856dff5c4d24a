//! # Buffer and Secret Types
//!
//! Fixed-size buffers shared by the encrypt and decrypt paths.
//!
//! - [`DerivedKey`] - the 32-byte AES-256 key, wiped on drop
//! - [`Iv16`] - 16-byte initialization vector (public, travels with each block)
//! - [`Block16`] - one AES block
//!
//! The key is only reachable through [`DerivedKey::expose_secret`], so every
//! place that touches raw key bytes is easy to find.

use crate::consts::{BLOCK_SIZE, IV_LENGTH, KEY_LENGTH};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub type Iv16 = [u8; IV_LENGTH];
pub type Block16 = [u8; BLOCK_SIZE]; // one AES block

/// A 32-byte AES-256 key derived from a password.
///
/// Zeroized when dropped. `Debug` never prints the key bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LENGTH]);

impl DerivedKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl From<[u8; KEY_LENGTH]> for DerivedKey {
    fn from(bytes: [u8; KEY_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}
