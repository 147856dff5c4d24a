// src/crypto/rng.rs
//! Secure randomness for IVs and padding bytes.
//!
//! Adds `T::random()` to every fixed-size byte array (`Iv16`, `Block16`, …)
//! backed by the operating system generator. A failing OS source is reported
//! as [`CryptEnvError::Random`] instead of silently yielding zeros.

use crate::error::CryptEnvError;
use rand::{rngs::OsRng, TryRngCore};

/// Extension trait – gives `.random()` to fixed-size byte arrays
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, CryptEnvError>;
}

impl<const N: usize> SecureRandomExt for [u8; N] {
    #[inline]
    fn random() -> Result<Self, CryptEnvError> {
        let mut bytes = [0u8; N];
        SecureRng::new().fill(&mut bytes)?;
        Ok(bytes)
    }
}

/// Thin handle over the OS generator for filling caller-owned buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    #[inline]
    pub fn new() -> Self {
        Self(OsRng)
    }

    #[inline]
    pub fn fill<T>(&mut self, dest: &mut T) -> Result<(), CryptEnvError>
    where
        T: AsMut<[u8]> + ?Sized,
    {
        self.0
            .try_fill_bytes(dest.as_mut())
            .map_err(|e| CryptEnvError::Random(e.to_string()))
    }
}
