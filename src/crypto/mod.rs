// src/crypto/mod.rs

//! Low-level crypto primitives: password-to-key stretching and the secure
//! random source used for IVs and padding.
//!
//! See crate root for re-exports (e.g. `derive_key`).

pub mod kdf;
pub mod rng;
