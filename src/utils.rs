//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// This is the chaining step of the AES-256-CBC paths in
/// [`encryptor`](crate::encryptor) and [`decryptor`](crate::decryptor).
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass [`Block16`](crate::aliases::Block16)/[`Iv16`](crate::aliases::Iv16)
/// arrays or exact 16-byte sub-slices of a block-aligned buffer.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
