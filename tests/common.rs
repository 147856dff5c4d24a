//! tests/common.rs
//! Common constants and utilities shared across test files

/// Standard test password, exactly the six-character minimum
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "Secr3t";

/// Chunk capacity used by the command-line tool
#[allow(dead_code)] // Used across multiple test files
pub const TEST_CAPACITY: usize = 1024;

/// Smallest capacity that still carries payload (one byte per chunk)
#[allow(dead_code)] // Used across multiple test files
pub const MIN_USABLE_CAPACITY: usize = 49;

/// `0, 1, 2, …, 255, 0, 1, …` of the requested length
#[allow(dead_code)] // Used across multiple test files
pub fn incrementing_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}
