//! # Builders
//!
//! This module provides builder patterns for configuring codec operations.
//!
//! ## Modules
//!
//! - [`codec_builder`] - Builder carrying the chunk capacity for encrypt/decrypt
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults and optional
//! customization, so settings travel with the call instead of living in
//! global state.

pub mod codec_builder;

pub use codec_builder::CodecBuilder;
