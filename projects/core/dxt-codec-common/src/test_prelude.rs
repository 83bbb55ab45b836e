//! Common test imports and utilities for the common crate tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core types from this crate
pub use crate::color_565::Color565;
pub use crate::color_8888::Color8888;
pub use crate::decoded_4x4_block::Decoded4x4Block;
pub use crate::error::CodecError;
