//! Public API traits and types for the curvedh library
//!
//! This crate provides the public API surface for the curvedh workspace:
//! the error taxonomy shared by every operation and the trait seam between
//! protocol implementations and their consumers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::KeyAgreement;
