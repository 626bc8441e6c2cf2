//! Common implementations and shared functionality for the curvedh library
//!
//! This crate provides the two foundations every other curvedh component
//! builds on: the fixed-width 256-bit integer with its modular-arithmetic
//! interface, and the secret-memory types that guarantee erasure of key
//! material on every exit path.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod math;
pub mod security;
pub mod uint;

// Re-export core security types
pub use security::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::SecretVec;

pub use uint::Uint256;
