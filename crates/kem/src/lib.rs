//! ECDH key agreement
//!
//! This crate implements the Diffie-Hellman protocol layer over the curvedh
//! arithmetic core: keypair generation, shared-secret computation with full
//! peer-key validation, and derivation of independent session keys from the
//! raw shared x-coordinate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod ecdh;

// Re-exports
pub use ecdh::{EcdhSecp256r1, PublicKey, SecretKey, SharedSecret};

#[cfg(feature = "alloc")]
pub use ecdh::SessionKeys;
