//! Key derivation functions

pub mod hkdf;

pub use hkdf::HkdfSha256;
