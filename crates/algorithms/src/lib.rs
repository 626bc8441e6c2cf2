//! Curve arithmetic and key-derivation primitives with constant-time implementation
//!
//! This crate provides the computational core of curvedh: short-Weierstrass
//! point arithmetic in affine and Jacobian coordinates, windowed-NAF scalar
//! multiplication with mask-driven selection, private-key generation, and
//! the HMAC/HKDF pipeline used to turn raw shared secrets into session keys.
//!
//! # Security Features
//!
//! - Secret-dependent choices go through selection masks, never branches
//! - Fixed iteration counts independent of scalar values
//! - Secret intermediates held in zeroizing buffers
//! - Untrusted points are checked against the curve equation without
//!   performing a modular inversion on attacker-supplied values

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{CurveParams, Point, ProjectivePoint, Scalar, SECP256R1};

// MAC implementations
pub mod mac;
pub use mac::HmacSha256;

// Key derivation functions
#[cfg(feature = "alloc")]
pub mod kdf;
#[cfg(feature = "alloc")]
pub use kdf::HkdfSha256;
