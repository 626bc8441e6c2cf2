//! # curvedh
//!
//! Elliptic-curve Diffie-Hellman key agreement over secp256r1.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! curvedh = "0.2"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`curvedh-algorithms`]: Curve arithmetic, scalar multiplication, HMAC, HKDF
//! - [`curvedh-kem`]: The ECDH key-agreement protocol and session-key derivation
//! - [`curvedh-params`]: secp256r1 domain-parameter constants
//! - [`curvedh-common`]: Fixed-width integers, modular arithmetic, secret buffers
//!
//! ## Example
//!
//! ```
//! use curvedh::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (alice_pk, alice_sk) = EcdhSecp256r1::generate_keypair(&mut OsRng)?;
//! let (bob_pk, bob_sk) = EcdhSecp256r1::generate_keypair(&mut OsRng)?;
//!
//! let alice_secret = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk)?;
//! let bob_secret = EcdhSecp256r1::shared_secret(&bob_sk, &alice_pk)?;
//!
//! let alice_keys = alice_secret.into_session_keys(32, 32)?;
//! let bob_keys = bob_secret.into_session_keys(32, 32)?;
//! assert_eq!(alice_keys.encryption.as_slice(), bob_keys.encryption.as_slice());
//! # Ok::<(), curvedh::api::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use curvedh_api as api;
pub use curvedh_common as common;
pub use curvedh_internal as internal;
pub use curvedh_params as params;

pub use curvedh_algorithms as algorithms;
pub use curvedh_kem as kem;

// Re-export the foundational third-party crates so callers can name the
// same versions this library was built against
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for curvedh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::KeyAgreement;

    // Re-export the protocol types
    pub use crate::kem::ecdh::{
        EcdhSecp256r1, PublicKey, SecretKey, SessionKeys, SharedSecret,
    };

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

    // Re-export the curve parameter set
    pub use crate::algorithms::ec::SECP256R1;
}
