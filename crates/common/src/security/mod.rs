//! Security primitives for sensitive key material
//!
//! Types here exist to make erasure structural: secret bytes live inside
//! wrappers that zero themselves on drop, so early-return error paths get
//! the same cleanup as the happy path.

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use secret::SecretVec;
