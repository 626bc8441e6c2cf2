//! Trait definition for Diffie-Hellman style key agreement
//!
//! The trait captures the two operations every key-agreement scheme offers:
//! keypair generation from a caller-supplied CSPRNG and shared-secret
//! computation against a peer's public key. Serialization of keys is left to
//! implementations and their callers.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Diffie-Hellman key agreement with domain-specific types
pub trait KeyAgreement {
    /// Public key type. Implementations must guarantee that any value of
    /// this type has passed validation (curve membership, non-identity).
    type PublicKey: Clone;

    /// Secret key type.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup; implementations must
    /// not retain copies beyond the call a key was used in.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be consumed by key derivation immediately after agreement and
    /// is erased on drop.
    type SharedSecret: Zeroize;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - A non-retryable randomness failure must propagate; a predictable
    ///   fallback must never be substituted.
    fn generate_keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Compute the shared secret between a local secret key and a peer's
    /// public key.
    ///
    /// # Security Requirements
    /// - The peer key must be validated before any secret-dependent
    ///   computation begins.
    /// - A degenerate (identity-valued) shared point must be rejected.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
