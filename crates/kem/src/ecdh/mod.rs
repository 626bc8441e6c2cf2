//! ECDH over secp256r1
//!
//! The protocol layer: validated key types, keypair generation,
//! shared-secret computation, and the HKDF pipeline that turns the raw
//! shared x-coordinate into independent encryption and authentication keys.
//!
//! # Security Features
//!
//! - Peer keys are validated (curve membership, non-identity) before any
//!   secret-dependent computation starts
//! - An identity-valued shared point is rejected after the multiplication,
//!   closing the small-subgroup route past the membership check
//! - The raw shared secret is opaque: it can be compared and consumed by
//!   key derivation, never read out, and is erased on drop
//! - Every intermediate holding secret material is zeroized on all exit
//!   paths, including the error ones

use core::fmt;

use curvedh_algorithms::ec::{self, Point, Scalar, SECP256R1};
use curvedh_algorithms::Error as AlgoError;
use curvedh_api::{Error as ApiError, KeyAgreement, Result as ApiResult};
use curvedh_common::security::SecretBuffer;
use curvedh_internal::ct_eq;
use curvedh_params::weierstrass::{FIELD_ELEMENT_SIZE, SCALAR_SIZE, SHARED_SECRET_SIZE};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "alloc")]
use curvedh_algorithms::kdf::hkdf::{HkdfSha256, MAX_OUTPUT_SIZE};

#[cfg(feature = "alloc")]
use curvedh_common::security::SecretVec;

/// Domain-separation label for the derived encryption key
pub const ENCRYPTION_LABEL: &[u8] = b"encryption";

/// Domain-separation label for the derived authentication key
pub const AUTHENTICATION_LABEL: &[u8] = b"authentication";

/// ECDH key agreement over secp256r1
pub struct EcdhSecp256r1;

/// Validated ECDH public key (affine curve point)
///
/// Values of this type have passed curve membership and non-identity checks
/// at construction; the agreement re-validates peer keys regardless, so a
/// forged value cannot reach the scalar multiplication.
#[derive(Clone)]
pub struct PublicKey(Point);

/// ECDH secret key (scalar in [1, n−1]), erased on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Scalar);

/// Raw ECDH shared secret: the x-coordinate of `secret_key · peer_key`
///
/// Deliberately opaque. It supports constant-time equality and key
/// derivation, is erased on drop, and exposes no byte accessor: callers are
/// expected to derive session keys and let it go.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretBuffer<SHARED_SECRET_SIZE>);

/// Independent session keys derived from one shared secret
///
/// The two keys come from the same pseudorandom input under different
/// domain-separation labels, so compromise of one does not reveal the other.
#[cfg(feature = "alloc")]
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKeys {
    /// Key material for the encryption direction
    pub encryption: SecretVec,
    /// Key material for message authentication
    pub authentication: SecretVec,
}

impl PublicKey {
    /// Import a public key from big-endian affine coordinates
    ///
    /// Rejects coordinates outside the field, points that fail the curve
    /// equation, and the identity.
    pub fn from_affine(
        x: &[u8; FIELD_ELEMENT_SIZE],
        y: &[u8; FIELD_ELEMENT_SIZE],
    ) -> ApiResult<Self> {
        let point = Point::from_affine(&SECP256R1, x, y).map_err(|_| ApiError::InvalidPeerKey {
            context: "public key import: coordinate out of range",
        })?;
        Self::from_point(point)
    }

    /// Validate an existing affine point as a public key
    pub fn from_point(point: Point) -> ApiResult<Self> {
        if point.is_identity() {
            return Err(ApiError::InvalidPeerKey {
                context: "public key import: identity point",
            });
        }
        if !point.is_on_curve(&SECP256R1) {
            return Err(ApiError::InvalidPeerKey {
                context: "public key import: point not on curve",
            });
        }
        Ok(PublicKey(point))
    }

    /// The x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.0.x_coordinate_bytes()
    }

    /// The y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.0.y_coordinate_bytes()
    }

    /// Borrow the underlying curve point
    pub fn as_point(&self) -> &Point {
        &self.0
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("x", &self.x_coordinate_bytes())
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    /// Import a secret key from big-endian bytes
    ///
    /// The value must encode a scalar in [1, n−1]; the input should be
    /// treated as key material and erased by the caller.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let scalar = Scalar::deserialize(&SECP256R1, bytes).map_err(ApiError::from)?;
        Ok(SecretKey(scalar))
    }

    /// Export the secret key, wrapped so the copy erases itself on drop
    pub fn to_bytes(&self) -> Zeroizing<[u8; SCALAR_SIZE]> {
        Zeroizing::new(self.0.serialize())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

impl SharedSecret {
    /// Derive `length` bytes of key material under a caller-chosen label
    ///
    /// Runs HKDF-SHA256 with no salt over the big-endian serialized secret,
    /// using the label as the context string. Requests beyond the HKDF
    /// expansion limit fail with [`ApiError::OutputTooLong`].
    #[cfg(feature = "alloc")]
    pub fn derive_key(&self, label: &[u8], length: usize) -> ApiResult<SecretVec> {
        let okm =
            HkdfSha256::derive(None, self.0.as_slice(), Some(label), length).map_err(
                |err| match err {
                    AlgoError::Length { .. } => ApiError::OutputTooLong {
                        context: "session key derivation",
                        requested: length,
                        limit: MAX_OUTPUT_SIZE,
                    },
                    other => ApiError::from(other),
                },
            )?;
        // the HKDF buffer is zeroizing; this copy is the caller's
        Ok(SecretVec::from_slice(&okm))
    }

    /// Consume the secret and derive the two session keys
    ///
    /// The encryption key is derived under the `"encryption"` label and the
    /// authentication key under `"authentication"`. The raw secret is
    /// erased when this returns, on the error path as well.
    #[cfg(feature = "alloc")]
    pub fn into_session_keys(
        self,
        encryption_len: usize,
        authentication_len: usize,
    ) -> ApiResult<SessionKeys> {
        let encryption = self.derive_key(ENCRYPTION_LABEL, encryption_len)?;
        let authentication = self.derive_key(AUTHENTICATION_LABEL, authentication_len)?;
        Ok(SessionKeys {
            encryption,
            authentication,
        })
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0.as_slice(), other.0.as_slice())
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}

impl EcdhSecp256r1 {
    /// Generate an ECDH keypair from the caller's CSPRNG
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(PublicKey, SecretKey)> {
        let (secret_scalar, public_point) =
            ec::generate_keypair(&SECP256R1, rng).map_err(|err| match err {
                AlgoError::Random { context } => ApiError::RandomSourceUnavailable { context },
                _ => ApiError::KeypairGenerationFailed {
                    context: "ECDH-secp256r1 keypair generation",
                },
            })?;

        Ok((PublicKey(public_point), SecretKey(secret_scalar)))
    }

    /// Compute the shared secret between a local secret key and a peer key
    ///
    /// Validation ordering is deliberate: the peer point is checked before
    /// the secret-dependent multiplication begins, and the multiplication
    /// result is checked for the identity afterwards (a low-order peer key
    /// can force it even when the point itself passes membership).
    pub fn shared_secret(
        secret_key: &SecretKey,
        peer_public_key: &PublicKey,
    ) -> ApiResult<SharedSecret> {
        let curve = &SECP256R1;
        let peer_point = peer_public_key.as_point();

        if peer_point.is_identity() {
            return Err(ApiError::InvalidPeerKey {
                context: "peer key is the identity point",
            });
        }
        if !peer_point.is_on_curve(curve) {
            return Err(ApiError::InvalidPeerKey {
                context: "peer key fails the curve equation",
            });
        }

        let mut shared_point =
            ec::scalar_mult(curve, &secret_key.0, peer_point).map_err(ApiError::from)?;

        if shared_point.is_identity() {
            shared_point.zeroize();
            return Err(ApiError::InvalidPeerKey {
                context: "shared point is the identity",
            });
        }

        let mut x = shared_point.x_coordinate_bytes();
        shared_point.zeroize();

        let secret = SharedSecret(SecretBuffer::new(x));
        x.zeroize();
        Ok(secret)
    }
}

impl KeyAgreement for EcdhSecp256r1 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SharedSecret = SharedSecret;

    fn name() -> &'static str {
        "ECDH-secp256r1"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        EcdhSecp256r1::generate_keypair(rng)
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        EcdhSecp256r1::shared_secret(secret_key, peer_public_key)
    }
}

#[cfg(test)]
mod tests;
