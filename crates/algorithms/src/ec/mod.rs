//! Short-Weierstrass elliptic curve operations
//!
//! The engine is parameter-driven: every operation takes a [`CurveParams`]
//! reference, and only the constant table distinguishes one curve from
//! another. Scalar multiplication runs on a fixed schedule with mask-driven
//! selection throughout; see [`mul`] for the construction.

pub mod curve;
pub mod mul;
pub mod point;
pub mod scalar;

pub use curve::{CurveParams, SECP256R1};
pub use mul::scalar_mul;
pub use point::{Point, ProjectivePoint};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use curvedh_common::security::ZeroizeGuard;
use curvedh_params::weierstrass::SCALAR_SIZE;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

/// The curve's base point G
pub fn generator(curve: &CurveParams) -> Point {
    Point {
        is_identity: Choice::from(0),
        x: curve.gx,
        y: curve.gy,
    }
}

/// Compute `scalar · point` and return the affine result
///
/// The multiplication itself is constant-time with respect to the scalar;
/// the final conversion is not, but runs on the no-longer-secret result.
pub fn scalar_mult(curve: &CurveParams, scalar: &Scalar, point: &Point) -> Result<Point> {
    let mut k = scalar.to_uint();
    let projective = mul::scalar_mul(curve, &k, &point.to_projective());
    k.zeroize();
    projective.to_affine(curve)
}

/// Compute `scalar · G` for the curve's base point
pub fn scalar_mult_base(curve: &CurveParams, scalar: &Scalar) -> Result<Point> {
    scalar_mult(curve, scalar, &generator(curve))
}

/// Generate a private key by rejection sampling
///
/// Draws 32 bytes from the caller's CSPRNG and accepts them only if they
/// fall in [1, n−1]. The two retry reasons stay separate: an out-of-range
/// draw is resampled, while a failed read is terminal and propagates.
/// A predictable fallback is never substituted.
pub fn generate_private_key<R: CryptoRng + RngCore>(
    curve: &CurveParams,
    rng: &mut R,
) -> Result<Scalar> {
    let mut bytes = [0u8; SCALAR_SIZE];
    let mut guard = ZeroizeGuard::new(&mut bytes);
    loop {
        rng.try_fill_bytes(&mut guard[..]).map_err(|_| Error::Random {
            context: "private key generation",
        })?;

        match Scalar::new(curve, *guard) {
            Ok(scalar) => return Ok(scalar),
            // sampled value out of range: discard and draw again
            Err(_) => continue,
        }
    }
}

/// Generate an ECDH keypair
///
/// The public key is `private_key · G`, verified against the curve equation
/// before being returned. A failed check indicates an internal arithmetic
/// fault, not bad input, and is not retried.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &CurveParams,
    rng: &mut R,
) -> Result<(Scalar, Point)> {
    let private_key = generate_private_key(curve, rng)?;
    let public_key = scalar_mult_base(curve, &private_key)?;

    if !public_key.is_on_curve(curve) {
        return Err(Error::Processing {
            operation: "keypair generation",
            details: "derived public key failed the curve equation",
        });
    }

    Ok((private_key, public_key))
}
