//! Curve domain parameters
//!
//! The arithmetic engine is written against [`CurveParams`]; nothing below
//! this module hardcodes a particular curve. Parameters are immutable values
//! passed by reference into every operation, so they can be shared freely
//! across threads.

use curvedh_common::Uint256;
use curvedh_params::weierstrass;

/// Domain parameters of a short-Weierstrass curve y² = x³ + ax + b over 𝔽ₚ
///
/// `p` and `n` must be prime (the field arithmetic inverts via Fermat).
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    /// Prime field modulus
    pub p: Uint256,
    /// Curve coefficient a, reduced mod p
    pub a: Uint256,
    /// Curve coefficient b, reduced mod p
    pub b: Uint256,
    /// Base point x-coordinate
    pub gx: Uint256,
    /// Base point y-coordinate
    pub gy: Uint256,
    /// Order of the base point
    pub n: Uint256,
    /// Cofactor
    pub h: u32,
}

/// secp256r1 (NIST P-256) parameters
pub const SECP256R1: CurveParams = CurveParams {
    p: Uint256::from_be_bytes(weierstrass::SECP256R1.p),
    a: Uint256::from_be_bytes(weierstrass::SECP256R1.a),
    b: Uint256::from_be_bytes(weierstrass::SECP256R1.b),
    gx: Uint256::from_be_bytes(weierstrass::SECP256R1.g_x),
    gy: Uint256::from_be_bytes(weierstrass::SECP256R1.g_y),
    n: Uint256::from_be_bytes(weierstrass::SECP256R1.n),
    h: weierstrass::SECP256R1.h,
};
