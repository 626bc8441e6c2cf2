//! Elliptic curve point operations
//!
//! Two representations coexist, each its own type: affine [`Point`] and
//! Jacobian [`ProjectivePoint`]. The identity is carried as an explicit
//! flag on both; a zero z-coordinate never doubles as an identity marker,
//! and conversion checks the flag before touching z.
//!
//! The affine formulas cost one modular inversion per operation and exist
//! for the dispatch cases the protocol needs on freshly imported points;
//! everything iterated (scalar multiplication) runs on the projective
//! formulas, which avoid inversion entirely. Identity and degenerate cases
//! inside the projective formulas are resolved by selection masks rather
//! than early returns, so the callers' call pattern is all that shows.

use crate::ec::curve::CurveParams;
use crate::error::{Error, Result};
use curvedh_common::math::{mod_add, mod_inv, mod_mul, mod_sub};
use curvedh_common::Uint256;
use curvedh_params::weierstrass::FIELD_ELEMENT_SIZE;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Affine point (x, y), or the identity
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: Uint256,
    pub(crate) y: Uint256,
}

/// Jacobian point (X : Y : Z) representing affine (X·Z⁻², Y·Z⁻³)
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: Uint256,
    pub(crate) y: Uint256,
    pub(crate) z: Uint256,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: Uint256::ZERO,
            y: Uint256::ZERO,
        }
    }

    /// Build a point from big-endian affine coordinates
    ///
    /// Coordinates must be reduced below the field modulus. Curve membership
    /// is *not* established here: [`Point::is_on_curve`] returning false is a
    /// value, and consumers of untrusted points are responsible for rejecting
    /// them before use.
    pub fn from_affine(
        curve: &CurveParams,
        x_bytes: &[u8; FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = Uint256::from_be_bytes(*x_bytes);
        let y = Uint256::from_be_bytes(*y_bytes);
        if !bool::from(x.ct_lt(&curve.p)) {
            return Err(Error::param("point x", "coordinate not below field modulus"));
        }
        if !bool::from(y.ct_lt(&curve.p)) {
            return Err(Error::param("point y", "coordinate not below field modulus"));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Extract the x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.x.to_be_bytes()
    }

    /// Extract the y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.y.to_be_bytes()
    }

    /// Check that the point satisfies y² = x³ + ax + b
    ///
    /// The identity is on every curve by convention.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        if self.is_identity() {
            return true;
        }
        let p = &curve.p;
        let y2 = mod_mul(&self.y, &self.y, p);
        let x2 = mod_mul(&self.x, &self.x, p);
        let x3 = mod_mul(&x2, &self.x, p);
        let ax = mod_mul(&curve.a, &self.x, p);
        let rhs = mod_add(&mod_add(&x3, &ax, p), &curve.b, p);
        y2 == rhs
    }

    /// Negate: (x, p − y); the identity maps to itself
    pub fn negate(&self, curve: &CurveParams) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: mod_sub(&Uint256::ZERO, &self.y, &curve.p),
        }
    }

    /// Double via the affine tangent formula (one modular inversion)
    ///
    /// The identity and 2-torsion points (y = 0) double to the identity.
    pub fn double(&self, curve: &CurveParams) -> Self {
        if self.is_identity() || bool::from(self.y.is_zero()) {
            return Self::identity();
        }
        let p = &curve.p;

        // λ = (3x² + a) / 2y
        let x2 = mod_mul(&self.x, &self.x, p);
        let three_x2 = mod_add(&mod_add(&x2, &x2, p), &x2, p);
        let numerator = mod_add(&three_x2, &curve.a, p);
        let two_y = mod_add(&self.y, &self.y, p);
        let lambda = match mod_inv(&two_y, p) {
            Some(inv) => mod_mul(&numerator, &inv, p),
            // unreachable: y ≠ 0 was checked and p is prime
            None => return Self::identity(),
        };

        self.chord_result(curve, &lambda, self)
    }

    /// Add via the dispatch rules of the group law
    ///
    /// Equal points delegate to [`Point::double`]; an identity operand passes
    /// the other through; mutual inverses (equal x, distinct y) produce the
    /// identity; everything else takes the affine chord formula with one
    /// modular inversion.
    pub fn add(&self, curve: &CurveParams, other: &Self) -> Self {
        if !self.is_identity() && !other.is_identity() && self.x == other.x && self.y == other.y {
            return self.double(curve);
        }
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        if self.x == other.x {
            // x₁ = x₂ with y₁ ≠ y₂: P + (−P)
            return Self::identity();
        }
        let p = &curve.p;

        // λ = (y₂ − y₁) / (x₂ − x₁)
        let delta_y = mod_sub(&other.y, &self.y, p);
        let delta_x = mod_sub(&other.x, &self.x, p);
        let lambda = match mod_inv(&delta_x, p) {
            Some(inv) => mod_mul(&delta_y, &inv, p),
            // unreachable: x₁ ≠ x₂ was checked and p is prime
            None => return Self::identity(),
        };

        self.chord_result(curve, &lambda, other)
    }

    /// Shared tail of the affine formulas:
    /// x₃ = λ² − x₁ − x₂, y₃ = λ(x₁ − x₃) − y₁
    fn chord_result(&self, curve: &CurveParams, lambda: &Uint256, other: &Self) -> Self {
        let p = &curve.p;
        let lambda2 = mod_mul(lambda, lambda, p);
        let x3 = mod_sub(&mod_sub(&lambda2, &self.x, p), &other.x, p);
        let y3 = mod_sub(&mod_mul(lambda, &mod_sub(&self.x, &x3, p), p), &self.y, p);
        Point {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
        }
    }

    /// Lift into Jacobian coordinates (z = 1)
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y,
            z: Uint256::conditional_select(&Uint256::ONE, &Uint256::ZERO, self.is_identity),
        }
    }
}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.is_identity = Choice::from(0);
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form; the flag is authoritative, (0 : 1 : 0) is
    /// only the stored representative
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: Uint256::ZERO,
            y: Uint256::ONE,
            z: Uint256::ZERO,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Constant-time selection between two points
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: Uint256::conditional_select(&a.x, &b.x, choice),
            y: Uint256::conditional_select(&a.y, &b.y, choice),
            z: Uint256::conditional_select(&a.z, &b.z, choice),
        }
    }

    /// Negate: (X, p − Y, Z); the identity keeps its flag
    pub fn negate(&self, curve: &CurveParams) -> Self {
        ProjectivePoint {
            is_identity: self.is_identity,
            x: self.x,
            y: mod_sub(&Uint256::ZERO, &self.y, &curve.p),
            z: self.z,
        }
    }

    /// Point doubling in Jacobian coordinates, no inversion
    ///
    /// Runs the generic-a formulas unconditionally and resolves the
    /// degenerate inputs (identity, y = 0) by selection, so the work done is
    /// independent of which case applies.
    pub fn double(&self, curve: &CurveParams) -> Self {
        let p = &curve.p;

        //   S  = 4·X·Y²
        //   M  = 3·X² + a·Z⁴
        //   X₃ = M² − 2S
        //   Y₃ = M·(S − X₃) − 8·Y⁴
        //   Z₃ = 2·Y·Z
        let yy = mod_mul(&self.y, &self.y, p);
        let yyyy = mod_mul(&yy, &yy, p);
        let xx = mod_mul(&self.x, &self.x, p);
        let zz = mod_mul(&self.z, &self.z, p);
        let zzzz = mod_mul(&zz, &zz, p);

        let s = {
            let xyy = mod_mul(&self.x, &yy, p);
            let two = mod_add(&xyy, &xyy, p);
            mod_add(&two, &two, p)
        };
        let m = {
            let three_xx = mod_add(&mod_add(&xx, &xx, p), &xx, p);
            mod_add(&three_xx, &mod_mul(&curve.a, &zzzz, p), p)
        };

        let x3 = mod_sub(&mod_sub(&mod_mul(&m, &m, p), &s, p), &s, p);
        let eight_yyyy = {
            let two = mod_add(&yyyy, &yyyy, p);
            let four = mod_add(&two, &two, p);
            mod_add(&four, &four, p)
        };
        let y3 = mod_sub(&mod_mul(&m, &mod_sub(&s, &x3, p), p), &eight_yyyy, p);
        let z3 = mod_mul(&mod_add(&self.y, &self.y, p), &self.z, p);

        let result = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };
        // 2·O = O, and y = 0 marks a 2-torsion point
        let degenerate = self.is_identity | self.y.is_zero();
        Self::conditional_select(&result, &Self::identity(), degenerate)
    }

    /// Point addition in Jacobian coordinates, no inversion
    ///
    /// General U₁/U₂/S₁/S₂/H/r formulas, with the special cases (identity
    /// operands, P + P, P + (−P)) folded in by selection masks afterwards.
    pub fn add(&self, curve: &CurveParams, other: &Self) -> Self {
        let p = &curve.p;

        let z1z1 = mod_mul(&self.z, &self.z, p);
        let z2z2 = mod_mul(&other.z, &other.z, p);
        let z1z1z1 = mod_mul(&z1z1, &self.z, p);
        let z2z2z2 = mod_mul(&z2z2, &other.z, p);

        let u1 = mod_mul(&self.x, &z2z2, p); // X₁·Z₂²
        let u2 = mod_mul(&other.x, &z1z1, p); // X₂·Z₁²
        let s1 = mod_mul(&self.y, &z2z2z2, p); // Y₁·Z₂³
        let s2 = mod_mul(&other.y, &z1z1z1, p); // Y₂·Z₁³

        let h = mod_sub(&u2, &u1, p);
        let r = mod_sub(&s2, &s1, p);
        let h_zero = h.is_zero();
        let r_zero = r.is_zero();

        let hh = mod_mul(&h, &h, p);
        let hhh = mod_mul(&hh, &h, p);
        let v = mod_mul(&u1, &hh, p);

        // X₃ = r² − H³ − 2V
        let rr = mod_mul(&r, &r, p);
        let x3 = mod_sub(&mod_sub(&mod_sub(&rr, &hhh, p), &v, p), &v, p);

        // Y₃ = r·(V − X₃) − S₁·H³
        let y3 = mod_sub(
            &mod_mul(&r, &mod_sub(&v, &x3, p), p),
            &mod_mul(&s1, &hhh, p),
            p,
        );

        // Z₃ = Z₁·Z₂·H
        let z3 = mod_mul(&mod_mul(&self.z, &other.z, p), &h, p);

        let mut result = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };

        // H = 0, r ≠ 0: the operands are mutual inverses
        result = Self::conditional_select(&result, &Self::identity(), h_zero & !r_zero);
        // H = 0, r = 0: the operands are equal; the chord degenerates to the tangent
        let doubled = self.double(curve);
        result = Self::conditional_select(&result, &doubled, h_zero & r_zero);
        // an identity operand passes the other operand through
        result = Self::conditional_select(&result, self, other.is_identity);
        result = Self::conditional_select(&result, other, self.is_identity);
        result
    }

    /// Check the homogeneous curve equation Y² = X³ + a·X·Z⁴ + b·Z⁶
    ///
    /// Works directly on the projective coordinates, so no modular inversion
    /// is ever performed on an untrusted input.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        if self.is_identity() {
            return true;
        }
        let p = &curve.p;
        let y2 = mod_mul(&self.y, &self.y, p);
        let x2 = mod_mul(&self.x, &self.x, p);
        let x3 = mod_mul(&x2, &self.x, p);
        let z2 = mod_mul(&self.z, &self.z, p);
        let z4 = mod_mul(&z2, &z2, p);
        let z6 = mod_mul(&z4, &z2, p);
        let axz4 = mod_mul(&mod_mul(&curve.a, &self.x, p), &z4, p);
        let bz6 = mod_mul(&curve.b, &z6, p);
        let rhs = mod_add(&mod_add(&x3, &axz4, p), &bz6, p);
        y2 == rhs
    }

    /// Convert back to affine coordinates (one modular inversion)
    ///
    /// The identity flag is checked first and converts to the affine
    /// identity. A zero z-coordinate on a non-identity point cannot be
    /// produced by the group law and is reported as a processing error.
    pub fn to_affine(&self, curve: &CurveParams) -> Result<Point> {
        if self.is_identity() {
            return Ok(Point::identity());
        }
        let p = &curve.p;
        let z_inv = mod_inv(&self.z, p).ok_or(Error::Processing {
            operation: "projective to affine conversion",
            details: "zero z-coordinate on a non-identity point",
        })?;
        let z_inv2 = mod_mul(&z_inv, &z_inv, p);
        let z_inv3 = mod_mul(&z_inv2, &z_inv, p);
        Ok(Point {
            is_identity: Choice::from(0),
            x: mod_mul(&self.x, &z_inv2, p),
            y: mod_mul(&self.y, &z_inv3, p),
        })
    }
}

impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
        self.is_identity = Choice::from(0);
    }
}
