//! Fixed-width 256-bit unsigned integer
//!
//! [`Uint256`] is the value type every curvedh computation runs on: field
//! elements, curve coordinates, scalars and the curve order are all 256-bit
//! integers. Limbs are stored least-significant first. Comparison, equality
//! and selection are constant time; the wrapping helpers expose their
//! carry/borrow so callers can build constant-time reductions on top.

use core::cmp::Ordering;
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Number of 64-bit limbs in a [`Uint256`]
pub const LIMBS: usize = 4;

/// 256-bit unsigned integer with little-endian limb order
#[derive(Clone, Copy, Default)]
pub struct Uint256([u64; LIMBS]);

impl Uint256 {
    /// The value 0
    pub const ZERO: Self = Uint256([0, 0, 0, 0]);

    /// The value 1
    pub const ONE: Self = Uint256([1, 0, 0, 0]);

    /// Build from little-endian limbs
    #[inline]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Uint256(limbs)
    }

    /// Borrow the little-endian limbs
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Build a small value (`0 ≤ n < 2⁶⁴`)
    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        Uint256([n, 0, 0, 0])
    }

    /// Parse a big-endian byte array
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            // limb 0 holds the least-significant 8 bytes
            let off = (LIMBS - 1 - i) * 8;
            limbs[i] = u64::from_be_bytes([
                bytes[off],
                bytes[off + 1],
                bytes[off + 2],
                bytes[off + 3],
                bytes[off + 4],
                bytes[off + 5],
                bytes[off + 6],
                bytes[off + 7],
            ]);
            i += 1;
        }
        Uint256(limbs)
    }

    /// Serialize to a big-endian byte array
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, &limb) in self.0.iter().enumerate() {
            let off = (LIMBS - 1 - i) * 8;
            out[off..off + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Constant-time zero test
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.0[..].ct_eq(&Self::ZERO.0[..])
    }

    /// Constant-time test of bit `index` (little-endian, `index < 256`)
    #[inline]
    pub fn bit(&self, index: usize) -> Choice {
        debug_assert!(index < 256);
        Choice::from(((self.0[index / 64] >> (index % 64)) & 1) as u8)
    }

    /// Test whether the value is odd
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Addition with carry-out (constant time)
    pub fn adc(a: &Self, b: &Self) -> (Self, u64) {
        let mut r = [0u64; LIMBS];
        let mut carry = 0u128;
        for ((&al, &bl), rl) in a.0.iter().zip(b.0.iter()).zip(r.iter_mut()) {
            let tmp = al as u128 + bl as u128 + carry;
            *rl = tmp as u64;
            carry = tmp >> 64;
        }
        (Uint256(r), carry as u64)
    }

    /// Subtraction with borrow-out (constant time)
    pub fn sbb(a: &Self, b: &Self) -> (Self, u64) {
        let mut r = [0u64; LIMBS];
        let mut borrow = 0u128;
        for ((&al, &bl), rl) in a.0.iter().zip(b.0.iter()).zip(r.iter_mut()) {
            let tmp = (al as u128).wrapping_sub(bl as u128 + borrow);
            *rl = tmp as u64;
            borrow = ((al as u128) < bl as u128 + borrow) as u128;
        }
        (Uint256(r), borrow as u64)
    }

    /// Wrapping addition modulo 2²⁵⁶
    #[inline]
    pub fn wrapping_add(&self, other: &Self) -> Self {
        Self::adc(self, other).0
    }

    /// Wrapping subtraction modulo 2²⁵⁶
    #[inline]
    pub fn wrapping_sub(&self, other: &Self) -> Self {
        Self::sbb(self, other).0
    }

    /// Logical shift right by one bit
    pub fn shr1(&self) -> Self {
        let mut r = [0u64; LIMBS];
        for i in 0..LIMBS {
            let high = if i + 1 < LIMBS { self.0[i + 1] << 63 } else { 0 };
            r[i] = (self.0[i] >> 1) | high;
        }
        Uint256(r)
    }

    /// Constant-time strict less-than
    #[inline]
    pub fn ct_lt(&self, other: &Self) -> Choice {
        let (_, borrow) = Self::sbb(self, other);
        Choice::from(borrow as u8)
    }

    /// Three-way comparison
    ///
    /// The result is a public value; the comparison itself is built from the
    /// constant-time primitives.
    pub fn compare(&self, other: &Self) -> Ordering {
        let lt: bool = self.ct_lt(other).into();
        let eq: bool = self.ct_eq(other).into();
        if lt {
            Ordering::Less
        } else if eq {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl ConditionallySelectable for Uint256 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0u64; LIMBS];
        for ((al, bl), rl) in a.0.iter().zip(b.0.iter()).zip(r.iter_mut()) {
            *rl = u64::conditional_select(al, bl, choice);
        }
        Uint256(r)
    }
}

impl ConstantTimeEq for Uint256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Uint256 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Uint256 {}

impl Zeroize for Uint256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// Big-endian hex, the order the curve constants are written in.
impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256(0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}
