//! Constant-time scalar multiplication
//!
//! Windowed non-adjacent form with a fixed schedule: the recoding always
//! produces the same number of signed digits, the main loop always performs
//! one doubling and one addition per digit, and the precomputed-table lookup
//! touches every slot on every access. The bits of the scalar steer nothing
//! but selection masks.

use crate::ec::curve::CurveParams;
use crate::ec::point::ProjectivePoint;
use curvedh_common::Uint256;
use curvedh_internal::ct_select;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// wNAF window width in bits
pub const WINDOW_WIDTH: usize = 5;

const WINDOW_MASK: u64 = (1 << WINDOW_WIDTH) - 1;

/// Precomputed odd multiples {1, 3, 5, …, 2^(W−1) − 1}·P
const TABLE_SIZE: usize = 1 << (WINDOW_WIDTH - 2);

/// Fixed digit count: one per scalar bit plus the carry position that
/// signed-digit recoding of a full-width value can produce
const DIGITS: usize = 257;

// The working copy keeps one limb of headroom: adding back a negative
// digit can momentarily push the value past 2^256.
const RECODE_LIMBS: usize = 5;

/// Compute `k · P` with timing independent of the bits of `k`
///
/// `k` is taken as a raw 256-bit integer: zero yields the identity and
/// values at or above the curve order are multiplied as-is, without
/// reduction. The result stays in Jacobian coordinates; callers wanting
/// affine output convert explicitly once the (non-secret) result is final.
pub fn scalar_mul(curve: &CurveParams, k: &Uint256, point: &ProjectivePoint) -> ProjectivePoint {
    let table = odd_multiples(curve, point);
    let mut digits = recode_wnaf(k);

    let mut acc = ProjectivePoint::identity();
    for i in (0..DIGITS).rev() {
        acc = acc.double(curve);

        let digit = digits[i];
        let negative = Choice::from((digit as u8) >> 7);
        let selected = lookup(&table, digit.unsigned_abs());
        let negated = selected.negate(curve);
        let addend = ProjectivePoint::conditional_select(&selected, &negated, negative);

        acc = acc.add(curve, &addend);
    }

    digits.zeroize();
    acc
}

/// Build the table of odd multiples {1·P, 3·P, …, 15·P} in Jacobian form
fn odd_multiples(curve: &CurveParams, point: &ProjectivePoint) -> [ProjectivePoint; TABLE_SIZE] {
    let twice = point.double(curve);
    let mut table: [ProjectivePoint; TABLE_SIZE] =
        core::array::from_fn(|_| ProjectivePoint::identity());
    table[0] = point.clone();
    for i in 1..TABLE_SIZE {
        table[i] = table[i - 1].add(curve, &twice);
    }
    table
}

/// Select the table entry for `magnitude` (an odd value, or 0)
///
/// Scans the whole table with equality masks; a magnitude of 0 matches no
/// slot and leaves the identity as the dummy contribution for zero digits.
fn lookup(table: &[ProjectivePoint; TABLE_SIZE], magnitude: u8) -> ProjectivePoint {
    let mut selected = ProjectivePoint::identity();
    for (i, entry) in table.iter().enumerate() {
        let entry_magnitude = (2 * i + 1) as u8;
        selected =
            ProjectivePoint::conditional_select(&selected, entry, magnitude.ct_eq(&entry_magnitude));
    }
    selected
}

/// Branchless wNAF recoding into a fixed number of signed digits
///
/// Per iteration: read the low window, derive an odd signed digit in
/// (−2^(W−1), 2^(W−1)) with masks (zero when the value is even), fold the
/// digit back into the working value, shift right once. Exactly [`DIGITS`]
/// iterations run for every input.
fn recode_wnaf(k: &Uint256) -> [i8; DIGITS] {
    let mut v = [0u64; RECODE_LIMBS];
    v[..4].copy_from_slice(k.as_limbs());

    let mut digits = [0i8; DIGITS];
    for digit_out in digits.iter_mut() {
        let window = (v[0] & WINDOW_MASK) as u8;
        let odd = Choice::from(window & 1);
        let negative = odd & Choice::from(window >> (WINDOW_WIDTH - 1));

        // |digit|: the window itself, or its complement to 2^W when the
        // signed digit is negative; forced to zero for even values
        let magnitude = ct_select(
            window,
            (1u8 << WINDOW_WIDTH).wrapping_sub(window),
            negative,
        );
        let magnitude = ct_select(0, magnitude, odd);

        let positive_digit = magnitude as i8;
        *digit_out = ct_select(positive_digit, -positive_digit, negative);

        // v ← (v − digit) >> 1: subtract the magnitude for a positive digit,
        // add it back for a negative one
        let subtracted = sub_small(&v, magnitude as u64);
        let added = add_small(&v, magnitude as u64);
        v = select_limbs(&subtracted, &added, negative);
        v = shr1_limbs(&v);
    }

    v.zeroize();
    digits
}

#[inline(always)]
fn add_small(v: &[u64; RECODE_LIMBS], small: u64) -> [u64; RECODE_LIMBS] {
    let mut r = [0u64; RECODE_LIMBS];
    let mut carry = small as u128;
    for (rl, &vl) in r.iter_mut().zip(v.iter()) {
        let tmp = vl as u128 + carry;
        *rl = tmp as u64;
        carry = tmp >> 64;
    }
    r
}

#[inline(always)]
fn sub_small(v: &[u64; RECODE_LIMBS], small: u64) -> [u64; RECODE_LIMBS] {
    let mut r = [0u64; RECODE_LIMBS];
    let mut borrow = small as u128;
    for (rl, &vl) in r.iter_mut().zip(v.iter()) {
        let tmp = (vl as u128).wrapping_sub(borrow);
        *rl = tmp as u64;
        borrow = ((vl as u128) < borrow) as u128;
    }
    r
}

#[inline(always)]
fn select_limbs(
    a: &[u64; RECODE_LIMBS],
    b: &[u64; RECODE_LIMBS],
    choice: Choice,
) -> [u64; RECODE_LIMBS] {
    let mut r = [0u64; RECODE_LIMBS];
    for ((rl, al), bl) in r.iter_mut().zip(a.iter()).zip(b.iter()) {
        *rl = u64::conditional_select(al, bl, choice);
    }
    r
}

#[inline(always)]
fn shr1_limbs(v: &[u64; RECODE_LIMBS]) -> [u64; RECODE_LIMBS] {
    let mut r = [0u64; RECODE_LIMBS];
    for i in 0..RECODE_LIMBS {
        let high = if i + 1 < RECODE_LIMBS {
            v[i + 1] << 63
        } else {
            0
        };
        r[i] = (v[i] >> 1) | high;
    }
    r
}
