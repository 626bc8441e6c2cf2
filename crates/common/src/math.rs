//! Modular arithmetic over [`Uint256`]
//!
//! Every function takes the modulus explicitly; nothing here is specific to
//! one curve. Multiplication and exponentiation run a fixed 256-iteration
//! schedule with mask-driven selection, so their timing depends only on the
//! width of the type, never on operand values.
//!
//! Unless stated otherwise the first operand must already be reduced below
//! the modulus; the second operand of [`mod_mul`] and the exponent of
//! [`mod_exp`] are only scanned bitwise and may be arbitrary 256-bit values.

use crate::uint::Uint256;
use curvedh_internal::ct_select;
use subtle::Choice;

/// Modular addition: `(a + b) mod m`, for `a, b < m`
pub fn mod_add(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let (sum, carry) = Uint256::adc(a, b);
    let (reduced, borrow) = Uint256::sbb(&sum, m);
    // Reduce when the raw sum overflowed 2^256 or reached m.
    let need_reduce = Choice::from(carry as u8) | !Choice::from(borrow as u8);
    ct_select(sum, reduced, need_reduce)
}

/// Modular subtraction: `(a - b) mod m`, for `a, b < m`
pub fn mod_sub(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let (diff, borrow) = Uint256::sbb(a, b);
    let (wrapped, _) = Uint256::adc(&diff, m);
    ct_select(diff, wrapped, Choice::from(borrow as u8))
}

/// Modular multiplication: `(a * b) mod m`, for `a < m`
///
/// Double-and-add over the bits of `b`, most significant first. All 256
/// iterations perform the same additions; the bit of `b` only steers a
/// selection mask. `b` may exceed the modulus.
pub fn mod_mul(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let mut acc = Uint256::ZERO;
    let mut i = 256;
    while i > 0 {
        i -= 1;
        acc = mod_add(&acc, &acc, m);
        let with_a = mod_add(&acc, a, m);
        acc = ct_select(acc, with_a, b.bit(i));
    }
    acc
}

/// Modular exponentiation: `(a ^ exponent) mod m`, for `a < m` and `m > 1`
///
/// Left-to-right square-and-multiply with mask-driven selection; the
/// exponent may be secret.
pub fn mod_exp(a: &Uint256, exponent: &Uint256, m: &Uint256) -> Uint256 {
    let mut result = Uint256::ONE;
    let mut i = 256;
    while i > 0 {
        i -= 1;
        result = mod_mul(&result, &result, m);
        let multiplied = mod_mul(a, &result, m);
        result = ct_select(result, multiplied, exponent.bit(i));
    }
    result
}

/// Modular inverse: `a⁻¹ mod m`, for `a < m` and prime `m`
///
/// Fermat's little theorem: `a⁻¹ ≡ a^(m-2) (mod m)`. Returns `None` for
/// zero, which has no inverse.
pub fn mod_inv(a: &Uint256, m: &Uint256) -> Option<Uint256> {
    if bool::from(a.is_zero()) {
        return None;
    }
    let (exponent, _) = Uint256::sbb(m, &Uint256::from_u64(2));
    Some(mod_exp(a, &exponent, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small prime modulus keeps the expected values checkable by hand.
    fn m17() -> Uint256 {
        Uint256::from_u64(17)
    }

    #[test]
    fn add_sub_wrap_at_modulus() {
        let a = Uint256::from_u64(15);
        let b = Uint256::from_u64(9);
        assert_eq!(mod_add(&a, &b, &m17()), Uint256::from_u64(7));
        assert_eq!(mod_sub(&b, &a, &m17()), Uint256::from_u64(11));
        assert_eq!(mod_sub(&a, &b, &m17()), Uint256::from_u64(6));
    }

    #[test]
    fn add_handles_carry_out() {
        // m close to 2^256: p - 1 + p - 1 must still reduce correctly
        let m = Uint256::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1]);
        let a = m.wrapping_sub(&Uint256::ONE);
        let expected = m.wrapping_sub(&Uint256::from_u64(2));
        assert_eq!(mod_add(&a, &a, &m), expected);
    }

    #[test]
    fn mul_matches_schoolbook() {
        let a = Uint256::from_u64(13);
        let b = Uint256::from_u64(11);
        assert_eq!(mod_mul(&a, &b, &m17()), Uint256::from_u64(143 % 17));
        assert_eq!(mod_mul(&Uint256::ZERO, &b, &m17()), Uint256::ZERO);
        assert_eq!(mod_mul(&a, &Uint256::ZERO, &m17()), Uint256::ZERO);
    }

    #[test]
    fn mul_accepts_unreduced_multiplier() {
        let a = Uint256::from_u64(3);
        let b = Uint256::from_u64(40); // 40 ≡ 6 (mod 17)
        assert_eq!(mod_mul(&a, &b, &m17()), Uint256::from_u64(120 % 17));
    }

    #[test]
    fn exp_and_fermat_inverse() {
        let a = Uint256::from_u64(5);
        assert_eq!(
            mod_exp(&a, &Uint256::from_u64(3), &m17()),
            Uint256::from_u64(125 % 17)
        );

        let inv = mod_inv(&a, &m17()).unwrap();
        assert_eq!(mod_mul(&a, &inv, &m17()), Uint256::ONE);
        assert!(mod_inv(&Uint256::ZERO, &m17()).is_none());
    }
}
