//! Constant-time operations to prevent timing attacks
//!
//! Every secret-dependent choice in the workspace funnels through
//! [`ct_select`] (or the `subtle` traits it wraps): wNAF digit recoding,
//! precomputed-table lookup, conditional point negation, and the conditional
//! reductions inside the modular arithmetic.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time selection
///
/// Returns `a` if `condition` is 0, `b` if `condition` is 1.
/// This function runs in constant time regardless of the input values.
pub fn ct_select<T>(a: T, b: T, condition: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(&a, &b, condition)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `condition` is 1, otherwise leaves `dst` unchanged.
/// This function runs in constant time regardless of the input values.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: Choice) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = u8::conditional_select(d, s, condition);
    }
}
