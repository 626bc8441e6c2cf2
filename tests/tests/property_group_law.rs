//! Property-based tests for the curve group law and the scalar ladder

use curvedh_algorithms::ec::{
    generator, scalar_mul, CurveParams, Point, ProjectivePoint, SECP256R1,
};
use curvedh_common::math;
use curvedh_common::Uint256;
use proptest::prelude::*;

/// Straightforward double-and-add reference ladder
fn naive_mul(curve: &CurveParams, k: &Uint256, point: &ProjectivePoint) -> ProjectivePoint {
    let mut acc = ProjectivePoint::identity();
    for i in (0..256).rev() {
        acc = acc.double(curve);
        if bool::from(k.bit(i)) {
            acc = acc.add(curve, point);
        }
    }
    acc
}

fn affine(point: ProjectivePoint) -> Point {
    point.to_affine(&SECP256R1).unwrap()
}

proptest! {
    // each case runs several full scalar multiplications; keep the count low
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn wnaf_ladder_agrees_with_double_and_add(bytes in any::<[u8; 32]>()) {
        let k = Uint256::from_be_bytes(bytes);
        let g = generator(&SECP256R1).to_projective();

        let fast = affine(scalar_mul(&SECP256R1, &k, &g));
        let slow = affine(naive_mul(&SECP256R1, &k, &g));

        prop_assert_eq!(fast.clone(), slow);
        prop_assert!(fast.is_on_curve(&SECP256R1));
    }

    #[test]
    fn multiplication_distributes_over_scalar_addition(
        mut j_bytes in any::<[u8; 32]>(),
        mut k_bytes in any::<[u8; 32]>(),
    ) {
        // clearing the top bit keeps both summands below the curve order
        j_bytes[0] &= 0x7F;
        k_bytes[0] &= 0x7F;
        let j = Uint256::from_be_bytes(j_bytes);
        let k = Uint256::from_be_bytes(k_bytes);
        let sum = math::mod_add(&j, &k, &SECP256R1.n);

        let g = generator(&SECP256R1).to_projective();
        let combined = affine(scalar_mul(&SECP256R1, &sum, &g));

        let j_g = affine(scalar_mul(&SECP256R1, &j, &g));
        let k_g = affine(scalar_mul(&SECP256R1, &k, &g));
        let summed = j_g.add(&SECP256R1, &k_g);

        prop_assert_eq!(combined, summed);
    }

    #[test]
    fn every_multiple_of_the_base_point_is_on_the_curve(bytes in any::<[u8; 32]>()) {
        let k = Uint256::from_be_bytes(bytes);
        let g = generator(&SECP256R1).to_projective();
        let result = scalar_mul(&SECP256R1, &k, &g);

        prop_assert!(result.is_on_curve(&SECP256R1));
        prop_assert!(affine(result).is_on_curve(&SECP256R1));
    }
}
