//! Statistical checks on the private-key generator

use curvedh_algorithms::ec::{generate_private_key, SECP256R1};
use curvedh_common::Uint256;
use curvedh_tests::seeded_rng;

const DRAWS: usize = 10_000;

#[test]
fn ten_thousand_draws_stay_in_range() {
    let mut rng = seeded_rng(0x5EED_0001);

    let mut leading_byte_counts = [0u32; 256];
    for _ in 0..DRAWS {
        let key = generate_private_key(&SECP256R1, &mut rng).unwrap();
        let bytes = key.serialize();
        let value = Uint256::from_be_bytes(bytes);

        assert!(!bool::from(value.is_zero()));
        assert!(bool::from(value.ct_lt(&SECP256R1.n)));

        leading_byte_counts[bytes[0] as usize] += 1;
    }

    // Coarse uniformity over the accepted range: with ~39 expected draws per
    // leading byte, gaps and heavy spikes both indicate a broken sampler.
    let distinct = leading_byte_counts.iter().filter(|&&c| c > 0).count();
    let max = leading_byte_counts.iter().max().copied().unwrap();
    assert!(distinct >= 220, "only {} distinct leading bytes", distinct);
    assert!(max <= 160, "leading-byte spike of {}", max);
}

#[test]
fn distinct_draws_do_not_repeat() {
    let mut rng = seeded_rng(0x5EED_0002);

    let first = generate_private_key(&SECP256R1, &mut rng).unwrap();
    let second = generate_private_key(&SECP256R1, &mut rng).unwrap();
    assert_ne!(first.serialize(), second.serialize());
}
