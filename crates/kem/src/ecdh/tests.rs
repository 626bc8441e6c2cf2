use super::*;
use curvedh_algorithms::ec::{generator, Point};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn agreement_is_symmetric() {
    let (alice_pk, alice_sk) = EcdhSecp256r1::generate_keypair(&mut OsRng).unwrap();
    let (bob_pk, bob_sk) = EcdhSecp256r1::generate_keypair(&mut OsRng).unwrap();

    let alice_secret = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk).unwrap();
    let bob_secret = EcdhSecp256r1::shared_secret(&bob_sk, &alice_pk).unwrap();

    assert_eq!(alice_secret, bob_secret);
}

#[test]
fn distinct_keypairs_give_distinct_secrets() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0001);

    let (alice_pk, alice_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (bob_pk, _) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (carol_pk, _) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    assert_ne!(alice_pk, bob_pk);

    let with_bob = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk).unwrap();
    let with_carol = EcdhSecp256r1::shared_secret(&alice_sk, &carol_pk).unwrap();
    assert_ne!(with_bob, with_carol);
}

#[test]
fn session_keys_match_across_parties_and_differ_by_label() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0002);

    let (alice_pk, alice_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    let alice_keys = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk)
        .unwrap()
        .into_session_keys(32, 32)
        .unwrap();
    let bob_keys = EcdhSecp256r1::shared_secret(&bob_sk, &alice_pk)
        .unwrap()
        .into_session_keys(32, 32)
        .unwrap();

    assert_eq!(alice_keys.encryption.as_slice(), bob_keys.encryption.as_slice());
    assert_eq!(
        alice_keys.authentication.as_slice(),
        bob_keys.authentication.as_slice()
    );

    // domain separation keeps the two directions independent
    assert_ne!(
        alice_keys.encryption.as_slice(),
        alice_keys.authentication.as_slice()
    );
}

#[test]
fn derived_key_lengths_follow_the_request() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0003);

    let (pk, sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (peer_pk, _) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let _ = pk;

    let secret = EcdhSecp256r1::shared_secret(&sk, &peer_pk).unwrap();
    let keys = secret.into_session_keys(16, 64).unwrap();
    assert_eq!(keys.encryption.len(), 16);
    assert_eq!(keys.authentication.len(), 64);
}

#[test]
fn oversized_derivation_requests_are_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0004);

    let (_, sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (peer_pk, _) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    let secret = EcdhSecp256r1::shared_secret(&sk, &peer_pk).unwrap();
    let result = secret.derive_key(b"encryption", 255 * 32 + 1);
    assert!(matches!(result, Err(ApiError::OutputTooLong { .. })));
}

#[test]
fn identity_point_is_rejected_on_import() {
    let result = PublicKey::from_point(Point::identity());
    assert!(matches!(result, Err(ApiError::InvalidPeerKey { .. })));
}

#[test]
fn off_curve_coordinates_are_rejected_on_import() {
    let result = PublicKey::from_affine(&[0x11; 32], &[0x22; 32]);
    assert!(matches!(result, Err(ApiError::InvalidPeerKey { .. })));

    // (0, 0) is not on the curve either, since b ≠ 0
    let result = PublicKey::from_affine(&[0; 32], &[0; 32]);
    assert!(matches!(result, Err(ApiError::InvalidPeerKey { .. })));
}

#[test]
fn agreement_revalidates_forged_public_keys() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0005);
    let (_, sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    // bypass the validating constructors on purpose
    let forged_identity = PublicKey(Point::identity());
    let result = EcdhSecp256r1::shared_secret(&sk, &forged_identity);
    assert!(matches!(result, Err(ApiError::InvalidPeerKey { .. })));

    let off_curve = Point::from_affine(&SECP256R1, &[0x11; 32], &[0x22; 32]).unwrap();
    let forged_off_curve = PublicKey(off_curve);
    let result = EcdhSecp256r1::shared_secret(&sk, &forged_off_curve);
    assert!(matches!(result, Err(ApiError::InvalidPeerKey { .. })));
}

#[test]
fn valid_coordinate_import_round_trips() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0006);
    let (pk, sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    let imported = PublicKey::from_affine(&pk.x_coordinate_bytes(), &pk.y_coordinate_bytes())
        .unwrap();
    assert_eq!(imported, pk);

    // the generator itself imports cleanly
    let g = generator(&SECP256R1);
    assert!(PublicKey::from_point(g).is_ok());

    let roundtrip = SecretKey::from_bytes(&sk.to_bytes()[..]).unwrap();
    let secret_a = EcdhSecp256r1::shared_secret(&sk, &imported).unwrap();
    let secret_b = EcdhSecp256r1::shared_secret(&roundtrip, &imported).unwrap();
    assert_eq!(secret_a, secret_b);
}

#[test]
fn secret_key_import_validates_range() {
    assert!(SecretKey::from_bytes(&[0u8; 32]).is_err());
    assert!(SecretKey::from_bytes(&[0u8; 31]).is_err());

    let order = SECP256R1.n.to_be_bytes();
    assert!(SecretKey::from_bytes(&order).is_err());

    let mut one = [0u8; 32];
    one[31] = 1;
    assert!(SecretKey::from_bytes(&one).is_ok());
}

#[test]
fn seeded_generation_is_deterministic() {
    let (pk_a, _) = EcdhSecp256r1::generate_keypair(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    let (pk_b, _) = EcdhSecp256r1::generate_keypair(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    assert_eq!(pk_a, pk_b);
}

#[test]
fn debug_output_redacts_secret_material() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF_0007);
    let (_, sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let rendered = format!("{:?}", sk);
    assert!(rendered.contains("REDACTED"));

    let key_hex = hex::encode(&sk.to_bytes()[..]);
    assert!(!rendered.contains(&key_hex));
}
