//! End-to-end key agreement across the workspace crates

use curvedh_kem::ecdh::EcdhSecp256r1;
use curvedh_tests::seeded_rng;

#[test]
fn two_parties_agree_on_session_keys() {
    let mut rng = seeded_rng(0xE2E_0001);

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

    assert_eq!(
        alice_keys.encryption.as_slice(),
        bob_keys.encryption.as_slice()
    );
    assert_eq!(
        alice_keys.authentication.as_slice(),
        bob_keys.authentication.as_slice()
    );
    assert_ne!(
        alice_keys.encryption.as_slice(),
        alice_keys.authentication.as_slice()
    );
}

#[test]
fn an_eavesdropper_with_its_own_key_derives_different_keys() {
    let mut rng = seeded_rng(0xE2E_0002);

    let (_, alice_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (bob_pk, _) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (_, eve_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    let alice_keys = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk)
        .unwrap()
        .into_session_keys(32, 32)
        .unwrap();
    let eve_keys = EcdhSecp256r1::shared_secret(&eve_sk, &bob_pk)
        .unwrap()
        .into_session_keys(32, 32)
        .unwrap();

    assert_ne!(
        alice_keys.encryption.as_slice(),
        eve_keys.encryption.as_slice()
    );
}

#[test]
fn public_keys_survive_coordinate_transport() {
    use curvedh_kem::ecdh::PublicKey;

    let mut rng = seeded_rng(0xE2E_0003);

    let (alice_pk, alice_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = EcdhSecp256r1::generate_keypair(&mut rng).unwrap();

    // simulate the (out-of-scope) wire hop as raw affine coordinates
    let bob_pk_received =
        PublicKey::from_affine(&bob_pk.x_coordinate_bytes(), &bob_pk.y_coordinate_bytes())
            .unwrap();
    let alice_pk_received =
        PublicKey::from_affine(&alice_pk.x_coordinate_bytes(), &alice_pk.y_coordinate_bytes())
            .unwrap();

    let alice_secret = EcdhSecp256r1::shared_secret(&alice_sk, &bob_pk_received).unwrap();
    let bob_secret = EcdhSecp256r1::shared_secret(&bob_sk, &alice_pk_received).unwrap();
    assert_eq!(alice_secret, bob_secret);
}
