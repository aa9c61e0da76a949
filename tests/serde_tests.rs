#![cfg(feature = "serde-derive")]

use blsag::blsag::{sign, verify, MessageDigest, Ring, Signature};
use blsag::group::{base_mul, random_scalar};

#[test]
fn signature_serde_round_trip() {
    let k_pi = random_scalar();
    let secret_index = 1;
    let mut points = vec![base_mul(&random_scalar()), base_mul(&random_scalar())];
    points[secret_index] = base_mul(&k_pi);
    let ring = Ring::new(points).unwrap();
    let msg = MessageDigest::new(b"This is the message");

    let signature = sign(&msg, &ring, secret_index, &k_pi);

    let serialized = serde_json::to_string(&signature).unwrap();
    let deserialized: Signature = serde_json::from_str(&serialized).unwrap();

    assert!(verify(
        &msg,
        &ring,
        &deserialized.key_image,
        &deserialized.challenge,
        &deserialized.responses
    ));
}
