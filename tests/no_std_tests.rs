#![no_std]
#![cfg(feature = "no_std")]

extern crate alloc;

use blsag::blsag::{link, sign, verify, MessageDigest, Ring};
use blsag::group::{base_mul, random_scalar};

#[test]
fn blsag_round_trips_and_links_in_no_std() {
    let k_pi = random_scalar();
    let secret_index = 1;
    let mut points = alloc::vec![base_mul(&random_scalar()), base_mul(&random_scalar())];
    points[secret_index] = base_mul(&k_pi);
    let ring = Ring::new(points).unwrap();

    let msg = MessageDigest::new(b"This is the message");
    let signature = sign(&msg, &ring, secret_index, &k_pi);
    assert!(verify(
        &msg,
        &ring,
        &signature.key_image,
        &signature.challenge,
        &signature.responses
    ));

    let other_msg = MessageDigest::new(b"This is another message");
    let signature2 = sign(&other_msg, &ring, secret_index, &k_pi);
    assert!(link(&signature, &signature2));
}
