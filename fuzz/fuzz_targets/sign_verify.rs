#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use gamal::{DomainParameters, ElGamal, KeyPair};

static KEYS: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let keys = KEYS.get_or_init(|| {
        let params = DomainParameters::generate(128).unwrap();
        KeyPair::generate(&params).unwrap()
    });

    let signature = ElGamal::sign(data, keys.private_key()).expect("signing failed");

    assert!(
        ElGamal::verify(data, &signature, keys.public_key()),
        "fresh signature failed to verify for input: {:?}",
        data
    );

    // Any single-bit flip must invalidate the signature.
    if !data.is_empty() {
        let mut tampered = data.to_vec();
        tampered[0] ^= 1;
        assert!(
            !ElGamal::verify(&tampered, &signature, keys.public_key()),
            "tampered message still verified for input: {:?}",
            data
        );
    }
});
