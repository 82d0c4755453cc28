#![no_main]

use libfuzzer_sys::fuzz_target;

use gamal::{decode_private_key, decode_public_key, decode_signature};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must return an error, never panic or yield
    // a partial object.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_signature(text);
        let _ = decode_public_key(text);
        let _ = decode_private_key(text);
    }
});
