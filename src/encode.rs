// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted key and signature material.
//!
//! The layout is one `key=value` entry per line, every integer encoded as
//! unprefixed lowercase hexadecimal. Lines starting with `#` are comments
//! and are skipped on load. Three shapes exist:
//!
//! - private key: `p`, `g`, `x`
//! - public key: `p`, `g`, `y`
//! - signature: `r`, `s`
//!
//! Decoding requires every listed field to be present and parseable, and
//! revalidates the result through the type constructors; no partial object
//! is ever returned.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use num_bigint_dig::BigUint;

use crate::{DomainParameters, Error, PrivateKey, PublicKey, Result, Signature};

fn entries(text: &str) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim(), value.trim());
        }
    }
    map
}

fn field(map: &HashMap<&str, &str>, name: &'static str) -> Result<BigUint> {
    let raw = map.get(name).ok_or(Error::MissingField(name))?;
    BigUint::parse_bytes(raw.as_bytes(), 16).ok_or(Error::MalformedHex(name))
}

pub fn encode_private_key(key: &PrivateKey) -> String {
    format!(
        "# ElGamal Private Key\np={}\ng={}\nx={}\n",
        key.params().p().to_str_radix(16),
        key.params().g().to_str_radix(16),
        key.scalar().to_str_radix(16),
    )
}

pub fn decode_private_key(text: &str) -> Result<PrivateKey> {
    let map = entries(text);
    let p = field(&map, "p")?;
    let g = field(&map, "g")?;
    let x = field(&map, "x")?;

    let params = DomainParameters::new(p, g)?;
    PrivateKey::new(params, x)
}

pub fn encode_public_key(key: &PublicKey) -> String {
    format!(
        "# ElGamal Public Key\np={}\ng={}\ny={}\n",
        key.params().p().to_str_radix(16),
        key.params().g().to_str_radix(16),
        key.y().to_str_radix(16),
    )
}

pub fn decode_public_key(text: &str) -> Result<PublicKey> {
    let map = entries(text);
    let p = field(&map, "p")?;
    let g = field(&map, "g")?;
    let y = field(&map, "y")?;

    let params = DomainParameters::new(p, g)?;
    PublicKey::new(params, y)
}

pub fn encode_signature(signature: &Signature) -> String {
    format!(
        "# ElGamal Signature\nr={}\ns={}\n",
        signature.r().to_str_radix(16),
        signature.s().to_str_radix(16),
    )
}

pub fn decode_signature(text: &str) -> Result<Signature> {
    let map = entries(text);
    let r = field(&map, "r")?;
    let s = field(&map, "s")?;

    Ok(Signature::new(r, s))
}

pub fn write_private_key<P: AsRef<Path>>(key: &PrivateKey, path: P) -> Result<()> {
    fs::write(path, encode_private_key(key))?;
    Ok(())
}

pub fn read_private_key<P: AsRef<Path>>(path: P) -> Result<PrivateKey> {
    decode_private_key(&fs::read_to_string(path)?)
}

pub fn write_public_key<P: AsRef<Path>>(key: &PublicKey, path: P) -> Result<()> {
    fs::write(path, encode_public_key(key))?;
    Ok(())
}

pub fn read_public_key<P: AsRef<Path>>(path: P) -> Result<PublicKey> {
    decode_public_key(&fs::read_to_string(path)?)
}

pub fn write_signature<P: AsRef<Path>>(signature: &Signature, path: P) -> Result<()> {
    fs::write(path, encode_signature(signature))?;
    Ok(())
}

pub fn read_signature<P: AsRef<Path>>(path: P) -> Result<Signature> {
    decode_signature(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElGamal, KeyPair};

    fn keys() -> KeyPair {
        let params = DomainParameters::generate(256).unwrap();
        KeyPair::generate(&params).unwrap()
    }

    #[test]
    fn private_key_roundtrip() {
        let keys = keys();

        let text = encode_private_key(keys.private_key());
        let restored = decode_private_key(&text).unwrap();

        assert_eq!(restored.scalar(), keys.private_key().scalar());
        assert_eq!(restored.params(), keys.private_key().params());
        assert_eq!(&restored.public_key(), keys.public_key());
    }

    #[test]
    fn public_key_roundtrip() {
        let keys = keys();

        let text = encode_public_key(keys.public_key());
        let restored = decode_public_key(&text).unwrap();

        assert_eq!(&restored, keys.public_key());
    }

    #[test]
    fn signature_roundtrip_still_verifies() {
        let keys = keys();
        let signature = ElGamal::sign("persist me", keys.private_key()).unwrap();

        let text = encode_signature(&signature);
        let restored = decode_signature(&text).unwrap();

        assert_eq!(restored, signature);
        assert!(ElGamal::verify("persist me", &restored, keys.public_key()));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let keys = keys();
        let p = keys.public_key().params().p().to_str_radix(16);
        let g = keys.public_key().params().g().to_str_radix(16);

        let text = format!("p={p}\ng={g}\n");
        let result = decode_public_key(&text);

        assert!(matches!(result, Err(Error::MissingField("y"))));
    }

    #[test]
    fn malformed_hex_is_a_load_error() {
        let result = decode_signature("r=abc123\ns=not hex\n");
        assert!(matches!(result, Err(Error::MalformedHex("s"))));

        let empty_value = decode_signature("r=\ns=1f\n");
        assert!(matches!(empty_value, Err(Error::MalformedHex("r"))));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = "# produced elsewhere\n\nr=1f\n# trailing note\ns=2a\n";
        let signature = decode_signature(text).unwrap();

        assert_eq!(signature.r(), &BigUint::from(0x1fu32));
        assert_eq!(signature.s(), &BigUint::from(0x2au32));
    }

    #[test]
    fn decoded_private_key_is_revalidated() {
        // x = 1 is outside the permitted range even though the file parses.
        let keys = keys();
        let p = keys.private_key().params().p().to_str_radix(16);

        let text = format!("p={p}\ng=2\nx=1\n");
        let result = decode_private_key(&text);

        assert!(matches!(result, Err(Error::InvalidPrivateKey)));
    }

    #[test]
    fn files_roundtrip_on_disk() {
        let keys = keys();
        let signature = ElGamal::sign("on disk", keys.private_key()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let priv_path = dir.path().join("id.key");
        let pub_path = dir.path().join("id.pub");
        let sig_path = dir.path().join("msg.sig");

        write_private_key(keys.private_key(), &priv_path).unwrap();
        write_public_key(keys.public_key(), &pub_path).unwrap();
        write_signature(&signature, &sig_path).unwrap();

        let restored = read_private_key(&priv_path).unwrap();
        assert_eq!(restored.scalar(), keys.private_key().scalar());
        assert_eq!(&read_public_key(&pub_path).unwrap(), keys.public_key());
        assert_eq!(read_signature(&sig_path).unwrap(), signature);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_public_key("/nonexistent/path/id.pub");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
