// src/core/fingerprint.rs
use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 of the raw data file, hex encoded.
/// Only used to decide whether a refresh has anything new to show.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // short form for logs
        f.write_str(&self.0[..12.min(self.0.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        let fp = Fingerprint::of_bytes(b"abc");
        assert_eq!(
            fp.as_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(fp.to_string(), "ba7816bf8f01");
    }

    #[test]
    fn one_byte_changes_digest() {
        assert_ne!(Fingerprint::of_bytes(b"1,2,3\n"), Fingerprint::of_bytes(b"1,2,4\n"));
    }
}
