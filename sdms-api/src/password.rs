//! Password digests as stored by SeedDMS.

use md5::{Digest, Md5};

/// Hex MD5 digest of `password`, the form SeedDMS expects when creating
/// users or changing passwords.
pub fn encpasswd(password: &str) -> String {
    Md5::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(encpasswd("redhat"), "e2798af12a7a0f4f70b4d69efbc25f4d");
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(encpasswd(""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
