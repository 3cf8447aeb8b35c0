use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the password, which is what the gateway expects
/// in the `pass` field.
///
/// This is unsalted and replayable: anyone who captures the digest can log
/// in with it. It exists for wire compatibility with the current backend and
/// is not a substitute for TLS plus opaque session tokens.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of two hex digests.
#[cfg(test)]
pub(crate) fn digest_matches(expected_hex: &str, password: &str) -> bool {
    let actual = password_digest(password);
    if actual.len() != expected_hex.len() {
        return false;
    }
    actual
        .bytes()
        .zip(expected_hex.to_ascii_lowercase().bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
