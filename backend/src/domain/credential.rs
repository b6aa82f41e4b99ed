//! Salted digests for stored credentials.
//!
//! Stored format: `v1$<salt-hex>$<digest-hex>` where the digest is SHA-256
//! over salt followed by the raw password bytes. Raw passwords never leave
//! the registration/login flow.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Digest of a password suitable for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash a raw password with a fresh random salt.
    pub fn hash(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self::hash_with_salt(&salt, password)
    }

    fn hash_with_salt(salt: &[u8], password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        let digest = hasher.finalize();
        Self(format!("v1${}${}", hex::encode(salt), hex::encode(digest)))
    }

    /// Check a raw password against a stored digest string.
    ///
    /// Unparseable stored values verify as false rather than erroring; a
    /// stored credential is opaque to every caller but this module.
    pub fn verify(stored: &str, password: &str) -> bool {
        let mut parts = stored.split('$');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("v1"), Some(salt_hex), Some(_), None) => {
                let Ok(salt) = hex::decode(salt_hex) else {
                    return false;
                };
                Self::hash_with_salt(&salt, password).0 == stored
            }
            _ => false,
        }
    }

    /// Stored representation.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PasswordDigest> for String {
    fn from(value: PasswordDigest) -> Self {
        value.0
    }
}
