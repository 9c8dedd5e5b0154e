//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The decrypting side reconstructs the key from the salt and iteration
//! count stored in the payload, so derivation must be byte-for-byte
//! deterministic across implementations.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use super::{KEY_LENGTH, SALT_LENGTH};
use crate::error::{ProtectorError, Result};

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a password using PBKDF2-HMAC-SHA256.
///
/// # Arguments
///
/// * `password` - The password to derive from (must not be empty)
/// * `salt` - Random salt, exactly 16 bytes
/// * `iterations` - PBKDF2 iteration count (must be > 0)
///
/// # Security
///
/// - Same password + salt + iterations always produces the same key
/// - Different salt produces a different key (salt is stored in the payload)
///
/// # Examples
///
/// ```
/// use protector_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt, 1_000).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(ProtectorError::InvalidInput(
            "Password is required to derive encryption key".to_string(),
        ));
    }

    if salt.len() != SALT_LENGTH {
        return Err(ProtectorError::InvalidInput(format!(
            "Salt must be exactly {} bytes (got {})",
            SALT_LENGTH,
            salt.len()
        )));
    }

    if iterations == 0 {
        return Err(ProtectorError::InvalidInput(
            "Iteration count must be greater than zero".to_string(),
        ));
    }

    tracing::debug!(iterations, "deriving key");

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; SALT_LENGTH] = *b"saltsaltsaltsalt";

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("test-password", &SALT, 10).unwrap();
        let key2 = derive_key("test-password", &SALT, 10).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_known_vector() {
        let key = derive_key("password", &SALT, 1).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "b13d6697e99cd6d1745da097ee03e4be501341e76fe9161a788de3d4cd0be219"
        );
    }

    #[test]
    fn test_different_salt_different_key() {
        let other_salt = *b"SALTSALTSALTSALT";

        let key1 = derive_key("test-password", &SALT, 10).unwrap();
        let key2 = derive_key("test-password", &other_salt, 10).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_iterations_different_key() {
        let key1 = derive_key("test-password", &SALT, 10).unwrap();
        let key2 = derive_key("test-password", &SALT, 11).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = derive_key("", &SALT, 10);
        assert!(matches!(result, Err(ProtectorError::InvalidInput(_))));
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let result = derive_key("test-password", b"short", 10);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Salt must be exactly 16 bytes"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = derive_key("test-password", &SALT, 0);
        assert!(matches!(result, Err(ProtectorError::InvalidInput(_))));
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password", &SALT, 10).unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
