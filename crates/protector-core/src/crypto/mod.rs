//! Cryptographic operations for protector.
//!
//! This module provides the two primitives the payload codec composes:
//! - **PBKDF2-HMAC-SHA256**: password-based key derivation
//! - **AES-256-GCM**: authenticated encryption with a detached tag
//!
//! ## Security Model
//!
//! - Fresh random salt and iv for every payload, so the same plaintext and
//!   password never produce the same key or nonce twice
//! - Tag verified before any plaintext is released
//! - Derived keys zeroized from memory on drop
//! - Nothing cached between operations
//!
//! ## Threat Model
//!
//! We defend against:
//! - Readers of the page who do not know the password
//! - Tampering with the embedded payload
//!
//! We do NOT defend against:
//! - Online guessing (verification happens entirely client-side)
//! - Anyone who knows the password

pub mod cipher;
pub mod key;

pub use cipher::{open, seal, Sealed};
pub use key::{derive_key, DerivedKey};

use crate::error::{ProtectorError, Result};

/// Algorithm identifier written into every payload.
pub const ALGORITHM: &str = "AES-256-GCM";

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 310_000;

/// Salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// Nonce length in bytes (96 bits).
pub const IV_LENGTH: usize = 12;

/// Derived key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Fill a fixed-size array from the OS CSPRNG.
pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| ProtectorError::Crypto(format!("Failed to generate random bytes: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_are_fresh() {
        let a = random_bytes::<SALT_LENGTH>().unwrap();
        let b = random_bytes::<SALT_LENGTH>().unwrap();
        assert_ne!(a, b);
    }
}
