//! AES-256-GCM sealing and opening with a detached tag.
//!
//! The payload stores ciphertext and tag as separate fields, so the cipher
//! works in detached mode: `ct` has the same length as the plaintext and
//! `tag` is always 16 bytes. No associated data is bound.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use zeroize::Zeroize;

use super::{IV_LENGTH, KEY_LENGTH, TAG_LENGTH};
use crate::error::{ProtectorError, Result};

/// Output of [`seal`]: ciphertext plus its detached authentication tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LENGTH],
}

/// Encrypt `plaintext` under `key` and `iv`.
///
/// The caller must never reuse an `iv` with the same key; the payload codec
/// generates a fresh one for every call.
pub fn seal(key: &[u8; KEY_LENGTH], iv: &[u8; IV_LENGTH], plaintext: &[u8]) -> Result<Sealed> {
    let cipher = build_cipher(key)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(iv), b"", &mut buffer)
        .map_err(|_| ProtectorError::Crypto("AES-GCM encryption failed".to_string()))?;

    tracing::debug!(len = buffer.len(), "sealed plaintext");

    let mut tag_bytes = [0u8; TAG_LENGTH];
    tag_bytes.copy_from_slice(tag.as_slice());
    Ok(Sealed {
        ciphertext: buffer,
        tag: tag_bytes,
    })
}

/// Decrypt `ciphertext` and verify `tag`.
///
/// # Errors
///
/// Returns [`ProtectorError::Authentication`] if the tag does not verify
/// (wrong key, corrupted ciphertext or corrupted tag). No plaintext bytes
/// are returned in that case.
///
/// Returns [`ProtectorError::InvalidInput`] if `iv` or `tag` has the wrong length.
pub fn open(key: &[u8; KEY_LENGTH], iv: &[u8], ciphertext: &[u8], tag: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != IV_LENGTH {
        return Err(ProtectorError::InvalidInput(format!(
            "IV must be exactly {} bytes (got {})",
            IV_LENGTH,
            iv.len()
        )));
    }
    if tag.len() != TAG_LENGTH {
        return Err(ProtectorError::InvalidInput(format!(
            "Tag must be exactly {} bytes (got {})",
            TAG_LENGTH,
            tag.len()
        )));
    }

    let cipher = build_cipher(key)?;

    let mut buffer = ciphertext.to_vec();
    // The buffer holds keystream output even when verification fails.
    if cipher
        .decrypt_in_place_detached(Nonce::from_slice(iv), b"", &mut buffer, Tag::from_slice(tag))
        .is_err()
    {
        buffer.zeroize();
        tracing::debug!("tag verification failed");
        return Err(ProtectorError::Authentication);
    }

    Ok(buffer)
}

fn build_cipher(key: &[u8; KEY_LENGTH]) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key)
        .map_err(|_| ProtectorError::InvalidInput("Key must be 32 bytes".to_string()))
}
