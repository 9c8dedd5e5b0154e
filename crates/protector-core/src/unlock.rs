//! Runtime unlock flow.
//!
//! A host (a page script, a preview server, the CLI) mounts locked blocks
//! and unlocks them with a reader-supplied password. Mounting is idempotent
//! per element key, so scanning the same document twice never mounts a
//! block twice. Every unlock attempt derives its own key; nothing is cached
//! and a failed attempt leaves the block mounted for unlimited retries.
//!
//! Failures are reported with one generic message whatever the cause, so a
//! reader cannot tell a wrong password from a tampered payload.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use crate::payload::decode;
use crate::render::{render_content, ContentFormat};

/// Reader-facing unlock failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("Password is required")]
    PasswordRequired,

    #[error("Unable to decrypt payload")]
    Failed,

    #[error("No protected content is mounted here")]
    NotMounted,
}

/// A protected block as read from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedBlock {
    pub payload: String,
    pub format: ContentFormat,
}

impl LockedBlock {
    pub fn new(payload: impl Into<String>, format: ContentFormat) -> Self {
        Self {
            payload: payload.into(),
            format,
        }
    }
}

/// Decrypt and render a single payload.
///
/// # Examples
///
/// ```
/// use protector_core::unlock::{unlock_payload, UnlockError};
/// use protector_core::{encode, ContentFormat};
///
/// let payload = encode("*hi*", "pw", Some(1_000)).unwrap();
/// assert_eq!(
///     unlock_payload(&payload, "pw", ContentFormat::Markdown).unwrap(),
///     "<p><em>hi</em></p>"
/// );
/// assert_eq!(
///     unlock_payload(&payload, "nope", ContentFormat::Markdown),
///     Err(UnlockError::Failed)
/// );
/// ```
pub fn unlock_payload(
    payload: &str,
    password: &str,
    format: ContentFormat,
) -> Result<String, UnlockError> {
    if password.is_empty() {
        return Err(UnlockError::PasswordRequired);
    }
    let plaintext = decode(payload, password).map_err(|_| {
        tracing::debug!("unlock attempt failed");
        UnlockError::Failed
    })?;
    Ok(render_content(&plaintext, format))
}

/// Registry of mounted blocks keyed by element identity.
#[derive(Debug)]
pub struct Unlocker<K> {
    mounted: HashMap<K, LockedBlock>,
}

impl<K: Eq + Hash> Default for Unlocker<K> {
    fn default() -> Self {
        Self {
            mounted: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Unlocker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `block` under `key`.
    ///
    /// Returns `false` and leaves the existing block untouched when `key`
    /// is already mounted.
    pub fn mount(&mut self, key: K, block: LockedBlock) -> bool {
        match self.mounted.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(block);
                true
            }
        }
    }

    pub fn is_mounted(&self, key: &K) -> bool {
        self.mounted.contains_key(key)
    }

    pub fn unmount(&mut self, key: &K) -> Option<LockedBlock> {
        self.mounted.remove(key)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Unlock the block mounted under `key`. The block stays mounted.
    pub fn unlock(&self, key: &K, password: &str) -> Result<String, UnlockError> {
        let block = self.mounted.get(key).ok_or(UnlockError::NotMounted)?;
        unlock_payload(&block.payload, password, block.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::encode;

    const ITER: u32 = 1_000;

    fn block(plaintext: &str, password: &str, format: ContentFormat) -> LockedBlock {
        LockedBlock::new(encode(plaintext, password, Some(ITER)).unwrap(), format)
    }

    #[test]
    fn test_empty_password_required() {
        let payload = encode("x", "pw", Some(ITER)).unwrap();
        assert_eq!(
            unlock_payload(&payload, "", ContentFormat::Html),
            Err(UnlockError::PasswordRequired)
        );
    }

    #[test]
    fn test_failures_share_one_message() {
        let payload = encode("x", "pw", Some(ITER)).unwrap();
        let wrong_password = unlock_payload(&payload, "nope", ContentFormat::Html).unwrap_err();
        let corrupt = unlock_payload("%%%", "pw", ContentFormat::Html).unwrap_err();

        assert_eq!(wrong_password, corrupt);
        assert_eq!(wrong_password.to_string(), "Unable to decrypt payload");
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut unlocker = Unlocker::new();
        assert!(unlocker.mount("block-1", block("first", "pw", ContentFormat::Html)));
        assert!(!unlocker.mount("block-1", block("second", "pw", ContentFormat::Html)));
        assert_eq!(unlocker.len(), 1);
        assert_eq!(unlocker.unlock(&"block-1", "pw").unwrap(), "first");
    }

    #[test]
    fn test_retry_after_failure() {
        let mut unlocker = Unlocker::new();
        unlocker.mount(7u32, block("# Hi", "pw", ContentFormat::Markdown));

        assert_eq!(unlocker.unlock(&7, "bad"), Err(UnlockError::Failed));
        assert!(unlocker.is_mounted(&7));
        assert_eq!(unlocker.unlock(&7, "pw").unwrap(), "<h1>Hi</h1>");
        assert_eq!(unlocker.unlock(&7, "pw").unwrap(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_unknown_key() {
        let unlocker: Unlocker<&str> = Unlocker::new();
        assert!(unlocker.is_empty());
        assert_eq!(unlocker.unlock(&"missing", "pw"), Err(UnlockError::NotMounted));
    }

    #[test]
    fn test_unmount_allows_remount() {
        let mut unlocker = Unlocker::new();
        unlocker.mount("a", block("one", "pw", ContentFormat::Html));
        assert!(unlocker.unmount(&"a").is_some());
        assert!(unlocker.mount("a", block("two", "pw", ContentFormat::Html)));
        assert_eq!(unlocker.unlock(&"a", "pw").unwrap(), "two");
    }

    #[test]
    fn test_concurrent_attempts_are_independent() {
        let payload = encode("shared", "pw", Some(ITER)).unwrap();
        let handles: Vec<_> = ["pw", "wrong", "pw"]
            .into_iter()
            .map(|password| {
                let payload = payload.clone();
                std::thread::spawn(move || unlock_payload(&payload, password, ContentFormat::Html))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0].as_deref(), Ok("shared"));
        assert_eq!(results[1], Err(UnlockError::Failed));
        assert_eq!(results[2].as_deref(), Ok("shared"));
    }
}
