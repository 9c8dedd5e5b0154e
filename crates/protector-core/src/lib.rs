//! # Protector Core
//!
//! Core library for hugo-protector - password-protected content blocks for
//! static sites.
//!
//! Content is encrypted once at build time into a self-describing transport
//! string, embedded in a page, and decrypted later by a reader who knows the
//! password. The encrypting and decrypting sides share no code, so the wire
//! format defined in [`payload`] is the contract between them.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM sealing
//! - **payload**: Payload record, transport encoding and decoding
//! - **render**: HTML escaping, inline formatting and the markdown renderer
//! - **unlock**: Runtime unlock flow with an idempotent mount registry

pub mod crypto;
pub mod error;
pub mod payload;
pub mod render;
pub mod unlock;

pub use error::{ProtectorError, Result};
pub use payload::{decode, encode, Payload};
pub use render::{render_content, render_markdown, ContentFormat};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
