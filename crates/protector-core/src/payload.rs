//! Payload record and transport encoding.
//!
//! # Wire format
//!
//! ```text
//! base64( utf8( {"v":1,"alg":"AES-256-GCM","iter":N,
//!                "salt":b64,"iv":b64,"ct":b64,"tag":b64} ) )
//! ```
//!
//! The record is a JSON object read by field name, never by position. Byte
//! fields use the standard base64 alphabet. The outer transport string is an
//! opaque single token as far as surrounding tooling is concerned.
//!
//! Decoding is read-only: the same transport string can be decoded any
//! number of times, with different password guesses.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::crypto::{
    self, derive_key, ALGORITHM, DEFAULT_ITERATIONS, IV_LENGTH, SALT_LENGTH, TAG_LENGTH,
};
use crate::error::{ProtectorError, Result};

/// Payload format version written by this codec.
pub const PAYLOAD_VERSION: u32 = 1;

/// Decoder accepting base64 with or without trailing padding, as browser
/// `atob` does.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// JSON shape of the record inside the transport string.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    v: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iter: Option<u32>,
    salt: String,
    iv: String,
    ct: String,
    tag: String,
}

/// A decoded payload: every parameter needed to decrypt, given the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub version: u32,
    pub algorithm: String,
    pub iterations: u32,
    pub salt: [u8; SALT_LENGTH],
    pub iv: [u8; IV_LENGTH],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LENGTH],
}

impl Payload {
    /// Encrypt `plaintext` with a freshly generated salt and iv.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectorError::InvalidInput`] if plaintext or password is
    /// empty or `iterations` is zero.
    pub fn seal(plaintext: &str, password: &str, iterations: u32) -> Result<Self> {
        if plaintext.is_empty() {
            return Err(ProtectorError::InvalidInput(
                "Plaintext must be a non-empty string".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(ProtectorError::InvalidInput(
                "Password is required for encryption".to_string(),
            ));
        }

        let salt = crypto::random_bytes::<SALT_LENGTH>()?;
        let iv = crypto::random_bytes::<IV_LENGTH>()?;
        let key = derive_key(password, &salt, iterations)?;
        let sealed = crypto::seal(key.as_bytes(), &iv, plaintext.as_bytes())?;

        Ok(Self {
            version: PAYLOAD_VERSION,
            algorithm: ALGORITHM.to_string(),
            iterations,
            salt,
            iv,
            ciphertext: sealed.ciphertext,
            tag: sealed.tag,
        })
    }

    /// Derive the key from `password` and recover the plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectorError::Authentication`] for a wrong password or
    /// tampered payload, and [`ProtectorError::InvalidInput`] for an empty password.
    pub fn open(&self, password: &str) -> Result<String> {
        let key = derive_key(password, &self.salt, self.iterations)?;
        let plaintext = crypto::open(key.as_bytes(), &self.iv, &self.ciphertext, &self.tag)?;
        String::from_utf8(plaintext)
            .map_err(|_| ProtectorError::Format("Decrypted content is not valid UTF-8".to_string()))
    }

    /// Serialize to the opaque transport string.
    pub fn to_transport(&self) -> Result<String> {
        let record = Record {
            v: Some(self.version),
            alg: Some(self.algorithm.clone()),
            iter: Some(self.iterations),
            salt: STANDARD.encode(self.salt),
            iv: STANDARD.encode(self.iv),
            ct: STANDARD.encode(&self.ciphertext),
            tag: STANDARD.encode(self.tag),
        };
        let json = serde_json::to_string(&record)?;
        Ok(STANDARD.encode(json.as_bytes()))
    }

    /// Parse a transport string.
    ///
    /// `v` and `alg` may be absent; when present they must name this format.
    /// An absent `iter` falls back to [`DEFAULT_ITERATIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtectorError::Format`] for malformed base64, a malformed
    /// record, missing fields, or fields of the wrong size.
    pub fn from_transport(transport: &str) -> Result<Self> {
        let transport = transport.trim();
        if transport.is_empty() {
            return Err(ProtectorError::Format("Payload is missing".to_string()));
        }

        let json = LENIENT.decode(transport)?;
        let record: Record = serde_json::from_slice(&json)?;

        let version = record.v.unwrap_or(PAYLOAD_VERSION);
        if version != PAYLOAD_VERSION {
            return Err(ProtectorError::Format(format!(
                "Unsupported payload version: {}",
                version
            )));
        }

        let algorithm = record.alg.unwrap_or_else(|| ALGORITHM.to_string());
        if algorithm != ALGORITHM {
            return Err(ProtectorError::Format(format!(
                "Unsupported algorithm: {}",
                algorithm
            )));
        }

        let iterations = record.iter.unwrap_or(DEFAULT_ITERATIONS);
        if iterations == 0 {
            return Err(ProtectorError::Format(
                "Iteration count must be greater than zero".to_string(),
            ));
        }

        let payload = Self {
            version,
            algorithm,
            iterations,
            salt: decode_fixed("salt", &record.salt)?,
            iv: decode_fixed("iv", &record.iv)?,
            ciphertext: LENIENT.decode(&record.ct)?,
            tag: decode_fixed("tag", &record.tag)?,
        };

        tracing::debug!(
            iterations = payload.iterations,
            ct_len = payload.ciphertext.len(),
            "parsed payload"
        );
        Ok(payload)
    }
}

fn decode_fixed<const N: usize>(field: &str, value: &str) -> Result<[u8; N]> {
    let bytes = LENIENT.decode(value)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        ProtectorError::Format(format!(
            "Field '{}' must be {} bytes (got {})",
            field,
            N,
            bytes.len()
        ))
    })
}

/// Encrypt `plaintext` under `password` and return the transport string.
///
/// `iterations` defaults to [`DEFAULT_ITERATIONS`]. Every call draws a new
/// salt and iv, so encoding the same input twice never yields the same output.
///
/// # Examples
///
/// ```
/// use protector_core::{decode, encode};
///
/// let transport = encode("<p>secret</p>", "hunter2", Some(1_000)).unwrap();
/// assert_eq!(decode(&transport, "hunter2").unwrap(), "<p>secret</p>");
/// ```
pub fn encode(plaintext: &str, password: &str, iterations: Option<u32>) -> Result<String> {
    let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
    Payload::seal(plaintext, password, iterations)?.to_transport()
}

/// Decode a transport string and decrypt it with `password`.
///
/// Retrying with another password is the caller's responsibility.
pub fn decode(transport: &str, password: &str) -> Result<String> {
    Payload::from_transport(transport)?.open(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITER: u32 = 1_000;

    fn record_json(transport: &str) -> serde_json::Value {
        let json = STANDARD.decode(transport).unwrap();
        serde_json::from_slice(&json).unwrap()
    }

    fn transport_from_json(value: &serde_json::Value) -> String {
        STANDARD.encode(value.to_string().as_bytes())
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let transport = encode("# Title\n\nBody", "pw", Some(ITER)).unwrap();
        assert_eq!(decode(&transport, "pw").unwrap(), "# Title\n\nBody");
    }

    #[test]
    fn test_record_has_exactly_seven_fields() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let value = record_json(&transport);
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["alg", "ct", "iter", "iv", "salt", "tag", "v"]);
        assert_eq!(object["v"], 1);
        assert_eq!(object["alg"], "AES-256-GCM");
        assert_eq!(object["iter"], ITER);
    }

    #[test]
    fn test_ciphertext_length_equals_plaintext_length() {
        let payload = Payload::seal("twelve bytes", "pw", ITER).unwrap();
        assert_eq!(payload.ciphertext.len(), "twelve bytes".len());
    }

    #[test]
    fn test_empty_plaintext_rejected() {
        assert!(matches!(
            encode("", "pw", Some(ITER)),
            Err(ProtectorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(
            encode("hello", "", Some(ITER)),
            Err(ProtectorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(matches!(
            encode("hello", "pw", Some(0)),
            Err(ProtectorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_wrong_password_is_authentication_error() {
        let transport = encode("hello", "right", Some(ITER)).unwrap();
        assert!(matches!(
            decode(&transport, "wrong"),
            Err(ProtectorError::Authentication)
        ));
    }

    #[test]
    fn test_malformed_base64_is_format_error() {
        assert!(matches!(
            decode("not base64!!", "pw"),
            Err(ProtectorError::Format(_))
        ));
    }

    #[test]
    fn test_malformed_record_is_format_error() {
        let transport = STANDARD.encode(b"{not json");
        assert!(matches!(
            decode(&transport, "pw"),
            Err(ProtectorError::Format(_))
        ));
    }

    #[test]
    fn test_missing_field_is_format_error() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value.as_object_mut().unwrap().remove("tag");

        assert!(matches!(
            decode(&transport_from_json(&value), "pw"),
            Err(ProtectorError::Format(_))
        ));
    }

    #[test]
    fn test_empty_transport_is_format_error() {
        assert!(matches!(decode("  ", "pw"), Err(ProtectorError::Format(_))));
    }

    #[test]
    fn test_absent_iter_uses_default() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value.as_object_mut().unwrap().remove("iter");

        let payload = Payload::from_transport(&transport_from_json(&value)).unwrap();
        assert_eq!(payload.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_absent_version_and_algorithm_accepted() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        let object = value.as_object_mut().unwrap();
        object.remove("v");
        object.remove("alg");

        assert_eq!(decode(&transport_from_json(&value), "pw").unwrap(), "hello");
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value["alg"] = serde_json::json!("AES-128-CBC");

        let result = Payload::from_transport(&transport_from_json(&value));
        assert!(matches!(result, Err(ProtectorError::Format(_))));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value["v"] = serde_json::json!(2);

        let result = Payload::from_transport(&transport_from_json(&value));
        assert!(matches!(result, Err(ProtectorError::Format(_))));
    }

    #[test]
    fn test_zero_iter_in_record_rejected() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value["iter"] = serde_json::json!(0);

        let result = Payload::from_transport(&transport_from_json(&value));
        assert!(matches!(result, Err(ProtectorError::Format(_))));
    }

    #[test]
    fn test_short_iv_rejected() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let mut value = record_json(&transport);
        value["iv"] = serde_json::json!(STANDARD.encode([0u8; 8]));

        let err = Payload::from_transport(&transport_from_json(&value)).unwrap_err();
        assert!(err.to_string().contains("Field 'iv' must be 12 bytes"));
    }

    #[test]
    fn test_transport_round_trip_preserves_fields() {
        let payload = Payload::seal("hello", "pw", ITER).unwrap();
        let parsed = Payload::from_transport(&payload.to_transport().unwrap()).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_unpadded_transport_accepted() {
        let transport = encode("hello", "pw", Some(ITER)).unwrap();
        let unpadded = transport.trim_end_matches('=');
        assert_eq!(decode(unpadded, "pw").unwrap(), "hello");
    }

    #[test]
    fn test_decode_is_repeatable() {
        let transport = encode("hello", "right", Some(ITER)).unwrap();
        assert!(decode(&transport, "wrong").is_err());
        assert_eq!(decode(&transport, "right").unwrap(), "hello");
        assert_eq!(decode(&transport, "right").unwrap(), "hello");
    }
}
