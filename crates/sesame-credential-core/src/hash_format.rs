//! Self-describing stored-hash wire format.
//!
//! This module provides:
//! - [`HashRecord`] — the decoded form of a stored credential hash
//! - [`encode`] — produce the wire string for a record
//! - [`decode`] — parse a wire string back into a record
//!
//! # Wire Grammars
//!
//! Exactly two shapes are accepted:
//!
//! ```text
//! <algorithm>:<iterations>:<salt_base64>:<key_base64>    derived (current)
//! <32 hex characters, no colons>                         legacy digest
//! ```
//!
//! Anything else is rejected with [`CredentialError::MalformedHash`];
//! decoding never attempts partial recovery. The legacy shape is accepted
//! for verifying old stored credentials only — new hashes are always
//! written in the four-field form.

use data_encoding::{BASE64, HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::algorithm::HmacAlgorithm;
use crate::error::CredentialError;

/// Byte length of a legacy unsalted digest.
pub const LEGACY_DIGEST_LEN: usize = 16;

/// Character length of a hex-encoded legacy digest.
const LEGACY_HEX_LEN: usize = 32;

/// Number of colon-separated fields in the derived form.
const DERIVED_FIELDS: usize = 4;

/// Decoded form of a stored credential hash.
///
/// A record is an immutable value: it is produced by [`decode`] or by hash
/// creation, then either serialized with [`encode`] or compared and
/// discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashRecord {
    /// A PBKDF2-derived hash in the current four-field format.
    Derived {
        /// HMAC primitive used for derivation.
        algorithm: HmacAlgorithm,
        /// Iteration count, at least 1.
        iterations: u32,
        /// Raw salt bytes (base64 on the wire).
        salt: Vec<u8>,
        /// Raw derived key bytes (base64 on the wire).
        key: Vec<u8>,
    },
    /// An unsalted single-round digest from the historical scheme.
    /// Verified for backward compatibility, never produced by new code.
    LegacyDigest {
        /// Raw digest bytes (hex on the wire).
        digest: [u8; LEGACY_DIGEST_LEN],
    },
}

/// Serialize a record into its wire string.
///
/// The legacy arm exists so that `decode ∘ encode` is an identity over all
/// records; creation code only ever builds the derived form.
#[must_use]
pub fn encode(record: &HashRecord) -> String {
    match record {
        HashRecord::Derived {
            algorithm,
            iterations,
            salt,
            key,
        } => format!(
            "{}:{}:{}:{}",
            algorithm.name(),
            iterations,
            BASE64.encode(salt),
            BASE64.encode(key)
        ),
        HashRecord::LegacyDigest { digest } => HEXLOWER.encode(digest),
    }
}

/// Parse a wire string into a [`HashRecord`].
///
/// # Errors
///
/// Returns [`CredentialError::UnsupportedAlgorithm`] if the algorithm field
/// names a primitive outside the registry, and
/// [`CredentialError::MalformedHash`] for any other deviation from the two
/// grammars: wrong field count, non-numeric or zero iteration field,
/// invalid base64, or a single field that is not exactly 32 hex characters.
pub fn decode(encoded: &str) -> Result<HashRecord, CredentialError> {
    let fields: Vec<&str> = encoded.split(':').collect();
    match fields.as_slice() {
        [algorithm, iterations, salt, key] => decode_derived(algorithm, iterations, salt, key),
        [digest] => decode_legacy(digest),
        other => Err(CredentialError::MalformedHash(format!(
            "expected {DERIVED_FIELDS} colon-separated fields, got {}",
            other.len()
        ))),
    }
}

/// Decode the four-field derived form.
fn decode_derived(
    algorithm: &str,
    iterations: &str,
    salt: &str,
    key: &str,
) -> Result<HashRecord, CredentialError> {
    let algorithm = HmacAlgorithm::from_name(algorithm)?;

    if iterations.is_empty() || !iterations.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CredentialError::MalformedHash(
            "iteration field is not a decimal integer".into(),
        ));
    }
    let iterations: u32 = iterations.parse().map_err(|_| {
        CredentialError::MalformedHash("iteration field is out of range".into())
    })?;
    if iterations == 0 {
        return Err(CredentialError::MalformedHash(
            "iteration count must be positive".into(),
        ));
    }

    let salt = BASE64
        .decode(salt.as_bytes())
        .map_err(|_| CredentialError::MalformedHash("salt field is not valid base64".into()))?;
    let key = BASE64
        .decode(key.as_bytes())
        .map_err(|_| CredentialError::MalformedHash("key field is not valid base64".into()))?;

    Ok(HashRecord::Derived {
        algorithm,
        iterations,
        salt,
        key,
    })
}

/// Decode the colon-free legacy form: exactly 32 hex characters.
fn decode_legacy(encoded: &str) -> Result<HashRecord, CredentialError> {
    if encoded.len() != LEGACY_HEX_LEN || !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CredentialError::MalformedHash(
            "single-field hash is not a 32-character hex digest".into(),
        ));
    }

    let bytes = HEXLOWER_PERMISSIVE
        .decode(encoded.as_bytes())
        .map_err(|_| CredentialError::MalformedHash("digest is not valid hex".into()))?;
    let digest: [u8; LEGACY_DIGEST_LEN] = bytes.try_into().map_err(|_| {
        CredentialError::MalformedHash("digest does not decode to 16 bytes".into())
    })?;

    Ok(HashRecord::LegacyDigest { digest })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
