//! Keyed-hash primitive registry for PBKDF2 derivation.
//!
//! Stored hashes name their algorithm in the first wire field; only names
//! present in this registry are accepted, and unknown names are rejected at
//! decode time before any derivation work is attempted.

use ring::hmac;
use serde::{Deserialize, Serialize};

use crate::error::CredentialError;

/// HMAC primitives accepted for key derivation.
///
/// `sha256` is the default for newly created hashes. `sha1` remains in the
/// registry so that hashes derived under older configurations keep
/// verifying; it is never selected by [`Default`] configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HmacAlgorithm {
    /// HMAC-SHA1 (verification of pre-existing hashes only).
    Sha1,
    /// HMAC-SHA256 (default).
    Sha256,
    /// HMAC-SHA384.
    Sha384,
    /// HMAC-SHA512.
    Sha512,
}

impl HmacAlgorithm {
    /// Wire name of this algorithm, as stored in the first hash field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Native digest length in bytes (`hLen` in RFC 2898 terms).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Map to the corresponding `ring::hmac::Algorithm`.
    pub(crate) fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha384 => hmac::HMAC_SHA384,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }

    /// Resolve a wire name to a registry entry, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UnsupportedAlgorithm`] for any name not in
    /// the registry.
    pub fn from_name(name: &str) -> Result<Self, CredentialError> {
        for candidate in [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512] {
            if name.eq_ignore_ascii_case(candidate.name()) {
                return Ok(candidate);
            }
        }
        Err(CredentialError::UnsupportedAlgorithm(name.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
