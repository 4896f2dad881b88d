//! Password hash creation and verification.
//!
//! This module provides:
//! - [`HashingConfig`] — derivation parameters for newly created hashes
//! - [`create_hash`] — salt, derive, and encode a new stored hash
//! - [`verify_password`] — check a candidate password against a stored hash
//!
//! Creation always writes the four-field derived format; the legacy digest
//! form is only ever read, on the verification path.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::algorithm::HmacAlgorithm;
use crate::compare::constant_time_eq;
use crate::error::CredentialError;
use crate::hash_format::{self, HashRecord};
use crate::kdf;
use crate::random;

/// Default iteration count for new hashes.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default salt length in bytes for new hashes.
pub const DEFAULT_SALT_LEN: usize = 24;

/// Default derived-key length in bytes for new hashes.
pub const DEFAULT_KEY_LEN: usize = 24;

/// Minimum salt length accepted on the creation path.
///
/// Verification places no minimum on stored salts so that hashes created
/// under older configurations keep verifying.
pub const MIN_SALT_LEN: usize = 24;

/// Derivation parameters for newly created hashes.
///
/// A config is a plain value: the caller owns it, caches it if parsing it
/// from configuration is expensive, and passes it in per call. The crate
/// keeps no global parameter state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// HMAC primitive for derivation.
    pub algorithm: HmacAlgorithm,
    /// Iteration count (time cost), at least 1.
    pub iterations: u32,
    /// Salt length in bytes, at least [`MIN_SALT_LEN`].
    pub salt_len: usize,
    /// Derived key length in bytes, at least 1.
    pub key_len: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HmacAlgorithm::Sha256,
            iterations: DEFAULT_ITERATIONS,
            salt_len: DEFAULT_SALT_LEN,
            key_len: DEFAULT_KEY_LEN,
        }
    }
}

/// Create a stored hash for `password` under the given config.
///
/// Draws a fresh salt from the OS CSPRNG, derives the key with PBKDF2, and
/// returns the encoded four-field string. The caller persists the string
/// verbatim; it carries everything verification needs.
///
/// # Errors
///
/// Returns [`CredentialError::InvalidParameters`] if the config requests a
/// salt below [`MIN_SALT_LEN`], zero iterations, or a zero key length.
/// Returns [`CredentialError::RandomnessUnavailable`] if the OS CSPRNG
/// fails — creation is aborted rather than falling back to a weaker source.
pub fn create_hash(password: &[u8], config: &HashingConfig) -> Result<String, CredentialError> {
    if config.salt_len < MIN_SALT_LEN {
        return Err(CredentialError::InvalidParameters(format!(
            "salt length {} below minimum {MIN_SALT_LEN}",
            config.salt_len
        )));
    }

    let salt = random::random_bytes(config.salt_len)?;
    let key = kdf::derive(
        config.algorithm,
        password,
        &salt,
        config.iterations,
        config.key_len,
    )?;

    Ok(hash_format::encode(&HashRecord::Derived {
        algorithm: config.algorithm,
        iterations: config.iterations,
        salt,
        key,
    }))
}

/// Verify a candidate password against a stored hash string.
///
/// Any failure — malformed hash, unknown algorithm, unusable parameters —
/// yields `false`, the same outcome as a wrong password. A corrupt stored
/// hash must never crash the authentication path; callers that want to
/// distinguish corruption from mismatch decode the hash separately and log
/// on their side.
///
/// Derivation always runs to completion before the constant-time
/// comparison, so verification timing does not depend on why a candidate
/// fails.
#[must_use]
pub fn verify_password(password: &[u8], stored: &str) -> bool {
    let Ok(record) = hash_format::decode(stored) else {
        return false;
    };

    match record {
        HashRecord::LegacyDigest { digest } => {
            let computed = md5::compute(password).0;
            constant_time_eq(&computed, &digest)
        }
        HashRecord::Derived {
            algorithm,
            iterations,
            salt,
            key,
        } => {
            let Ok(mut candidate) = kdf::derive(algorithm, password, &salt, iterations, key.len())
            else {
                return false;
            };
            let matches = constant_time_eq(&candidate, &key);
            candidate.zeroize();
            matches
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
