//! Cryptographically secure random byte acquisition.
//!
//! All salts and generated tokens draw from the operating system CSPRNG via
//! `ring::rand::SystemRandom`. When the OS source cannot be reached the
//! caller gets [`CredentialError::RandomnessUnavailable`] — there is no
//! fallback to a non-cryptographic generator, so a broken entropy source
//! aborts hash creation instead of silently weakening it.

use ring::rand::{SecureRandom, SystemRandom};

use crate::error::CredentialError;

/// Fill a fresh buffer of `len` bytes from the OS CSPRNG.
///
/// Acquisition may block briefly while the kernel entropy pool initializes;
/// this is a bounded, ordinarily sub-millisecond wait and is not treated as
/// an error.
///
/// # Errors
///
/// Returns [`CredentialError::RandomnessUnavailable`] if the OS source
/// fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, CredentialError> {
    let mut bytes = vec![0u8; len];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| CredentialError::RandomnessUnavailable)?;
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
