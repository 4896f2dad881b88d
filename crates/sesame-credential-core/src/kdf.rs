//! PBKDF2 key derivation over a pluggable HMAC primitive.
//!
//! This module provides:
//! - [`derive`] — stretch a password + salt into a derived key of the
//!   requested length (RFC 2898, test vectors per RFC 6070)
//!
//! The function is pure and deterministic: identical inputs always produce
//! identical output, and no global state is read or written. Derivation
//! always runs to completion once started; verification-time callers rely
//! on this to keep failure timing independent of the candidate password.

use ring::hmac;
use zeroize::Zeroize;

use crate::algorithm::HmacAlgorithm;
use crate::error::CredentialError;

/// Length of the big-endian block counter appended to the salt.
const COUNTER_LEN: usize = 4;

/// Derive `key_length` bytes from `password` and `salt` using
/// PBKDF2-HMAC with the given primitive.
///
/// Per RFC 2898: the output is the concatenation of `ceil(key_length /
/// hLen)` blocks, truncated to `key_length`. Block `i` starts from
/// `U1 = HMAC(password, salt ‖ BE32(i))` and XOR-accumulates
/// `iterations - 1` further HMAC applications.
///
/// Intermediate block state is zeroized before returning; the returned key
/// is owned by the caller.
///
/// # Errors
///
/// Returns [`CredentialError::InvalidParameters`] if `iterations` or
/// `key_length` is zero, or if `key_length` is too large to index blocks
/// with a 32-bit counter.
pub fn derive(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> Result<Vec<u8>, CredentialError> {
    if iterations == 0 {
        return Err(CredentialError::InvalidParameters(
            "iteration count must be at least 1".into(),
        ));
    }
    if key_length == 0 {
        return Err(CredentialError::InvalidParameters(
            "derived key length must be at least 1 byte".into(),
        ));
    }

    let h_len = algorithm.output_len();
    // h_len is fixed by the registry and never zero.
    #[allow(clippy::arithmetic_side_effects)]
    let block_count = key_length.div_ceil(h_len);

    let key = hmac::Key::new(algorithm.to_ring_algorithm(), password);
    let mut output = Vec::with_capacity(block_count.saturating_mul(h_len));

    let mut message = Vec::with_capacity(salt.len().saturating_add(COUNTER_LEN));
    for block in 1..=block_count {
        let counter = u32::try_from(block).map_err(|_| {
            CredentialError::InvalidParameters(format!(
                "derived key length {key_length} exceeds the PBKDF2 block counter range"
            ))
        })?;

        // U1 = HMAC(password, salt ‖ BE32(i))
        message.clear();
        message.extend_from_slice(salt);
        message.extend_from_slice(&counter.to_be_bytes());
        let mut last = hmac::sign(&key, &message).as_ref().to_vec();

        // T = U1 ⊕ U2 ⊕ … ⊕ Uc
        let mut xorsum = last.clone();
        for _ in 1..iterations {
            last = hmac::sign(&key, &last).as_ref().to_vec();
            for (acc, byte) in xorsum.iter_mut().zip(last.iter()) {
                *acc ^= byte;
            }
        }

        output.extend_from_slice(&xorsum);
        xorsum.zeroize();
        last.zeroize();
    }

    output.truncate(key_length);
    Ok(output)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
