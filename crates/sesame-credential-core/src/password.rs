//! Random string generation for tokens and temporary passwords.
//!
//! Unrelated to hash salts: salts are raw bytes drawn directly from
//! [`crate::random`], while these strings are human-pasteable ASCII used
//! for reset tokens and one-time passwords. Every character is sampled
//! uniformly from the alphabet via rejection sampling over CSPRNG bytes;
//! if the OS source is unavailable the call fails instead of degrading to
//! a non-cryptographic generator.

use crate::error::CredentialError;
use crate::random;

/// Default generated string length (144 bits over the simple alphabet).
pub const DEFAULT_TOKEN_LEN: usize = 24;

// Character sets
const DIGITS: &[u8] = b"0123456789";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const SYMBOLS: &[u8] = b"!@#$%&*?";

/// Generate a random string of `length` characters.
///
/// The alphabet is digits plus upper- and lowercase letters; `complex`
/// additionally mixes in the symbol set `!@#$%&*?`. Characters are sampled
/// independently and uniformly.
///
/// # Errors
///
/// Returns [`CredentialError::InvalidParameters`] if `length` is zero and
/// [`CredentialError::RandomnessUnavailable`] if the OS CSPRNG fails.
///
/// # Panics
///
/// Panics if the generated bytes are not valid UTF-8 (cannot happen: all
/// alphabet characters are ASCII).
pub fn generate_random_string(length: usize, complex: bool) -> Result<String, CredentialError> {
    if length == 0 {
        return Err(CredentialError::InvalidParameters(
            "generated string length must be at least 1".into(),
        ));
    }

    let mut alphabet = Vec::with_capacity(
        DIGITS
            .len()
            .saturating_add(UPPERCASE.len())
            .saturating_add(LOWERCASE.len())
            .saturating_add(SYMBOLS.len()),
    );
    alphabet.extend_from_slice(DIGITS);
    alphabet.extend_from_slice(UPPERCASE);
    alphabet.extend_from_slice(LOWERCASE);
    if complex {
        alphabet.extend_from_slice(SYMBOLS);
    }

    // Rejection sampling: only bytes below the largest multiple of the
    // alphabet size are used, so every character is equally likely.
    // alphabet.len() is 62 or 70 — never zero, never above 256.
    #[allow(clippy::arithmetic_side_effects)]
    let limit = 256usize - (256usize % alphabet.len());

    let mut chars = Vec::with_capacity(length);
    while chars.len() < length {
        let needed = length.saturating_sub(chars.len());
        for byte in random::random_bytes(needed)? {
            let value = usize::from(byte);
            if value < limit {
                #[allow(clippy::arithmetic_side_effects)]
                chars.push(alphabet[value % alphabet.len()]);
            }
        }
    }

    // Safety: all alphabet characters are ASCII.
    Ok(String::from_utf8(chars).expect("generated chars are ASCII"))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
