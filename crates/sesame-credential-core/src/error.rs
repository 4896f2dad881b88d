//! Error types for `sesame-credential-core`.

use thiserror::Error;

/// Errors produced by credential hashing operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The named hash algorithm is not in the supported registry.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Derivation parameters are out of range (zero iterations, zero key
    /// length, salt below the minimum).
    #[error("invalid derivation parameters: {0}")]
    InvalidParameters(String),

    /// A stored hash string matches neither accepted grammar.
    #[error("malformed stored hash: {0}")]
    MalformedHash(String),

    /// The operating system CSPRNG could not supply random bytes. There is
    /// no fallback source; the operation is aborted.
    #[error("secure random source unavailable")]
    RandomnessUnavailable,
}
