//! `sesame-credential-core` — Credential hashing and verification for SESAME.
//!
//! This crate is the account-security audit target: zero network, zero
//! async, zero framework dependencies. It covers exactly one concern —
//! given a password and an optional existing hash, produce or verify a
//! stored hash — plus the random material (salts, tokens) that concern
//! needs. Session handling, account storage, and request handling live in
//! the calling layers.
//!
//! Write path: [`create_hash`] salts and stretches a password with
//! PBKDF2 and encodes the self-describing
//! `algorithm:iterations:salt:key` string. Read path: [`verify_password`]
//! decodes a stored string (including the historical 32-hex unsalted
//! digest form), re-derives, and compares in constant time.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod algorithm;
pub mod compare;
pub mod hash_format;
pub mod kdf;
pub mod random;

pub mod credential;
pub mod password;

pub use algorithm::HmacAlgorithm;
pub use compare::constant_time_eq;
pub use credential::{
    create_hash, verify_password, HashingConfig, DEFAULT_ITERATIONS, DEFAULT_KEY_LEN,
    DEFAULT_SALT_LEN, MIN_SALT_LEN,
};
pub use error::CredentialError;
pub use hash_format::{decode, encode, HashRecord, LEGACY_DIGEST_LEN};
pub use kdf::derive;
pub use password::{generate_random_string, DEFAULT_TOKEN_LEN};
pub use random::random_bytes;
