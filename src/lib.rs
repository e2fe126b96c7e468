//! # schemaseal
//!
//! Key identity and detached-signature primitives for schema pinning.
//!
//! This crate is the trust anchor of a schema-pinning scheme: every
//! higher-level operation (pinning a schema to a known public key, detecting
//! tampering) reduces to the primitives here. It covers ECDSA P-256 key
//! generation, PEM serialization, deterministic key fingerprinting, and
//! creation/verification of detached signatures over precomputed content
//! hashes. Schema canonicalization, pinning policy, and transport are the
//! caller's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemaseal::keys::{calculate_key_id, generate_key_pair};
//! use schemaseal::sign::{sign_data, verify_signature};
//!
//! // Generate a new key pair
//! let key_pair = generate_key_pair().unwrap();
//!
//! // Sign a schema's canonical content hash
//! let schema_hash = b"\x9f\x86\xd0\x81\x88L}e"; // computed by the caller
//! let signature = sign_data(&key_pair.private_key_pem, schema_hash).unwrap();
//!
//! // Verify the signature
//! let is_valid = verify_signature(&key_pair.public_key_pem, schema_hash, &signature).unwrap();
//! assert!(is_valid);
//!
//! // The key's stable identity handle, as recorded by a pinning store
//! let key_id = calculate_key_id(&key_pair.public_key_pem).unwrap();
//! assert!(key_id.starts_with("sha256:"));
//! ```
//!
//! ## Security
//!
//! - ECDSA on NIST P-256 (secp256r1) with SHA-256; keys on any other curve
//!   or algorithm are rejected at the PEM boundary
//! - Unencrypted PKCS#8 for private keys, SubjectPublicKeyInfo for public
//!   keys
//! - Key fingerprints are SHA-256 over the SPKI DER, `sha256:<hex>`
//! - Verification is a total function: every malformed or mismatched
//!   signature yields `false`, never a distinguishable error
//!
//! All operations are pure and reentrant; key objects are immutable and safe
//! to share across threads.

pub mod error;
pub mod keys;
pub mod sign;

pub use error::Error;
