//! Detached ECDSA signatures over precomputed schema hashes.
//!
//! Callers compute the SHA-256 hash of canonical schema content themselves
//! and hand the bytes in here. The signing primitive treats them as an
//! opaque message and applies ECDSA with SHA-256; the interchange form is a
//! base64-encoded DER (r,s) signature.

use base64::{engine::general_purpose, Engine as _};
use p256::ecdsa::{signature::Signer, signature::Verifier, Signature, SigningKey, VerifyingKey};
use p256::{PublicKey, SecretKey};

use crate::error::Error;
use crate::keys::KeyManager;

/// Sign data with a PEM-encoded private key and return the base64 signature.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::TypeMismatch`] if the private key
/// PEM does not decode to an EC P-256 key.
pub fn sign_data(private_key_pem: &str, data: &[u8]) -> Result<String, Error> {
    let private_key = KeyManager::load_private_key_pem(private_key_pem)?;
    Ok(SignatureManager::sign_hash(data, &private_key))
}

/// Verify a base64 signature over data with a PEM-encoded public key.
///
/// Key-loading failures raise; once the key is loaded, any signature
/// problem is reported as `Ok(false)`.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::TypeMismatch`] if the public key
/// PEM does not decode to an EC P-256 key.
pub fn verify_signature(
    public_key_pem: &str,
    data: &[u8],
    signature_b64: &str,
) -> Result<bool, Error> {
    let public_key = KeyManager::load_public_key_pem(public_key_pem)?;
    Ok(SignatureManager::verify_signature(
        data,
        signature_b64,
        &public_key,
    ))
}

/// Manages ECDSA signature creation and verification.
pub struct SignatureManager;

impl SignatureManager {
    /// Sign hash bytes using ECDSA P-256 and return a base64-encoded
    /// signature.
    ///
    /// Infallible: the key's kind and curve are carried by its type, and
    /// P-256 signing cannot fail for any input length.
    pub fn sign_hash(hash_bytes: &[u8], private_key: &SecretKey) -> String {
        let signing_key = SigningKey::from(private_key.clone());
        let signature: Signature = signing_key.sign(hash_bytes);
        general_purpose::STANDARD.encode(signature.to_der())
    }

    /// Verify an ECDSA signature against hash bytes.
    ///
    /// Total function: malformed base64, malformed DER, and cryptographic
    /// mismatch all yield `false`. The caller cannot distinguish which step
    /// rejected the signature, so a probing adversary learns nothing from
    /// the failure mode.
    pub fn verify_signature(hash_bytes: &[u8], signature_b64: &str, public_key: &PublicKey) -> bool {
        let verifying_key = VerifyingKey::from(*public_key);
        let signature_der = match general_purpose::STANDARD.decode(signature_b64) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let signature = match Signature::from_der(&signature_der) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        verifying_key.verify(hash_bytes, &signature).is_ok()
    }

    /// Sign a schema's canonical content hash and return the base64
    /// signature.
    pub fn sign_schema_hash(schema_hash: &[u8], private_key: &SecretKey) -> String {
        Self::sign_hash(schema_hash, private_key)
    }

    /// Verify a schema signature against the schema's canonical content
    /// hash.
    pub fn verify_schema_signature(
        schema_hash: &[u8],
        signature_b64: &str,
        public_key: &PublicKey,
    ) -> bool {
        Self::verify_signature(schema_hash, signature_b64, public_key)
    }
}
