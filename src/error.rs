use thiserror::Error;

/// Errors raised at the key-material boundary.
///
/// Signature verification never reports through this type: a bad signature
/// is a `false` result, not an error. Only malformed or mismatched key
/// material raises.
#[derive(Debug, Error)]
pub enum Error {
    /// PEM or DER input could not be decoded into a structurally valid key.
    #[error("malformed key data: {0}")]
    Parse(String),

    /// The decoded key is not an elliptic-curve key on curve P-256.
    #[error("key type mismatch: {0}")]
    TypeMismatch(String),

    /// Key material could not be re-encoded to PEM or DER.
    #[error("key encoding failed: {0}")]
    Encode(String),
}
