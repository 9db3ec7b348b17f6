//! Boundary to the encryption schemes a threshold decryption completes.
//!
//! Every scheme here encrypts under a public key `pk = gen * sk` by publishing an ephemeral `alpha =
//! gen * r`. Anyone holding `alpha * sk`, the decryptor, can finish decryption. When `sk` is shared,
//! the decryptor is recombined from partial decryptors `alpha * sk_i` without ever reconstructing `sk`.

use ark_ec::AffineRepr;
use ark_serialize::SerializationError;
use ark_std::{fmt, vec::Vec};

#[derive(Debug)]
pub enum EncryptionError {
    Serialization(SerializationError),
    /// The key derivation function could not produce a key of the requested size
    KeyDerivation,
    /// Authenticated encryption failed, e.g. the authentication tag did not match
    Aead,
}

impl From<SerializationError> for EncryptionError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl fmt::Display for EncryptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(e) => write!(f, "serialization error: {}", e),
            Self::KeyDerivation => write!(f, "could not derive symmetric key"),
            Self::Aead => write!(f, "authenticated encryption failed"),
        }
    }
}

/// A ciphertext that can be decrypted given the decryptor for its ephemeral element
pub trait ThresholdCiphertext<G: AffineRepr> {
    /// The ephemeral element `gen * r` that partial decryptors are computed on
    fn alpha(&self) -> &G;

    /// Complete decryption with the decryptor `alpha * sk`
    fn decapsulate(&self, decryptor: &G) -> Result<Vec<u8>, EncryptionError>;
}
