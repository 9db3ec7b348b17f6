//! Elliptic Curve Integrated Encryption Scheme (ECIES). A hybrid scheme where the Diffie-Hellman
//! shared secret `alpha * sk` is passed through HKDF-SHA256 to key XChaCha20-Poly1305.

use crate::{
    elgamal::keygen,
    encryption::{EncryptionError, ThresholdCiphertext},
};
use aead::{generic_array::GenericArray, Aead, KeyInit};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec};
use chacha20poly1305::XChaCha20Poly1305;
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

pub const KEY_BYTE_SIZE: usize = 32;
pub const NONCE_BYTE_SIZE: usize = 24;

#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Encryption<G: AffineRepr> {
    /// Ephemeral public key
    pub alpha: G,
    pub nonce: [u8; NONCE_BYTE_SIZE],
    pub ciphertext: Vec<u8>,
    /// Bound to the derived key
    pub info: Vec<u8>,
}

impl<G: AffineRepr> Encryption<G> {
    pub fn encrypt<R: RngCore>(
        rng: &mut R,
        msg: &[u8],
        other_pk: &G,
        gen: &G,
        info: &[u8],
    ) -> Result<Self, EncryptionError> {
        let (sk, pk) = keygen::<R, G>(rng, gen);
        let shared_secret = (*other_pk * sk.0).into_affine();
        let mut nonce = [0u8; NONCE_BYTE_SIZE];
        rng.fill_bytes(&mut nonce);
        let cipher = Self::cipher(&shared_secret, info)?;
        let ciphertext = cipher
            .encrypt(GenericArray::from_slice(&nonce), msg)
            .map_err(|_| EncryptionError::Aead)?;
        Ok(Self {
            alpha: pk.0,
            nonce,
            ciphertext,
            info: info.to_vec(),
        })
    }

    pub fn decrypt(&self, sk: &G::ScalarField) -> Result<Vec<u8>, EncryptionError> {
        self.decapsulate(&(self.alpha * sk).into_affine())
    }

    fn cipher(shared_secret: &G, info: &[u8]) -> Result<XChaCha20Poly1305, EncryptionError> {
        let mut shared_secret_bytes = Vec::with_capacity(shared_secret.compressed_size());
        shared_secret.serialize_compressed(&mut shared_secret_bytes)?;
        let hk = Hkdf::<Sha256>::new(None, &shared_secret_bytes);
        let mut sym_key = [0u8; KEY_BYTE_SIZE];
        hk.expand(info, &mut sym_key)
            .map_err(|_| EncryptionError::KeyDerivation)?;
        let cipher = XChaCha20Poly1305::new(GenericArray::from_slice(&sym_key));
        sym_key.zeroize();
        shared_secret_bytes.zeroize();
        Ok(cipher)
    }
}

impl<G: AffineRepr> ThresholdCiphertext<G> for Encryption<G> {
    fn alpha(&self) -> &G {
        &self.alpha
    }

    fn decapsulate(&self, decryptor: &G) -> Result<Vec<u8>, EncryptionError> {
        Self::cipher(decryptor, &self.info)?
            .decrypt(
                GenericArray::from_slice(&self.nonce),
                self.ciphertext.as_ref(),
            )
            .map_err(|_| EncryptionError::Aead)
    }
}
