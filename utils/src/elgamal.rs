//! Elgamal encryption of group elements

use crate::encryption::{EncryptionError, ThresholdCiphertext};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{ops::Neg, rand::RngCore, vec::Vec, UniformRand};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct SecretKey<F: PrimeField>(pub F);

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey<G: AffineRepr>(pub G);

impl<F: PrimeField> SecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }
}

impl<G: AffineRepr> PublicKey<G> {
    pub fn new(secret_key: &SecretKey<G::ScalarField>, gen: &G) -> Self {
        Self(gen.mul_bigint(secret_key.0.into_bigint()).into_affine())
    }
}

pub fn keygen<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    gen: &G,
) -> (SecretKey<G::ScalarField>, PublicKey<G>) {
    let sk = SecretKey::new(rng);
    let pk = PublicKey::new(&sk, gen);
    (sk, pk)
}

/// Elgamal encryption of a group element `m`
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ciphertext<G: AffineRepr> {
    /// Ephemeral public key `r * gen`
    pub alpha: G,
    /// `m + r * pk`
    pub beta: G,
}

impl<G: AffineRepr> Ciphertext<G> {
    /// Returns the ciphertext and randomness created for encryption
    pub fn new<R: RngCore>(
        rng: &mut R,
        msg: &G,
        public_key: &G,
        gen: &G,
    ) -> (Self, G::ScalarField) {
        let r = G::ScalarField::rand(rng);
        let r_bi = r.into_bigint();
        (
            Self {
                alpha: gen.mul_bigint(r_bi).into_affine(),
                beta: (public_key.mul_bigint(r_bi) + msg).into_affine(),
            },
            r,
        )
    }

    pub fn decrypt(&self, secret_key: &G::ScalarField) -> G {
        self.decrypt_with_decryptor(&(self.alpha * secret_key).into_affine())
    }

    /// Recover the message given `alpha * sk`
    pub fn decrypt_with_decryptor(&self, decryptor: &G) -> G {
        (decryptor.into_group().neg() + self.beta).into_affine()
    }
}

impl<G: AffineRepr> ThresholdCiphertext<G> for Ciphertext<G> {
    fn alpha(&self) -> &G {
        &self.alpha
    }

    /// The compressed encoding of the message
    fn decapsulate(&self, decryptor: &G) -> Result<Vec<u8>, EncryptionError> {
        let msg = self.decrypt_with_decryptor(decryptor);
        let mut bytes = Vec::with_capacity(msg.compressed_size());
        msg.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }
}
