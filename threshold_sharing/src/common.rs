use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sigma_nizk::NizkProof;
use threshold_utils::{group::GroupContext, serde_utils::ArkObjectBytes};
use zeroize::Zeroize;

/// Index of a share. Shares of a sharing with `n` shares are numbered `1..=n`, 0 is never a share
/// as the secret sits at `x = 0`.
pub type ShareId = u16;

/// Evaluation of the sharing polynomial at `id`
#[serde_as]
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Zeroize,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct SecretShare<F: PrimeField> {
    pub id: ShareId,
    #[serde_as(as = "ArkObjectBytes")]
    pub value: F,
}

/// `generator * value` of the `SecretShare` with the same id
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicShare<G: AffineRepr> {
    pub id: ShareId,
    #[serde_as(as = "ArkObjectBytes")]
    pub value: G,
}

/// A share as sent by the dealer. Pedersen sharing adds the blinding polynomial's evaluation at `id`.
#[serde_as]
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Zeroize,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct SecretPacket<F: PrimeField> {
    pub id: ShareId,
    #[serde_as(as = "ArkObjectBytes")]
    pub value: F,
    #[serde_as(as = "Option<ArkObjectBytes>")]
    pub binding: Option<F>,
}

/// Commitments to the coefficients of the sharing polynomial, constant term first. Either
/// `generator * a_j` (Feldman) or `generator * a_j + h * b_j` (Pedersen).
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Commitments<G: AffineRepr>(#[serde_as(as = "Vec<ArkObjectBytes>")] pub Vec<G>);

/// A public share advertised with a proof of knowledge of its discrete log
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct SchnorrPacket<G: AffineRepr> {
    pub id: ShareId,
    #[serde_as(as = "ArkObjectBytes")]
    pub value: G,
    pub proof: NizkProof<G>,
}

/// `alpha * share` for a ciphertext's ephemeral element `alpha`, with a proof that the same share is
/// behind the holder's public share
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct PartialDecryptor<G: AffineRepr> {
    pub id: ShareId,
    #[serde_as(as = "ArkObjectBytes")]
    pub value: G,
    pub proof: NizkProof<G>,
}

impl<F: PrimeField> Drop for SecretShare<F> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<F: PrimeField> Drop for SecretPacket<F> {
    fn drop(&mut self) {
        self.value.zeroize();
        self.binding.zeroize();
    }
}

impl<F: PrimeField> From<(ShareId, F)> for SecretShare<F> {
    fn from((id, value): (ShareId, F)) -> Self {
        Self { id, value }
    }
}

impl<F: PrimeField> SecretShare<F> {
    pub fn public_share<G: AffineRepr<ScalarField = F>>(
        &self,
        context: &GroupContext<G>,
    ) -> PublicShare<G> {
        PublicShare {
            id: self.id,
            value: context.exp_generator(&self.value),
        }
    }
}

impl<F: PrimeField> SecretPacket<F> {
    /// The share without the binding
    pub fn share(&self) -> SecretShare<F> {
        SecretShare {
            id: self.id,
            value: self.value,
        }
    }
}

impl<G: AffineRepr> From<Vec<G>> for Commitments<G> {
    fn from(commitments: Vec<G>) -> Self {
        Self(commitments)
    }
}

impl<G: AffineRepr> Commitments<G> {
    /// Commitment to the constant term, i.e. the secret
    pub fn commitment_to_secret(&self) -> Option<&G> {
        self.0.first()
    }

    /// The threshold of the sharing these commit to
    pub fn threshold(&self) -> usize {
        self.0.len()
    }
}
