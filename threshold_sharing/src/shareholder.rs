//! What a participant does with its share: check it against the dealer's commitments, advertise the
//! matching public share with a Schnorr proof and produce partial decryptions.
//!
//! Checking share `(i, v)` against commitments `C_0, ..., C_{t-1}` to the polynomial's coefficients
//! relies on `C_0 + C_1 * i + C_2 * i^2 + ... + C_{t-1} * i^{t-1}` being a commitment to `P(i)`.
//!
//! Proofs are bound to the share id through their extra data so a packet can't be replayed under
//! another index.

use crate::{
    common::{Commitments, PartialDecryptor, PublicShare, SchnorrPacket, SecretPacket, SecretShare, ShareId},
    error::SSError,
};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;
use ark_std::rand::RngCore;
use sigma_nizk::{prove_ddh, prove_dlog, verify_ddh, verify_dlog, ProofConfig};
use threshold_utils::{ff::powers, group::GroupContext, hashing_utils::Algorithm};

/// `sum_j commitments[j] * id^j`
fn evaluate_commitments<G: AffineRepr>(id: ShareId, commitments: &Commitments<G>) -> G::Group {
    let powers = powers(&G::ScalarField::from(id as u64), commitments.0.len());
    G::Group::msm_unchecked(&commitments.0, &powers)
}

fn id_bytes(id: &ShareId) -> [u8; 2] {
    id.to_le_bytes()
}

/// Check a share against Feldman commitments, i.e. `g * value == sum_j commitments[j] * id^j`
pub fn verify_feldman_commitments<G: AffineRepr>(
    context: &GroupContext<G>,
    share: &SecretShare<G::ScalarField>,
    commitments: &Commitments<G>,
) -> Result<(), SSError> {
    if evaluate_commitments(share.id, commitments)
        != context.generator.mul_bigint(share.value.into_bigint())
    {
        return Err(SSError::InvalidShare(share.id));
    }
    Ok(())
}

/// Check a share and its binding against Pedersen commitments, i.e.
/// `g * value + h * binding == sum_j commitments[j] * id^j` where `h` is `public_reference`
pub fn verify_pedersen_commitments<G: AffineRepr>(
    context: &GroupContext<G>,
    share: &SecretShare<G::ScalarField>,
    binding: &G::ScalarField,
    public_reference: &G,
    commitments: &Commitments<G>,
) -> Result<(), SSError> {
    let expected = context.generator.mul_bigint(share.value.into_bigint())
        + public_reference.mul_bigint(binding.into_bigint());
    if evaluate_commitments(share.id, commitments) != expected {
        return Err(SSError::InvalidShare(share.id));
    }
    Ok(())
}

/// Verify a Feldman packet and strip it down to the share
pub fn parse_feldman_packet<G: AffineRepr>(
    context: &GroupContext<G>,
    commitments: &Commitments<G>,
    packet: &SecretPacket<G::ScalarField>,
) -> Result<SecretShare<G::ScalarField>, SSError> {
    let share = packet.share();
    verify_feldman_commitments(context, &share, commitments)?;
    Ok(share)
}

/// Verify a Pedersen packet, which must carry a binding, and strip it down to the share
pub fn parse_pedersen_packet<G: AffineRepr>(
    context: &GroupContext<G>,
    commitments: &Commitments<G>,
    public_reference: &G,
    packet: &SecretPacket<G::ScalarField>,
) -> Result<SecretShare<G::ScalarField>, SSError> {
    let binding = packet.binding.ok_or(SSError::MissingBinding(packet.id))?;
    let share = packet.share();
    verify_pedersen_commitments(context, &share, &binding, public_reference, commitments)?;
    Ok(share)
}

/// Publish `g * value` with a proof of knowledge of `value`, bound to `nonce` if given
pub fn create_schnorr_packet<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    share: &SecretShare<G::ScalarField>,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
) -> Result<SchnorrPacket<G>, SSError> {
    let value = context.exp_generator(&share.value);
    let id = id_bytes(&share.id);
    let config = ProofConfig::new(algorithm)
        .with_extras(&id)
        .with_nonce(nonce);
    let proof = prove_dlog(rng, context, context.generator, value, share.value, &config)?;
    Ok(SchnorrPacket {
        id: share.id,
        value,
        proof,
    })
}

pub fn verify_schnorr_packet<G: AffineRepr>(
    context: &GroupContext<G>,
    packet: &SchnorrPacket<G>,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
) -> Result<(), SSError> {
    let id = id_bytes(&packet.id);
    let config = ProofConfig::new(algorithm)
        .with_extras(&id)
        .with_nonce(nonce);
    match verify_dlog(&packet.proof, context, context.generator, packet.value, &config) {
        Ok(true) => Ok(()),
        Ok(false) => Err(SSError::InvalidSchnorrPacket(packet.id)),
        Err(e) => {
            log::debug!("Malformed proof in schnorr packet {}: {}", packet.id, e);
            Err(SSError::InvalidSchnorrPacket(packet.id))
        }
    }
}

/// `alpha * value` with a proof that `(g, alpha, g * value, alpha * value)` is a DDH tuple, which shows
/// it was computed with the share behind the holder's public share
pub fn create_partial_decryptor<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    share: &SecretShare<G::ScalarField>,
    alpha: &G,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
) -> Result<PartialDecryptor<G>, SSError> {
    let public_share = context.exp_generator(&share.value);
    let value = alpha.mul_bigint(share.value.into_bigint()).into_affine();
    let id = id_bytes(&share.id);
    let config = ProofConfig::new(algorithm)
        .with_extras(&id)
        .with_nonce(nonce);
    let proof = prove_ddh(
        rng,
        context,
        (context.generator, *alpha, public_share, value),
        share.value,
        &config,
    )?;
    Ok(PartialDecryptor {
        id: share.id,
        value,
        proof,
    })
}

pub fn verify_partial_decryptor<G: AffineRepr>(
    context: &GroupContext<G>,
    decryptor: &PartialDecryptor<G>,
    alpha: &G,
    public_share: &PublicShare<G>,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
) -> Result<(), SSError> {
    if public_share.id != decryptor.id {
        return Err(SSError::InvalidPartialDecryptor(decryptor.id));
    }
    let id = id_bytes(&decryptor.id);
    let config = ProofConfig::new(algorithm)
        .with_extras(&id)
        .with_nonce(nonce);
    match verify_ddh(
        &decryptor.proof,
        context,
        (context.generator, *alpha, public_share.value, decryptor.value),
        &config,
    ) {
        Ok(true) => Ok(()),
        Ok(false) => Err(SSError::InvalidPartialDecryptor(decryptor.id)),
        Err(e) => {
            log::debug!("Malformed proof in partial decryptor {}: {}", decryptor.id, e);
            Err(SSError::InvalidPartialDecryptor(decryptor.id))
        }
    }
}
