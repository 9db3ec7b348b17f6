//! Shorthands for the two relations used most: a single discrete log and a DDH tuple.

use crate::{
    error::NizkError,
    nizk::{prove, NizkProof, ProofConfig},
    relation::LinearRelation,
};
use ark_ec::AffineRepr;
use ark_std::{rand::RngCore, vec};
use threshold_utils::group::GroupContext;

/// Proof of knowledge of `x` in `y = u * x`
pub fn prove_dlog<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    u: G,
    y: G,
    x: G::ScalarField,
    config: &ProofConfig,
) -> Result<NizkProof<G>, NizkError> {
    prove(rng, context, &LinearRelation::dlog(u, y), vec![x], config)
}

pub fn verify_dlog<G: AffineRepr>(
    proof: &NizkProof<G>,
    context: &GroupContext<G>,
    u: G,
    y: G,
    config: &ProofConfig,
) -> Result<bool, NizkError> {
    proof.verify(context, &LinearRelation::dlog(u, y), config)
}

/// Proof that `(g, u, v, w)` is a DDH tuple by showing knowledge of `z` with `v = g * z` and `w = u * z`
pub fn prove_ddh<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    (g, u, v, w): (G, G, G, G),
    z: G::ScalarField,
    config: &ProofConfig,
) -> Result<NizkProof<G>, NizkError> {
    prove(rng, context, &LinearRelation::ddh(g, u, v, w), vec![z], config)
}

pub fn verify_ddh<G: AffineRepr>(
    proof: &NizkProof<G>,
    context: &GroupContext<G>,
    (g, u, v, w): (G, G, G, G),
    config: &ProofConfig,
) -> Result<bool, NizkError> {
    proof.verify(context, &LinearRelation::ddh(g, u, v, w), config)
}
