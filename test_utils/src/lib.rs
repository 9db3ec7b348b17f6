//! Helpers shared by the tests of the workspace crates

use ark_bls12_381::Bls12_381;
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use threshold_utils::group::GroupContext;

pub type Fr = <Bls12_381 as Pairing>::ScalarField;
pub type G1 = <Bls12_381 as Pairing>::G1Affine;
pub type G2 = <Bls12_381 as Pairing>::G2Affine;
pub type P256 = ark_secp256r1::Affine;

#[macro_use]
pub mod serialization;

/// Deterministic rng so that failures are reproducible
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0u64)
}

/// Context over the group's standard generator
pub fn default_context<G: AffineRepr>() -> GroupContext<G> {
    GroupContext::default()
}
