//! Sigma protocol for a `LinearRelation` made non-interactive with the Fiat-Shamir transform.
//!
//! For a relation with bases `u` and images `v`, `m` equations and `k` witnesses:
//!
//! 1. Prover picks random `r_1, ..., r_k` and commits with `t_i = u_{i,1} * r_1 + ... + u_{i,k} * r_k` for each equation `i`.
//! 2. Challenge `c` is the hash of the group's domain separator, the relation, the commitments `t_i`,
//!    any extra data the proof is bound to and an optional nonce, mapped into the scalar field by
//!    try-and-increment.
//! 3. Prover responds with `s_j = r_j + c * x_j` for each witness `j`.
//! 4. Verifier recomputes `c` and checks `t_i + v_i * c == u_{i,1} * s_1 + ... + u_{i,k} * s_k` for each equation `i`.
//!
//! Blindings must never be reused across proofs of the same witness, doing so reveals the witness.

use crate::{error::NizkError, relation::LinearRelation};
use ark_ec::{AffineRepr, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, cfg_iter, end_timer, rand::RngCore, start_timer, vec::Vec, UniformRand};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use threshold_utils::{
    expect_equality,
    group::GroupContext,
    hashing_utils::{field_elem_from_try_and_incr, Algorithm},
    serde_utils::ArkObjectBytes,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What a proof's challenge is computed with besides the group and the relation. `extras` binds the
/// proof to associated data such as a message being signed. `nonce` binds it to a transport context;
/// an absent nonce and an empty nonce give different challenges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProofConfig<'a> {
    pub algorithm: Algorithm,
    pub extras: &'a [u8],
    pub nonce: Option<&'a [u8]>,
}

impl<'a> ProofConfig<'a> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_extras(mut self, extras: &'a [u8]) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_nonce(mut self, nonce: Option<&'a [u8]>) -> Self {
        self.nonce = nonce;
        self
    }
}

/// Prover's state after committing to its blindings
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SigmaProtocol<G: AffineRepr> {
    /// One commitment per equation
    #[zeroize(skip)]
    pub commitment: Vec<G>,
    blindings: Vec<G::ScalarField>,
    witnesses: Vec<G::ScalarField>,
}

/// Proof of knowledge of witnesses of a `LinearRelation`
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct NizkProof<G: AffineRepr> {
    /// One element per equation
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub commitment: Vec<G>,
    /// One scalar per witness
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub response: Vec<G::ScalarField>,
}

impl<G: AffineRepr> SigmaProtocol<G> {
    /// Step 1 with fresh blindings
    pub fn init<R: RngCore>(
        rng: &mut R,
        relation: &LinearRelation<G>,
        witnesses: Vec<G::ScalarField>,
    ) -> Result<Self, NizkError> {
        let blindings = (0..relation.nr_witnesses())
            .map(|_| G::ScalarField::rand(rng))
            .collect::<Vec<_>>();
        Self::init_with_given_blindings(relation, witnesses, blindings)
    }

    pub fn init_with_given_blindings(
        relation: &LinearRelation<G>,
        witnesses: Vec<G::ScalarField>,
        blindings: Vec<G::ScalarField>,
    ) -> Result<Self, NizkError> {
        expect_equality!(
            relation.nr_witnesses(),
            witnesses.len(),
            NizkError::UnequalNoOfWitnesses
        );
        let commitment = relation.evaluate(&blindings)?;
        Ok(Self {
            commitment,
            blindings,
            witnesses,
        })
    }

    /// Step 3, `response_j = blindings_j + witnesses_j * challenge`
    pub fn gen_proof(self, challenge: &G::ScalarField) -> NizkProof<G> {
        let response = cfg_iter!(self.blindings)
            .zip(cfg_iter!(self.witnesses))
            .map(|(b, w)| *b + (*w * challenge))
            .collect::<Vec<_>>();
        NizkProof {
            commitment: self.commitment.clone(),
            response,
        }
    }
}

impl<G: AffineRepr> NizkProof<G> {
    /// Check the proof for an already computed challenge. Returns `Ok(false)` when any equation fails
    /// and an error only when the proof's shape doesn't fit the relation.
    pub fn verify_with_challenge(
        &self,
        relation: &LinearRelation<G>,
        challenge: &G::ScalarField,
    ) -> Result<bool, NizkError> {
        self.check_dimensions(relation)?;
        let bases = relation.bases();
        let images = relation.images();
        Ok(cfg_into_iter!(0..relation.nr_equations()).all(|i| {
            G::Group::msm_unchecked(&bases[i], &self.response)
                == images[i] * challenge + self.commitment[i]
        }))
    }

    /// Recompute the challenge from the relation and the commitments and check the proof with it
    pub fn verify(
        &self,
        context: &GroupContext<G>,
        relation: &LinearRelation<G>,
        config: &ProofConfig,
    ) -> Result<bool, NizkError> {
        let timer = start_timer!(|| "Verify NIZK");
        self.check_dimensions(relation)?;
        let challenge = compute_challenge(context, relation, &self.commitment, config)?;
        let valid = self.verify_with_challenge(relation, &challenge)?;
        if !valid {
            log::debug!(
                "NIZK proof for relation with {} equations did not verify",
                relation.nr_equations()
            );
        }
        end_timer!(timer);
        Ok(valid)
    }

    fn check_dimensions(&self, relation: &LinearRelation<G>) -> Result<(), NizkError> {
        expect_equality!(
            relation.nr_equations(),
            self.commitment.len(),
            NizkError::UnequalNoOfCommitments
        );
        expect_equality!(
            relation.nr_witnesses(),
            self.response.len(),
            NizkError::UnequalNoOfResponses
        );
        Ok(())
    }
}

/// Fiat-Shamir challenge over the group's domain separator, the flattened relation, the commitments,
/// the extra data and the nonce. Extras and nonce are length prefixed so their boundary is unambiguous.
pub fn compute_challenge<G: AffineRepr>(
    context: &GroupContext<G>,
    relation: &LinearRelation<G>,
    commitment: &[G],
    config: &ProofConfig,
) -> Result<G::ScalarField, NizkError> {
    let mut bytes = Vec::new();
    context.write_domain_separator(&mut bytes)?;
    relation.challenge_contribution(&mut bytes)?;
    for t in commitment {
        t.serialize_compressed(&mut bytes)?;
    }
    bytes.extend_from_slice(&(config.extras.len() as u64).to_le_bytes());
    bytes.extend_from_slice(config.extras);
    match config.nonce {
        Some(nonce) => {
            bytes.push(1);
            bytes.extend_from_slice(&(nonce.len() as u64).to_le_bytes());
            bytes.extend_from_slice(nonce);
        }
        None => bytes.push(0),
    }
    Ok(field_elem_from_try_and_incr(config.algorithm, &bytes))
}

/// Prove knowledge of `witnesses` for the relation with a non-interactive proof
pub fn prove<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    relation: &LinearRelation<G>,
    witnesses: Vec<G::ScalarField>,
    config: &ProofConfig,
) -> Result<NizkProof<G>, NizkError> {
    let timer = start_timer!(|| "Prove NIZK");
    let protocol = SigmaProtocol::init(rng, relation, witnesses)?;
    let challenge = compute_challenge(context, relation, &protocol.commitment, config)?;
    let proof = protocol.gen_proof(&challenge);
    end_timer!(timer);
    Ok(proof)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine};
    use ark_ec::CurveGroup;
    use ark_ff::One;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_serialization;

    fn random_relation<G: AffineRepr>(
        rng: &mut StdRng,
        m: usize,
        k: usize,
    ) -> (LinearRelation<G>, Vec<G::ScalarField>) {
        let bases = (0..m)
            .map(|_| {
                (0..k)
                    .map(|_| G::Group::rand(rng).into_affine())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let witnesses = (0..k)
            .map(|_| G::ScalarField::rand(rng))
            .collect::<Vec<_>>();
        let images = bases
            .iter()
            .map(|row| G::Group::msm_unchecked(row, &witnesses).into_affine())
            .collect::<Vec<_>>();
        (LinearRelation::new(bases, images).unwrap(), witnesses)
    }

    fn check_completeness_and_soundness<G: AffineRepr>(rng: &mut StdRng) {
        let context = GroupContext::<G>::default();
        for (m, k) in [(1, 1), (1, 3), (2, 1), (2, 2), (3, 5)] {
            let (relation, witnesses) = random_relation::<G>(rng, m, k);
            for algorithm in [Algorithm::Sha256, Algorithm::Sha3_512, Algorithm::Blake2b512] {
                let config = ProofConfig::new(algorithm)
                    .with_extras(b"message")
                    .with_nonce(Some(b"nonce".as_slice()));
                let proof = prove(rng, &context, &relation, witnesses.clone(), &config).unwrap();
                assert_eq!(proof.commitment.len(), m);
                assert_eq!(proof.response.len(), k);
                assert!(proof.verify(&context, &relation, &config).unwrap());

                // Any flipped response fails
                for j in 0..k {
                    let mut bad = proof.clone();
                    bad.response[j] += G::ScalarField::one();
                    assert!(!bad.verify(&context, &relation, &config).unwrap());
                }
                // Any flipped commitment fails
                for i in 0..m {
                    let mut bad = proof.clone();
                    bad.commitment[i] = (bad.commitment[i] + context.generator).into_affine();
                    assert!(!bad.verify(&context, &relation, &config).unwrap());
                }
                // Different nonce, absent nonce, different extras or hash fail
                for other in [
                    config.with_nonce(Some(b"other".as_slice())),
                    config.with_nonce(None),
                    config.with_nonce(Some(b"".as_slice())),
                    config.with_extras(b"other message"),
                    ProofConfig {
                        algorithm: if algorithm == Algorithm::Sha256 {
                            Algorithm::Sha512
                        } else {
                            Algorithm::Sha256
                        },
                        ..config
                    },
                ] {
                    assert!(!proof.verify(&context, &relation, &other).unwrap());
                }
            }

            // Wrong witnesses don't give a valid proof
            let wrong = (0..k)
                .map(|_| G::ScalarField::rand(rng))
                .collect::<Vec<_>>();
            let config = ProofConfig::default();
            let proof = prove(rng, &context, &relation, wrong, &config).unwrap();
            assert!(!proof.verify(&context, &relation, &config).unwrap());
        }
    }

    #[test]
    fn completeness_and_soundness() {
        let mut rng = StdRng::seed_from_u64(0u64);
        check_completeness_and_soundness::<G1Affine>(&mut rng);
        check_completeness_and_soundness::<G2Affine>(&mut rng);
        check_completeness_and_soundness::<ark_secp256r1::Affine>(&mut rng);
    }

    #[test]
    fn absent_and_empty_nonce_differ() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (relation, witnesses) = random_relation::<G1Affine>(&mut rng, 1, 1);
        let protocol = SigmaProtocol::init(&mut rng, &relation, witnesses).unwrap();
        let absent = ProofConfig::default();
        let empty = ProofConfig::default().with_nonce(Some(&[][..]));
        assert_ne!(
            compute_challenge(&context, &relation, &protocol.commitment, &absent).unwrap(),
            compute_challenge(&context, &relation, &protocol.commitment, &empty).unwrap()
        );
    }

    #[test]
    fn challenge_depends_on_group_context() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let other_context = GroupContext::new(G1Projective::rand(&mut rng).into_affine());
        let (relation, witnesses) = random_relation::<G1Affine>(&mut rng, 2, 2);
        let config = ProofConfig::default();
        let proof = prove(&mut rng, &context, &relation, witnesses, &config).unwrap();
        assert!(proof.verify(&context, &relation, &config).unwrap());
        assert!(!proof.verify(&other_context, &relation, &config).unwrap());
    }

    #[test]
    fn malformed_proofs_are_errors() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (relation, witnesses) = random_relation::<G1Affine>(&mut rng, 2, 3);
        let config = ProofConfig::default();

        assert!(matches!(
            prove(&mut rng, &context, &relation, witnesses[..2].to_vec(), &config),
            Err(NizkError::UnequalNoOfWitnesses(3, 2))
        ));

        let proof = prove(&mut rng, &context, &relation, witnesses, &config).unwrap();
        let mut short = proof.clone();
        short.commitment.pop();
        assert!(matches!(
            short.verify(&context, &relation, &config),
            Err(NizkError::UnequalNoOfCommitments(2, 1))
        ));
        let mut long = proof.clone();
        long.response.push(Fr::one());
        assert!(matches!(
            long.verify(&context, &relation, &config),
            Err(NizkError::UnequalNoOfResponses(3, 4))
        ));

        test_serialization!(NizkProof<G1Affine>, proof);
    }

    #[test]
    fn fresh_blindings_per_proof() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (relation, witnesses) = random_relation::<G1Affine>(&mut rng, 1, 2);
        let config = ProofConfig::default();
        let p1 = prove(&mut rng, &context, &relation, witnesses.clone(), &config).unwrap();
        let p2 = prove(&mut rng, &context, &relation, witnesses, &config).unwrap();
        assert_ne!(p1.commitment, p2.commitment);
        assert!(p1.verify(&context, &relation, &config).unwrap());
        assert!(p2.verify(&context, &relation, &config).unwrap());
    }
}
