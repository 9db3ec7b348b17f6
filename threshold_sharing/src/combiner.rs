//! Recombining shares, public shares and partial decryptors with Lagrange coefficients at 0.
//!
//! The `combine_*` functions trust their input. The `recover_*` functions first check every
//! contribution, and then either fail at the first invalid one (the default) or leave the invalid
//! ones out, report their indices as blame and combine the rest. Lagrange coefficients are always
//! computed over the indices actually combined, so blamed contributions don't skew the result.

use crate::{
    common::{
        Commitments, PartialDecryptor, PublicShare, SchnorrPacket, SecretPacket, SecretShare,
        ShareId,
    },
    error::{ErrorKind, SSError},
    shareholder::{parse_feldman_packet, verify_partial_decryptor, verify_schnorr_packet},
};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{batch_inversion, PrimeField};
use ark_std::{
    cfg_into_iter, cfg_iter,
    collections::{BTreeMap, BTreeSet},
    end_timer, start_timer,
    vec::Vec,
};
use threshold_utils::{
    encryption::ThresholdCiphertext,
    group::GroupContext,
    hashing_utils::{Algorithm, DEFAULT_ALGORITHM},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Anything contributed under a share id
pub trait Contribution {
    fn id(&self) -> ShareId;
}

impl<F: PrimeField> Contribution for SecretPacket<F> {
    fn id(&self) -> ShareId {
        self.id
    }
}

impl<G: AffineRepr> Contribution for SchnorrPacket<G> {
    fn id(&self) -> ShareId {
        self.id
    }
}

impl<G: AffineRepr> Contribution for PartialDecryptor<G> {
    fn id(&self) -> ShareId {
        self.id
    }
}

/// Ids of a qualified set must be non-zero and distinct
fn check_qualified_set(ids: &[ShareId]) -> Result<(), SSError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if *id == 0 {
            return Err(SSError::InvalidShareId(0));
        }
        if !seen.insert(*id) {
            return Err(SSError::DuplicateIndex(*id));
        }
    }
    Ok(())
}

fn check_threshold(count: usize, threshold: Option<ShareId>) -> Result<(), SSError> {
    match threshold {
        Some(t) if count < t as usize => Err(SSError::InsufficientShares(count, t)),
        _ => Ok(()),
    }
}

/// Lagrange coefficient `prod_{j in qualified, j != i} j / (j - i)` of `i` at 0
pub fn compute_lambda<F: PrimeField>(i: ShareId, qualified: &[ShareId]) -> Result<F, SSError> {
    check_qualified_set(qualified)?;
    if i == 0 {
        return Err(SSError::InvalidShareId(0));
    }
    let i_f = F::from(i as u64);
    let mut numerator = F::one();
    let mut denominator = F::one();
    for j in qualified.iter().filter(|j| **j != i) {
        let j = F::from(*j as u64);
        numerator *= j;
        denominator *= j - i_f;
    }
    // Non-zero as ids are distinct
    Ok(numerator * denominator.inverse().unwrap_or_else(F::zero))
}

/// Lagrange coefficients at 0 of every id in `qualified`, in the same order. Cheaper than calling
/// `compute_lambda` for each as it needs a single field inversion.
pub fn lagrange_basis_at_0_for_all<F: PrimeField>(qualified: &[ShareId]) -> Result<Vec<F>, SSError> {
    check_qualified_set(qualified)?;
    let x = cfg_iter!(qualified)
        .map(|i| F::from(*i as u64))
        .collect::<Vec<_>>();
    let product = x.iter().product::<F>();

    // lambda_i = (product / x_i) / prod_{j != i}(x_j - x_i), so invert x_i * prod_{j != i}(x_j - x_i)
    let mut denominators = cfg_iter!(x)
        .map(|i| {
            x.iter()
                .filter(|j| *j != i)
                .map(|j| *j - i)
                .product::<F>()
                * i
        })
        .collect::<Vec<_>>();
    batch_inversion(&mut denominators);
    Ok(cfg_into_iter!(denominators)
        .map(|d| product * d)
        .collect())
}

/// `sum_i lambda_i * value_i` over the given shares. Fails when `threshold` is given and there are
/// fewer shares. Without a threshold too few shares give a value unrelated to the secret.
pub fn combine_secret_shares<F: PrimeField>(
    shares: &[SecretShare<F>],
    threshold: Option<ShareId>,
) -> Result<F, SSError> {
    check_threshold(shares.len(), threshold)?;
    let ids = shares.iter().map(|s| s.id).collect::<Vec<_>>();
    let lambdas = lagrange_basis_at_0_for_all::<F>(&ids)?;
    Ok(cfg_iter!(lambdas)
        .zip(cfg_iter!(shares))
        .map(|(l, s)| *l * s.value)
        .sum())
}

fn combine_in_group<G: AffineRepr>(
    ids: &[ShareId],
    values: &[G],
    threshold: Option<ShareId>,
) -> Result<G, SSError> {
    check_threshold(ids.len(), threshold)?;
    let lambdas = lagrange_basis_at_0_for_all::<G::ScalarField>(ids)?;
    Ok(G::Group::msm_unchecked(values, &lambdas).into_affine())
}

/// `sum_i lambda_i * value_i` over public shares, i.e. `g * secret` for a qualified set
pub fn combine_public_shares<G: AffineRepr>(
    shares: &[PublicShare<G>],
    threshold: Option<ShareId>,
) -> Result<G, SSError> {
    let ids = shares.iter().map(|s| s.id).collect::<Vec<_>>();
    let values = shares.iter().map(|s| s.value).collect::<Vec<_>>();
    combine_in_group(&ids, &values, threshold)
}

/// `sum_i lambda_i * value_i` over partial decryptors, i.e. `alpha * secret` for a qualified set
pub fn combine_partial_decryptors<G: AffineRepr>(
    decryptors: &[PartialDecryptor<G>],
    threshold: Option<ShareId>,
) -> Result<G, SSError> {
    let ids = decryptors.iter().map(|d| d.id).collect::<Vec<_>>();
    let values = decryptors.iter().map(|d| d.value).collect::<Vec<_>>();
    combine_in_group(&ids, &values, threshold)
}

/// How contributions are checked before being combined
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryOptions {
    /// Hash used by the contributions' proofs
    pub algorithm: Algorithm,
    /// Nonce each contribution's proof is bound to, by id. When set every contribution needs one.
    pub nonces: Option<BTreeMap<ShareId, Vec<u8>>>,
    /// Minimum number of valid contributions
    pub threshold: Option<ShareId>,
    /// Fail at the first invalid contribution instead of blaming it
    pub error_on_invalid: bool,
}

impl Default for RecoveryOptions {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM,
            nonces: None,
            threshold: None,
            error_on_invalid: true,
        }
    }
}

impl RecoveryOptions {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_nonces(mut self, nonces: BTreeMap<ShareId, Vec<u8>>) -> Self {
        self.nonces = Some(nonces);
        self
    }

    pub fn with_threshold(mut self, threshold: ShareId) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Leave out invalid contributions and report them as blame
    pub fn blame_invalid(mut self) -> Self {
        self.error_on_invalid = false;
        self
    }

    pub fn nonce_for(&self, id: ShareId) -> Result<Option<&[u8]>, SSError> {
        match &self.nonces {
            None => Ok(None),
            Some(nonces) => nonces
                .get(&id)
                .map(|n| Some(n.as_slice()))
                .ok_or(SSError::NoNonceForIndex(id)),
        }
    }
}

/// Result of a recovery with the ids of contributions that were left out, in the order they were given
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery<T> {
    pub recovered: T,
    pub blame: Vec<ShareId>,
}

/// Verify all contributions and split them into accepted ones and blame. Only errors of kind
/// `InvalidContribution` turn into blame and only when the options ask for it.
fn filter_contributions<'a, C, V>(
    contributions: &'a [C],
    options: &RecoveryOptions,
    verify: V,
) -> Result<(Vec<&'a C>, Vec<ShareId>), SSError>
where
    C: Contribution + Sync,
    V: Fn(&C) -> Result<(), SSError> + Sync + Send,
{
    check_qualified_set(&contributions.iter().map(|c| c.id()).collect::<Vec<_>>())?;
    let results = cfg_iter!(contributions)
        .map(|c| verify(c))
        .collect::<Vec<_>>();

    let mut accepted = Vec::with_capacity(contributions.len());
    let mut blame = Vec::new();
    for (contribution, result) in contributions.iter().zip(results) {
        match result {
            Ok(()) => accepted.push(contribution),
            Err(e) if e.kind() == ErrorKind::InvalidContribution && !options.error_on_invalid => {
                log::warn!("Leaving out contribution {}: {}", contribution.id(), e);
                blame.push(contribution.id());
            }
            Err(e) => return Err(e),
        }
    }
    Ok((accepted, blame))
}

/// Verify the Schnorr packets and combine the public shares of the valid ones into `g * secret`
pub fn recover_public<G: AffineRepr>(
    context: &GroupContext<G>,
    packets: &[SchnorrPacket<G>],
    options: &RecoveryOptions,
) -> Result<Recovery<G>, SSError> {
    let timer = start_timer!(|| "Recover public value");
    let (accepted, blame) = filter_contributions(packets, options, |p| {
        verify_schnorr_packet(context, p, options.algorithm, options.nonce_for(p.id)?)
    })?;
    let ids = accepted.iter().map(|p| p.id).collect::<Vec<_>>();
    let values = accepted.iter().map(|p| p.value).collect::<Vec<_>>();
    let recovered = combine_in_group(&ids, &values, options.threshold)?;
    end_timer!(timer);
    Ok(Recovery { recovered, blame })
}

/// Verify the secret packets against Feldman commitments and combine the valid ones into the secret
pub fn recover_secret<G: AffineRepr>(
    context: &GroupContext<G>,
    packets: &[SecretPacket<G::ScalarField>],
    commitments: &Commitments<G>,
    options: &RecoveryOptions,
) -> Result<Recovery<G::ScalarField>, SSError> {
    let timer = start_timer!(|| "Recover secret");
    let (accepted, blame) = filter_contributions(packets, options, |p| {
        parse_feldman_packet(context, commitments, p).map(|_| ())
    })?;
    let shares = accepted.iter().map(|p| p.share()).collect::<Vec<_>>();
    let recovered = combine_secret_shares(&shares, options.threshold)?;
    end_timer!(timer);
    Ok(Recovery { recovered, blame })
}

/// Verify each partial decryptor for `alpha` against the public share with the same id and combine
/// the valid ones into `alpha * secret`
pub fn recover_decryptor<G: AffineRepr>(
    context: &GroupContext<G>,
    decryptors: &[PartialDecryptor<G>],
    alpha: &G,
    public_shares: &[PublicShare<G>],
    options: &RecoveryOptions,
) -> Result<Recovery<G>, SSError> {
    let timer = start_timer!(|| "Recover decryptor");
    let public_shares = public_shares
        .iter()
        .map(|s| (s.id, s))
        .collect::<BTreeMap<_, _>>();
    let (accepted, blame) = filter_contributions(decryptors, options, |d| {
        let public_share = public_shares
            .get(&d.id)
            .ok_or(SSError::NoPublicShareWithIndex(d.id))?;
        verify_partial_decryptor(
            context,
            d,
            alpha,
            public_share,
            options.algorithm,
            options.nonce_for(d.id)?,
        )
    })?;
    let ids = accepted.iter().map(|d| d.id).collect::<Vec<_>>();
    let values = accepted.iter().map(|d| d.value).collect::<Vec<_>>();
    let recovered = combine_in_group(&ids, &values, options.threshold)?;
    end_timer!(timer);
    Ok(Recovery { recovered, blame })
}

/// Decrypt a ciphertext encrypted to the shared public key from partial decryptors. When any partial
/// decryptor is blamed nothing is decrypted and the plaintext is empty.
pub fn threshold_decrypt<G: AffineRepr, C: ThresholdCiphertext<G>>(
    context: &GroupContext<G>,
    ciphertext: &C,
    decryptors: &[PartialDecryptor<G>],
    public_shares: &[PublicShare<G>],
    options: &RecoveryOptions,
) -> Result<Recovery<Vec<u8>>, SSError> {
    let Recovery { recovered, blame } = recover_decryptor(
        context,
        decryptors,
        ciphertext.alpha(),
        public_shares,
        options,
    )?;
    if !blame.is_empty() {
        log::warn!("Not decrypting as {} partial decryptors are invalid", blame.len());
        return Ok(Recovery {
            recovered: Vec::new(),
            blame,
        });
    }
    Ok(Recovery {
        recovered: ciphertext.decapsulate(&recovered)?,
        blame,
    })
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::{
        dealer::distribute,
        shareholder::{create_partial_decryptor, create_schnorr_packet},
    };
    use ark_bls12_381::{Fr, G1Affine, G2Affine};
    use ark_ff::{One, Zero};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use threshold_utils::{
        ecies::Encryption,
        elgamal::Ciphertext,
        encryption::EncryptionError,
    };

    #[test]
    fn lagrange_coefficients() {
        let mut rng = StdRng::seed_from_u64(0u64);
        for ids in [vec![1u16], vec![1, 2], vec![3, 1, 5], vec![2, 4, 6, 8, 10, 12]] {
            let all = lagrange_basis_at_0_for_all::<Fr>(&ids).unwrap();
            for (i, l) in ids.iter().zip(all.iter()) {
                assert_eq!(compute_lambda::<Fr>(*i, &ids).unwrap(), *l);
            }
            // Coefficients of any set sum to 1 as they reconstruct the constant polynomial 1
            assert_eq!(all.iter().sum::<Fr>(), Fr::one());
        }

        // lambda_1 over {1, 2} is 2 / (2 - 1) = 2
        assert_eq!(compute_lambda::<Fr>(1, &[1, 2]).unwrap(), Fr::from(2u64));
        assert_eq!(compute_lambda::<Fr>(2, &[1, 2]).unwrap(), -Fr::one());

        assert!(matches!(
            lagrange_basis_at_0_for_all::<Fr>(&[1, 2, 1]),
            Err(SSError::DuplicateIndex(1))
        ));
        assert!(matches!(
            compute_lambda::<Fr>(1, &[0, 1]),
            Err(SSError::InvalidShareId(0))
        ));
        assert!(lagrange_basis_at_0_for_all::<Fr>(&[]).unwrap().is_empty());

        let x = (0..10).map(|_| u16::rand(&mut rng)).collect::<BTreeSet<_>>();
        let x = x.into_iter().filter(|i| *i != 0).collect::<Vec<_>>();
        let single = x
            .iter()
            .map(|i| compute_lambda::<Fr>(*i, &x).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(single, lagrange_basis_at_0_for_all::<Fr>(&x).unwrap());
    }

    fn check_combine<G: AffineRepr>(rng: &mut StdRng) {
        let context = GroupContext::<G>::default();
        for (n, t) in [(1, 1), (3, 2), (5, 3), (6, 6), (10, 4)] {
            let (secret, sharing) = distribute(rng, &context, n, t, None, &[]).unwrap();
            let shares = sharing.secret_shares();
            let public_shares = sharing.public_shares();
            let public_secret = context.exp_generator(&secret);

            // Every window of at least t consecutive shares, and the whole set
            for size in t..=n {
                for start in 0..=(n - size) {
                    let range = start as usize..(start + size) as usize;
                    assert_eq!(
                        combine_secret_shares(&shares[range.clone()], Some(t)).unwrap(),
                        secret
                    );
                    assert_eq!(
                        combine_public_shares(&public_shares[range], Some(t)).unwrap(),
                        public_secret
                    );
                }
            }
            let mut reversed = shares.clone();
            reversed.reverse();
            assert_eq!(combine_secret_shares(&reversed, None).unwrap(), secret);

            if t > 1 {
                let few = &shares[..t as usize - 1];
                assert!(matches!(
                    combine_secret_shares(few, Some(t)),
                    Err(SSError::InsufficientShares(c, th)) if c == t as usize - 1 && th == t
                ));
                assert_ne!(combine_secret_shares(few, None).unwrap(), secret);
                assert!(matches!(
                    combine_public_shares(&public_shares[..t as usize - 1], Some(t)),
                    Err(SSError::InsufficientShares(..))
                ));
            }
        }
    }

    #[test]
    fn combine() {
        let mut rng = StdRng::seed_from_u64(0u64);
        check_combine::<G1Affine>(&mut rng);
        check_combine::<G2Affine>(&mut rng);
        check_combine::<ark_secp256r1::Affine>(&mut rng);
    }

    #[test]
    fn combine_rejects_duplicates() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (_, sharing) = distribute(&mut rng, &context, 5, 3, None, &[]).unwrap();
        let shares = sharing.secret_shares();
        let duplicated = vec![shares[0].clone(), shares[1].clone(), shares[0].clone()];
        assert!(matches!(
            combine_secret_shares(&duplicated, Some(3)),
            Err(SSError::DuplicateIndex(1))
        ));
        assert_eq!(combine_secret_shares::<Fr>(&[], None).unwrap(), Fr::zero());
    }

    #[test]
    fn recover_public_with_blame() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (secret, sharing) = distribute(&mut rng, &context, 6, 3, None, &[]).unwrap();
        let nonces = (1..=6u16)
            .map(|i| (i, i.to_le_bytes().to_vec()))
            .collect::<BTreeMap<_, _>>();
        let mut packets = sharing
            .secret_shares()
            .iter()
            .map(|s| {
                create_schnorr_packet(
                    &mut rng,
                    &context,
                    s,
                    Algorithm::Sha3_256,
                    Some(nonces[&s.id].as_slice()),
                )
                .unwrap()
            })
            .collect::<Vec<_>>();
        let options = RecoveryOptions::default()
            .with_algorithm(Algorithm::Sha3_256)
            .with_nonces(nonces.clone());

        let recovery = recover_public(&context, &packets, &options).unwrap();
        assert_eq!(recovery.recovered, context.exp_generator(&secret));
        assert!(recovery.blame.is_empty());

        // Tamper with 2 and 5
        for i in [1, 4] {
            packets[i].value = (packets[i].value + context.generator).into_affine();
        }
        assert!(matches!(
            recover_public(&context, &packets, &options),
            Err(SSError::InvalidSchnorrPacket(2))
        ));
        let recovery = recover_public(&context, &packets, &options.clone().blame_invalid()).unwrap();
        assert_eq!(recovery.blame, vec![2, 5]);
        assert_eq!(recovery.recovered, context.exp_generator(&secret));

        // Survivors below the threshold
        for i in [0, 2] {
            packets[i].value = (packets[i].value + context.generator).into_affine();
        }
        assert!(matches!(
            recover_public(
                &context,
                &packets,
                &options.clone().blame_invalid().with_threshold(3)
            ),
            Err(SSError::InsufficientShares(2, 3))
        ));

        // A missing nonce is never turned into blame
        let mut missing = nonces;
        missing.remove(&4);
        assert!(matches!(
            recover_public(
                &context,
                &packets,
                &options.clone().with_nonces(missing).blame_invalid()
            ),
            Err(SSError::NoNonceForIndex(4))
        ));
    }

    #[test]
    fn recover_secret_with_blame() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<ark_secp256r1::Affine>::default();
        let (secret, sharing) = distribute(&mut rng, &context, 7, 4, None, &[]).unwrap();
        let (commitments, mut packets) = sharing.feldman_packets();
        let options = RecoveryOptions::default().with_threshold(4);

        let recovery = recover_secret(&context, &packets, &commitments, &options).unwrap();
        assert_eq!(recovery.recovered, secret);
        assert!(recovery.blame.is_empty());

        for i in [0, 3, 6] {
            packets[i].value += <ark_secp256r1::Affine as AffineRepr>::ScalarField::one();
        }
        assert!(matches!(
            recover_secret(&context, &packets, &commitments, &options),
            Err(SSError::InvalidShare(1))
        ));
        let recovery =
            recover_secret(&context, &packets, &commitments, &options.clone().blame_invalid())
                .unwrap();
        assert_eq!(recovery.blame, vec![1, 4, 7]);
        assert_eq!(recovery.recovered, secret);

        packets[1].value += <ark_secp256r1::Affine as AffineRepr>::ScalarField::one();
        assert!(matches!(
            recover_secret(&context, &packets, &commitments, &options.blame_invalid()),
            Err(SSError::InsufficientShares(3, 4))
        ));
    }

    fn partial_decryptors<G: AffineRepr>(
        rng: &mut StdRng,
        context: &GroupContext<G>,
        shares: &[SecretShare<G::ScalarField>],
        alpha: &G,
    ) -> Vec<PartialDecryptor<G>> {
        shares
            .iter()
            .map(|s| {
                create_partial_decryptor(rng, context, s, alpha, DEFAULT_ALGORITHM, None).unwrap()
            })
            .collect()
    }

    #[test]
    fn threshold_decryption() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let context = GroupContext::<G1Affine>::default();
        let (secret, sharing) = distribute(&mut rng, &context, 5, 3, None, &[]).unwrap();
        let pk = context.exp_generator(&secret);
        let public_shares = sharing.public_shares();
        let shares = sharing.secret_shares();
        let options = RecoveryOptions::default().with_threshold(3);

        // Elgamal
        let msg = <G1Affine as AffineRepr>::Group::rand(&mut rng).into_affine();
        let (ciphertext, _) = Ciphertext::new(&mut rng, &msg, &pk, &context.generator);
        let decryptors = partial_decryptors(&mut rng, &context, &shares[1..4], &ciphertext.alpha);
        let recovery = recover_decryptor(
            &context,
            &decryptors,
            &ciphertext.alpha,
            &public_shares,
            &options,
        )
        .unwrap();
        assert_eq!(recovery.recovered, (ciphertext.alpha * secret).into_affine());
        assert_eq!(ciphertext.decrypt_with_decryptor(&recovery.recovered), msg);
        let plaintext =
            threshold_decrypt(&context, &ciphertext, &decryptors, &public_shares, &options)
                .unwrap();
        assert!(plaintext.blame.is_empty());
        assert_eq!(
            plaintext.recovered,
            GroupContext::<G1Affine>::encode_element(&msg).unwrap()
        );

        // Hybrid encryption
        let msg = b"shared among five".to_vec();
        let ciphertext =
            Encryption::encrypt(&mut rng, &msg, &pk, &context.generator, b"info").unwrap();
        let mut decryptors = partial_decryptors(&mut rng, &context, &shares, &ciphertext.alpha);
        let plaintext =
            threshold_decrypt(&context, &ciphertext, &decryptors, &public_shares, &options)
                .unwrap();
        assert_eq!(plaintext.recovered, msg);

        // A tampered decryptor stops decryption in blame mode
        decryptors[2].value = (decryptors[2].value + context.generator).into_affine();
        let plaintext = threshold_decrypt(
            &context,
            &ciphertext,
            &decryptors,
            &public_shares,
            &options.clone().blame_invalid(),
        )
        .unwrap();
        assert!(plaintext.recovered.is_empty());
        assert_eq!(plaintext.blame, vec![3]);
        assert!(matches!(
            threshold_decrypt(&context, &ciphertext, &decryptors, &public_shares, &options),
            Err(SSError::InvalidPartialDecryptor(3))
        ));

        // but the remaining ones still recover the decryptor
        let recovery = recover_decryptor(
            &context,
            &decryptors,
            &ciphertext.alpha,
            &public_shares,
            &options.clone().blame_invalid(),
        )
        .unwrap();
        assert_eq!(ciphertext.decapsulate(&recovery.recovered).unwrap(), msg);

        // Missing public share
        assert!(matches!(
            recover_decryptor(
                &context,
                &decryptors,
                &ciphertext.alpha,
                &public_shares[1..],
                &options.clone().blame_invalid()
            ),
            Err(SSError::NoPublicShareWithIndex(1))
        ));

        // Too few decryptors give the wrong decryptor and the authentication fails
        let few = partial_decryptors(&mut rng, &context, &shares[..2], &ciphertext.alpha);
        assert!(matches!(
            threshold_decrypt(
                &context,
                &ciphertext,
                &few,
                &public_shares,
                &RecoveryOptions::default()
            ),
            Err(SSError::Encryption(EncryptionError::Aead))
        ));
    }
}
