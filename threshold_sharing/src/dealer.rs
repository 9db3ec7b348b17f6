//! Shamir secret sharing with Feldman or Pedersen commitments to the sharing polynomial.
//!
//! A secret `s` is shared among `n` participants with threshold `t` by fixing `t` points of a degree
//! `t-1` polynomial `P`, `(0, s)` and `t-1` others, and interpolating it. Participant `i` gets `P(i)`.
//! The `t-1` other points are random unless some are predefined, which lets external parties fix
//! shares in advance as done in distributed key generation.
//!
//! Feldman commitments `g * a_j` to the coefficients `a_j` of `P` let each participant check its share
//! but reveal `g * s`. Pedersen commitments `g * a_j + h * b_j` with the coefficients `b_j` of a random
//! blinding polynomial hide the secret completely, at the cost of every share carrying `B(i)` as well.

use crate::{
    common::{Commitments, PublicShare, SecretPacket, SecretShare, ShareId},
    error::SSError,
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_poly::{univariate::DensePolynomial, Polynomial};
use ark_std::{
    cfg_into_iter, cfg_iter, collections::BTreeSet, end_timer, rand::RngCore, start_timer,
    vec::Vec,
};
use threshold_utils::{
    commitment::PedersenCommitmentKey,
    group::GroupContext,
    poly::{interpolate, random_poly},
};
use zeroize::Zeroize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sharing polynomial with the parameters it was created for. Created once by the dealer and never
/// changed, shares and packets are views of it.
#[derive(Clone, Debug)]
pub struct Sharing<G: AffineRepr> {
    context: GroupContext<G>,
    nr_shares: ShareId,
    threshold: ShareId,
    polynomial: DensePolynomial<G::ScalarField>,
}

impl<G: AffineRepr> Drop for Sharing<G> {
    fn drop(&mut self) {
        self.polynomial.coeffs.zeroize();
    }
}

/// Share `secret`, or a random secret when `None`, among `nr_shares` participants so that any
/// `threshold` of them can reconstruct it. `predefined` points `(x, P(x))` are placed on the sharing
/// polynomial, there must be fewer of them than `threshold` and none may have `x = 0`.
/// Returns the secret along with the sharing.
pub fn distribute<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    nr_shares: ShareId,
    threshold: ShareId,
    secret: Option<G::ScalarField>,
    predefined: &[(G::ScalarField, G::ScalarField)],
) -> Result<(G::ScalarField, Sharing<G>), SSError> {
    check_parameters::<G>(nr_shares, threshold, predefined)?;
    let timer = start_timer!(|| "Distribute secret");

    let secret = secret.unwrap_or_else(|| GroupContext::<G>::random_scalar(rng));
    let mut points = Vec::with_capacity(threshold as usize);
    points.push((G::ScalarField::zero(), secret));
    points.extend_from_slice(predefined);
    let mut used_x = points.iter().map(|(x, _)| *x).collect::<BTreeSet<_>>();
    while points.len() < threshold as usize {
        let x = GroupContext::<G>::random_scalar(rng);
        if used_x.insert(x) {
            points.push((x, GroupContext::<G>::random_scalar(rng)));
        }
    }
    let polynomial = interpolate(&points)?;
    for (_, y) in points.iter_mut() {
        y.zeroize();
    }

    log::debug!(
        "Created sharing with threshold {} of {} shares and {} predefined points",
        threshold,
        nr_shares,
        predefined.len()
    );
    end_timer!(timer);
    Ok((
        secret,
        Sharing {
            context: *context,
            nr_shares,
            threshold,
            polynomial,
        },
    ))
}

/// Same as `distribute` but with the secret given as bytes, which must be the canonical encoding of a
/// scalar
pub fn distribute_encoded<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    context: &GroupContext<G>,
    nr_shares: ShareId,
    threshold: ShareId,
    secret: Option<&[u8]>,
    predefined: &[(G::ScalarField, G::ScalarField)],
) -> Result<(G::ScalarField, Sharing<G>), SSError> {
    let secret = secret
        .map(GroupContext::<G>::decode_scalar)
        .transpose()
        .map_err(SSError::InvalidSecret)?;
    distribute(rng, context, nr_shares, threshold, secret, predefined)
}

fn check_parameters<G: AffineRepr>(
    nr_shares: ShareId,
    threshold: ShareId,
    predefined: &[(G::ScalarField, G::ScalarField)],
) -> Result<(), SSError> {
    if nr_shares < 1 {
        return Err(SSError::NoShares);
    }
    if threshold < 1 {
        return Err(SSError::ZeroThreshold);
    }
    if threshold > nr_shares {
        return Err(SSError::ThresholdExceedsShares(threshold, nr_shares));
    }
    if !GroupContext::<G>::is_below_order(nr_shares as u64) {
        return Err(SSError::TooManyShares(nr_shares));
    }
    if predefined.len() >= threshold as usize {
        return Err(SSError::TooManyPredefinedPoints(predefined.len(), threshold));
    }
    for (i, (x, _)) in predefined.iter().enumerate() {
        if x.is_zero() {
            return Err(SSError::PredefinedPointAtZero(i));
        }
        if let Some(j) = predefined[..i].iter().position(|(x_j, _)| x_j == x) {
            return Err(SSError::DuplicatePredefinedPoint(j, i));
        }
    }
    Ok(())
}

impl<G: AffineRepr> Sharing<G> {
    pub fn context(&self) -> &GroupContext<G> {
        &self.context
    }

    pub fn nr_shares(&self) -> ShareId {
        self.nr_shares
    }

    pub fn threshold(&self) -> ShareId {
        self.threshold
    }

    pub fn polynomial(&self) -> &DensePolynomial<G::ScalarField> {
        &self.polynomial
    }

    /// The secret, `P(0)`
    pub fn secret(&self) -> G::ScalarField {
        self.polynomial.coeffs.first().copied().unwrap_or_default()
    }

    /// `P(id)` for `id` in `[1, n]`
    pub fn secret_share(&self, id: ShareId) -> Result<SecretShare<G::ScalarField>, SSError> {
        self.check_id(id)?;
        Ok(SecretShare {
            id,
            value: self.polynomial.evaluate(&G::ScalarField::from(id as u64)),
        })
    }

    pub fn public_share(&self, id: ShareId) -> Result<PublicShare<G>, SSError> {
        Ok(self.secret_share(id)?.public_share(&self.context))
    }

    /// Shares for ids `1..=n` in order
    pub fn secret_shares(&self) -> Vec<SecretShare<G::ScalarField>> {
        cfg_into_iter!(1..=self.nr_shares)
            .map(|id| SecretShare {
                id,
                value: self.polynomial.evaluate(&G::ScalarField::from(id as u64)),
            })
            .collect()
    }

    pub fn public_shares(&self) -> Vec<PublicShare<G>> {
        let shares = self.secret_shares();
        let values = G::Group::normalize_batch(
            &cfg_iter!(shares)
                .map(|s| self.context.generator.mul_bigint(s.value.into_bigint()))
                .collect::<Vec<_>>(),
        );
        shares
            .iter()
            .zip(values)
            .map(|(s, value)| PublicShare { id: s.id, value })
            .collect()
    }

    /// Feldman commitments `g * a_j` with packets carrying no binding
    pub fn feldman_packets(&self) -> (Commitments<G>, Vec<SecretPacket<G::ScalarField>>) {
        let coeffs = self.coefficients();
        let commitments = G::Group::normalize_batch(
            &cfg_iter!(coeffs)
                .map(|a| self.context.generator.mul_bigint(a.into_bigint()))
                .collect::<Vec<_>>(),
        );
        let packets = self
            .secret_shares()
            .iter()
            .map(|s| SecretPacket {
                id: s.id,
                value: s.value,
                binding: None,
            })
            .collect();
        (commitments.into(), packets)
    }

    /// Pedersen commitments `g * a_j + h * b_j` where `b_j` are the coefficients of a fresh random
    /// blinding polynomial `B` of the same degree and `h` is `public_reference`. Packet `i` carries
    /// `B(i)` as binding. Nobody may know the discrete log of `public_reference` to `g`.
    pub fn pedersen_packets<R: RngCore>(
        &self,
        rng: &mut R,
        public_reference: &G,
    ) -> (Commitments<G>, Vec<SecretPacket<G::ScalarField>>) {
        let mut blinding = random_poly::<R, G::ScalarField>(rng, self.threshold as usize - 1);
        let key = PedersenCommitmentKey::new(self.context.generator, *public_reference);
        let commitments = key.commit_to_a_batch(&self.coefficients(), &blinding.coeffs);
        let packets = self
            .secret_shares()
            .iter()
            .map(|s| SecretPacket {
                id: s.id,
                value: s.value,
                binding: Some(blinding.evaluate(&G::ScalarField::from(s.id as u64))),
            })
            .collect();
        blinding.coeffs.zeroize();
        (commitments.into(), packets)
    }

    /// Coefficients of `P` padded with zeros to `threshold` entries, as interpolation can give a lower
    /// degree when the chosen points happen to lie on one
    fn coefficients(&self) -> Vec<G::ScalarField> {
        let mut coeffs = self.polynomial.coeffs.clone();
        coeffs.resize(self.threshold as usize, G::ScalarField::zero());
        coeffs
    }

    fn check_id(&self, id: ShareId) -> Result<(), SSError> {
        if id == 0 || id > self.nr_shares {
            return Err(SSError::InvalidShareId(id));
        }
        Ok(())
    }
}
