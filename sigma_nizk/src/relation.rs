//! Linear relations over a group.
//!
//! A relation with `m` equations and `k` witnesses is given by a matrix of bases `u` (`m` rows of `k`
//! elements each) and images `v` (`m` elements). Witnesses `x_1, ..., x_k` satisfy it when for each row `i`
//!
//! `v_i = u_{i,1} * x_1 + u_{i,2} * x_2 + ... + u_{i,k} * x_k`
//!
//! A base that is the neutral element takes a witness out of an equation, which is how conjunctions
//! of independent discrete logs are expressed.

use crate::error::NizkError;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, io::Write, vec, vec::Vec};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use threshold_utils::{expect_equality, serde_utils::ArkObjectBytes};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct LinearRelation<G: AffineRepr> {
    #[serde_as(as = "Vec<Vec<ArkObjectBytes>>")]
    bases: Vec<Vec<G>>,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    images: Vec<G>,
}

impl<G: AffineRepr> LinearRelation<G> {
    pub fn new(bases: Vec<Vec<G>>, images: Vec<G>) -> Result<Self, NizkError> {
        if bases.is_empty() || bases[0].is_empty() {
            return Err(NizkError::EmptyRelation);
        }
        expect_equality!(
            images.len(),
            bases.len(),
            NizkError::UnequalNoOfImagesAndRows
        );
        let k = bases[0].len();
        for (i, row) in bases.iter().enumerate() {
            if row.len() != k {
                return Err(NizkError::UnequalRowLength(i, k, row.len()));
            }
        }
        Ok(Self { bases, images })
    }

    /// Knowledge of `x` in `y = base * x`
    pub fn dlog(base: G, y: G) -> Self {
        Self {
            bases: vec![vec![base]],
            images: vec![y],
        }
    }

    /// Knowledge of each `x_i` in `y_i = base_i * x_i` given pairs `(base_i, y_i)`
    pub fn and_dlog(pairs: &[(G, G)]) -> Result<Self, NizkError> {
        let k = pairs.len();
        let bases = (0..k)
            .map(|i| {
                let mut row = vec![G::zero(); k];
                row[i] = pairs[i].0;
                row
            })
            .collect();
        Self::new(bases, pairs.iter().map(|(_, y)| *y).collect())
    }

    /// Knowledge of a single `x` with `y_i = base_i * x` for all pairs `(base_i, y_i)`
    pub fn eq_dlog(pairs: &[(G, G)]) -> Result<Self, NizkError> {
        Self::new(
            pairs.iter().map(|(b, _)| vec![*b]).collect(),
            pairs.iter().map(|(_, y)| *y).collect(),
        )
    }

    /// Knowledge of `z` with `v = g * z` and `w = u * z`, i.e. `(g, u, v, w)` is a DDH tuple
    pub fn ddh(g: G, u: G, v: G, w: G) -> Self {
        Self {
            bases: vec![vec![g], vec![u]],
            images: vec![v, w],
        }
    }

    /// Knowledge of the opening `x_1, ..., x_k` of `y = bases[0] * x_1 + ... + bases[k-1] * x_k`
    pub fn representation(bases: Vec<G>, y: G) -> Result<Self, NizkError> {
        Self::new(vec![bases], vec![y])
    }

    /// Number of equations `m`
    pub fn nr_equations(&self) -> usize {
        self.images.len()
    }

    /// Number of witnesses `k`
    pub fn nr_witnesses(&self) -> usize {
        self.bases[0].len()
    }

    pub fn bases(&self) -> &[Vec<G>] {
        &self.bases
    }

    pub fn images(&self) -> &[G] {
        &self.images
    }

    /// Evaluate every row of bases on the given scalars, i.e. `sum_j u_{i,j} * scalars_j` for each row `i`
    pub fn evaluate(&self, scalars: &[G::ScalarField]) -> Result<Vec<G>, NizkError> {
        expect_equality!(
            self.nr_witnesses(),
            scalars.len(),
            NizkError::UnequalNoOfWitnesses
        );
        Ok(G::Group::normalize_batch(
            &cfg_iter!(self.bases)
                .map(|row| G::Group::msm_unchecked(row, scalars))
                .collect::<Vec<_>>(),
        ))
    }

    pub fn is_satisfied_by(&self, witnesses: &[G::ScalarField]) -> Result<bool, NizkError> {
        Ok(self.evaluate(witnesses)? == self.images)
    }

    /// The relation's contribution to the challenge: all bases row by row followed by all images
    pub fn challenge_contribution<W: Write>(&self, mut writer: W) -> Result<(), NizkError> {
        for row in &self.bases {
            for b in row {
                b.serialize_compressed(&mut writer)?;
            }
        }
        for v in &self.images {
            v.serialize_compressed(&mut writer)?;
        }
        Ok(())
    }
}
