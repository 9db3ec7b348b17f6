//! Polynomials over prime fields. Coefficients are ordered from the constant term upwards and trailing
//! zero coefficients are always trimmed (`DensePolynomial` maintains this), so the zero polynomial has no
//! coefficients and no degree.

use ark_ff::{PrimeField, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::{cfg_into_iter, fmt, rand::RngCore, vec, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolyError {
    /// Indices of 2 points sharing the same `x` coordinate
    DuplicateXCoordinate(usize, usize),
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateXCoordinate(i, j) => {
                write!(f, "points {} and {} have the same x coordinate", i, j)
            }
        }
    }
}

/// Degree of the polynomial, `None` for the zero polynomial
pub fn poly_degree<F: PrimeField>(poly: &DensePolynomial<F>) -> Option<usize> {
    if poly.is_zero() {
        None
    } else {
        Some(poly.degree())
    }
}

/// Random polynomial of exactly the given degree, i.e. the leading coefficient is non-zero
pub fn random_poly<R: RngCore, F: PrimeField>(rng: &mut R, degree: usize) -> DensePolynomial<F> {
    let mut coeffs = (0..degree).map(|_| F::rand(rng)).collect::<Vec<_>>();
    let mut leading = F::rand(rng);
    while leading.is_zero() {
        leading = F::rand(rng);
    }
    coeffs.push(leading);
    DensePolynomial::from_coefficients_vec(coeffs)
}

/// Naive multiplication (n^2) of 2 polynomials defined over prime fields
/// Note: Using multiply operator from ark-poly is orders of magnitude slower than naive multiplication
pub fn multiply_poly<F: PrimeField>(
    left: &DensePolynomial<F>,
    right: &DensePolynomial<F>,
) -> DensePolynomial<F> {
    if left.is_zero() || right.is_zero() {
        return DensePolynomial::zero();
    }
    let mut product = vec![F::zero(); left.degree() + right.degree() + 1];
    for (i, l) in left.coeffs.iter().enumerate() {
        for (j, r) in right.coeffs.iter().enumerate() {
            product[i + j] += *l * r;
        }
    }
    DensePolynomial::from_coefficients_vec(product)
}

/// Create a polynomial from given `roots` as `(x-roots[0])*(x-roots[1])*(x-roots[2])*..`. No roots
/// give the constant polynomial 1.
pub fn poly_from_roots<F: PrimeField>(roots: &[F]) -> DensePolynomial<F> {
    roots
        .iter()
        .map(|r| DensePolynomial::from_coefficients_slice(&[-*r, F::one()]))
        .fold(
            DensePolynomial::from_coefficients_vec(vec![F::one()]),
            |acc, term| multiply_poly(&acc, &term),
        )
}

/// Lagrange interpolation. Returns the unique polynomial of minimal degree passing through all the
/// `(x, y)` points. Points must have distinct `x` coordinates.
pub fn interpolate<F: PrimeField>(points: &[(F, F)]) -> Result<DensePolynomial<F>, PolyError> {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].0 == points[j].0 {
                return Err(PolyError::DuplicateXCoordinate(i, j));
            }
        }
    }
    let terms = cfg_into_iter!(0..points.len())
        .map(|i| {
            let (x_i, y_i) = points[i];
            let others = points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (x_j, _))| *x_j)
                .collect::<Vec<_>>();
            // Can't be zero as the x coordinates are distinct
            let denominator = others.iter().map(|x_j| x_i - x_j).product::<F>();
            let scale = y_i * denominator.inverse().unwrap_or_else(F::zero);
            &poly_from_roots(&others) * scale
        })
        .collect::<Vec<_>>();
    Ok(terms
        .into_iter()
        .fold(DensePolynomial::zero(), |acc, term| &acc + &term))
}
