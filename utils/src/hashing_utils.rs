//! Hash functions usable for deriving Fiat-Shamir challenges and public parameters.
//!
//! The hash is chosen explicitly by the caller through `Algorithm`; `DEFAULT_ALGORITHM` names the one
//! used when a caller has no preference.

use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_std::{fmt, str::FromStr, vec::Vec};
use blake2::Blake2b512;
use digest::Digest;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Sha256,
    Sha512,
    Sha3_256,
    Sha3_512,
    Blake2b512,
}

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Sha256;

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl Algorithm {
    pub fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(bytes).to_vec(),
            Self::Sha512 => Sha512::digest(bytes).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(bytes).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(bytes).to_vec(),
            Self::Blake2b512 => Blake2b512::digest(bytes).to_vec(),
        }
    }

    /// Byte size of the digest
    pub fn output_size(&self) -> usize {
        match self {
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_512 => "sha3-512",
            Self::Blake2b512 => "blake2b512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedAlgorithm;

impl fmt::Display for UnsupportedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsupported hash algorithm")
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Sha256,
            Self::Sha512,
            Self::Sha3_256,
            Self::Sha3_512,
            Self::Blake2b512,
        ]
        .into_iter()
        .find(|a| a.name() == s)
        .ok_or(UnsupportedAlgorithm)
    }
}

/// Hash bytes to a field element, rehashing with an attempt counter until the digest is below the
/// modulus. Uses try-and-increment so it's vulnerable to side channels, only use with public input
/// like challenge bytes.
pub fn field_elem_from_try_and_incr<F: PrimeField>(algorithm: Algorithm, bytes: &[u8]) -> F {
    let mut hash = algorithm.digest(bytes);
    let mut j = 1u64;
    loop {
        if let Some(f) = F::from_random_bytes(&hash) {
            return f;
        }
        hash = algorithm.digest(&concat_slices!(bytes, b"-attempt-", j.to_le_bytes()));
        j += 1;
    }
}

/// Hash bytes to a group element with unknown discrete log. This is vulnerable to timing attack and is
/// only used when input is public anyway like when deriving a Pedersen public reference.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr>(algorithm: Algorithm, bytes: &[u8]) -> G {
    let mut j = 0u64;
    loop {
        let hash = algorithm.digest(&concat_slices!(bytes, b"-attempt-", j.to_le_bytes()));
        if let Some(g) = G::from_random_bytes(&hash) {
            let g = g.clear_cofactor();
            if !g.is_zero() {
                return g;
            }
        }
        j += 1;
    }
}
