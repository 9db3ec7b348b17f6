//! Boundary to the prime-order group all protocols are generic over.
//!
//! The group itself is any arkworks curve implementing `AffineRepr`. `GroupContext` carries the
//! distinguished generator and knows how to encode scalars and group elements canonically. Decoding
//! a group element tells apart bytes that are not a point at all from a valid point that lies outside
//! the prime order subgroup.

use crate::serde_utils::ArkObjectBytes;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, Field, PrimeField};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Validate,
};
use ark_std::{fmt, io::Write, rand::RngCore, vec::Vec, UniformRand};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupError {
    /// Expected and actual byte length
    InvalidLength(usize, usize),
    /// Bytes do not encode an integer in `[0, order)`
    MalformedScalar,
    /// Bytes do not encode a point of the curve
    MalformedElement,
    /// A valid point which is not in the prime order subgroup
    NotInSubgroup,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(expected, found) => {
                write!(f, "invalid length: expected {} bytes, found {}", expected, found)
            }
            Self::MalformedScalar => write!(f, "bytes do not encode a scalar"),
            Self::MalformedElement => write!(f, "bytes do not encode a group element"),
            Self::NotInSubgroup => write!(f, "group element is not in the prime order subgroup"),
        }
    }
}

/// The group a sharing lives in. `generator` is the base all public values are computed with.
#[serde_as]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct GroupContext<G: AffineRepr> {
    #[serde_as(as = "ArkObjectBytes")]
    pub generator: G,
}

impl<G: AffineRepr> Default for GroupContext<G> {
    fn default() -> Self {
        Self::new(G::generator())
    }
}

impl<G: AffineRepr> GroupContext<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Order of the group, which is also the modulus of the scalar field
    pub fn order() -> <G::ScalarField as PrimeField>::BigInt {
        G::ScalarField::MODULUS
    }

    /// Byte length of an encoded scalar, i.e. `ceil(bits(order) / 8)`
    pub fn scalar_byte_size() -> usize {
        (G::ScalarField::MODULUS_BIT_SIZE as usize + 7) / 8
    }

    /// Byte length of an encoded group element
    pub fn element_byte_size() -> usize {
        G::zero().compressed_size()
    }

    /// `generator * scalar`
    pub fn exp_generator(&self, scalar: &G::ScalarField) -> G {
        self.generator.mul_bigint(scalar.into_bigint()).into_affine()
    }

    /// Whether `count` is strictly smaller than the group order
    pub fn is_below_order(count: u64) -> bool {
        <G::ScalarField as PrimeField>::BigInt::from(count) < G::ScalarField::MODULUS
    }

    pub fn random_scalar<R: RngCore>(rng: &mut R) -> G::ScalarField {
        G::ScalarField::rand(rng)
    }

    /// Little-endian encoding of the scalar of length `scalar_byte_size`
    pub fn encode_scalar(scalar: &G::ScalarField) -> Vec<u8> {
        let mut bytes = scalar.into_bigint().to_bytes_le();
        bytes.truncate(Self::scalar_byte_size());
        bytes
    }

    pub fn decode_scalar(bytes: &[u8]) -> Result<G::ScalarField, GroupError> {
        let expected = Self::scalar_byte_size();
        if bytes.len() != expected {
            return Err(GroupError::InvalidLength(expected, bytes.len()));
        }
        // Deserialization rejects integers not smaller than the modulus
        G::ScalarField::deserialize_compressed(bytes).map_err(|_| GroupError::MalformedScalar)
    }

    pub fn encode_element(element: &G) -> Result<Vec<u8>, SerializationError> {
        let mut bytes = Vec::with_capacity(element.compressed_size());
        element.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    pub fn decode_element(bytes: &[u8]) -> Result<G, GroupError> {
        let expected = Self::element_byte_size();
        if bytes.len() != expected {
            return Err(GroupError::InvalidLength(expected, bytes.len()));
        }
        let element = G::deserialize_with_mode(bytes, Compress::Yes, Validate::No)
            .map_err(|_| GroupError::MalformedElement)?;
        element.check().map_err(|_| GroupError::NotInSubgroup)?;
        Ok(element)
    }

    /// Writes the bytes that separate this group instantiation from any other: the modulus of the
    /// base field, the group order and the generator.
    pub fn write_domain_separator<W: Write>(&self, mut writer: W) -> Result<(), SerializationError> {
        let modulus = <G::BaseField as Field>::BasePrimeField::MODULUS.to_bytes_le();
        let order = G::ScalarField::MODULUS.to_bytes_le();
        writer.write_all(&modulus)?;
        writer.write_all(&order)?;
        self.generator.serialize_compressed(&mut writer)
    }
}
