//! Serde serialization for `arkworks-rs` objects as they don't implement serde themselves.
//! Group elements and scalars travel as their canonical compressed bytes, and deserialization runs
//! the arkworks validity checks so a decoded group element is always a member of the prime order subgroup.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

pub type ArkObjectBytes = AsCanonical;

pub struct AsCanonical;

impl AsCanonical {
    pub fn serialize<S, T>(x: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: CanonicalSerialize,
        S: Serializer,
    {
        let mut bytes = Vec::with_capacity(x.compressed_size());
        x.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        Serialize::serialize(&bytes, serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        T: CanonicalDeserialize,
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        T::deserialize_compressed(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

impl<T: CanonicalSerialize> SerializeAs<T> for AsCanonical {
    fn serialize_as<S: Serializer>(x: &T, serializer: S) -> Result<S::Ok, S::Error> {
        Self::serialize(x, serializer)
    }
}

impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for AsCanonical {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        Self::deserialize(deserializer)
    }
}
