#![cfg_attr(not(feature = "std"), no_std)]

//! # Threshold secret sharing
//!
//! A secret is split among `n` participants so that any `t` of them can reconstruct it or decrypt with
//! it while fewer learn nothing. Three roles:
//!
//! - [dealer](./src/dealer.rs) creates the sharing and Feldman or Pedersen commitments to it.
//! - [shareholder](./src/shareholder.rs) checks its share against the commitments, publishes its public share with a
//!   Schnorr proof and creates partial decryptors with a DDH proof of correctness.
//! - [combiner](./src/combiner.rs) recombines shares, public shares or partial decryptors with Lagrange
//!   coefficients, optionally checking each contribution first and blaming the invalid ones.
//!
//! All of it is generic over an arkworks curve `G: AffineRepr` with the generator given by a
//! `GroupContext`.

pub mod combiner;
pub mod common;
pub mod dealer;
pub mod error;
pub mod shareholder;

pub use combiner::{Recovery, RecoveryOptions};
pub use common::{
    Commitments, PartialDecryptor, PublicShare, SchnorrPacket, SecretPacket, SecretShare, ShareId,
};
pub use dealer::{distribute, distribute_encoded, Sharing};
pub use error::{ErrorKind, SSError};
