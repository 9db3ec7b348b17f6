#![cfg_attr(not(feature = "std"), no_std)]

//! Helpers shared by the threshold crates: the boundary to the prime-order group, the hash functions
//! used for Fiat-Shamir challenges, polynomial arithmetic with Lagrange interpolation and the encryption
//! schemes a threshold decryption can complete.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod serde_utils;
pub mod commitment;
pub mod ecies;
pub mod elgamal;
pub mod encryption;
pub mod ff;
pub mod group;
pub mod hashing_utils;
pub mod poly;
