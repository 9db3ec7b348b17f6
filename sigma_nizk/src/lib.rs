#![cfg_attr(not(feature = "std"), no_std)]

//! Proofs of knowledge for linear relations over a prime order group.
//!
//! A `LinearRelation` lists equations `v_i = u_{i,1} * x_1 + ... + u_{i,k} * x_k` over public bases and
//! images. A single Sigma protocol proves knowledge of the witnesses `x_j` for any such relation and the
//! Fiat-Shamir transform makes it non-interactive. Discrete log, DDH tuples, conjunctions, equality of
//! discrete logs and multi-base representations are all special cases of it.
//!
//! ```ignore
//! let relation = LinearRelation::ddh(g, u, v, w);
//! let config = ProofConfig::default().with_nonce(Some(b"session".as_slice()));
//! let proof = prove(rng, &context, &relation, vec![z], &config)?;
//! assert!(proof.verify(&context, &relation, &config)?);
//! ```

pub mod error;
pub mod nizk;
pub mod relation;
pub mod specialized;

pub use error::NizkError;
pub use nizk::{compute_challenge, prove, NizkProof, ProofConfig, SigmaProtocol};
pub use relation::LinearRelation;
pub use specialized::{prove_ddh, prove_dlog, verify_ddh, verify_dlog};
