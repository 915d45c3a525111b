//! # tpke: threshold-compatible hybrid encryption over BLS12-381
//!
//! `tpke` encrypts short payloads (transaction blobs, typically) under a
//! public key held jointly by a committee that ran a Feldman-VSS DKG, so that
//! only a quorum of `t` out of `n` members can decrypt.
//!
//! ## Overview
//!
//! Two pieces do the real work:
//!
//! - **Integer scaler** ([`ScalerSolver`]): Lagrange coefficients at zero are
//!   fractions, but shares live in an additive group where only integer
//!   multiples are available. The scaler `D` is the smallest integer that
//!   clears every denominator for every quorum of size `t`, so a committee can
//!   reconstruct `D * secret` with integer coefficients only.
//!
//! - **Hybrid encryption** ([`HybridEncryptor`]): ElGamal encryption of a fresh
//!   G1 point under the committee key, with the point's hash keying AES-256-CBC
//!   over the payload.
//!
//! ## Architecture
//!
//! - **[`arith`]**: trait seam over G1/G2 of BLS12-381 with the `blstrs`
//!   implementation ([`BlstBackend`]).
//! - **[`scaler`]**: scaler search, the process-wide [`ScalerCache`], and scaled
//!   Lagrange coefficients for a concrete quorum.
//! - **[`tpke`](crate::tpke)**: [`ThresholdPublicKey`], [`HybridEncryptor`],
//!   ciphertext types and the wire [`Envelope`].
//! - **[`sym_enc`]**: the [`SymmetricEncryption`] trait and AES-256-CBC.
//! - **[`config`]**: [`ConsensusParameters`] and the BFT threshold rule.
//! - **[`errors`]**: error types for backend and protocol operations.
//!
//! ## Quick Example
//!
//! ```rust
//! use rand::thread_rng;
//! use tpke::{
//!     AggregatedCommitment, ConsensusParameters, CurvePoint, Encryptor, Envelope, G1, PublicKey,
//! };
//!
//! # fn main() -> Result<(), tpke::Error> {
//! // 7 validators, BFT threshold 5
//! let params = ConsensusParameters::from_consensus_size(7)?;
//! assert_eq!(params.threshold, 5);
//!
//! // Aggregated commitment as published by the DKG
//! let commitment = AggregatedCommitment::from_point(&G1::generator());
//! let pk = PublicKey::from_aggregated_commitment(commitment.as_bytes(), &params)?;
//!
//! let ciphertext = Encryptor::new().encrypt(&mut thread_rng(), &pk, b"raw transaction")?;
//! let wire = Envelope::to_bytes(&ciphertext, true);
//! let parsed: tpke::HybridCiphertext = Envelope::from_bytes(&wire)?;
//! assert_eq!(parsed, ciphertext);
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! The scaler search visits all `C(n, t)` quorums. Branches run in parallel
//! on the Rayon pool and results are memoized per `(n, t)`, so the cost is
//! paid once per committee configuration.
//!
//! ## Security Considerations
//!
//! - The AES IV is derived from the same hash as the key. This is sound only
//!   because the hashed point is fresh for every encryption.
//! - The payload cipher is unauthenticated. Ciphertext verification and share
//!   combination return [`Error::Unimplemented`].

pub mod arith;
pub mod config;
pub mod errors;
pub mod scaler;
mod serde_impl;
pub mod sym_enc;
pub mod tpke;

pub use arith::*;
pub use config::*;
pub use errors::*;
pub use scaler::*;
pub use sym_enc::*;
pub use tpke::*;

/// Committee public key on the default backend.
pub type PublicKey = ThresholdPublicKey<DefaultBackend>;

/// Hybrid encryptor on the default backend.
pub type Encryptor = HybridEncryptor<DefaultBackend>;
