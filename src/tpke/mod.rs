//! Threshold-compatible hybrid public-key encryption.
//!
//! A DKG committee publishes an aggregated Feldman commitment to its shared
//! secret. This module turns that commitment into an encryption key and
//! encrypts payloads under it so that only a quorum of the committee can
//! decrypt.
//!
//! # Flow
//!
//! 1. **Key derivation** ([`ThresholdPublicKey::from_aggregated_commitment`]):
//!    decode the 128-byte commitment and multiply it by the integer scaler of
//!    the committee's `(n, t)` configuration.
//!
//! 2. **Encryption** ([`ThresholdEncryption::encrypt`]): ElGamal-encrypt a
//!    fresh G1 point and use its hash to AES-encrypt the payload.
//!
//! 3. **Framing** ([`Envelope`]): serialize `key part || payload` with an
//!    optional marker prefix.
//!
//! Share combination and ciphertext verification are part of the interface
//! but report [`Error::Unimplemented`].
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use tpke::{AggregatedCommitment, CurvePoint, Encryptor, Envelope, G1, PublicKey};
//!
//! // commitment as published by a 7-node DKG
//! let commitment = AggregatedCommitment::from_point(&G1::generator());
//! let pk = PublicKey::from_consensus_commitment(commitment.as_bytes(), 7)?;
//!
//! let ct = Encryptor::new().encrypt(&mut thread_rng(), &pk, b"signed transaction")?;
//! let wire = Envelope::to_bytes(&ct, true);
//! assert_eq!(wire.len(), 4 + 192 + 32);
//! # Ok::<(), tpke::Error>(())
//! ```

use core::fmt::Debug;

use rand_core::{CryptoRng, RngCore};

use crate::{CurveBackend, errors::Error};

mod scheme;
pub use scheme::HybridEncryptor;

mod keys;
pub use keys::{AggregatedCommitment, ThresholdPublicKey};

mod ciphertext;
pub use ciphertext::{DecryptionShare, HybridCiphertext, KeyCiphertext};

mod envelope;
pub use envelope::{ENVELOPE_MARKER, Envelope};

/// High-level threshold encryption interface.
pub trait ThresholdEncryption<B: CurveBackend>: Debug + Send + Sync + 'static {
    /// Encrypts a non-empty payload under the committee key.
    fn encrypt<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        pk: &ThresholdPublicKey<B>,
        message: &[u8],
    ) -> Result<HybridCiphertext<B>, Error>;

    /// Checks that the key ciphertext is well formed.
    fn verify_ciphertext(&self, ciphertext: &HybridCiphertext<B>) -> Result<(), Error>;

    /// Combines at least `t` decryption shares and decrypts the payload.
    fn combine_shares(
        &self,
        ciphertext: &HybridCiphertext<B>,
        shares: &[DecryptionShare<B>],
    ) -> Result<Vec<u8>, Error>;
}
