//! Ciphertext structures produced by the hybrid encryptor.
//!
//! - [`KeyCiphertext`]: ElGamal encryption `(C, R1, R2)` of the ephemeral point
//! - [`HybridCiphertext`]: the key part together with the AES payload
//! - [`DecryptionShare`]: one committee member's share, only used to type the
//!   share combination entry point
//!
//! # Wire layout
//!
//! ```text
//! C (G1, 48 bytes) || R1 (G1, 48 bytes) || R2 (G2, 96 bytes)
//! ```
//!
//! All points use compressed encodings, for 192 bytes in total on BLS12-381.

use core::fmt;

use crate::{CurveBackend, CurvePoint, DefaultBackend, errors::Error};

/// ElGamal encryption of the ephemeral point `M`.
///
/// - `c = M + r * pk`
/// - `r1 = r * G1`
/// - `r2 = -(r * G2)`
///
/// `r2` lets a verifier check with a pairing that `r1` and `r2` share the
/// same randomness.
pub struct KeyCiphertext<B: CurveBackend = DefaultBackend> {
    pub c: B::G1,
    pub r1: B::G1,
    pub r2: B::G2,
}

impl<B: CurveBackend> KeyCiphertext<B> {
    /// Encoded length in bytes.
    pub const SIZE: usize = 2 * B::G1::COMPRESSED_SIZE + B::G2::COMPRESSED_SIZE;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        out.extend_from_slice(&self.c.encode_compressed());
        out.extend_from_slice(&self.r1.encode_compressed());
        out.extend_from_slice(&self.r2.encode_compressed());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::SIZE {
            return Err(Error::InvalidInput(format!(
                "key ciphertext must be {} bytes, got {}",
                Self::SIZE,
                bytes.len()
            )));
        }
        let g1 = B::G1::COMPRESSED_SIZE;
        let (c, rest) = bytes.split_at(g1);
        let (r1, r2) = rest.split_at(g1);
        Ok(Self {
            c: B::G1::decode_compressed(c)?,
            r1: B::G1::decode_compressed(r1)?,
            r2: B::G2::decode_compressed(r2)?,
        })
    }

    /// Checks `e(r1, G2) * e(G1, r2) == 1`.
    ///
    /// The pairing check is not available in this crate.
    pub fn verify(&self) -> Result<(), Error> {
        Err(Error::Unimplemented("key ciphertext verification"))
    }
}

impl<B: CurveBackend> Clone for KeyCiphertext<B> {
    fn clone(&self) -> Self {
        Self {
            c: self.c,
            r1: self.r1,
            r2: self.r2,
        }
    }
}

impl<B: CurveBackend> PartialEq for KeyCiphertext<B> {
    fn eq(&self, other: &Self) -> bool {
        self.c == other.c && self.r1 == other.r1 && self.r2 == other.r2
    }
}

impl<B: CurveBackend> Eq for KeyCiphertext<B> {}

impl<B: CurveBackend> fmt::Debug for KeyCiphertext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCiphertext")
            .field("c", &self.c)
            .field("r1", &self.r1)
            .field("r2", &self.r2)
            .finish()
    }
}

/// Output of [`HybridEncryptor::encrypt`](crate::HybridEncryptor::encrypt).
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use tpke::{CurvePoint, Encryptor, G1, KeyCiphertext, PublicKey};
///
/// let pk = PublicKey::from_point(G1::generator());
/// let ct = Encryptor::new().encrypt(&mut thread_rng(), &pk, b"transfer 10")?;
///
/// assert_eq!(ct.key.to_bytes().len(), KeyCiphertext::<tpke::DefaultBackend>::SIZE);
/// assert_eq!(ct.payload.len(), 16);
/// # Ok::<(), tpke::Error>(())
/// ```
pub struct HybridCiphertext<B: CurveBackend = DefaultBackend> {
    pub key: KeyCiphertext<B>,
    /// AES-256-CBC ciphertext of the message.
    pub payload: Vec<u8>,
}

impl<B: CurveBackend> Clone for HybridCiphertext<B> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            payload: self.payload.clone(),
        }
    }
}

impl<B: CurveBackend> PartialEq for HybridCiphertext<B> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.payload == other.payload
    }
}

impl<B: CurveBackend> Eq for HybridCiphertext<B> {}

impl<B: CurveBackend> fmt::Debug for HybridCiphertext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridCiphertext")
            .field("key", &self.key)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

/// Decryption share `sk_i * R1` from a single committee member.
///
/// # Fields
///
/// - `participant_id`: 1-based index of the member in the DKG
/// - `share`: the member's share in G1
#[derive(Debug)]
pub struct DecryptionShare<B: CurveBackend = DefaultBackend> {
    pub participant_id: u64,
    pub share: B::G1,
}

impl<B: CurveBackend> Clone for DecryptionShare<B> {
    fn clone(&self) -> Self {
        Self {
            participant_id: self.participant_id,
            share: self.share,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{FieldElement, Fr, G1, G2};

    fn sample(seed: u64) -> KeyCiphertext {
        let mut rng = StdRng::seed_from_u64(seed);
        let r = <Fr as FieldElement>::random(&mut rng);
        KeyCiphertext {
            c: G1::generator().mul_scalar(&<Fr as FieldElement>::random(&mut rng)),
            r1: G1::generator().mul_scalar(&r),
            r2: G2::generator().mul_scalar(&r).negate(),
        }
    }

    #[test]
    fn wire_size_is_192_bytes() {
        assert_eq!(KeyCiphertext::<DefaultBackend>::SIZE, 192);
        assert_eq!(sample(1).to_bytes().len(), 192);
    }

    #[test]
    fn bytes_roundtrip() {
        let ct = sample(2);
        let decoded = KeyCiphertext::<DefaultBackend>::from_bytes(&ct.to_bytes()).unwrap();
        assert_eq!(decoded, ct);
    }

    #[test]
    fn from_bytes_rejects_wrong_length_and_garbage() {
        let bytes = sample(3).to_bytes();
        assert!(matches!(
            KeyCiphertext::<DefaultBackend>::from_bytes(&bytes[..191]),
            Err(Error::InvalidInput(_))
        ));

        let mut corrupted = bytes.clone();
        // x = 1 is not on G1
        corrupted[..48].fill(0);
        corrupted[0] = 0x80;
        corrupted[47] = 1;
        assert!(matches!(
            KeyCiphertext::<DefaultBackend>::from_bytes(&corrupted),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn verification_is_not_supported() {
        assert!(matches!(sample(4).verify(), Err(Error::Unimplemented(_))));
    }
}
