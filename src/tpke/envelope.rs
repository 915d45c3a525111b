//! Wire framing for hybrid ciphertexts.
//!
//! ```text
//! [FF FF FF FF] || key ciphertext (192 bytes) || AES-CBC payload
//! ```
//!
//! The four-byte marker is optional and lets a transaction pool tell encrypted
//! blobs apart from plaintext ones. A compressed G1 encoding always has its
//! top bit set, and a point whose encoding starts with `FF FF FF FF` would have
//! both the infinity and the sign flag set, which no valid encoding does, so
//! the marker can never be confused with the start of a key part.

use crate::{
    CurveBackend, DefaultBackend, HybridCiphertext, KeyCiphertext, errors::Error,
    sym_enc::BLOCK_SIZE,
};

/// Prefix marking an encrypted envelope.
pub const ENVELOPE_MARKER: [u8; 4] = [0xff; 4];

/// Serialized form of a [`HybridCiphertext`].
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use tpke::{CurvePoint, Encryptor, Envelope, G1, PublicKey, ENVELOPE_MARKER};
///
/// let pk = PublicKey::from_point(G1::generator());
/// let ct = Encryptor::new().encrypt(&mut thread_rng(), &pk, b"payload")?;
///
/// let framed = Envelope::to_bytes(&ct, true);
/// assert_eq!(framed[..4], ENVELOPE_MARKER);
///
/// let parsed = Envelope::<tpke::DefaultBackend>::from_bytes(&framed)?;
/// assert_eq!(parsed, ct);
/// # Ok::<(), tpke::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelope<B: CurveBackend = DefaultBackend> {
    _backend: core::marker::PhantomData<B>,
}

impl<B: CurveBackend> Envelope<B> {
    /// `keyPart || payloadPart`, optionally prefixed with [`ENVELOPE_MARKER`].
    pub fn to_bytes(ciphertext: &HybridCiphertext<B>, with_marker: bool) -> Vec<u8> {
        let marker_len = if with_marker { ENVELOPE_MARKER.len() } else { 0 };
        let mut out =
            Vec::with_capacity(marker_len + KeyCiphertext::<B>::SIZE + ciphertext.payload.len());
        if with_marker {
            out.extend_from_slice(&ENVELOPE_MARKER);
        }
        out.extend_from_slice(&ciphertext.key.to_bytes());
        out.extend_from_slice(&ciphertext.payload);
        out
    }

    /// Parses either framing.
    pub fn from_bytes(bytes: &[u8]) -> Result<HybridCiphertext<B>, Error> {
        let body = Self::strip_marker(bytes);
        if body.len() < KeyCiphertext::<B>::SIZE {
            return Err(Error::InvalidInput(format!(
                "envelope too short: {} bytes, key part alone is {}",
                body.len(),
                KeyCiphertext::<B>::SIZE
            )));
        }
        let (key, payload) = body.split_at(KeyCiphertext::<B>::SIZE);
        if payload.is_empty() || payload.len() % BLOCK_SIZE != 0 {
            return Err(Error::InvalidInput(format!(
                "payload must be a non-empty multiple of {BLOCK_SIZE} bytes, got {}",
                payload.len()
            )));
        }
        Ok(HybridCiphertext {
            key: KeyCiphertext::from_bytes(key)?,
            payload: payload.to_vec(),
        })
    }

    /// Whether `bytes` starts with [`ENVELOPE_MARKER`].
    pub fn is_marked(bytes: &[u8]) -> bool {
        bytes.starts_with(&ENVELOPE_MARKER)
    }

    fn strip_marker(bytes: &[u8]) -> &[u8] {
        bytes.strip_prefix(&ENVELOPE_MARKER[..]).unwrap_or(bytes)
    }
}
