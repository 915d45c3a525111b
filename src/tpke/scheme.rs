use core::marker::PhantomData;

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::{instrument, trace};

use crate::{
    CurveBackend, CurvePoint, DecryptionShare, DefaultBackend, FieldElement, HybridCiphertext,
    KeyCiphertext, ThresholdEncryption, ThresholdPublicKey,
    errors::Error,
    sym_enc::{Aes256CbcEncryption, SymmetricEncryption},
};

/// ElGamal key encapsulation over G1 combined with an AES-256-CBC payload.
#[derive(Debug)]
pub struct HybridEncryptor<B: CurveBackend = DefaultBackend> {
    _phantom: PhantomData<B>,
    symmetric_enc: Aes256CbcEncryption,
}

impl<B: CurveBackend> HybridEncryptor<B> {
    /// Creates a new encryptor instance.
    pub fn new() -> Self {
        Self::with_encryption(Aes256CbcEncryption::new())
    }

    /// Creates an encryptor with a custom payload cipher instance.
    pub fn with_encryption(symmetric_enc: Aes256CbcEncryption) -> Self {
        Self {
            _phantom: PhantomData,
            symmetric_enc,
        }
    }

    /// Encrypts `message` under `pk`.
    ///
    /// 1. sample `r` and an ephemeral point `M = s * G1`
    /// 2. `C = M + r * pk`, `R1 = r * G1`, `R2 = -(r * G2)`
    /// 3. encrypt `message` with AES-256-CBC keyed by the SHA-256 digest of
    ///    the uncompressed encoding of `M`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `message` is empty.
    #[instrument(level = "debug", skip_all, fields(message_len = message.len()))]
    pub fn encrypt<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        pk: &ThresholdPublicKey<B>,
        message: &[u8],
    ) -> Result<HybridCiphertext<B>, Error> {
        if message.is_empty() {
            return Err(Error::InvalidInput("message must not be empty".into()));
        }
        let (key, ephemeral) = Self::encapsulate(rng, pk);
        let payload = self
            .symmetric_enc
            .encrypt(&ephemeral.encode_uncompressed(), message)?;
        trace!(payload_len = payload.len(), "payload sealed");
        Ok(HybridCiphertext { key, payload })
    }

    /// [`Self::encrypt`] with randomness from the operating system.
    pub fn encrypt_with_os_rng(
        &self,
        pk: &ThresholdPublicKey<B>,
        message: &[u8],
    ) -> Result<HybridCiphertext<B>, Error> {
        self.encrypt(&mut OsRng, pk, message)
    }

    /// Returns the key ciphertext and the ephemeral point it hides.
    pub(crate) fn encapsulate<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        pk: &ThresholdPublicKey<B>,
    ) -> (KeyCiphertext<B>, B::G1) {
        let r = B::Scalar::random(rng);
        let ephemeral = B::G1::generator().mul_scalar(&B::Scalar::random(rng));

        let key = KeyCiphertext {
            c: ephemeral.add(&pk.point().mul_scalar(&r)),
            r1: B::G1::generator().mul_scalar(&r),
            r2: B::G2::generator().mul_scalar(&r).negate(),
        };
        (key, ephemeral)
    }
}

impl<B: CurveBackend> Default for HybridEncryptor<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CurveBackend> ThresholdEncryption<B> for HybridEncryptor<B> {
    fn encrypt<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        pk: &ThresholdPublicKey<B>,
        message: &[u8],
    ) -> Result<HybridCiphertext<B>, Error> {
        HybridEncryptor::encrypt(self, rng, pk, message)
    }

    fn verify_ciphertext(&self, ciphertext: &HybridCiphertext<B>) -> Result<(), Error> {
        ciphertext.key.verify()
    }

    fn combine_shares(
        &self,
        _ciphertext: &HybridCiphertext<B>,
        _shares: &[DecryptionShare<B>],
    ) -> Result<Vec<u8>, Error> {
        Err(Error::Unimplemented("decryption share combination"))
    }
}
