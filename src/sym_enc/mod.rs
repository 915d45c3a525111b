//! Symmetric encryption primitives for payload encapsulation.
//!
//! The hybrid scheme encrypts the message body under a key derived from the
//! ephemeral G1 point that the ElGamal part of the ciphertext hides. Anyone who
//! recovers that point (the threshold decryption committee, in practice) can
//! rebuild the same key and decrypt the payload with this module.
//!
//! # Implementations
//!
//! - **[`Aes256CbcEncryption`]**: AES-256-CBC with PKCS#7 padding, key and IV
//!   taken from `SHA-256(secret)`
//!
//! # Example
//!
//! ```rust
//! use tpke::{Aes256CbcEncryption, SymmetricEncryption};
//!
//! let encryption = Aes256CbcEncryption::default();
//! let secret = b"uncompressed ephemeral point bytes";
//! let plaintext = b"Hello, threshold encryption!";
//!
//! let ciphertext = encryption.encrypt(secret, plaintext).unwrap();
//! assert_eq!(ciphertext.len() % 16, 0);
//!
//! let recovered = encryption.decrypt(secret, &ciphertext).unwrap();
//! assert_eq!(plaintext, &recovered[..]);
//! ```

use core::fmt::Debug;

use aes::{
    Aes256,
    cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7},
};
use sha2::{Digest, Sha256};

use crate::Error;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Trait for symmetric encryption/decryption operations.
///
/// This trait abstracts away the details of symmetric encryption so the hybrid
/// encryptor can be parameterized over the payload cipher.
pub trait SymmetricEncryption: Debug + Send + Sync {
    /// Encrypts plaintext with the given secret.
    ///
    /// # Parameters
    ///
    /// - `secret`: Secret bytes the cipher key is derived from
    /// - `plaintext`: Data to encrypt
    ///
    /// # Returns
    ///
    /// The encrypted ciphertext, or an error if encryption fails.
    fn encrypt(&self, secret: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error>;

    /// Decrypts ciphertext with the given secret.
    ///
    /// # Parameters
    ///
    /// - `secret`: Secret bytes (must match the ones used to encrypt)
    /// - `ciphertext`: Encrypted data
    ///
    /// # Returns
    ///
    /// The decrypted plaintext, or an error if decryption fails.
    fn decrypt(&self, secret: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error>;
}

/// AES-256-CBC with PKCS#7 padding.
///
/// The 32-byte key is `SHA-256(secret)` and the IV is the first 16 bytes of
/// that same digest. Reusing the digest as IV is only sound because every
/// encryption derives the secret from a freshly sampled point; never feed a
/// long-lived secret into this cipher.
///
/// The ciphertext is unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256CbcEncryption;

impl Aes256CbcEncryption {
    /// Creates the cipher.
    pub fn new() -> Self {
        Self
    }

    fn derive_key_iv(secret: &[u8]) -> ([u8; 32], [u8; BLOCK_SIZE]) {
        let key: [u8; 32] = Sha256::digest(secret).into();
        let mut iv = [0u8; BLOCK_SIZE];
        iv.copy_from_slice(&key[..BLOCK_SIZE]);
        (key, iv)
    }
}

impl SymmetricEncryption for Aes256CbcEncryption {
    fn encrypt(&self, secret: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        if plaintext.is_empty() {
            return Err(Error::InvalidInput("plaintext must not be empty".into()));
        }
        let (key, iv) = Self::derive_key_iv(secret);
        let cipher = Aes256CbcEnc::new_from_slices(&key, &iv)
            .map_err(|_| Error::Symmetric("invalid key or iv length"))?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(&self, secret: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::Symmetric(
                "ciphertext length is not a positive multiple of the block size",
            ));
        }
        let (key, iv) = Self::derive_key_iv(secret);
        let cipher = Aes256CbcDec::new_from_slices(&key, &iv)
            .map_err(|_| Error::Symmetric("invalid key or iv length"))?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Symmetric("invalid padding"))
    }
}
