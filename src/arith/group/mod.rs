use std::fmt::Debug;

use crate::{BackendError, FieldElement};

mod blst_bls12_381;
pub use blst_bls12_381::{G1, G2};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// This trait provides additive group operations on points in projective
/// coordinates together with the canonical fixed-length byte encodings used on
/// the wire. Decoding always validates that the bytes describe a point on the
/// curve and inside the prime-order subgroup.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use tpke::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = Fr::random(&mut rng);
///
/// // Point operations
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// let neg = point.negate();
/// assert_eq!(point.add(&neg), G1::identity());
///
/// // Encoding
/// let bytes = doubled.encode_compressed();
/// assert_eq!(bytes.len(), G1::COMPRESSED_SIZE);
/// assert_eq!(G1::decode_compressed(&bytes).unwrap(), doubled);
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Send + Sync + Debug + PartialEq + Eq + 'static + Copy
{
    /// Length of the compressed encoding in bytes.
    const COMPRESSED_SIZE: usize;
    /// Length of the uncompressed encoding in bytes.
    const UNCOMPRESSED_SIZE: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Canonical compressed encoding.
    fn encode_compressed(&self) -> Vec<u8>;

    /// Canonical uncompressed encoding (`x || y`).
    fn encode_uncompressed(&self) -> Vec<u8>;

    /// Decodes a compressed point, rejecting off-curve and non-subgroup points.
    fn decode_compressed(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Decodes an uncompressed point, rejecting off-curve and non-subgroup points.
    fn decode_uncompressed(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Copies `bytes` into a fixed-size array, reporting the length mismatch otherwise.
pub(crate) fn fixed_bytes<const N: usize>(bytes: &[u8]) -> Result<[u8; N], BackendError> {
    bytes.try_into().map_err(|_| BackendError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}
