use std::fmt::Debug;

use num_bigint::{BigInt, BigUint, Sign};
use rand_core::RngCore;

use crate::BackendError;

mod blst_bls12_381;
pub use blst_bls12_381::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve, providing
/// the operations needed to sample encryption randomness and to turn exact
/// integers (scalers, scaled Lagrange coefficients) into field elements.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use rand::thread_rng;
/// use tpke::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
///
/// // Serialization
/// let bytes = a.to_repr();
/// let recovered = Fr::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
///
/// // Exact integers reduce into the field
/// assert_eq!(Fr::from_biguint(&BigUint::from(360u32)), Fr::from_u64(360));
/// ```
pub trait FieldElement: Clone + Send + Sync + Debug + PartialEq + 'static + Copy {
    /// Byte representation type (32 big-endian bytes for BLS12-381 scalars).
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Returns the additive inverse.
    fn neg(&self) -> Self;

    /// Serializes this field element to its byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is not reduced modulo the field order.
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    /// Reduces an arbitrary-precision unsigned integer modulo the field order.
    fn from_biguint(value: &BigUint) -> Self;

    /// Reduces an arbitrary-precision signed integer modulo the field order.
    fn from_bigint(value: &BigInt) -> Self {
        let magnitude = Self::from_biguint(value.magnitude());
        match value.sign() {
            Sign::Minus => magnitude.neg(),
            Sign::NoSign | Sign::Plus => magnitude,
        }
    }
}
