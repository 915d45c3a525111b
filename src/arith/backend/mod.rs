use std::fmt::Debug;

mod blst_bls12_381;
pub use blst_bls12_381::BlstBackend;

use crate::{CurvePoint, FieldElement};

/// Backend used by the crate-level type aliases.
pub type DefaultBackend = BlstBackend;

/// Main backend trait that ties together the group operations of a
/// pairing-friendly curve.
///
/// Keys, ciphertexts and the encryptor are generic over this trait; the
/// encryption scheme only needs additive operations on G1 and G2, so no
/// pairing is exposed.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
///
/// # Example
///
/// ```rust
/// use tpke::{BlstBackend, CurveBackend, CurvePoint};
///
/// type G1 = <BlstBackend as CurveBackend>::G1;
/// type G2 = <BlstBackend as CurveBackend>::G2;
///
/// assert_eq!(G1::generator().encode_compressed().len(), 48);
/// assert_eq!(G2::generator().encode_compressed().len(), 96);
/// ```
pub trait CurveBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
}
