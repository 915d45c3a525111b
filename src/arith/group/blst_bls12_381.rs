//! blst-backed concrete implementation for BLS12-381 point operations.
//!
//! Encodings follow the ZCash BLS12-381 serialization format implemented by
//! `blstrs`: 48/96-byte compressed and 96/192-byte uncompressed points for
//! G1/G2, with the three high bits of the first byte used as flags.

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use group::Group;

use super::fixed_bytes;
use crate::{BackendError, CurvePoint};

pub type G1 = G1Projective;
pub type G2 = G2Projective;

impl CurvePoint<Scalar> for G1 {
    const COMPRESSED_SIZE: usize = 48;
    const UNCOMPRESSED_SIZE: usize = 96;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn encode_compressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_compressed().to_vec()
    }

    fn encode_uncompressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_uncompressed().to_vec()
    }

    fn decode_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr = fixed_bytes::<48>(bytes)?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&repr))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid G1 point"))
    }

    fn decode_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr = fixed_bytes::<96>(bytes)?;
        Option::<G1Affine>::from(G1Affine::from_uncompressed(&repr))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid G1 point"))
    }
}

impl CurvePoint<Scalar> for G2 {
    const COMPRESSED_SIZE: usize = 96;
    const UNCOMPRESSED_SIZE: usize = 192;

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn encode_compressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_compressed().to_vec()
    }

    fn encode_uncompressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_uncompressed().to_vec()
    }

    fn decode_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr = fixed_bytes::<96>(bytes)?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&repr))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid G2 point"))
    }

    fn decode_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr = fixed_bytes::<192>(bytes)?;
        Option::<G2Affine>::from(G2Affine::from_uncompressed(&repr))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid G2 point"))
    }
}
