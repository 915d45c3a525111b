//! blst-backed scalar field of BLS12-381.

use blstrs::Scalar;
use ff::Field;
use num_bigint::BigUint;
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = Scalar;

impl FieldElement for Scalar {
    type Repr = [u8; 32];

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn neg(&self) -> Self {
        -self
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes_be()
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        Option::<Scalar>::from(Scalar::from_bytes_be(repr))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn from_biguint(value: &BigUint) -> Self {
        // Horner over little-endian 64-bit limbs, most significant first.
        let half = Scalar::from(1u64 << 32);
        let radix = half * half;
        value
            .to_u64_digits()
            .iter()
            .rev()
            .fold(Scalar::ZERO, |acc, limb| acc * radix + Scalar::from(*limb))
    }
}
