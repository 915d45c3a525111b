use crate::{CurveBackend, Fr, G1, G2};

/// Curve backend for BLS12-381 backed by `blstrs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlstBackend;

impl CurveBackend for BlstBackend {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
}
