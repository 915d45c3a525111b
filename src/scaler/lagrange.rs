use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use super::{Scaler, interpolation::lagrange_at_zero};
use crate::errors::Error;

/// Integer Lagrange coefficients `D * lambda_i` for interpolating at zero from
/// the shares held by `indices` (1-based participant indices).
///
/// For shares `S_i = f(i) * G` of a polynomial of degree `< indices.len()`,
/// `sum_i c_i * S_i = D * f(0) * G`, using only integer scalar multiplication.
///
/// Fails with [`Error::InvalidInput`] on empty, zero or repeated indices, or if
/// `scaler` does not clear this quorum's denominator (i.e. it was solved for
/// different consensus parameters).
///
/// # Example
///
/// ```rust
/// use num_bigint::BigInt;
/// use tpke::{ConsensusParameters, ScalerSolver, scaled_lagrange_coefficients};
///
/// let scaler = ScalerSolver::solve(&ConsensusParameters::new(4, 2)?)?;
/// // lambda = (3/2, -1/2) for quorum {1, 3}; D = 6
/// let coeffs = scaled_lagrange_coefficients(&[1, 3], &scaler)?;
/// assert_eq!(coeffs, vec![BigInt::from(9), BigInt::from(-3)]);
/// # Ok::<(), tpke::Error>(())
/// ```
pub fn scaled_lagrange_coefficients(
    indices: &[u64],
    scaler: &Scaler,
) -> Result<Vec<BigInt>, Error> {
    if indices.contains(&0) {
        return Err(Error::InvalidInput("participant indices are 1-based".into()));
    }
    let mut seen = HashSet::with_capacity(indices.len());
    if let Some(dup) = indices.iter().find(|idx| !seen.insert(**idx)) {
        return Err(Error::InvalidInput(format!("duplicate participant index {dup}")));
    }

    let reduced = lagrange_at_zero(indices)?;
    let (factor, remainder) = scaler.value().div_rem(&reduced.denominator);
    if !remainder.is_zero() {
        return Err(Error::InvalidInput(format!(
            "scaler {scaler} does not clear quorum denominator {}",
            reduced.denominator
        )));
    }

    let factor = BigInt::from(factor);
    Ok(reduced
        .numerators
        .into_iter()
        .map(|numerator| numerator * &factor)
        .collect())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{ConsensusParameters, CurvePoint, FieldElement, Fr, G1, ScalerSolver};

    fn evaluate(coeffs: &[Fr], x: u64) -> Fr {
        let x = Fr::from_u64(x);
        coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * x + coeff)
    }

    #[test]
    fn reconstructs_scaled_secret_in_the_group() {
        let mut rng = StdRng::seed_from_u64(0x5ca1e);
        let params = ConsensusParameters::from_consensus_size(7).unwrap();
        let scaler = ScalerSolver::solve(&params).unwrap();

        let coeffs: Vec<Fr> = (0..params.threshold).map(|_| Fr::random(&mut rng)).collect();
        let expected = G1::generator().mul_scalar(&(coeffs[0] * scaler.to_field::<Fr>()));

        for quorum in [[1u64, 2, 3, 4, 5], [3, 4, 5, 6, 7], [1, 3, 4, 6, 7]] {
            let weights = scaled_lagrange_coefficients(&quorum, &scaler).unwrap();
            let combined = quorum
                .iter()
                .zip(&weights)
                .map(|(&x, w)| {
                    G1::generator()
                        .mul_scalar(&evaluate(&coeffs, x))
                        .mul_scalar(&Fr::from_bigint(w))
                })
                .fold(G1::identity(), |acc, p| acc.add(&p));
            assert_eq!(combined, expected, "quorum {quorum:?}");
        }
    }

    #[test]
    fn rejects_scaler_from_other_parameters() {
        let scaler = ScalerSolver::solve(&ConsensusParameters::new(4, 2).unwrap()).unwrap();
        // {1, 5} has denominator 4, which does not divide 6
        let err = scaled_lagrange_coefficients(&[1, 5], &scaler).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_malformed_quorums() {
        let scaler = Scaler::new(BigUint::from(6u8)).unwrap();
        assert!(scaled_lagrange_coefficients(&[], &scaler).is_err());
        assert!(scaled_lagrange_coefficients(&[0, 1], &scaler).is_err());
        assert!(scaled_lagrange_coefficients(&[2, 1, 2], &scaler).is_err());
    }
}
