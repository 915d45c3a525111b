//! Exact Lagrange-at-zero coefficients for integer evaluation points.
//!
//! For points `x_1..x_t` the Vandermonde matrix `V[i][j] = x_i^j` has
//! `lambda_i = C_i0 / det(V)`, with `C_i0` the column-0 cofactor of row `i`.
//! Both sides have closed forms over the points, which reduce to
//!
//! ```text
//! lambda_i = prod_{j != i} x_j / prod_{j != i} (x_j - x_i)
//! ```
//!
//! so one quorum costs `O(t^2)` big-integer multiplications.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::Error;

/// Lagrange-at-zero coefficients written over a common positive denominator,
/// reduced so that `gcd(denominator, numerators...) == 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ReducedCoefficients {
    pub denominator: BigUint,
    pub numerators: Vec<BigInt>,
}

/// Computes the reduced coefficients for the given distinct evaluation points.
pub(crate) fn lagrange_at_zero(points: &[u64]) -> Result<ReducedCoefficients, Error> {
    if points.is_empty() {
        return Err(Error::InvalidInput("interpolation needs at least one point".into()));
    }

    // each lambda_i in lowest terms with a positive denominator
    let mut fractions = Vec::with_capacity(points.len());
    for (i, &xi) in points.iter().enumerate() {
        let xi = BigInt::from(xi);
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, &xj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(xj);
            denominator *= &xj - &xi;
            numerator *= xj;
        }
        if denominator.is_zero() {
            return Err(Error::InvalidInput(
                "evaluation points must be pairwise distinct".into(),
            ));
        }
        fractions.push(lowest_terms(numerator, denominator));
    }

    let common = fractions
        .iter()
        .fold(BigUint::one(), |acc, (_, den)| acc.lcm(den));
    let numerators = fractions
        .into_iter()
        .map(|(num, den)| num * BigInt::from(&common / den))
        .collect();

    Ok(ReducedCoefficients {
        denominator: common,
        numerators,
    })
}

/// Divides out the gcd and moves the sign onto the numerator.
fn lowest_terms(numerator: BigInt, denominator: BigInt) -> (BigInt, BigUint) {
    let divisor = numerator.gcd(&denominator);
    let numerator = numerator / &divisor;
    let denominator = denominator / &divisor;
    if denominator.is_negative() {
        (-numerator, denominator.magnitude().clone())
    } else {
        (numerator, denominator.magnitude().clone())
    }
}
