//! Integer scaler for Lagrange reconstruction in additive groups.
//!
//! Reconstructing a shared secret from `t` shares evaluates the sharing
//! polynomial at zero, which needs the rational Lagrange coefficients
//! `lambda_i = cofactor_i / det`. Group elements can only be multiplied by
//! integers, so a combiner instead reconstructs `D * f(0)` with the integer
//! coefficients `D * lambda_i`. The scaler `D` is the smallest positive integer
//! that clears the denominators of **every** quorum of size `t` out of `n`,
//! so it does not depend on which honest participants show up.
//!
//! The aggregated commitment published by the DKG has to be multiplied by the
//! same `D` so that encryptions target the key that scaled reconstruction
//! recovers.
//!
//! # Overview
//!
//! - [`ScalerSolver`]: exhaustive search over all `C(n, t)` quorums
//! - [`ScalerCache`]: process-wide memo keyed by [`ConsensusParameters`]
//! - [`scaled_lagrange_coefficients`]: integer coefficients `D * lambda_i` for
//!   one concrete quorum
//!
//! # Example
//!
//! ```rust
//! use tpke::{ConsensusParameters, ScalerSolver};
//!
//! let params = ConsensusParameters::from_consensus_size(7)?;
//! let scaler = ScalerSolver::solve(&params)?;
//! assert_eq!(scaler.to_string(), "360");
//! # Ok::<(), tpke::Error>(())
//! ```

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, instrument};

use crate::{ConsensusParameters, FieldElement, errors::Error};

mod cache;
pub use cache::ScalerCache;

mod lagrange;
pub use lagrange::scaled_lagrange_coefficients;

mod interpolation;
mod search;

/// Positive integer multiplier clearing every quorum's Lagrange denominators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scaler(BigUint);

impl Scaler {
    /// Wraps a precomputed scaler value. Zero is rejected.
    pub fn new(value: BigUint) -> Result<Self, Error> {
        if value.is_zero() {
            return Err(Error::InvalidInput("scaler must be positive".into()));
        }
        Ok(Self(value))
    }

    /// The exact integer value.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// The scaler reduced into the scalar field, ready for scalar multiplication.
    pub fn to_field<F: FieldElement>(&self) -> F {
        F::from_biguint(&self.0)
    }
}

impl fmt::Display for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Cooperative cancellation flag for long scaler searches.
///
/// Clones share the same flag; cancelling any clone stops every search that
/// observes it at its next quorum.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Computes scalers by exhaustive search over quorums.
///
/// The cost grows with `C(n, t)`; callers are expected to cache results (see
/// [`ScalerCache`]) and to run large searches off latency-sensitive paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalerSolver;

impl ScalerSolver {
    /// Solves for the scaler of `params`.
    pub fn solve(params: &ConsensusParameters) -> Result<Scaler, Error> {
        Self::solve_with_cancel(params, &CancellationToken::new())
    }

    /// Solves for the scaler of `params`, aborting with [`Error::Cancelled`]
    /// once `cancel` is triggered.
    #[instrument(
        level = "info",
        skip_all,
        fields(parties = params.parties, threshold = params.threshold)
    )]
    pub fn solve_with_cancel(
        params: &ConsensusParameters,
        cancel: &CancellationToken,
    ) -> Result<Scaler, Error> {
        params.validate()?;

        let value = search::denominator_lcm(params.parties, params.threshold, cancel)?;
        debug!(scaler = %value, "scaler solved");
        Scaler::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(parties: usize, threshold: usize) -> BigUint {
        let params = ConsensusParameters::new(parties, threshold).unwrap();
        ScalerSolver::solve(&params).unwrap().value().clone()
    }

    #[test]
    fn known_scalers() {
        let expected: [(usize, usize, u64); 9] = [
            (1, 1, 1),
            (3, 1, 1),
            (3, 2, 2),
            (4, 2, 6),
            (4, 3, 3),
            (5, 3, 24),
            (7, 5, 360),
            (10, 7, 90_720),
            (4, 4, 1),
        ];
        for (n, t, d) in expected {
            assert_eq!(solve(n, t), BigUint::from(d), "n = {n}, t = {t}");
        }
    }

    #[test]
    fn single_quorum_uses_its_reduced_determinant() {
        // t = n: only {1..n}, whose Lagrange coefficients are binomials
        for n in 1..=8 {
            assert_eq!(solve(n, n), BigUint::from(1u8), "n = {n}");
        }
    }

    #[test]
    fn wide_single_quorum_is_fast() {
        // one subset of 30 points; per-quorum cost is polynomial in t
        let start = std::time::Instant::now();
        assert_eq!(solve(30, 30), BigUint::from(1u8));
        assert!(solve(40, 39) >= BigUint::from(1u8));
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn threshold_one_is_trivial() {
        for n in 1..=9 {
            assert_eq!(solve(n, 1), BigUint::from(1u8));
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let params = ConsensusParameters::new(9, 6).unwrap();
        let first = ScalerSolver::solve(&params).unwrap();
        let second = ScalerSolver::solve(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.value().to_bytes_be(), second.value().to_bytes_be());
    }

    #[test]
    fn cancelled_search_reports_cancellation() {
        let params = ConsensusParameters::new(12, 8).unwrap();
        let token = CancellationToken::new();
        token.clone().cancel();
        assert!(token.is_cancelled());
        let result = ScalerSolver::solve_with_cancel(&params, &token);
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let params = ConsensusParameters {
            parties: 3,
            threshold: 5,
        };
        assert!(matches!(
            ScalerSolver::solve(&params),
            Err(Error::InvalidConfig(_))
        ));
        assert!(Scaler::new(BigUint::zero()).is_err());
    }

    #[test]
    fn scaler_reduces_into_field() {
        let scaler = Scaler::new(BigUint::from(360u32)).unwrap();
        assert_eq!(scaler.to_field::<crate::Fr>(), crate::Fr::from_u64(360));
        assert_eq!(scaler.to_string(), "360");
    }
}
