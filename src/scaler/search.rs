//! Backtracking search over every quorum of a `(parties, threshold)` setup.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, trace};

use super::{CancellationToken, interpolation::lagrange_at_zero};
use crate::errors::Error;

/// LCM of the reduced Lagrange denominators over all `C(parties, threshold)`
/// strictly increasing index sequences drawn from `1..=parties`.
///
/// Sequences sharing a first index form one branch; branches run on the rayon
/// pool, each with its own scratch state.
pub(crate) fn denominator_lcm(
    parties: usize,
    threshold: usize,
    cancel: &CancellationToken,
) -> Result<BigUint, Error> {
    let branches = (1..=parties - threshold + 1)
        .into_par_iter()
        .map(|first| {
            let mut search = SubsetSearch::new(parties, threshold, cancel);
            search.indices.push(first as u64);
            search.descend(first + 1)?;
            debug!(first, subsets = search.visited, lcm = %search.lcm, "scaler branch finished");
            Ok(search.lcm)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(branches
        .into_iter()
        .fold(BigUint::one(), |acc, branch| acc.lcm(&branch)))
}

struct SubsetSearch<'a> {
    parties: usize,
    threshold: usize,
    cancel: &'a CancellationToken,
    indices: Vec<u64>,
    lcm: BigUint,
    visited: u64,
}

impl<'a> SubsetSearch<'a> {
    fn new(parties: usize, threshold: usize, cancel: &'a CancellationToken) -> Self {
        Self {
            parties,
            threshold,
            cancel,
            indices: Vec::with_capacity(threshold),
            lcm: BigUint::one(),
            visited: 0,
        }
    }

    /// Extends the current prefix with every admissible next index `>= start`.
    fn descend(&mut self, start: usize) -> Result<(), Error> {
        let pos = self.indices.len();
        if pos == self.threshold {
            return self.visit();
        }
        // leave room for the `threshold - pos - 1` indices still to come
        let last = self.parties - (self.threshold - pos - 1);
        for next in start..=last {
            self.indices.push(next as u64);
            let result = self.descend(next + 1);
            self.indices.pop();
            result?;
        }
        Ok(())
    }

    fn visit(&mut self) -> Result<(), Error> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let reduced = lagrange_at_zero(&self.indices)?;
        trace!(indices = ?self.indices, denominator = %reduced.denominator, "quorum visited");
        self.lcm = self.lcm.lcm(&reduced.denominator);
        self.visited += 1;
        Ok(())
    }
}
