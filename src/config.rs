//! Consensus parameters for threshold keys.
//!
//! A threshold public key is tied to the quorum that produced it: `parties`
//! participants took part in the DKG and any `threshold` of them are needed to
//! decrypt. The scaler applied to an aggregated commitment is a function of
//! exactly these two numbers.
//!
//! # Example
//!
//! ```rust
//! use tpke::{ConsensusParameters, consensus_threshold};
//!
//! // BFT quorum for 7 validators
//! let params = ConsensusParameters::from_consensus_size(7).expect("valid size");
//! assert_eq!(params.threshold, 5);
//! assert_eq!(consensus_threshold(7), 5);
//!
//! // Explicit threshold
//! let params = ConsensusParameters::new(10, 4).expect("valid params");
//! assert_eq!(params.parties, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Canonical BFT quorum size for `parties` participants: `n - floor((n - 1) / 3)`.
///
/// For `n = 0` the result is `0`, which [`ConsensusParameters::validate`] rejects.
pub fn consensus_threshold(parties: usize) -> usize {
    parties - parties.saturating_sub(1) / 3
}

/// Participant count and decryption threshold of a key.
///
/// # Constraints
///
/// - `parties` must be at least 1
/// - `threshold` must be between 1 and `parties` (inclusive)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ConsensusParameters {
    /// Total number of participants (n)
    pub parties: usize,
    /// Minimum number of participants needed to decrypt (t)
    pub threshold: usize,
}

impl ConsensusParameters {
    /// Creates and validates parameters with an explicit threshold.
    pub fn new(parties: usize, threshold: usize) -> Result<Self, Error> {
        let params = Self { parties, threshold };
        params.validate()?;
        Ok(params)
    }

    /// Creates parameters using the canonical BFT threshold for `parties`.
    pub fn from_consensus_size(parties: usize) -> Result<Self, Error> {
        Self::new(parties, consensus_threshold(parties))
    }

    /// Validates the parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tpke::ConsensusParameters;
    ///
    /// let params = ConsensusParameters { parties: 3, threshold: 4 };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.parties == 0 {
            return Err(Error::InvalidConfig("need at least one party".into()));
        }
        if self.threshold == 0 || self.threshold > self.parties {
            return Err(Error::InvalidConfig(format!(
                "threshold must be within [1, {}], got {}",
                self.parties, self.threshold
            )));
        }
        Ok(())
    }

    /// Returns `true` when the threshold equals the canonical BFT quorum.
    pub fn is_consensus_quorum(&self) -> bool {
        self.threshold == consensus_threshold(self.parties)
    }
}
