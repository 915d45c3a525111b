use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use tracing::{instrument, trace};

use super::{CancellationToken, Scaler, ScalerSolver};
use crate::{ConsensusParameters, errors::Error};

static GLOBAL: LazyLock<ScalerCache> = LazyLock::new(ScalerCache::new);

/// Memo of solved scalers keyed by consensus parameters.
///
/// Entries are immutable once written. Searches run outside the lock, so two
/// threads missing on the same key may both compute it; the result is
/// deterministic and the second insert simply replaces an identical value.
///
/// # Example
///
/// ```rust
/// use tpke::{ConsensusParameters, ScalerCache};
///
/// let cache = ScalerCache::new();
/// let params = ConsensusParameters::new(5, 3)?;
/// let scaler = cache.get_or_solve(&params)?;
/// assert_eq!(scaler.to_string(), "24");
/// assert!(cache.get(&params).is_some());
/// # Ok::<(), tpke::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ScalerCache {
    entries: RwLock<HashMap<ConsensusParameters, Arc<Scaler>>>,
}

impl ScalerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache shared by key constructors.
    pub fn global() -> &'static ScalerCache {
        &GLOBAL
    }

    pub fn get(&self, params: &ConsensusParameters) -> Option<Arc<Scaler>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(params)
            .cloned()
    }

    /// Stores a precomputed scaler, e.g. one loaded from configuration.
    pub fn insert(&self, params: ConsensusParameters, scaler: Scaler) -> Arc<Scaler> {
        let scaler = Arc::new(scaler);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(params, Arc::clone(&scaler));
        scaler
    }

    pub fn get_or_solve(&self, params: &ConsensusParameters) -> Result<Arc<Scaler>, Error> {
        self.get_or_solve_with_cancel(params, &CancellationToken::new())
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(parties = params.parties, threshold = params.threshold)
    )]
    pub fn get_or_solve_with_cancel(
        &self,
        params: &ConsensusParameters,
        cancel: &CancellationToken,
    ) -> Result<Arc<Scaler>, Error> {
        if let Some(scaler) = self.get(params) {
            trace!("scaler cache hit");
            return Ok(scaler);
        }
        trace!("scaler cache miss");
        let scaler = ScalerSolver::solve_with_cancel(params, cancel)?;
        Ok(self.insert(*params, scaler))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
