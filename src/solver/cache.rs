//! Candidate cache keyed by encoded constraint
//!
//! Shared across rayon workers. Two workers missing on the same key both
//! compute the same list and the second insert is dropped.

use crate::core::ConstraintKey;
use dashmap::DashMap;
use log::trace;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;

/// Indices into the solution list, in list order
pub type CandidateIndices = Arc<[u32]>;

/// Process-lifetime map from constraint to candidate indices
///
/// Owned by one solver; never evicted.
#[derive(Debug)]
pub struct CandidateCache {
    entries: DashMap<ConstraintKey, CandidateIndices, FxBuildHasher>,
}

impl CandidateCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Look up `key`, computing and storing the entry on a miss
    pub fn get_or_insert_with<F>(&self, key: ConstraintKey, compute: F) -> CandidateIndices
    where
        F: FnOnce() -> Vec<u32>,
    {
        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit.value());
        }

        let computed: CandidateIndices = compute().into();
        trace!("candidate cache miss: {} words", computed.len());
        Arc::clone(self.entries.entry(key).or_insert(computed).value())
    }

    /// Number of cached constraints
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for CandidateCache {
    fn default() -> Self {
        Self::new()
    }
}
