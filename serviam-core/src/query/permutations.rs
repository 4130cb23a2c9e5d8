use std::{fmt, sync::Arc};

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

use super::search::search;
use crate::{
    catalog::{CatalogIndex, EntityRef},
    error::{CatalogError, Result},
};

/// Shared, immutable ordering of catalog entities.
pub type Permutation = Arc<[EntityRef]>;

/// Name of one cached ordering.
///
/// Renders as `original`, `q_<pattern>` or `s_<seed as lowercase hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PermutationKey {
    /// Ingestion order of standalone films, collections and shows
    Original,
    /// Search results for a literal pattern
    Query(String),
    /// Baseline shuffled with a deterministic seed
    Seed(u64),
}

impl PermutationKey {
    /// Key for a search; an empty pattern browses the baseline instead.
    pub fn query(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.is_empty() {
            PermutationKey::Original
        } else {
            PermutationKey::Query(pattern)
        }
    }

    /// Parse a hex-encoded 64-bit seed as handed out in browse links.
    pub fn parse_seed(hex: &str) -> Result<Self> {
        u64::from_str_radix(hex, 16)
            .map(PermutationKey::Seed)
            .map_err(|err| {
                CatalogError::InvalidKey(format!("seed {hex:?}: {err}"))
            })
    }
}

impl fmt::Display for PermutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermutationKey::Original => write!(f, "original"),
            PermutationKey::Query(pattern) => write!(f, "q_{pattern}"),
            PermutationKey::Seed(seed) => write!(f, "s_{seed:x}"),
        }
    }
}

/// Copy of `ordering` permuted by a Fisher-Yates shuffle driven by `seed`.
///
/// The same seed always yields the same order for the same input.
pub fn shuffle(ordering: &[EntityRef], seed: u64) -> Vec<EntityRef> {
    let mut shuffled = ordering.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    shuffled
}

/// Append-only cache of named orderings over one catalog snapshot.
///
/// Each key is computed at most once: concurrent first requests for the same
/// key wait on a per-key cell while requests for other keys proceed. Shuffles
/// run on a private copy and are published whole. Entries are never evicted,
/// so the cache grows with every distinct query and seed.
pub struct PermutationCache {
    index: Arc<CatalogIndex>,
    orderings: DashMap<PermutationKey, Arc<OnceCell<Permutation>>>,
}

impl fmt::Debug for PermutationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationCache")
            .field("orderings", &self.orderings.len())
            .finish_non_exhaustive()
    }
}

impl PermutationCache {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self {
            index,
            orderings: DashMap::new(),
        }
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    /// The ordering for `key`, computing and publishing it on first access.
    pub fn get_or_create(&self, key: &PermutationKey) -> Permutation {
        // Clone the cell out so no shard lock is held while computing.
        let existing = self.orderings.get(key).map(|cell| Arc::clone(cell.value()));
        let cell = match existing {
            Some(cell) => cell,
            None => Arc::clone(
                self.orderings.entry(key.clone()).or_default().value(),
            ),
        };

        let mut computed = false;
        let ordering = cell.get_or_init(|| {
            computed = true;
            self.compute(key)
        });
        if !computed {
            debug!(key = %key, "permutation cache hit");
        }
        Arc::clone(ordering)
    }

    /// The ordering for `key` if it was already computed.
    pub fn get(&self, key: &PermutationKey) -> Option<Permutation> {
        self.orderings
            .get(key)
            .and_then(|cell| cell.get().cloned())
    }

    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }

    fn compute(&self, key: &PermutationKey) -> Permutation {
        let ordering: Vec<EntityRef> = match key {
            PermutationKey::Original => self.index.baseline().to_vec(),
            PermutationKey::Query(pattern) => search(&self.index, pattern),
            PermutationKey::Seed(seed) => {
                shuffle(self.index.baseline(), *seed)
            }
        };
        info!(key = %key, len = ordering.len(), "permutation computed");
        ordering.into()
    }
}
