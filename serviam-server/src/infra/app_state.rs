use std::{fmt, sync::Arc};

use serviam_core::{catalog::CatalogIndex, query::PermutationCache};

use crate::infra::config::Config;

/// Shared by every request: the immutable catalog and the orderings cached
/// over it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    catalog: Arc<CatalogIndex>,
    permutations: Arc<PermutationCache>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog)
            .field("permutations", &self.permutations)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Config, catalog: CatalogIndex) -> Self {
        let catalog = Arc::new(catalog);
        let permutations = Arc::new(PermutationCache::new(Arc::clone(&catalog)));
        Self {
            config: Arc::new(config),
            catalog,
            permutations,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn permutations(&self) -> &PermutationCache {
        &self.permutations
    }
}
