//! Catalog loading and indexing.
//!
//! [`loader`] discovers and decodes the per-item JSON records; [`index`]
//! flattens them into append-only arrays addressed by [`EntityRef`].

pub mod index;
pub mod loader;

pub use index::{
    CatalogIndex, Collection, Entity, Film, Season, Show,
};
pub use loader::{
    CatalogLoader, RecordSource, info_files, load_records,
};

use serviam_model::EntityKind;
use std::fmt;

/// Stable pointer into one of the catalog's flat entity arrays.
///
/// Valid for the lifetime of the [`CatalogIndex`] that produced it; slots are
/// never reused or reordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub slot: usize,
}

impl EntityRef {
    pub const fn new(kind: EntityKind, slot: usize) -> Self {
        Self { kind, slot }
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.slot)
    }
}
