//! # Serviam Core
//!
//! In-memory catalog index and ordering engine for the Serviam media catalog.
//!
//! ## Overview
//!
//! - [`catalog`]: loads the on-disk record tree and builds the flat entity
//!   arrays plus the identifier lookup
//! - [`query`]: substring search and the append-only cache of named
//!   orderings (baseline, per-query, per-seed shuffle)
//! - [`cards`]: projects slices of an ordering, or a single identifier, into
//!   render-agnostic cards
//!
//! The catalog is built once before serving and never mutated afterwards;
//! only the permutation cache grows while the process runs.
//!
//! ```no_run
//! use std::sync::Arc;
//! use serviam_core::{
//!     cards,
//!     catalog::{CatalogIndex, CatalogLoader},
//!     query::{PermutationCache, PermutationKey},
//! };
//!
//! fn first_page() -> serviam_core::Result<()> {
//!     let index = Arc::new(CatalogIndex::build(&CatalogLoader::new("media"))?);
//!     let cache = PermutationCache::new(Arc::clone(&index));
//!     let ordering = cache.get_or_create(&PermutationKey::query("alien"));
//!     for card in cards::page(&index, &ordering, 0, 24) {
//!         println!("{} ({})", card.title, card.subtitle);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Card projections of orderings and single items
pub mod cards;

/// Catalog loading and the entity index
pub mod catalog;

/// Error types and error handling utilities
pub mod error;

/// Search and the permutation cache
pub mod query;

pub use error::{CatalogError, Result};
pub use serviam_model as model;
