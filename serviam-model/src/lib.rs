//! Catalog record definitions shared across Serviam crates.
//!
//! These types mirror the JSON records the scraping tools write under the
//! media root. Field names are part of the on-disk format and must not change.
#![allow(missing_docs)]

pub mod files;
pub mod media;
pub mod media_type;
#[cfg(feature = "serde")]
mod nullable;

pub use files::{FileData, MP4_FILE_TYPE};
pub use media::{
    CollectionRecord, EpisodeRecord, FilmRecord, Genre, SeasonRecord,
    ShowRecord,
};
pub use media_type::EntityKind;
