use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use serviam_model::{CollectionRecord, FilmRecord, ShowRecord};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Source of decoded catalog records, one call per record kind.
///
/// Each call returns records in the order they should be ingested.
pub trait RecordSource {
    fn films(&self) -> Result<Vec<FilmRecord>>;
    fn collections(&self) -> Result<Vec<CollectionRecord>>;
    fn shows(&self) -> Result<Vec<ShowRecord>>;
}

const FILMS_DIR: &str = "films";
const COLLECTIONS_DIR: &str = "collections";
const SHOWS_DIR: &str = "shows";

/// Reads the record tree written by the scraping tools:
/// `<root>/<kind>/<name>/<name>.json`.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    root: PathBuf,
}

impl CatalogLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_kind<T: DeserializeOwned>(&self, kind_dir: &str) -> Result<Vec<T>> {
        load_records(&self.root.join(kind_dir))
    }
}

impl RecordSource for CatalogLoader {
    fn films(&self) -> Result<Vec<FilmRecord>> {
        self.load_kind(FILMS_DIR)
    }

    fn collections(&self) -> Result<Vec<CollectionRecord>> {
        self.load_kind(COLLECTIONS_DIR)
    }

    fn shows(&self) -> Result<Vec<ShowRecord>> {
        self.load_kind(SHOWS_DIR)
    }
}

/// Record files under `dir`, one per entity subdirectory whose name matches
/// the record's file stem, ordered by subdirectory name.
///
/// Subdirectories without their record file are skipped with a warning so a
/// half-ingested item never blocks startup. Failing to list `dir` is an error.
pub fn info_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let list_error = |source: io::Error| CatalogError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        // Follows symlinks so linked-in item directories are picked up.
        let metadata = fs::metadata(entry.path()).map_err(list_error)?;
        if metadata.is_dir() {
            names.push(entry.file_name());
        }
    }
    names.sort();

    let mut output = Vec::with_capacity(names.len());
    for name in names {
        let mut file_name = name.clone();
        file_name.push(".json");
        let record_path = dir.join(&name).join(file_name);

        match fs::metadata(&record_path) {
            Ok(_) => output.push(record_path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(
                    path = %record_path.display(),
                    "catalog entry has no record file; skipping"
                );
            }
            Err(source) => {
                return Err(CatalogError::ReadRecord {
                    path: record_path,
                    source,
                });
            }
        }
    }
    Ok(output)
}

/// Decode every record [`info_files`] finds under `dir`, in the same order.
pub fn load_records<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let records = info_files(dir)?
        .iter()
        .map(|path| read_record(path))
        .collect::<Result<Vec<T>>>()?;
    debug!(dir = %dir.display(), count = records.len(), "catalog records loaded");
    Ok(records)
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let blob = fs::read(path).map_err(|source| CatalogError::ReadRecord {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&blob).map_err(|source| CatalogError::ParseRecord {
        path: path.to_path_buf(),
        source,
    })
}
