use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to list catalog directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read catalog record {path}: {source}")]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog record {path}: {source}")]
    ParseRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog item not found: {0}")]
    NotFound(String),

    #[error("Invalid permutation key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
