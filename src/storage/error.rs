use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse store file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Country already exists: {0}")]
    DuplicateCountry(String),
    #[error("Country name must not be empty")]
    EmptyName,
}

pub type StoreResult<T> = Result<T, StoreError>;
