use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported metric '{0}'. Choose one of [\"cosine\", \"euclidean\", \"hamming\", \"jaccard\"]")]
    InvalidMetric(String),

    #[error("None of the provided symptoms are recognized.")]
    NoRecognizedSymptoms,

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Missing expected CSV(s): {0:?}")]
    MissingFiles(Vec<PathBuf>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
