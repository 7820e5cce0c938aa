use crate::models::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open [{path}]: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Required column [{column}] is missing from the header")]
    MissingColumn {
        column: &'static str
    },
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError)
}
