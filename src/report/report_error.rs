use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while writing the report file.
///
/// # Variants
///
/// * `Serialization` - An error occurred while serializing the report.
/// * `FileCreation` - An error occurred while creating the file.
/// * `FileWrite` - An error occurred while writing to the file.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not serialize the report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("could not create {}: {source}", path.display())]
    FileCreation { path: PathBuf, source: std::io::Error },
    #[error("could not write {}: {source}", path.display())]
    FileWrite { path: PathBuf, source: std::io::Error },
}
