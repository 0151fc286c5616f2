use std::path::PathBuf;
use thiserror::Error;

/// Failures from loading a document or resolving the start element.
/// Not finding an ancestor is not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid locator format: {0}. Expected: FIELD=VALUE, .class or #id")]
    InvalidLocator(String),

    #[error("no element matches start locator {0}")]
    StartNotFound(String),
}
