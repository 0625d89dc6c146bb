//! Error types for the undoc library.

use thiserror::Error;

/// Result type alias for undoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The input JSON does not deserialize into the document model.
    #[error("malformed document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A bullet references a list id with no definition in `lists`.
    #[error("bullet references undefined list: {0}")]
    UnknownList(String),

    /// A referenced list has sublevel entries but no root-level entry,
    /// so there is no position to open the enclosing list element at.
    #[error("list {0} has no root-level entries")]
    ListWithoutRootEntries(String),
}
