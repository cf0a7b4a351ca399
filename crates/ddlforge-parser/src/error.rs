//! Error types for DDL extraction

use thiserror::Error;

/// Reasons a `CREATE TABLE` statement could not be turned into a model.
///
/// Every variant is terminal for the call that produced it; a failed parse
/// never yields a partial [`crate::ParsedDdl`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdlError {
    #[error("Unable to parse table name from DDL")]
    TableNameNotFound,

    #[error("Unable to parse column definitions from DDL")]
    ColumnBlockNotFound,

    #[error("No valid columns found in DDL")]
    NoValidColumns,
}

/// Result type alias for DDL extraction
pub type Result<T> = std::result::Result<T, DdlError>;
