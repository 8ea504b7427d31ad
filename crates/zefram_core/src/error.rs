//! Error taxonomy shared by every zefram core API.
//!
//! # Responsibility
//! - Give callers one error type with distinct, matchable failure kinds.
//! - Keep transport errors (`rusqlite`, `std::io`) wrapped, not stringified.
//!
//! # Invariants
//! - Not-found and multiple-match are separate variants and are never merged.
//! - Errors are surfaced as-is; no variant is retried or downgraded.

use std::path::PathBuf;
use thiserror::Error;

pub type ZeframResult<T> = Result<T, ZeframError>;

#[derive(Debug, Error)]
pub enum ZeframError {
    /// Framework code is not exactly three characters long.
    #[error("wrong framework code: `{code}` (expected exactly 3 characters)")]
    InvalidCode { code: String },

    #[error("no framework found for code `{code}`")]
    RecordNotFound { code: String },

    /// Storage holds more than one row for a code that should be unique.
    #[error("multiple frameworks ({count}) found for code `{code}`")]
    MultipleRecords { code: String, count: usize },

    #[error("table `{name}` is not supported; table should be one of: {}", .supported.join(", "))]
    UnsupportedTable {
        name: String,
        supported: &'static [&'static str],
    },

    #[error("framework database `{}` is unavailable: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("table `{table}` has no column `{column}`")]
    UnknownColumn { table: String, column: String },

    #[error("framework `{code}` has no {field} data")]
    MissingField { code: String, field: &'static str },

    #[error("invalid coordination sequence `{value}`")]
    InvalidCoordinationSequence { value: String },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::ZeframError;

    #[test]
    fn unsupported_table_lists_allowed_names() {
        let err = ZeframError::UnsupportedTable {
            name: "tatoms".to_string(),
            supported: &["frameworks"],
        };
        assert_eq!(
            err.to_string(),
            "table `tatoms` is not supported; table should be one of: frameworks"
        );
    }

    #[test]
    fn multiple_records_reports_count() {
        let err = ZeframError::MultipleRecords {
            code: "LTA".to_string(),
            count: 2,
        };
        assert!(err.to_string().contains("(2)"));
    }
}
