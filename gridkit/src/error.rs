//! Table configuration errors.

use thiserror::Error;

/// Errors raised when a table is configured or driven inconsistently.
///
/// Filtering, selection and paging never fail; only requests that name a
/// column that does not exist or does not allow the operation do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate column id: {0}")]
    DuplicateColumn(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column is not sortable: {0}")]
    NotSortable(String),
    #[error("column cannot be hidden: {0}")]
    NotHideable(String),
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}
