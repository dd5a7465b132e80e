//! Error types for pagination.

use thiserror::Error;

/// Result type alias for paging operations
pub type Result<T> = std::result::Result<T, PagingError>;

/// Errors that can occur while building pagers and paged lists
#[derive(Error, Debug)]
pub enum PagingError {
    /// A construction parameter is outside its allowed range
    #[error("{name} = {value}. {constraint}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        constraint: &'static str,
    },

    /// The source sequence was not provided
    #[error("Source sequence is absent")]
    AbsentSource,

    /// Indexed access outside the items of the current page
    #[error("Index {index} out of range for page of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The pager to copy from was not provided
    #[error("Source pager is absent")]
    NullSource,

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagingError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, value: i64, constraint: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            constraint,
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Whether this error was raised by parameter validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
