use crate::record::{RecordKey, Table};

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the key.
    #[error("record not found: {table}/{key}")]
    NotFound { table: Table, key: RecordKey },

    /// A record with the same composite key already exists.
    ///
    /// Expected under retries and races; callers translate it as needed.
    #[error("record already exists: {table}/{key}")]
    Conflict { table: Table, key: RecordKey },

    /// The key does not have the shape the table requires.
    #[error("invalid key for {table}: {reason}")]
    InvalidKey { table: Table, reason: String },

    /// A stored field is missing or has the wrong type.
    #[error("invalid field {field:?}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A `modify` closure refused the change; nothing was written.
    #[error("change rejected: {reason}")]
    Rejected { reason: String },

    /// Encoding or decoding a typed record failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend is temporarily unable to serve requests. Retryable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the error is a duplicate-key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
