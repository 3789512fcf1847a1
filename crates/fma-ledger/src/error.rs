use fma_store::StoreError;
use fma_types::{TypeError, UnitKey, UserId};

/// Errors produced by progression operations.
///
/// Duplicate completions and badge awards are not errors; the ledgers
/// report them as successful no-ops.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("unit {unit} is locked until {prerequisite} is completed")]
    Locked { unit: UnitKey, prerequisite: UnitKey },

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl ProgressError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    /// Whether the caller may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<StoreError> for ProgressError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
            StoreError::Rejected { reason } => Self::Validation(reason),
            other => Self::Store(other),
        }
    }
}

impl From<TypeError> for ProgressError {
    fn from(err: TypeError) -> Self {
        Self::Validation(err.to_string())
    }
}

pub type ProgressResult<T> = Result<T, ProgressError>;
