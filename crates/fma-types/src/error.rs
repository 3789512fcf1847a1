use thiserror::Error;

/// Errors produced when constructing identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },

    #[error("{kind} is too long: {len} bytes (max {max})")]
    TooLong {
        kind: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{kind} contains forbidden character {ch:?}")]
    ForbiddenChar { kind: &'static str, ch: char },
}
