use thiserror::Error;

/// Errors returned by generator construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid code length {length}; expected at least 1")]
    InvalidLength { length: usize },
}
