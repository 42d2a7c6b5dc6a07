use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one source number is required")]
    EmptyNumbers,
    #[error("Source numbers must be positive, got {0}")]
    NonPositiveNumber(u64),
    #[error("Selection {selection:?} is not a subsequence of {parent:?}")]
    NotASubsequence {
        parent: Vec<u64>,
        selection: Vec<u64>,
    },
}
