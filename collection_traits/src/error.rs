use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error, Diagnostic)]
pub enum SequenceError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the container is empty")]
    EmptyContainer,
    #[error("failed to allocate storage for {requested} elements")]
    #[diagnostic(help("the container was left unchanged"))]
    AllocationFailure { requested: usize },
}

impl SequenceError {
    /// Checks that `index` addresses an element of a sequence of length `len`.
    pub fn check_index(index: usize, len: usize) -> Result<(), SequenceError> {
        if index < len {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfRange { index, len })
        }
    }
}
