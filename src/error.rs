use thiserror::Error;

/// Errors produced by the positional operations of the linked lists
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    #[error("cannot replace the contents of a list with an empty range")]
    EmptyRange,
}

pub type ListResult<T> = Result<T, ListError>;

/// Returns an error unless `index` refers to an existing element of a list of length `len`
pub(crate) fn check_index(index: usize, len: usize) -> ListResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfRange {index, len})
    }
}
