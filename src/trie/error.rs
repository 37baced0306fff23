use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error(
        "placeholder ':{conflicting}' conflicts with placeholder ':{existing}' already registered at the same level"
    )]
    PlaceholderConflict {
        existing: String,
        conflicting: String,
    },
}

pub type TrieResult<T> = Result<T, TrieError>;
