use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no registered route matches path '{path}'")]
    RouteNotFound { path: String },
    #[error(transparent)]
    Trie(#[from] TrieError),
}

pub type RouterResult<T> = Result<T, RouterError>;
