mod error;
mod node;
mod tree;

pub use error::{TrieError, TrieResult};
pub use tree::{PatternTrie, RouteMatch};
