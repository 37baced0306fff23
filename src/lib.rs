//! Placeholder-trie path router.
//!
//! Patterns are `/`-delimited; a segment beginning with `:` is a placeholder
//! whose remainder names the parameter it captures (`/users/:id`). Dispatch
//! walks the input path against a shared prefix tree, preferring exact
//! literal children and falling back to at most one placeholder per level,
//! then invokes the matched handler with the captured parameters.
//!
//! ```
//! use trie_router::{RouteParams, Router};
//!
//! # fn main() -> Result<(), trie_router::RouterError> {
//! let mut router = Router::new();
//! router.register("/apps/profile/company/:recordId", |params: &RouteParams| {
//!     params.get("recordId").unwrap_or_default().to_owned()
//! })?;
//!
//! let record = router.dispatch("/apps/profile/company/1645938489")?;
//! assert_eq!(record, "1645938489");
//! # Ok(())
//! # }
//! ```

mod errors;
mod handler;
mod params;
pub mod path;
pub mod trie;

pub use errors::{RouterError, RouterResult};
pub use handler::{BoxedHandler, Handler};
pub use params::RouteParams;
pub use trie::RouteMatch;

use trie::PatternTrie;

/// Path router owning a single [`PatternTrie`](trie::PatternTrie).
///
/// An explicit value: construct one per embedding component and drop it when
/// done. `register` takes `&mut self` and `dispatch` takes `&self`, so the
/// borrow checker enforces the write-then-read discipline.
#[derive(Debug)]
pub struct Router<H> {
    trie: PatternTrie<H>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            trie: PatternTrie::new(),
        }
    }

    /// Registers `pattern` with its handler. Registering an identical
    /// pattern again replaces the previous handler; two placeholders with
    /// different names at the same level are rejected.
    #[tracing::instrument(level = "trace", skip(self, handler))]
    pub fn register(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.trie.insert(path::split_segments(pattern), handler)?;
        Ok(())
    }

    /// Matches `path` without invoking the handler.
    pub fn lookup(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        self.trie.find(path::split_segments(path))
    }

    /// Number of distinct registered patterns.
    pub fn route_count(&self) -> usize {
        self.trie.len()
    }
}

impl<H: Handler> Router<H> {
    /// Matches `path` and invokes the registered handler with the captured
    /// parameters. A handler's own failure value (e.g. an `Err` output)
    /// passes through unmodified; the router only reports
    /// [`RouterError::RouteNotFound`] for paths no pattern matches.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dispatch(&self, path: &str) -> RouterResult<H::Output> {
        let matched = self.lookup(path).ok_or_else(|| RouterError::RouteNotFound {
            path: path.to_owned(),
        })?;

        Ok(matched.handler.call(&matched.params))
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
