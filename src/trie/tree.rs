use super::error::TrieResult;
use super::node::{SegmentKind, TrieNode, classify};
use crate::params::RouteParams;

/// Prefix tree over pattern segments with single-placeholder capture per
/// level.
#[derive(Debug)]
pub struct PatternTrie<H> {
    root: TrieNode<H>,
    len: usize,
}

/// A successful match: the registered handler plus the parameters captured
/// along the way.
#[derive(Debug)]
pub struct RouteMatch<'t, H> {
    pub handler: &'t H,
    pub params: RouteParams,
}

impl<H> PatternTrie<H> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::empty(),
            len: 0,
        }
    }

    /// Number of distinct patterns holding a handler.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a segmented pattern, creating one node per previously unseen
    /// (parent, segment) pair. Registering the exact same pattern again
    /// silently replaces the old handler.
    pub fn insert<'a, I>(&mut self, segments: I, handler: H) -> TrieResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = &mut self.root;
        for segment in segments {
            node = match classify(segment) {
                SegmentKind::Literal(key) => node.descend_literal(key),
                SegmentKind::Placeholder(name) => node.descend_placeholder(name)?,
            };
        }

        if node.handler.replace(handler).is_none() {
            self.len += 1;
        } else {
            tracing::debug!("existing handler replaced by later registration");
        }
        Ok(())
    }

    /// Walks the input segments against the trie. Exact literal children win
    /// over the placeholder edge at every level, and the first viable child
    /// is final: there is no backtracking to a shallower placeholder once a
    /// literal branch dies.
    ///
    /// A placeholder captures only non-empty segments, so a trailing slash
    /// (empty final segment) never binds a parameter.
    pub fn find<'a, I>(&self, segments: I) -> Option<RouteMatch<'_, H>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = &self.root;
        let mut params = RouteParams::new();

        for segment in segments {
            if let Some(child) = node.children.get(segment) {
                node = child;
                continue;
            }

            match node.placeholder.as_deref() {
                Some(edge) if !segment.is_empty() => {
                    params.push(&edge.name, segment);
                    node = &edge.node;
                }
                _ => {
                    tracing::trace!(segment, "no literal or placeholder child; match fails");
                    return None;
                }
            }
        }

        // A registered prefix without its own handler is not a match.
        node.handler
            .as_ref()
            .map(|handler| RouteMatch { handler, params })
    }
}

impl<H> Default for PatternTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}
