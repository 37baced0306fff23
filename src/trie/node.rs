use hashbrown::HashMap as FastHashMap;

use super::error::{TrieError, TrieResult};

/// Marker that opens a placeholder segment in a pattern (`:name`).
pub(crate) const PLACEHOLDER_MARKER: char = ':';

/// How a single pattern segment participates in the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind<'a> {
    Literal(&'a str),
    /// Placeholder with the marker stripped. The name is taken verbatim;
    /// pattern syntax is not validated, so an empty name is accepted.
    Placeholder(&'a str),
}

pub(crate) fn classify(segment: &str) -> SegmentKind<'_> {
    match segment.strip_prefix(PLACEHOLDER_MARKER) {
        Some(name) => SegmentKind::Placeholder(name),
        None => SegmentKind::Literal(segment),
    }
}

/// One level of the pattern trie.
///
/// Literal children live in a hash map keyed by the exact segment string.
/// The placeholder child is a single direct edge, so the dynamic fallback
/// during matching is an O(1) lookup rather than a scan over siblings.
#[derive(Debug)]
pub(crate) struct TrieNode<H> {
    pub(super) children: FastHashMap<Box<str>, TrieNode<H>>,
    pub(super) placeholder: Option<Box<PlaceholderEdge<H>>>,
    pub(super) handler: Option<H>,
}

#[derive(Debug)]
pub(super) struct PlaceholderEdge<H> {
    pub(super) name: Box<str>,
    pub(super) node: TrieNode<H>,
}

impl<H> TrieNode<H> {
    pub(super) fn empty() -> Self {
        Self {
            children: FastHashMap::new(),
            placeholder: None,
            handler: None,
        }
    }

    pub(super) fn descend_literal(&mut self, key: &str) -> &mut TrieNode<H> {
        self.children
            .entry(key.to_owned().into_boxed_str())
            .or_insert_with(TrieNode::empty)
    }

    /// Descends into the placeholder edge, creating it on first use. A second
    /// placeholder with a different name at the same level is rejected; the
    /// first registration owns the slot.
    pub(super) fn descend_placeholder(&mut self, name: &str) -> TrieResult<&mut TrieNode<H>> {
        let edge = self.placeholder.get_or_insert_with(|| {
            Box::new(PlaceholderEdge {
                name: name.to_owned().into_boxed_str(),
                node: TrieNode::empty(),
            })
        });

        if edge.name.as_ref() != name {
            return Err(TrieError::PlaceholderConflict {
                existing: edge.name.to_string(),
                conflicting: name.to_owned(),
            });
        }

        Ok(&mut edge.node)
    }
}
