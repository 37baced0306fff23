use smallvec::SmallVec;

/// Parameter values captured while matching a path against a pattern.
///
/// Entries keep traversal order: the first placeholder consumed is the first
/// entry. Names are stored without the leading `:` marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: SmallVec<[(String, String); 4]>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_owned(), value.to_owned()));
    }

    /// Value captured for `name`, if any. With duplicate parameter names in a
    /// pattern (accepted without validation) this returns the shallowest
    /// capture.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
