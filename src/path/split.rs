use memchr::memchr;

/// Iterator over the `/`-separated segments of a path.
///
/// A leading `/` produces an empty first field when splitting naively; that
/// field is dropped so `/a/b` and `a/b` yield the same segments. Trailing
/// empty fields are preserved: `/a/b/` yields `a`, `b`, ``.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    path: &'a str,
    cursor: usize,
    exhausted: bool,
}

pub fn split_segments(path: &str) -> Segments<'_> {
    let cursor = usize::from(path.as_bytes().first() == Some(&b'/'));
    Segments {
        path,
        cursor,
        exhausted: false,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }

        let rest = &self.path[self.cursor..];
        match memchr(b'/', rest.as_bytes()) {
            Some(offset) => {
                self.cursor += offset + 1;
                Some(&rest[..offset])
            }
            None => {
                self.exhausted = true;
                Some(rest)
            }
        }
    }
}

/// Extracts the route path from a full URL: the text after the first `#`,
/// with any `?query` suffix discarded. Returns `None` when the URL has no
/// fragment.
pub fn fragment_route(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    let hash = memchr(b'#', bytes)?;
    let fragment = &url[hash + 1..];

    match memchr(b'?', fragment.as_bytes()) {
        Some(question) => Some(&fragment[..question]),
        None => Some(fragment),
    }
}
