use std::cmp::Ordering;
use std::collections::HashSet;

/// Unique header names seen during one collection pass.
#[derive(Debug, Default)]
pub struct HeaderSet {
    names: HashSet<String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a header name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Record a raw captured name; invalid UTF-8 is replaced with U+FFFD.
    pub fn insert_bytes(&mut self, name: &[u8]) -> bool {
        self.insert(String::from_utf8_lossy(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the set, returning names in [`compare_names`] order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut names: Vec<String> = self.names.into_iter().collect();
        names.sort_by_cached_key(|name| (name.to_lowercase(), name.clone()));
        names
    }
}

/// Case-insensitive ordering of header names.
///
/// Names that differ only in case fall back to byte order, so `VECTOR`
/// sorts before `vector` and the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
