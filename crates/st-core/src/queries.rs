//! Ordered mapping from migration version to its SQL statements.
//!
//! Statements are written to migration files in exactly the order they were
//! inserted, so this keeps insertion order instead of sorting by version.

use crate::identifiers::Version;
use indexmap::IndexMap;

/// Insertion-ordered map from [`Version`] to the SQL statements it executes.
///
/// Keys are unique. Inserting a version that is already present replaces its
/// statements without moving it. Equality takes order into account.
#[derive(Debug, Clone, Default)]
pub struct QueriesByVersion {
    entries: IndexMap<Version, Vec<String>>,
}

impl QueriesByVersion {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the statements for a version.
    ///
    /// Returns the previous statements if the version was already present.
    pub fn insert<I, S>(&mut self, version: Version, statements: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let statements: Vec<String> = statements.into_iter().map(Into::into).collect();
        let previous = self.entries.insert(version, statements);
        if previous.is_some() {
            log::debug!("Replaced queued statements for an existing version");
        }
        previous
    }

    /// Statements recorded for a version
    pub fn get(&self, version: &str) -> Option<&[String]> {
        self.entries.get(version).map(Vec::as_slice)
    }

    /// Whether the version has an entry
    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    /// Number of versions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no versions have been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of statements across all versions
    pub fn statement_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Versions in insertion order
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.entries.keys()
    }

    /// Iterate `(version, statements)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Version, &[String])> {
        self.entries.iter().map(|(v, s)| (v, s.as_slice()))
    }
}

impl PartialEq for QueriesByVersion {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for QueriesByVersion {}

impl<S: Into<String>> FromIterator<(Version, Vec<S>)> for QueriesByVersion {
    fn from_iter<T: IntoIterator<Item = (Version, Vec<S>)>>(iter: T) -> Self {
        let mut queries = QueriesByVersion::new();
        for (version, statements) in iter {
            queries.insert(version, statements);
        }
        queries
    }
}

impl IntoIterator for QueriesByVersion {
    type Item = (Version, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<Version, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "queries_test.rs"]
mod tests;
