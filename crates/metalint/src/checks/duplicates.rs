//! Cross-record duplicate detection.

use indexmap::{IndexMap, IndexSet};

/// Values that occur at least twice within one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateSet {
    values: IndexSet<String>,
}

impl DuplicateSet {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Duplicate values in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

/// Finds repeated values in a projection of a record batch.
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// Values occurring two or more times. Blank values never count.
    pub fn find_duplicates<I, S>(values: I) -> DuplicateSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in values {
            let value = value.as_ref();
            if value.trim().is_empty() {
                continue;
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        counts.retain(|_, count| *count > 1);
        DuplicateSet {
            values: counts.into_keys().collect(),
        }
    }
}
