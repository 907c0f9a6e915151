use std::collections::HashMap;

use crate::models::NormalizedTitle;

/// Maps each normalized title to the row index of its movie
///
/// When several rows normalize to the same key the last row wins; earlier
/// rows stay in the metadata table and are only reachable through search.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<NormalizedTitle, usize>,
    /// Keys in the order they were first seen
    keys: Vec<NormalizedTitle>,
    collisions: usize,
}

impl TitleIndex {
    /// Builds the index from normalized titles listed in table order
    pub fn build<'a, I>(titles: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedTitle>,
    {
        let mut index = Self::default();

        for (row, key) in titles.into_iter().enumerate() {
            match index.rows.insert(key.clone(), row) {
                None => index.keys.push(key.clone()),
                Some(previous) => {
                    tracing::debug!(key = %key, previous, row, "Duplicate normalized title, keeping later row");
                    index.collisions += 1;
                }
            }
        }

        index
    }

    pub fn get(&self, key: &NormalizedTitle) -> Option<usize> {
        self.rows.get(key).copied()
    }

    /// All keys, in first-seen table order
    pub fn keys(&self) -> impl Iterator<Item = &NormalizedTitle> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of rows whose key was already taken by an earlier row
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
