//! Area registry
//!
//! Collects the distinct area names referenced by one or more layouts. Empty
//! cell markers are never registered. Names are not validated as CSS
//! identifiers; an unusable name simply yields an unusable class name.
//!
//! Enumeration order is first-seen order, so a fixed sequence of layouts
//! always produces the same sequence of names.

use crate::parsing::rows::{is_empty_marker, tokenize_row, ParsedLayout};
use std::collections::HashSet;

/// Deduplicated, insertion-ordered set of area names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single cell token. Returns true if it was a new area name.
    pub fn insert(&mut self, token: &str) -> bool {
        if is_empty_marker(token) || self.seen.contains(token) {
            return false;
        }
        self.seen.insert(token.to_string());
        self.names.push(token.to_string());
        true
    }

    /// Register every token of a row string
    pub fn add_row(&mut self, row: &str) {
        for token in tokenize_row(row) {
            self.insert(token);
        }
    }

    /// Register every area of a parsed layout
    pub fn add_layout(&mut self, layout: &ParsedLayout) {
        for token in layout.area_tokens() {
            self.insert(token);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<'a> Extend<&'a ParsedLayout> for AreaRegistry {
    fn extend<I: IntoIterator<Item = &'a ParsedLayout>>(&mut self, layouts: I) {
        for layout in layouts {
            self.add_layout(layout);
        }
    }
}

/// Distinct area names referenced by a sequence of row strings
pub fn extract_area_names<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    let mut registry = AreaRegistry::new();
    for row in rows {
        registry.add_row(row.as_ref());
    }
    registry.into_names()
}
