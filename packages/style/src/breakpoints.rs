use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named viewport-width thresholds (minimum width in pixels)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints(IndexMap<String, u32>);

impl Breakpoints {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, min_width: u32) {
        self.0.insert(name.into(), min_width);
    }

    pub fn min_width(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    /// Reverse lookup used when mapping `@media (min-width: Npx)` back to a name
    pub fn name_for_min_width(&self, min_width: u32) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, width)| **width == min_width)
            .map(|(name, _)| name.as_str())
    }

    pub fn media_query(&self, name: &str) -> Option<String> {
        self.min_width(name)
            .map(|width| format!("(min-width: {}px)", width))
    }

    /// Breakpoints ordered by ascending width
    pub fn ascending(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.0.iter().map(|(name, width)| (name.as_str(), *width)).collect();
        entries.sort_by_key(|(_, width)| *width);
        entries
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        let mut breakpoints = Self::new();
        breakpoints.insert("sm", 576);
        breakpoints.insert("md", 768);
        breakpoints.insert("lg", 992);
        breakpoints.insert("xl", 1200);
        breakpoints
    }
}
