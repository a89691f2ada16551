//! Flat paging companion to the forest.
//!
//! Large flattened trees are split into fixed-size pages; the generator
//! records the first anchor of every page so a browser can find which
//! page covers a given document without loading them all.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocnavError, Result};

/// Ordered page boundaries: entry `i` is the first anchor covered by
/// page `i`. Boundaries are emitted in sorted order by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex {
    anchors: Vec<String>,
}

impl PageIndex {
    pub fn new(anchors: Vec<String>) -> Self {
        Self { anchors }
    }

    /// Decode from the wire form: a flat array of anchor strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|e| DocnavError::MalformedTree {
            at: "page index".to_string(),
            reason: e.to_string(),
        })
    }

    /// Page whose half-open anchor range contains `anchor`. An anchor
    /// ordered before the first boundary belongs to no page.
    pub fn page_of(&self, anchor: &str) -> Option<usize> {
        let idx = self.anchors.partition_point(|a| a.as_str() <= anchor);
        idx.checked_sub(1)
    }

    pub fn first_anchor(&self, page: usize) -> Option<&str> {
        self.anchors.get(page).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.anchors.iter().map(String::as_str)
    }
}
