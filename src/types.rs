//! Core types for the phishwatch scanner

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A bare hostname, no scheme. Normalized to a URL only at fetch time.
pub type Domain = String;

/// Similarity scores for one evaluated (parent, child) pair.
///
/// All fields are percentages in `[0, 100]`. `overall_similarity` is the
/// unweighted mean of the three signals; a signal that degraded to 0.0 due to
/// missing evidence still counts in the denominator, so missing data lowers
/// confidence rather than being excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub content_similarity: f64,
    pub favicon_similarity: f64,
    pub title_similarity: f64,
    pub overall_similarity: f64,
}

impl SimilarityReport {
    /// Build a report from the three signals, computing the composite mean.
    pub fn compose(content: f64, favicon: f64, title: f64) -> Self {
        Self {
            content_similarity: content,
            favicon_similarity: favicon,
            title_similarity: title,
            overall_similarity: (content + favicon + title) / 3.0,
        }
    }
}

/// Children matched under one whitelisted parent, in candidate order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentMatches {
    pub parent: Domain,
    pub children: Vec<(Domain, SimilarityReport)>,
}

/// Mapping from parent domain to its matched children.
///
/// Serializes as a JSON object `{parent: [[child, report], ...], ...}` whose
/// key order is whitelist order. Backed by a `Vec` rather than a map type so
/// insertion order survives serialization. Parents with no matched children
/// are never inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMapping {
    entries: Vec<ParentMatches>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parent's matches. Callers only push non-empty match lists.
    pub fn push(&mut self, parent: Domain, children: Vec<(Domain, SimilarityReport)>) {
        self.entries.push(ParentMatches { parent, children });
    }

    pub fn entries(&self) -> &[ParentMatches] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a parent's matches by domain.
    pub fn get(&self, parent: &str) -> Option<&[(Domain, SimilarityReport)]> {
        self.entries
            .iter()
            .find(|e| e.parent == parent)
            .map(|e| e.children.as_slice())
    }
}

impl Serialize for ResultMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.parent, &entry.children)?;
        }
        map.end()
    }
}
