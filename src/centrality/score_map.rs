//! Normalized-text keyed score lookup
//!
//! Sentences that normalize to the same key share one entry. Scores are
//! inserted in sentence order and overwrite, so the last sentence with a
//! given key decides its score.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Mapping from normalized sentence text to centrality score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: FxHashMap<String, f64>,
}

impl ScoreMap {
    /// Create an empty score map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a score map with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a score, replacing any previous score under the same key
    pub fn insert(&mut self, normalized: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(normalized.into(), score)
    }

    /// Score for a normalized sentence; unknown keys score 0
    pub fn score(&self, normalized: &str) -> f64 {
        self.scores.get(normalized).copied().unwrap_or(0.0)
    }

    /// Score for a normalized sentence, if present
    pub fn get(&self, normalized: &str) -> Option<f64> {
        self.scores.get(normalized).copied()
    }

    /// Check if a key is present
    pub fn contains(&self, normalized: &str) -> bool {
        self.scores.contains_key(normalized)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(normalized, score)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_scores_zero() {
        let map = ScoreMap::new();

        assert_eq!(map.score("anything"), 0.0);
        assert_eq!(map.get("anything"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = ScoreMap::new();

        assert_eq!(map.insert("Thesame", 1.5), None);
        assert_eq!(map.insert("Thesame", 0.25), Some(1.5));

        assert_eq!(map.len(), 1);
        assert_eq!(map.score("Thesame"), 0.25);
    }

    #[test]
    fn test_empty_key_allowed() {
        let mut map = ScoreMap::with_capacity(4);
        map.insert("", 2.0);

        assert!(map.contains(""));
        assert_eq!(map.score(""), 2.0);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut map = ScoreMap::new();
        map.insert("Alpha", 1.0);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["Alpha"], 1.0);
    }
}
