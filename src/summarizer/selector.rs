//! Per-paragraph sentence selection
//!
//! Each paragraph contributes at most one sentence: the one whose
//! normalized text has the highest document-wide centrality score.

use crate::centrality::ScoreMap;
use crate::nlp::normalize::normalize;
use crate::nlp::segmenter::split_sentences;

/// Minimum sentences a paragraph needs to be considered
pub const MIN_PARAGRAPH_SENTENCES: usize = 2;

/// Picks the most central sentence of each paragraph
#[derive(Debug, Clone)]
pub struct ParagraphSelector {
    skip_single_sentence_paragraphs: bool,
}

impl Default for ParagraphSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphSelector {
    /// Create a selector that skips single-sentence paragraphs
    pub fn new() -> Self {
        Self {
            skip_single_sentence_paragraphs: true,
        }
    }

    /// Set whether single-sentence paragraphs are skipped
    pub fn with_skip_single_sentence_paragraphs(mut self, skip: bool) -> Self {
        self.skip_single_sentence_paragraphs = skip;
        self
    }

    /// Best sentence of one paragraph, trimmed
    ///
    /// A sentence must score strictly above 0 and strictly above every
    /// earlier candidate, so ties keep the first sentence and a paragraph
    /// whose sentences all score 0 yields `None`.
    pub fn best_sentence(&self, paragraph: &str, scores: &ScoreMap) -> Option<String> {
        let sentences = split_sentences(paragraph);
        if self.skip_single_sentence_paragraphs && sentences.len() < MIN_PARAGRAPH_SENTENCES {
            return None;
        }

        let mut best: Option<&str> = None;
        let mut max_score = 0.0;
        for sentence in &sentences {
            let key = normalize(sentence);
            if key.is_empty() {
                continue;
            }
            let score = scores.score(&key);
            if score > max_score {
                max_score = score;
                best = Some(sentence.as_str());
            }
        }

        best.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Best sentence of every paragraph that yields one, in paragraph order
    pub fn select<'a, I>(&self, paragraphs: I, scores: &ScoreMap) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        paragraphs
            .into_iter()
            .filter_map(|paragraph| self.best_sentence(paragraph, scores))
            .collect()
    }
}

/// Select with the default selector
pub fn select_summary(paragraphs: &[&str], scores: &ScoreMap) -> Vec<String> {
    ParagraphSelector::new().select(paragraphs.iter().copied(), scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::rank;

    fn map(entries: &[(&str, f64)]) -> ScoreMap {
        let mut map = ScoreMap::new();
        for &(key, score) in entries {
            map.insert(key, score);
        }
        map
    }

    #[test]
    fn test_single_sentence_paragraph_skipped() {
        let scores = map(&[("Onlyonesentencehere", 10.0)]);
        let selector = ParagraphSelector::new();

        assert_eq!(selector.best_sentence("Only one sentence here", &scores), None);
    }

    #[test]
    fn test_single_sentence_paragraph_kept_when_configured() {
        let scores = map(&[("Onlyonesentencehere", 10.0)]);
        let selector = ParagraphSelector::new().with_skip_single_sentence_paragraphs(false);

        assert_eq!(
            selector.best_sentence("Only one sentence here", &scores),
            Some("Only one sentence here".to_string())
        );
    }

    #[test]
    fn test_picks_highest_score() {
        let scores = map(&[("Firstone", 0.5), ("Secondone", 1.5), ("Thirdone", 1.0)]);
        let selector = ParagraphSelector::new();

        assert_eq!(
            selector.best_sentence("First one. Second one. Third one.", &scores),
            Some("Second one".to_string())
        );
    }

    #[test]
    fn test_tie_keeps_first() {
        let scores = map(&[("Alpha", 1.0), ("Beta", 1.0)]);
        let selector = ParagraphSelector::new();

        assert_eq!(
            selector.best_sentence("Alpha. Beta", &scores),
            Some("Alpha".to_string())
        );
    }

    #[test]
    fn test_zero_scores_yield_nothing() {
        let scores = map(&[("Alpha", 0.0)]);
        let selector = ParagraphSelector::new();

        assert_eq!(selector.best_sentence("Alpha. Beta", &scores), None);
    }

    #[test]
    fn test_blank_sentences_are_not_candidates() {
        // The empty key carries a score but blank sentences never win
        let scores = map(&[("", 5.0), ("Real", 0.1)]);
        let selector = ParagraphSelector::new();

        assert_eq!(
            selector.best_sentence("\n  . Real", &scores),
            Some("Real".to_string())
        );
    }

    #[test]
    fn test_winner_is_trimmed() {
        let scores = map(&[("Indented", 1.0)]);
        let selector = ParagraphSelector::new();

        assert_eq!(
            selector.best_sentence("x\n   Indented   ", &scores),
            Some("Indented".to_string())
        );
    }

    #[test]
    fn test_select_summary_over_document() {
        let text = "rust is fast. rust is safe. cats sleep\n\nNo partner here\n\nbirds fly. fish swim";
        let scores = rank(text);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();

        let lines = select_summary(&paragraphs, &scores);

        // Only the first paragraph has a sentence with a positive score
        assert_eq!(lines, vec!["rust is fast".to_string()]);
        assert!(lines.len() <= paragraphs.len());
    }

    #[test]
    fn test_empty_paragraph_list() {
        assert!(select_summary(&[], &ScoreMap::new()).is_empty());
    }
}
