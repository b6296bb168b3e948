//! Summary output types
//!
//! [`Summary`] is the structured result of a summarization run; its
//! `Display` form is the plain-text summary. [`SummaryStats`] holds the
//! length statistics callers report next to it.

use serde::Serialize;
use std::fmt;

/// Selected sentences, one per qualifying paragraph, with an optional title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Trimmed title; `None` when absent or blank
    pub title: Option<String>,
    /// Selected sentences in paragraph order
    pub lines: Vec<String>,
}

impl Summary {
    /// Create a summary, trimming the title and dropping empty lines
    pub fn new(title: Option<&str>, lines: Vec<String>) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let lines = lines.into_iter().filter(|l| !l.is_empty()).collect();
        Self { title, lines }
    }

    /// Number of selected sentences (title excluded)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render as text: title then sentences, each line ending in `'\n'`
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render with a first line that is always present
    ///
    /// Without a title the first line is empty. This is the layout the
    /// command-line report prints and measures.
    pub fn render_with_title_line(&self) -> String {
        let mut out = String::new();
        out.push_str(self.title.as_deref().unwrap_or(""));
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Byte-length statistics of a summary relative to its source
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Length of the source document in bytes
    pub original_len: usize,
    /// Length of the rendered summary in bytes
    pub summary_len: usize,
    /// Percentage by which the summary is shorter than the source
    pub ratio: f64,
}

impl SummaryStats {
    /// Compute statistics for a rendered summary
    ///
    /// An empty source reports a ratio of 0.
    pub fn compute(original: &str, summary: &str) -> Self {
        Self::from_lengths(original.len(), summary.len())
    }

    /// Compute statistics from byte lengths
    ///
    /// Use this when the source length must count raw bytes rather than
    /// the decoded text.
    pub fn from_lengths(original_len: usize, summary_len: usize) -> Self {
        let ratio = if original_len == 0 {
            0.0
        } else {
            100.0 - 100.0 * (summary_len as f64 / original_len as f64)
        };
        Self {
            original_len,
            summary_len,
            ratio,
        }
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original length {}", self.original_len)?;
        writeln!(f, "Summary length {}", self.summary_len)?;
        write!(f, "Summary ratio: {:.2}%", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_title() {
        let summary = Summary::new(
            Some("  My Title \n"),
            vec!["First pick".to_string(), "Second pick".to_string()],
        );

        assert_eq!(summary.title.as_deref(), Some("My Title"));
        assert_eq!(summary.render(), "My Title\nFirst pick\nSecond pick\n");
    }

    #[test]
    fn test_render_without_title() {
        let summary = Summary::new(None, vec!["Only pick".to_string()]);
        assert_eq!(summary.render(), "Only pick\n");
    }

    #[test]
    fn test_blank_title_is_dropped() {
        let summary = Summary::new(Some("   "), vec!["Pick".to_string()]);

        assert_eq!(summary.title, None);
        assert_eq!(summary.render(), "Pick\n");
    }

    #[test]
    fn test_empty_lines_dropped() {
        let summary = Summary::new(None, vec![String::new(), "Kept".to_string()]);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.render(), "Kept\n");
    }

    #[test]
    fn test_empty_summary_renders_empty() {
        let summary = Summary::new(None, Vec::new());

        assert!(summary.is_empty());
        assert_eq!(summary.render(), "");
    }

    #[test]
    fn test_title_line_present_without_title() {
        let summary = Summary::new(None, vec!["Only pick".to_string()]);
        assert_eq!(summary.render_with_title_line(), "\nOnly pick\n");

        let empty = Summary::new(None, Vec::new());
        assert_eq!(empty.render_with_title_line(), "\n");
    }

    #[test]
    fn test_title_line_with_title_matches_render() {
        let summary = Summary::new(Some(" T "), vec!["Pick".to_string()]);

        assert_eq!(summary.render_with_title_line(), "T\nPick\n");
        assert_eq!(summary.render_with_title_line(), summary.render());
    }

    #[test]
    fn test_stats_from_lengths() {
        let stats = SummaryStats::from_lengths(6, 3);

        assert_eq!(stats.original_len, 6);
        assert_eq!(stats.summary_len, 3);
        assert!((stats.ratio - 50.0).abs() < 1e-10);
        assert_eq!(SummaryStats::from_lengths(0, 4).ratio, 0.0);
    }

    #[test]
    fn test_stats_ratio() {
        let stats = SummaryStats::compute(&"x".repeat(200), &"y".repeat(50));

        assert_eq!(stats.original_len, 200);
        assert_eq!(stats.summary_len, 50);
        assert!((stats.ratio - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty_original() {
        let stats = SummaryStats::compute("", "");
        assert_eq!(stats.ratio, 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = SummaryStats::compute(&"x".repeat(3), "y");
        assert_eq!(
            stats.to_string(),
            "Original length 3\nSummary length 1\nSummary ratio: 66.67%"
        );
    }

    #[test]
    fn test_summary_serializes() {
        let summary = Summary::new(Some("T"), vec!["Line".to_string()]);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["title"], "T");
        assert_eq!(json["lines"][0], "Line");
    }
}
