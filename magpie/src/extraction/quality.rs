use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{ExtractionDiagnostics, ExtractionMetrics, TextQuality};

/// Section headings that mark a resume as structurally intact. Matched as
/// whole words, case-insensitively.
const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "work",
    "job",
    "employment",
    "objective",
    "certifications",
    "projects",
];

/// Scores cleaned text so callers can decide whether it is worth sending
/// downstream.
pub struct QualityAssessor;

impl QualityAssessor {
    /// Compute readability statistics for `text`.
    pub fn assess(
        text: &str,
        processing_time_ms: u64,
        diagnostics: ExtractionDiagnostics,
    ) -> ExtractionMetrics {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let word_count = tokens.len();

        let readable: Vec<String> = tokens
            .iter()
            .filter(|token| is_readable(token))
            .map(|token| token.to_lowercase())
            .collect();

        let readable_percentage = ratio_percent(readable.len(), word_count);
        let distinct = readable.iter().collect::<HashSet<_>>().len();
        let word_diversity = ratio_percent(distinct, readable.len());

        let lowered = text.to_lowercase();
        let words: HashSet<&str> = lowered.unicode_words().collect();
        let structure_indicators = SECTION_KEYWORDS
            .iter()
            .filter(|keyword| words.contains(*keyword))
            .count();

        ExtractionMetrics {
            word_count,
            readable_percentage,
            has_structured_content: structure_indicators > 0,
            structure_indicators,
            word_diversity,
            processing_time_ms,
            diagnostics,
        }
    }

    /// Map metrics onto a quality label.
    pub fn classify(metrics: &ExtractionMetrics) -> TextQuality {
        if metrics.readable_percentage >= 90 && metrics.has_structured_content {
            TextQuality::Excellent
        } else if metrics.readable_percentage >= 75 {
            TextQuality::Good
        } else if metrics.readable_percentage >= 50 {
            TextQuality::Fair
        } else {
            TextQuality::Poor
        }
    }
}

// A token reads as a word when it has at least one letter and more than one
// character. "a" and "42" both fail.
fn is_readable(token: &str) -> bool {
    token.chars().count() > 1 && token.chars().any(|c| c.is_alphabetic())
}

fn ratio_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (((part as f64 / whole as f64) * 100.0).round() as u8).min(100)
}
