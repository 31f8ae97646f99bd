use serde::{Deserialize, Serialize};

use super::{ExtractionMethod, TextQuality};

/// Everything a pipeline run hands back. Produced for every input, even when
/// all strategies fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text as the winning strategy produced it, before normalization.
    pub raw_text: String,
    /// Normalized text: control characters stripped, whitespace collapsed.
    pub cleaned_text: String,
    pub extraction_method: ExtractionMethod,
    pub text_quality: TextQuality,
    pub metrics: ExtractionMetrics,
}

/// Statistics computed over the cleaned text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetrics {
    pub word_count: usize,
    /// Share of whitespace tokens that look like real words, 0 to 100.
    pub readable_percentage: u8,
    pub has_structured_content: bool,
    /// How many distinct section headings were spotted.
    pub structure_indicators: usize,
    /// Distinct readable words as a share of all readable words, 0 to 100.
    pub word_diversity: u8,
    pub processing_time_ms: u64,
    pub diagnostics: ExtractionDiagnostics,
}

/// Which strategies ran and what went wrong along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractionDiagnostics {
    pub structured_attempted: bool,
    pub structured_succeeded: bool,
    pub fallback_attempted: bool,
    pub fallback_succeeded: bool,
    /// Failure messages from each stage, pipe-separated in the order they occurred.
    pub error_details: String,
}

impl ExtractionDiagnostics {
    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.error_details.is_empty() {
            self.error_details.push_str(" | ");
        }
        self.error_details.push_str(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_single() {
        let mut diagnostics = ExtractionDiagnostics::default();
        diagnostics.record_error("structured extraction failed: bad xref");

        assert_eq!(
            diagnostics.error_details,
            "structured extraction failed: bad xref"
        );
    }

    #[test]
    fn test_record_error_separates_with_pipes() {
        let mut diagnostics = ExtractionDiagnostics::default();
        diagnostics.record_error("first failure");
        diagnostics.record_error("second failure");
        diagnostics.record_error("third failure");

        assert_eq!(
            diagnostics.error_details,
            "first failure | second failure | third failure"
        );
    }

    #[test]
    fn test_diagnostics_default_is_clean() {
        let diagnostics = ExtractionDiagnostics::default();
        assert!(!diagnostics.structured_attempted);
        assert!(!diagnostics.fallback_attempted);
        assert!(diagnostics.error_details.is_empty());
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = ExtractionResult {
            raw_text: "Experience\nSoftware Engineer".to_string(),
            cleaned_text: "Experience Software Engineer".to_string(),
            extraction_method: ExtractionMethod::Structured,
            text_quality: TextQuality::Good,
            metrics: ExtractionMetrics {
                word_count: 3,
                readable_percentage: 100,
                has_structured_content: true,
                structure_indicators: 1,
                word_diversity: 100,
                processing_time_ms: 12,
                diagnostics: ExtractionDiagnostics {
                    structured_attempted: true,
                    structured_succeeded: true,
                    ..Default::default()
                },
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"extraction_method\":\"structured\""));
        assert!(json.contains("\"text_quality\":\"good\""));

        let parsed: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.metrics.word_count, 3);
        assert!(parsed.metrics.diagnostics.structured_attempted);
    }
}
