use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::time::Instant;

use futures::FutureExt;

use super::byte_scan::ByteScanExtractor;
use super::normalize::normalize;
use super::quality::QualityAssessor;
use super::structured::StructuredExtractor;
use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::models::{ExtractionDiagnostics, ExtractionMethod, ExtractionResult, TextQuality};

const FALLBACK_NOTICE: &str =
    "Automatic text extraction was limited for this file; manual review may be needed.";

/// Runs the strategy chain end to end. Every call produces a complete
/// [`ExtractionResult`], falling back as far as filename-derived text when
/// the document gives up nothing.
pub struct ExtractionPipeline {
    config: ExtractionConfig,
    structured: StructuredExtractor,
    byte_scan: ByteScanExtractor,
}

impl ExtractionPipeline {
    pub fn new(config: ExtractionConfig) -> Self {
        let structured = StructuredExtractor::new(config.structured.clone());
        let byte_scan = ByteScanExtractor::new(config.byte_scan.clone());
        Self {
            config,
            structured,
            byte_scan,
        }
    }

    /// Extract text from an in-memory upload. Does not fail: a panic in any
    /// strategy is absorbed and reported as an emergency result.
    pub async fn extract(&self, buffer: &[u8], filename: &str) -> ExtractionResult {
        let started = Instant::now();
        match AssertUnwindSafe(self.run(buffer, filename, started))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    filename = %filename,
                    "Extraction panicked, synthesizing emergency result"
                );
                self.emergency_result(filename, started)
            }
        }
    }

    /// Read `path` and extract text from its contents.
    pub async fn extract_path(&self, path: &Path) -> Result<ExtractionResult> {
        let buffer = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.extract(&buffer, &filename).await)
    }

    async fn run(&self, buffer: &[u8], filename: &str, started: Instant) -> ExtractionResult {
        let mut diagnostics = ExtractionDiagnostics::default();

        tracing::info!(
            filename = %filename,
            size_bytes = buffer.len(),
            "Starting resume text extraction"
        );
        if let Some(kind) = infer::get(buffer) {
            if kind.mime_type() != "application/pdf" {
                tracing::warn!(
                    filename = %filename,
                    detected = kind.mime_type(),
                    "Upload does not look like a PDF"
                );
            }
        }

        diagnostics.structured_attempted = true;
        match self.structured.extract(buffer).await {
            Ok(raw) => {
                let cleaned = normalize(&raw);
                if cleaned.len() >= self.config.min_text_len {
                    diagnostics.structured_succeeded = true;
                    return self.finish(
                        raw,
                        cleaned,
                        ExtractionMethod::Structured,
                        filename,
                        started,
                        diagnostics,
                    );
                }
                diagnostics.record_error(format!(
                    "structured extraction produced only {} characters",
                    cleaned.len()
                ));
            }
            Err(e) => diagnostics.record_error(format!("structured extraction failed: {e}")),
        }

        diagnostics.fallback_attempted = true;
        tracing::warn!(
            filename = %filename,
            "Structured extraction insufficient, trying byte scan"
        );
        match self.byte_scan.extract(buffer) {
            Ok(raw) => {
                let cleaned = normalize(&raw);
                if cleaned.len() >= self.config.min_text_len {
                    diagnostics.fallback_succeeded = true;
                    return self.finish(
                        raw,
                        cleaned,
                        ExtractionMethod::ByteScanFallback,
                        filename,
                        started,
                        diagnostics,
                    );
                }
                diagnostics.record_error(format!(
                    "byte scan produced only {} characters",
                    cleaned.len()
                ));
            }
            Err(e) => diagnostics.record_error(format!("byte scan failed: {e}")),
        }

        tracing::warn!(
            filename = %filename,
            "All extraction strategies failed, deriving text from the filename"
        );
        let raw = filename_fallback_text(filename);
        let cleaned = normalize(&raw);
        self.finish(
            raw,
            cleaned,
            ExtractionMethod::FilenameFallback,
            filename,
            started,
            diagnostics,
        )
    }

    fn finish(
        &self,
        raw_text: String,
        cleaned_text: String,
        method: ExtractionMethod,
        filename: &str,
        started: Instant,
        diagnostics: ExtractionDiagnostics,
    ) -> ExtractionResult {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let metrics = QualityAssessor::assess(&cleaned_text, elapsed_ms, diagnostics);
        let text_quality = match method {
            ExtractionMethod::Structured | ExtractionMethod::ByteScanFallback => {
                QualityAssessor::classify(&metrics)
            }
            // synthesized sentences describe the upload, they are not document text
            ExtractionMethod::FilenameFallback | ExtractionMethod::Emergency => TextQuality::Poor,
        };

        tracing::info!(
            filename = %filename,
            method = %method,
            quality = %text_quality,
            words = metrics.word_count,
            elapsed_ms,
            "Extraction complete"
        );

        ExtractionResult {
            raw_text,
            cleaned_text,
            extraction_method: method,
            text_quality,
            metrics,
        }
    }

    fn emergency_result(&self, filename: &str, started: Instant) -> ExtractionResult {
        let mut diagnostics = ExtractionDiagnostics::default();
        diagnostics.structured_attempted = true;
        diagnostics.record_error("unexpected failure during extraction");

        let raw = format!(
            "Resume file {filename} was uploaded, but an unexpected error interrupted text extraction."
        );
        let cleaned = normalize(&raw);
        self.finish(
            raw,
            cleaned,
            ExtractionMethod::Emergency,
            filename,
            started,
            diagnostics,
        )
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

fn filename_fallback_text(filename: &str) -> String {
    let base = sanitize_filename(filename);
    if base.is_empty() {
        format!("Resume file uploaded. {FALLBACK_NOTICE}")
    } else {
        format!("Resume file uploaded: {base}. {FALLBACK_NOTICE}")
    }
}

/// Strip the extension and turn separators into spaces so the filename reads
/// like words.
fn sanitize_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let replaced: String = stem
        .chars()
        .map(|c| match c {
            '_' | '-' | '.' | '+' => ' ',
            _ => c,
        })
        .collect();
    normalize(&replaced)
}
