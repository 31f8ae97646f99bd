use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use lopdf::Document;

use super::normalize::normalize;
use crate::config::StructuredConfig;
use crate::error::{MagpieError, Result};

/// Parses the document container and pulls text page by page. A page that
/// fails to decode is skipped; it never takes the rest of the document down
/// with it.
pub struct StructuredExtractor {
    config: StructuredConfig,
}

impl StructuredExtractor {
    pub fn new(config: StructuredConfig) -> Self {
        Self { config }
    }

    /// Extract text from `buffer`, giving up after the configured timeout.
    pub async fn extract(&self, buffer: &[u8]) -> Result<String> {
        with_timeout(self.config.timeout_secs, self.extract_inner(buffer)).await
    }

    async fn extract_inner(&self, buffer: &[u8]) -> Result<String> {
        let bytes = buffer.to_vec();
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || extract_document_text(&bytes, &config))
            .await
            .map_err(|e| MagpieError::Task(format!("structured extraction task panicked: {e}")))?
    }
}

impl Default for StructuredExtractor {
    fn default() -> Self {
        Self::new(StructuredConfig::default())
    }
}

/// Race `inner` against a deadline, mapping an elapsed timer onto
/// [`MagpieError::Timeout`]. The inner result passes through untouched.
async fn with_timeout<F>(timeout_secs: u64, inner: F) -> Result<String>
where
    F: Future<Output = Result<String>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), inner).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_secs, "Structured extraction timed out");
            Err(MagpieError::Timeout(timeout_secs))
        }
    }
}

fn extract_document_text(bytes: &[u8], config: &StructuredConfig) -> Result<String> {
    if !is_pdf_magic(bytes) {
        return Err(MagpieError::Document("missing %PDF header".to_string()));
    }

    let mut accumulated = String::new();
    let mut open_error: Option<MagpieError> = None;

    match open_document(bytes) {
        Ok(mut document) => accumulated = collect_page_text(&mut document, config),
        Err(e) => {
            tracing::warn!(error = %e, "Could not open document structure");
            open_error = Some(e);
        }
    }

    // Some generators only decode cleanly in a whole-document pass.
    if normalize(&accumulated).len() < config.min_text_len {
        if let Some(recovered) = whole_document_pass(bytes) {
            if recovered.trim().len() > accumulated.trim().len() {
                tracing::debug!(
                    chars = recovered.len(),
                    "Whole-document pass recovered more text than the page loop"
                );
                accumulated = recovered;
            }
        }
    }

    if normalize(&accumulated).is_empty() {
        return Err(match open_error {
            Some(e) => e,
            None => MagpieError::InsufficientText(
                "no page yielded extractable text".to_string(),
            ),
        });
    }

    Ok(accumulated)
}

fn open_document(bytes: &[u8]) -> Result<Document> {
    let mut document = Document::load_mem(bytes)
        .map_err(|e| MagpieError::Document(format!("failed to parse document: {e}")))?;

    if document.is_encrypted() {
        document
            .decrypt("")
            .map_err(|_| MagpieError::Document("document is password protected".to_string()))?;
    }
    document.decompress();

    Ok(document)
}

fn collect_page_text(document: &mut Document, config: &StructuredConfig) -> String {
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    if page_numbers.len() > config.max_pages {
        tracing::warn!(
            total_pages = page_numbers.len(),
            max_pages = config.max_pages,
            "Document exceeds page cap, extra pages are ignored"
        );
    }

    let mut accumulated = String::new();
    for &page_number in page_numbers.iter().take(config.max_pages) {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => {
                let joined = page_text.split_whitespace().collect::<Vec<_>>().join(" ");
                if joined.len() > config.min_page_text_len {
                    accumulated.push_str(&joined);
                    accumulated.push_str("\n\n");
                }
            }
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "Skipping unreadable page");
            }
        }
    }
    accumulated
}

/// Run the whole-document text pass. Certain malformed font programs panic
/// the underlying parser, so the call is isolated.
fn whole_document_pass(bytes: &[u8]) -> Option<String> {
    let owned = bytes.to_vec();
    match catch_unwind(AssertUnwindSafe(move || {
        pdf_extract::extract_text_from_mem(&owned)
    })) {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Whole-document pass failed");
            None
        }
        Err(_) => {
            tracing::warn!("Whole-document pass panicked, skipping it");
            None
        }
    }
}

/// Accept `%PDF` anywhere in the first kilobyte. Exporters prepend BOMs,
/// whitespace, and the occasional junk block before the header.
fn is_pdf_magic(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(1024)];
    window.windows(4).any(|w| w == b"%PDF")
}
