//! Resilient text extraction for uploaded resume PDFs.
//!
//! Feed [`ExtractionPipeline::extract`] a byte buffer and a filename and it
//! always hands back an [`ExtractionResult`]: structured parsing first, a
//! byte-scan salvage pass when that falls short, and filename-derived text as
//! the terminal fallback. Every result carries readability metrics and a
//! quality label so callers can decide what the text is worth.

pub mod config;
pub mod error;
pub mod extraction;
pub mod models;

pub use config::{ByteScanConfig, ExtractionConfig, StructuredConfig};
pub use error::{MagpieError, Result};
pub use extraction::ExtractionPipeline;
pub use models::{
    ExtractionDiagnostics, ExtractionMethod, ExtractionMetrics, ExtractionResult, TextQuality,
};
