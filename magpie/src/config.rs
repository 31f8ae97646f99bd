use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Tunables for the layered extraction pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Normalized output below this many characters counts as a failed strategy.
    pub min_text_len: usize,
    pub structured: StructuredConfig,
    pub byte_scan: ByteScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructuredConfig {
    pub max_pages: usize,
    // pages yielding fewer characters than this are treated as empty
    pub min_page_text_len: usize,
    pub min_text_len: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ByteScanConfig {
    pub min_chunk_len: usize,
    pub min_chunks: usize,
}

impl Default for StructuredConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            min_page_text_len: 10,
            min_text_len: 50,
            timeout_secs: 10,
        }
    }
}

impl Default for ByteScanConfig {
    fn default() -> Self {
        Self {
            min_chunk_len: 4,
            min_chunks: 2,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let min_text_len = parse_env_or("MAGPIE_MIN_TEXT_LEN", 50);
        Self {
            min_text_len,
            structured: StructuredConfig {
                max_pages: parse_env_or("MAGPIE_MAX_PAGES", 50),
                min_page_text_len: parse_env_or("MAGPIE_MIN_PAGE_TEXT_LEN", 10),
                min_text_len,
                timeout_secs: parse_env_or("MAGPIE_STRUCTURED_TIMEOUT", 10),
            },
            byte_scan: ByteScanConfig {
                min_chunk_len: parse_env_or("MAGPIE_MIN_CHUNK_LEN", 4),
                min_chunks: parse_env_or("MAGPIE_MIN_CHUNKS", 2),
            },
        }
    }
}

impl ExtractionConfig {
    pub fn from_env() -> Self {
        Self::default()
    }
}
