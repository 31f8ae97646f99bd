use regex::Regex;

use crate::config::ByteScanConfig;
use crate::error::{MagpieError, Result};

/// Punctuation that belongs to container syntax far more often than to
/// prose. These bytes end the current chunk instead of joining it.
const STRUCTURAL_PUNCT: &[u8] = b"%<>{}[]()";

/// Format vocabulary that leaks into byte scans of PDF files. Compared
/// against lower-cased tokens with any leading slash removed.
const PDF_ARTIFACTS: &[&str] = &[
    "pdf",
    "obj",
    "endobj",
    "stream",
    "endstream",
    "xref",
    "startxref",
    "trailer",
    "flatedecode",
    "asciihexdecode",
    "dctdecode",
    "mediabox",
    "cropbox",
    "procset",
    "basefont",
    "fontfile",
    "fontdescriptor",
    "tounicode",
    "cidfont",
    "linearized",
];

/// Last-resort extractor that walks raw bytes and keeps runs that look like
/// prose. Works on any input, not just well-formed documents.
pub struct ByteScanExtractor {
    config: ByteScanConfig,
    hex_run: Regex,
}

impl ByteScanExtractor {
    pub fn new(config: ByteScanConfig) -> Self {
        // object hashes and stream ids show up as long hex runs
        let hex_run = Regex::new(r"^[0-9a-f]{6,}$").expect("hex run pattern is valid");
        Self { config, hex_run }
    }

    /// Scan `buffer` for readable chunks and join the survivors with spaces.
    ///
    /// Fails with [`MagpieError::InsufficientText`] when fewer chunks survive
    /// filtering than the configured minimum.
    pub fn extract(&self, buffer: &[u8]) -> Result<String> {
        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();

        for &byte in buffer {
            match text_char(byte) {
                Some(c) => current.push(c),
                None => self.flush_chunk(&mut current, &mut chunks),
            }
        }
        self.flush_chunk(&mut current, &mut chunks);

        if chunks.len() < self.config.min_chunks {
            return Err(MagpieError::InsufficientText(format!(
                "byte scan recovered {} readable chunks, need {}",
                chunks.len(),
                self.config.min_chunks
            )));
        }

        Ok(chunks.join(" "))
    }

    fn flush_chunk(&self, current: &mut String, chunks: &mut Vec<String>) {
        if current.len() > self.config.min_chunk_len {
            let tokens: Vec<&str> = current
                .split_whitespace()
                .filter(|token| self.is_prose_token(token))
                .collect();
            // a lone surviving token is usually noise, not prose
            if tokens.len() >= 2 {
                chunks.push(tokens.join(" "));
            }
        }
        current.clear();
    }

    fn is_prose_token(&self, token: &str) -> bool {
        if token.chars().count() < 2 || !token.chars().any(|c| c.is_alphabetic()) {
            return false;
        }

        let bare = token.trim_start_matches('/').to_lowercase();
        if PDF_ARTIFACTS.contains(&bare.as_str()) {
            return false;
        }

        // hex runs without a digit are more likely English than an id
        !(self.hex_run.is_match(&bare) && bare.bytes().any(|b| b.is_ascii_digit()))
    }
}

impl Default for ByteScanExtractor {
    fn default() -> Self {
        Self::new(ByteScanConfig::default())
    }
}

/// Classify one byte: `Some(' ')` for whitespace, `Some(c)` for printable
/// ASCII and Latin-1 text, `None` for anything that should end the chunk.
fn text_char(byte: u8) -> Option<char> {
    match byte {
        b' ' | b'\t' | b'\n' | b'\r' => Some(' '),
        0x20..=0x7E if !STRUCTURAL_PUNCT.contains(&byte) => Some(byte as char),
        0x80..=0xFF => Some(byte as char),
        _ => None,
    }
}
