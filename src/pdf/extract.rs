use std::path::Path;

use lopdf::Document;
use serde_json::Value;

use crate::core::{TeifError, sample_fields};

/// Source of untyped invoice fields.
pub trait FieldExtractor {
    /// Read the document at `path` and return its field mapping.
    fn extract(&self, path: &Path) -> Result<Value, TeifError>;
}

/// Extractor that reads the PDF fully and returns the fixed sample mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleExtractor;

impl FieldExtractor for SampleExtractor {
    fn extract(&self, path: &Path) -> Result<Value, TeifError> {
        let text = read_text(path)?;
        tracing::info!(
            path = %path.display(),
            chars = text.chars().count(),
            "extracted PDF text, returning sample fields"
        );
        Ok(sample_fields())
    }
}

/// Load a PDF and concatenate the text of all pages, one page per line.
///
/// Pages whose text cannot be decoded (e.g. scanned images) are skipped.
/// The document is dropped before this returns.
pub fn read_text(path: &Path) -> Result<String, TeifError> {
    let doc = Document::load(path)
        .map_err(|e| TeifError::Pdf(format!("failed to load {}: {e}", path.display())))?;

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    let mut text = String::new();
    for page in &pages {
        let page_text = match doc.extract_text(&[*page]) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(page, error = %e, "skipping page without extractable text");
                continue;
            }
        };
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(page_text.trim_end());
    }

    tracing::debug!(pages = pages.len(), "PDF loaded");
    Ok(text)
}
