// lopdf helper - Pure Rust PDF loading
use lopdf::Document;
use std::path::Path;

use crate::types::{GlossaryError, Result};

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document> {
    let document = Document::load(path)
        .map_err(|e| GlossaryError::Pdf(format!("failed to load {}: {}", path.display(), e)))?;
    log::debug!("Loaded {} ({} pages)", path.display(), get_page_count(&document));
    Ok(document)
}

/// Execute an operation with a PDF document
pub fn with_pdf<F, R>(path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&Document) -> Result<R>,
{
    let document = load_pdf(path)?;
    f(&document)
}

pub fn get_page_count(document: &Document) -> usize {
    document.get_pages().len()
}
