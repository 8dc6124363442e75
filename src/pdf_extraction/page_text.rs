// Per-page text extraction, tolerant of pages that yield nothing
use lopdf::Document;
use std::path::Path;
use std::time::Instant;

use super::lopdf_helper::with_pdf;
use crate::types::Result;

pub const PAGE_SEPARATOR: &str = "\n";

/// Text of every page in page-number order.
///
/// A page whose text cannot be extracted contributes an empty string.
pub fn page_texts(document: &Document) -> Vec<String> {
    document
        .get_pages()
        .into_keys()
        .map(|page_num| match document.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Page {} has no extractable text: {}", page_num, e);
                String::new()
            }
        })
        .collect()
}

pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

/// Load `pdf_path` and return the concatenated text of all pages.
pub fn extract_document_text(pdf_path: &Path) -> Result<String> {
    let start = Instant::now();
    with_pdf(pdf_path, |document| {
        let pages = page_texts(document);
        let empty = pages.iter().filter(|p| p.trim().is_empty()).count();
        log::info!(
            "Read {} pages from {} ({} without text)",
            pages.len(),
            pdf_path.display(),
            empty
        );
        let text = join_pages(&pages);
        log::debug!("TIMING: text extraction took {:?}", start.elapsed());
        Ok(text)
    })
}
