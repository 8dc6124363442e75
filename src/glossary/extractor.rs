use std::path::Path;
use std::time::Instant;

use super::cleanup::CleanupRules;
use super::segmenter::segment;
use crate::config::ExtractionSettings;
use crate::pdf_extraction::{extract_document_text, join_pages};
use crate::types::{GlossaryEntry, Result};

/// Single-pass glossary extractor.
///
/// Deterministic for a given input: entries come out in document order and
/// never carry an empty term or definition.
#[derive(Debug, Clone)]
pub struct GlossaryExtractor {
    rules: CleanupRules,
}

impl GlossaryExtractor {
    pub fn new(settings: &ExtractionSettings) -> Self {
        Self {
            rules: CleanupRules::new(settings),
        }
    }

    pub fn extract_text(&self, text: &str) -> Vec<GlossaryEntry> {
        let raw = segment(text);
        let entries: Vec<GlossaryEntry> = raw.iter().filter_map(|r| self.rules.apply(r)).collect();
        log::info!(
            "Matched {} candidate entries, kept {} after cleanup",
            raw.len(),
            entries.len()
        );
        entries
    }

    /// Pages in order; `None` marks a page that produced no text.
    pub fn extract_pages<'a, I>(&self, pages: I) -> Vec<GlossaryEntry>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let pages: Vec<&str> = pages.into_iter().map(|p| p.unwrap_or("")).collect();
        self.extract_text(&join_pages(&pages))
    }

    pub fn extract_pdf(&self, pdf_path: &Path) -> Result<Vec<GlossaryEntry>> {
        let start = Instant::now();
        let text = extract_document_text(pdf_path)?;
        let entries = self.extract_text(&text);
        log::debug!("TIMING: glossary extraction took {:?}", start.elapsed());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SOURCE;

    fn extractor() -> GlossaryExtractor {
        GlossaryExtractor::new(&ExtractionSettings::default())
    }

    #[test]
    fn extracts_example_pair() {
        let entries = extractor()
            .extract_text("Sampling: Selecting a subset of a population.\nBias: A systematic error.");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term, "Sampling");
        assert_eq!(entries[0].definition, "Selecting a subset of a population.");
        assert_eq!(entries[0].letter, "S");
        assert_eq!(entries[1].term, "Bias");
        assert_eq!(entries[1].letter, "B");
        assert!(entries.iter().all(|e| e.source == DEFAULT_SOURCE));
    }

    #[test]
    fn excluded_spillover_yields_nothing() {
        assert!(extractor().extract_text("California: 123 Some spillover text.").is_empty());
    }

    #[test]
    fn unextractable_pages_count_as_empty() {
        let entries = extractor().extract_pages(vec![
            Some("Coding: Labelling qualitative data"),
            None,
            Some("that continues here 575\nDelphi method: Iterative expert consensus."),
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].definition,
            "Labelling qualitative data that continues here"
        );
        assert_eq!(entries[1].term, "Delphi method");
    }

    #[test]
    fn no_headers_no_entries() {
        assert!(extractor().extract_text("just prose, nothing else\n").is_empty());
        assert!(extractor().extract_pages(Vec::<Option<&str>>::new()).is_empty());
    }
}
