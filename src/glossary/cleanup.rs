// Post-segmentation cleanup: header bleed, page numbers, spillover terms
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::segmenter::collapse_whitespace;
use crate::config::ExtractionSettings;
use crate::types::{GlossaryEntry, RawEntry};

// Standalone 3-digit tokens are page numbers that leaked into the text
static PAGE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}\b").expect("page number pattern is valid"));

#[derive(Debug, Clone)]
pub struct CleanupRules {
    source: String,
    strip_artifacts: Vec<String>,
    excluded_terms: HashSet<String>,
    letter_placeholder: String,
}

impl CleanupRules {
    pub fn new(settings: &ExtractionSettings) -> Self {
        Self {
            source: settings.source.clone(),
            strip_artifacts: settings
                .strip_artifacts
                .iter()
                .filter(|a| !a.is_empty())
                .cloned()
                .collect(),
            excluded_terms: settings
                .excluded_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
            letter_placeholder: settings.letter_placeholder.clone(),
        }
    }

    pub fn is_excluded(&self, term: &str) -> bool {
        self.excluded_terms.contains(&term.to_lowercase())
    }

    /// Clean one raw pair, or `None` if it should not be emitted.
    pub fn apply(&self, raw: &RawEntry) -> Option<GlossaryEntry> {
        let term = self.strip_term(&raw.term);
        let definition = strip_page_numbers(&raw.definition);

        if self.is_excluded(&term) {
            log::debug!("Skipping excluded term {:?}", term);
            return None;
        }
        if term.is_empty() || definition.is_empty() {
            log::debug!("Skipping entry emptied by cleanup (raw term {:?})", raw.term);
            return None;
        }

        Some(GlossaryEntry::new(
            term,
            definition,
            self.source.as_str(),
            &self.letter_placeholder,
        ))
    }

    fn strip_term(&self, term: &str) -> String {
        let mut cleaned = term.to_string();
        for artifact in &self.strip_artifacts {
            cleaned = cleaned.replace(artifact.as_str(), "");
        }
        cleaned.trim().to_string()
    }
}

/// Remove standalone 3-digit numbers and re-collapse the spacing they leave.
pub fn strip_page_numbers(definition: &str) -> String {
    collapse_whitespace(&PAGE_NUMBER.replace_all(definition, ""))
}
