// Combined view over the extracted glossary and user-added entries
use crossterm::style::Stylize;
use regex::{Captures, RegexBuilder};
use std::collections::BTreeMap;
use std::path::Path;

use crate::storage::load_or_empty;
use crate::types::GlossaryEntry;

pub const LETTERS: std::ops::RangeInclusive<char> = 'A'..='Z';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Official,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub entry: GlossaryEntry,
    pub origin: Origin,
}

impl CatalogEntry {
    pub fn is_custom(&self) -> bool {
        self.origin == Origin::Custom
    }

    /// Bucket derived from the term itself, not the stored `letter` field.
    pub fn letter(&self) -> Option<char> {
        self.entry.term.chars().next().map(letter_key)
    }
}

/// Uppercase form of `c` used as a bucket key (first char of the full mapping).
pub fn letter_key(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(official: Vec<GlossaryEntry>, custom: Vec<GlossaryEntry>) -> Self {
        let entries = official
            .into_iter()
            .map(|entry| CatalogEntry { entry, origin: Origin::Official })
            .chain(
                custom
                    .into_iter()
                    .map(|entry| CatalogEntry { entry, origin: Origin::Custom }),
            )
            .collect();
        Self { entries }
    }

    /// Either file may be missing or broken; it then contributes nothing.
    pub fn load(official_path: &Path, custom_path: &Path) -> Self {
        let catalog = Self::new(load_or_empty(official_path), load_or_empty(custom_path));
        log::info!(
            "Catalog has {} entries ({} custom)",
            catalog.len(),
            catalog.entries.iter().filter(|e| e.is_custom()).count()
        );
        catalog
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match over term and definition.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| {
                format!("{} {}", e.entry.term, e.entry.definition)
                    .to_lowercase()
                    .contains(&query)
            })
            .collect()
    }
}

pub fn group_by_letter<'a, I>(entries: I) -> BTreeMap<char, Vec<&'a CatalogEntry>>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut groups: BTreeMap<char, Vec<&CatalogEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some(letter) = entry.letter() {
            groups.entry(letter).or_default().push(entry);
        }
    }
    groups
}

/// Count per letter A-Z, zeros included, followed by any other non-empty
/// buckets (accented letters, digits) so the counts add up to the grouped total.
pub fn letter_counts(groups: &BTreeMap<char, Vec<&CatalogEntry>>) -> Vec<(char, usize)> {
    let extra = groups
        .iter()
        .filter(|(l, _)| !LETTERS.contains(*l))
        .map(|(l, items)| (*l, items.len()));
    LETTERS
        .map(|l| (l, groups.get(&l).map_or(0, Vec::len)))
        .chain(extra)
        .collect()
}

/// Mark every case-insensitive occurrence of `query` in `text`.
pub fn highlight(text: &str, query: &str, enabled: bool) -> String {
    let query = query.trim();
    if !enabled || query.is_empty() {
        return text.to_string();
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &Captures| caps[0].black().on_yellow().to_string())
            .into_owned(),
        Err(e) => {
            log::debug!("Highlight disabled for {:?}: {}", query, e);
            text.to_string()
        }
    }
}
