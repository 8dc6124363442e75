// JSON array storage for glossary entries
use std::fs;
use std::path::Path;

use crate::types::{GlossaryEntry, Result};

/// Pretty JSON with two-space indentation; non-ASCII is written as-is.
pub fn to_pretty_json(entries: &[GlossaryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Overwrite `path` with `entries`.
///
/// The parent directory must already exist.
pub fn write_entries(path: &Path, entries: &[GlossaryEntry]) -> Result<()> {
    let json = to_pretty_json(entries)?;
    fs::write(path, json)?;
    log::debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

pub fn read_entries(path: &Path) -> Result<Vec<GlossaryEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read `path`, starting fresh when the file is missing or not a valid entry array.
pub fn load_or_empty(path: &Path) -> Vec<GlossaryEntry> {
    if !path.exists() {
        log::debug!("{} does not exist yet, starting empty", path.display());
        return Vec::new();
    }
    match read_entries(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Append one entry and rewrite the file. Returns the new entry count.
pub fn append_entry(path: &Path, entry: GlossaryEntry) -> Result<usize> {
    let mut entries = load_or_empty(path);
    entries.push(entry);
    write_entries(path, &entries)?;
    Ok(entries.len())
}
