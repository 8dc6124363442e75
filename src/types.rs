// Core types for the glossary: entries, raw matches and errors
use serde::{Deserialize, Deserializer, Serialize};

// Placeholder bucket for entries whose term has no first character
pub const DEFAULT_LETTER_PLACEHOLDER: &str = "?";

/// One glossary record as it appears in the JSON files.
///
/// Field order here is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    pub source: String,
    #[serde(default = "default_letter", deserialize_with = "nullable_letter")]
    pub letter: String,
}

impl GlossaryEntry {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        source: impl Into<String>,
        placeholder: &str,
    ) -> Self {
        let term = term.into();
        let letter = bucket_letter(&term, placeholder);
        Self {
            term,
            definition: definition.into(),
            source: source.into(),
            letter,
        }
    }
}

fn default_letter() -> String {
    DEFAULT_LETTER_PLACEHOLDER.to_string()
}

// Older custom.json files store `"letter": null` for empty terms
fn nullable_letter<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_letter))
}

/// First character of `term`, uppercased, or `placeholder` for an empty term.
pub fn bucket_letter(term: &str, placeholder: &str) -> String {
    match term.chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => placeholder.to_string(),
    }
}

// Term/definition pair straight out of segmentation, before cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub term: String,
    pub definition: String,
}

impl RawEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Input closed before {0} was entered")]
    InputClosed(&'static str),
}

impl From<toml::de::Error> for GlossaryError {
    fn from(err: toml::de::Error) -> Self {
        GlossaryError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GlossaryError {
    fn from(err: toml::ser::Error) -> Self {
        GlossaryError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_uppercased_first_char() {
        assert_eq!(bucket_letter("sampling", "?"), "S");
        assert_eq!(bucket_letter("Épistémologie", "?"), "É");
    }

    #[test]
    fn empty_term_gets_placeholder() {
        assert_eq!(bucket_letter("", "?"), "?");
        assert_eq!(GlossaryEntry::new("", "d", "s", "#").letter, "#");
    }

    #[test]
    fn serializes_keys_in_wire_order() {
        let entry = GlossaryEntry::new("Bias", "A systematic error.", "Book", "?");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"term":"Bias","definition":"A systematic error.","source":"Book","letter":"B"}"#
        );
    }

    #[test]
    fn null_or_missing_letter_reads_as_placeholder() {
        let with_null: GlossaryEntry =
            serde_json::from_str(r#"{"term":"","definition":"d","source":"s","letter":null}"#)
                .unwrap();
        assert_eq!(with_null.letter, "?");

        let missing: GlossaryEntry =
            serde_json::from_str(r#"{"term":"x","definition":"d","source":"s"}"#).unwrap();
        assert_eq!(missing.letter, "?");
    }
}
