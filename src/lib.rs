// research-glossary: pull glossary terms out of a PDF and manage custom entries
pub mod catalog;
pub mod config;
pub mod glossary;
pub mod pdf_extraction;
pub mod prompt;
pub mod storage;
pub mod types;

pub use config::{ExtractionSettings, GlossaryConfig};
pub use glossary::GlossaryExtractor;
pub use types::{bucket_letter, GlossaryEntry, GlossaryError, RawEntry, Result};
