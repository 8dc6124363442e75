// Glossary extraction pipeline: text -> raw pairs -> cleaned entries
pub mod cleanup;
pub mod extractor;
pub mod segmenter;

pub use cleanup::{strip_page_numbers, CleanupRules};
pub use extractor::GlossaryExtractor;
pub use segmenter::{collapse_whitespace, segment};
