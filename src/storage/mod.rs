// Storage layer module: glossary entries persisted as JSON arrays
pub mod json_store;

pub use json_store::{append_entry, load_or_empty, read_entries, to_pretty_json, write_entries};
